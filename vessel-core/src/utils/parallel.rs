use rayon::prelude::*;

/// Maps collection and collects results into vector in parallel. The order of results
/// matches the order of the source.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}
