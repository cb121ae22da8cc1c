use std::time::Instant;

/// Implements a simple wall clock timer used to enforce search time limits.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in seconds.
    pub fn elapsed_secs_as_float(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
