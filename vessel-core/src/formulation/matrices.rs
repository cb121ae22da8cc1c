#[cfg(test)]
#[path = "../../tests/unit/formulation/matrices_test.rs"]
mod matrices_test;

use super::{Sites, VirtualNode};
use crate::models::common::{Distance, Duration, Matrix};
use crate::models::problem::LocationCategory;
use crate::utils::parallel_collect;
use rustc_hash::FxHashSet;

/// Mooring penalties applied when a vessel changes its physical location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mooring {
    /// Unmoor from a site and moor to another one.
    pub regular: Duration,
    /// Unmoor from a platform and moor to a port.
    pub port: Duration,
}

/// Builds a symmetric distance matrix over physical sites. Planar distances are divided by the
/// distance unit and truncated toward zero.
pub fn build_distance_matrix(sites: &Sites, distance_unit_m: f64) -> Matrix<Distance> {
    let sites = sites.all();
    let mut matrix = Matrix::new(sites.len());

    for (row, from) in sites.iter().enumerate() {
        for (col, to) in sites.iter().enumerate().skip(row + 1) {
            let distance = (from.position.planar_distance(&to.position) / distance_unit_m).trunc() as Distance;
            matrix.set(row, col, distance);
            matrix.set(col, row, distance);
        }
    }

    matrix
}

/// Maps physical distances to virtual nodes: `virt[i][j] = phys[site(i)][site(j)]`.
pub fn build_virtual_distance_matrix(physical: &Matrix<Distance>, nodes: &[VirtualNode]) -> Matrix<Distance> {
    let mut matrix = Matrix::new(nodes.len());

    for (row, from) in nodes.iter().enumerate() {
        for (col, to) in nodes.iter().enumerate().skip(row + 1) {
            let distance = physical.get(from.site, to.site);
            matrix.set(row, col, distance);
            matrix.set(col, row, distance);
        }
    }

    matrix
}

/// Selects mooring time of the move from origin node to destination node.
pub fn select_mooring(
    origin: LocationCategory,
    destination: LocationCategory,
    same_location: bool,
    is_end: bool,
    mooring: &Mooring,
) -> Duration {
    use LocationCategory::*;

    match (origin, destination) {
        (Platform, Port) if !is_end => {
            if same_location {
                0
            } else {
                mooring.port
            }
        }
        (Depot, _) | (_, Depot) => 0,
        _ if is_end => 0,
        _ if same_location => 0,
        _ => mooring.regular,
    }
}

/// Builds a time matrix of one vessel over virtual nodes: travel time, service time at the
/// origin node and mooring time, rounded up.
pub fn build_time_matrix(
    physical: &Matrix<Distance>,
    nodes: &[VirtualNode],
    speed: f64,
    ends: &[usize],
    mooring: &Mooring,
) -> Matrix<Duration> {
    let ends = ends.iter().copied().collect::<FxHashSet<_>>();
    let mut matrix = Matrix::new(nodes.len());

    for (row, from) in nodes.iter().enumerate() {
        for (col, to) in nodes.iter().enumerate() {
            let travel = physical.get(from.site, to.site) as f64 / speed;
            let mooring =
                select_mooring(from.category, to.category, from.site == to.site, ends.contains(&col), mooring);

            matrix.set(row, col, (travel + (from.service_time + mooring) as f64).ceil() as Duration);
        }
    }

    matrix
}

/// Builds time matrices of all vessels. Matrices are independent, so they are built in parallel.
pub fn build_time_matrices(
    physical: &Matrix<Distance>,
    nodes: &[VirtualNode],
    speeds: &[f64],
    ends: &[usize],
    mooring: &Mooring,
) -> Vec<Matrix<Duration>> {
    parallel_collect(speeds, |&speed| build_time_matrix(physical, nodes, speed, ends, mooring))
}
