#[cfg(test)]
#[path = "../../tests/unit/formulation/assembly_test.rs"]
mod assembly_test;

use super::*;
use crate::models::common::{Distance, Duration, Matrix, TimeDomain, TimeWindow};
use crate::models::problem::{Dataset, Item, LocationCategory};
use crate::models::{Config, SearchParameters};
use crate::utils::GenericResult;

/// A vessel as seen by a routing solver.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleSpec {
    pub id: String,
    pub capacity: i64,
    /// A start node index.
    pub start: usize,
    /// An end node index.
    pub end: usize,
    /// Admissible cumulative time values at the start node.
    pub start_domain: TimeDomain,
    /// Admissible cumulative time values at the end node.
    pub end_domain: TimeDomain,
    /// Maximum cumulative distance.
    pub max_distance: Distance,
}

/// Bounds of the time dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeDimension {
    /// Maximum waiting time at a node.
    pub max_slack: Duration,
    /// Maximum cumulative time of any node.
    pub horizon: Duration,
}

/// Limits how many vessels can be served at one site simultaneously.
#[derive(Clone, Debug, PartialEq)]
pub struct ConcurrencyGroup {
    pub site: usize,
    pub location: String,
    pub category: LocationCategory,
    pub capacity: usize,
    /// Member nodes with their service durations.
    pub members: Vec<(usize, Duration)>,
}

/// Allows node to be left unvisited at a fixed penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disjunction {
    pub node: usize,
    pub penalty: i64,
}

/// A solver consumable model. It is built fresh for every solve.
#[derive(Clone, Debug)]
pub struct ConstraintModel {
    pub nodes: Vec<VirtualNode>,
    pub vehicles: Vec<VehicleSpec>,
    pub pairs: Vec<PickupDeliveryPair>,
    /// An index of the depot node, if used.
    pub depot: Option<usize>,
    /// Distances between virtual nodes.
    pub distance_matrix: Matrix<Distance>,
    /// Transit times between virtual nodes, one matrix per vehicle.
    pub time_matrices: Vec<Matrix<Duration>>,
    pub time_dimension: TimeDimension,
    pub concurrency: Vec<ConcurrencyGroup>,
    pub disjunctions: Vec<Disjunction>,
    pub search: SearchParameters,
    /// Items referenced by node cargo.
    pub items: Vec<Item>,
    pub distance_unit_m: f64,
    starts: Vec<bool>,
    ends: Vec<bool>,
    pair_index: Vec<Option<usize>>,
    group_index: Vec<Option<usize>>,
    penalty_index: Vec<Option<i64>>,
}

impl ConstraintModel {
    /// Returns total amount of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns total amount of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// A distance callback.
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.distance_matrix.get(from, to)
    }

    /// An arc cost: the virtual distance, the same for every vehicle.
    pub fn arc_cost(&self, from: usize, to: usize) -> i64 {
        self.distance(from, to)
    }

    /// A per vehicle transit time callback.
    pub fn transit_time(&self, vehicle: usize, from: usize, to: usize) -> Duration {
        self.time_matrices[vehicle].get(from, to)
    }

    /// A demand callback: zero for vehicle start nodes.
    pub fn demand(&self, node: usize) -> i64 {
        if self.is_start(node) { 0 } else { self.nodes[node].demand }
    }

    /// Checks whether node is a start node of some vehicle.
    pub fn is_start(&self, node: usize) -> bool {
        self.starts.get(node).copied().unwrap_or(false)
    }

    /// Checks whether node is an end node of some vehicle.
    pub fn is_end(&self, node: usize) -> bool {
        self.ends.get(node).copied().unwrap_or(false)
    }

    /// Returns an index of the pickup delivery pair which contains the node.
    pub fn pair_of(&self, node: usize) -> Option<usize> {
        self.pair_index.get(node).copied().flatten()
    }

    /// Returns a concurrency group the node belongs to.
    pub fn concurrency_group(&self, node: usize) -> Option<usize> {
        self.group_index.get(node).copied().flatten()
    }

    /// Returns a penalty of dropping the node, `None` if the node is mandatory.
    pub fn drop_penalty(&self, node: usize) -> Option<i64> {
        self.penalty_index.get(node).copied().flatten()
    }
}

/// Runs the formulation pipeline and packages its results into a constraint model.
pub fn assemble_model(dataset: &Dataset, config: Config) -> GenericResult<ConstraintModel> {
    let epoch = parse_timestamp(config.start_timestamp.as_str())?;
    let window = config.base_time_window();

    let sites = Sites::new(&dataset.locations, config.pickup_location_default.as_str())?;
    let NodeLayout { mut nodes, pairs, starts, ends, depot } = build_virtual_nodes(dataset, &sites, &config)?;

    translate_unavailability(&mut nodes, &sites, epoch, window, &ends);

    let physical = build_distance_matrix(&sites, config.distance_unit_m);
    let distance_matrix = build_virtual_distance_matrix(&physical, &nodes);

    let speeds =
        dataset.vessels.iter().map(|vessel| vessel.speed_per_minute(config.distance_unit_m)).collect::<Vec<_>>();
    let mooring = Mooring { regular: config.mooring_time, port: config.mooring_time_port };
    let time_matrices = build_time_matrices(&physical, &nodes, &speeds, &ends, &mooring);

    let vehicles = dataset
        .vessels
        .iter()
        .zip(starts.iter().zip(ends.iter()))
        .map(|(vessel, (&start, &end))| {
            let start_window = nodes[start].time_domain.window;
            let end_window = nodes[end].time_domain.window;

            let mut start_domain = TimeDomain::new(TimeWindow::new(start_window.start, end_window.end));
            nodes[start].time_domain.excluded.iter().for_each(|&interval| start_domain.exclude(interval));

            VehicleSpec {
                id: vessel.id.clone(),
                capacity: vessel.capacity,
                start,
                end,
                start_domain,
                end_domain: TimeDomain::new(TimeWindow::new(end_window.start, config.max_time_per_vehicle)),
                max_distance: config.max_distance_per_vehicle,
            }
        })
        .collect::<Vec<_>>();

    let node_count = nodes.len();
    let flags = |indices: &[usize]| {
        indices.iter().fold(vec![false; node_count], |mut acc, &idx| {
            acc[idx] = true;
            acc
        })
    };
    let (start_flags, end_flags) = (flags(&starts), flags(&ends));

    let concurrency = build_concurrency_groups(&sites, &nodes, &end_flags, &config);
    let group_index = concurrency.iter().enumerate().fold(vec![None; node_count], |mut acc, (group_idx, group)| {
        group.members.iter().for_each(|&(node, _)| acc[node] = Some(group_idx));
        acc
    });

    let disjunctions = (0..node_count)
        .filter(|&node| !start_flags[node] && !end_flags[node] && Some(node) != depot)
        .map(|node| Disjunction { node, penalty: config.penalty })
        .collect::<Vec<_>>();
    let penalty_index = disjunctions.iter().fold(vec![None; node_count], |mut acc, disjunction| {
        acc[disjunction.node] = Some(disjunction.penalty);
        acc
    });

    let pair_index = pairs.iter().enumerate().fold(vec![None; node_count], |mut acc, (pair_idx, pair)| {
        acc[pair.pickup] = Some(pair_idx);
        acc[pair.delivery] = Some(pair_idx);
        acc
    });

    Ok(ConstraintModel {
        nodes,
        vehicles,
        pairs,
        depot,
        distance_matrix,
        time_matrices,
        time_dimension: TimeDimension { max_slack: config.max_waiting_time, horizon: config.max_time_per_vehicle },
        concurrency,
        disjunctions,
        search: config.search,
        items: dataset.items.clone(),
        distance_unit_m: config.distance_unit_m,
        starts: start_flags,
        ends: end_flags,
        pair_index,
        group_index,
        penalty_index,
    })
}

/// Creates one group per non depot site: every non end node mapped to the site with its service duration.
fn build_concurrency_groups(
    sites: &Sites,
    nodes: &[VirtualNode],
    end_flags: &[bool],
    config: &Config,
) -> Vec<ConcurrencyGroup> {
    sites
        .all()
        .iter()
        .enumerate()
        .filter(|(_, site)| site.category != LocationCategory::Depot)
        .map(|(site_idx, site)| ConcurrencyGroup {
            site: site_idx,
            location: site.label.clone(),
            category: site.category,
            capacity: if site.category == LocationCategory::Port {
                config.port_capacity
            } else {
                config.platform_capacity
            },
            members: nodes
                .iter()
                .enumerate()
                .filter(|(node_idx, node)| node.site == site_idx && !end_flags[*node_idx])
                .map(|(node_idx, node)| (node_idx, node.service_time))
                .collect(),
        })
        .collect()
}
