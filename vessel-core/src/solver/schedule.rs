#[cfg(test)]
#[path = "../../tests/unit/solver/schedule_test.rs"]
mod schedule_test;

use crate::formulation::ConstraintModel;
use crate::models::common::{Duration, TimeDomain, Timestamp};
use crate::solution::Visit;
use rustc_hash::FxHashMap;

/// Service intervals `[start, end)` occupied by vessels, grouped by concurrency group index.
pub type Occupancy = FxHashMap<usize, Vec<(Timestamp, Timestamp)>>;

/// Returns the earliest time not earlier than arrival which belongs to the domain and where a
/// service of given duration overlaps with less than `capacity` busy intervals.
pub fn earliest_slot(
    domain: &TimeDomain,
    arrival: Timestamp,
    duration: Duration,
    busy: &[(Timestamp, Timestamp)],
    capacity: usize,
) -> Option<Timestamp> {
    let mut time = arrival;

    loop {
        time = domain.earliest_from(time)?;

        if duration <= 0 {
            return Some(time);
        }

        let (start, end) = (time, time + duration);
        let overlaps = busy.iter().filter(|(busy_start, busy_end)| *busy_start < end && start < *busy_end);

        if overlaps.clone().count() < capacity {
            return Some(time);
        }

        // NOTE jump to the moment when the first overlapping service is finished
        time = overlaps.map(|(_, busy_end)| *busy_end).min()?;
    }
}

/// Collects service intervals of all routes except the excluded one.
pub fn build_occupancy(model: &ConstraintModel, routes: &[Vec<Visit>], excluded: Option<usize>) -> Occupancy {
    routes.iter().enumerate().filter(|(vehicle, _)| Some(*vehicle) != excluded).fold(
        Occupancy::default(),
        |mut acc, (_, visits)| {
            visits.iter().for_each(|visit| {
                let duration = model.nodes[visit.node].service_time;
                if let (Some(group), true) = (model.concurrency_group(visit.node), duration > 0) {
                    acc.entry(group).or_default().push((visit.time, visit.time + duration));
                }
            });
            acc
        },
    )
}

/// Schedules visits of the route as early as possible. Returns `None` if the route violates
/// capacity, distance, time domain, waiting time, horizon or site concurrency constraints.
///
/// The first node is treated as the vehicle start, the last one as the vehicle end. The start time
/// is not fixed: when some visit waits longer than allowed, the departure is postponed by the
/// excess and the route is scheduled again.
pub fn schedule_route(
    model: &ConstraintModel,
    vehicle: usize,
    nodes: &[usize],
    occupancy: &Occupancy,
) -> Option<Vec<Visit>> {
    let start_domain = &model.vehicles.get(vehicle)?.start_domain;
    let mut departure = start_domain.earliest_from(start_domain.window.start)?;

    loop {
        match schedule_from(model, vehicle, nodes, occupancy, departure) {
            Ok(visits) => return Some(visits),
            // NOTE visit times are monotone in departure, so no departure before `departure + excess` fits
            Err(Some(excess)) => departure = start_domain.earliest_from(departure + excess)?,
            Err(None) => return None,
        }
    }
}

/// Schedules the route with given departure time. On failure, returns the waiting time above the
/// limit if it is the only violated constraint.
fn schedule_from(
    model: &ConstraintModel,
    vehicle: usize,
    nodes: &[usize],
    occupancy: &Occupancy,
    departure: Timestamp,
) -> Result<Vec<Visit>, Option<Duration>> {
    let spec = model.vehicles.get(vehicle).ok_or(None::<Duration>)?;
    let last = nodes.len().checked_sub(1).ok_or(None::<Duration>)?;
    let dimension = &model.time_dimension;

    let mut visits: Vec<Visit> = Vec::with_capacity(nodes.len());

    for (position, &node) in nodes.iter().enumerate() {
        let domain = match position {
            0 => &spec.start_domain,
            _ if position == last => &spec.end_domain,
            _ => &model.nodes[node].time_domain,
        };

        let (arrival, distance, load) = match visits.last() {
            Some(prev) => (
                prev.time + model.transit_time(vehicle, prev.node, node),
                prev.distance + model.distance(prev.node, node),
                prev.load + model.demand(prev.node),
            ),
            None => (departure, 0, 0),
        };

        if load < 0 || load > spec.capacity || distance > spec.max_distance {
            return Err(None);
        }

        let time = match model.concurrency_group(node) {
            Some(group) => earliest_slot(
                domain,
                arrival,
                model.nodes[node].service_time,
                occupancy.get(&group).map(|busy| busy.as_slice()).unwrap_or(&[]),
                model.concurrency[group].capacity,
            ),
            None => domain.earliest_from(arrival),
        }
        .ok_or(None::<Duration>)?;

        if time > dimension.horizon {
            return Err(None);
        }

        let waiting = time - arrival;
        if position > 0 && waiting > dimension.max_slack {
            return Err(Some(waiting - dimension.max_slack));
        }

        visits.push(Visit { node, distance, time, load });
    }

    Ok(visits)
}
