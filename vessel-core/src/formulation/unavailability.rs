#[cfg(test)]
#[path = "../../tests/unit/formulation/unavailability_test.rs"]
mod unavailability_test;

use super::{Sites, VirtualNode};
use crate::models::common::{Duration, TimeWindow, Timestamp};
use crate::models::problem::{LocationCategory, Unavailability};
use crate::utils::{GenericError, GenericResult};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Parses RFC 3339 timestamp.
pub fn parse_timestamp(value: &str) -> GenericResult<OffsetDateTime> {
    OffsetDateTime::parse(value.trim(), &Rfc3339)
        .map_err(|err| GenericError::from(format!("cannot parse timestamp '{value}': {err}")))
}

/// Returns whole minutes elapsed since the epoch, truncated toward zero.
pub fn minutes_since(epoch: OffsetDateTime, time: OffsetDateTime) -> Timestamp {
    (time - epoch).whole_minutes()
}

/// Converts a blackout period into an excluded interval of a node with given service time.
///
/// A start bound is moved back by the service time, so the action is finished before the site
/// becomes unavailable. A missing bound is replaced by the respective window bound.
pub fn exclusion_for(
    unavailability: &Unavailability,
    epoch: OffsetDateTime,
    window: TimeWindow,
    service_time: Duration,
) -> Option<TimeWindow> {
    let start = unavailability.start.map(|start| minutes_since(epoch, start));
    let end = unavailability.end.map(|end| minutes_since(epoch, end));

    match (start, end) {
        (Some(start), Some(end)) => Some(TimeWindow::new(start - service_time, end)),
        (None, Some(end)) => Some(TimeWindow::new(window.start, end)),
        (Some(start), None) => Some(TimeWindow::new(start - service_time, window.end)),
        (None, None) => None,
    }
}

/// Narrows time domains of nodes according to blackout periods of their sites.
/// Depot nodes and nodes listed as exempt (vessel end nodes) keep their domains.
pub fn translate_unavailability(
    nodes: &mut [VirtualNode],
    sites: &Sites,
    epoch: OffsetDateTime,
    window: TimeWindow,
    exempt: &[usize],
) {
    nodes
        .iter_mut()
        .enumerate()
        .filter(|(idx, node)| node.category != LocationCategory::Depot && !exempt.contains(idx))
        .for_each(|(_, node)| {
            let Some(site) = sites.get(node.site) else { return };
            let service_time = node.service_time;

            site.unavailability
                .iter()
                .filter_map(|unavailability| exclusion_for(unavailability, epoch, window, service_time))
                .for_each(|interval| node.time_domain.exclude(interval));
        });
}
