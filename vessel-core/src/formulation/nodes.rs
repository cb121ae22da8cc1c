#[cfg(test)]
#[path = "../../tests/unit/formulation/nodes_test.rs"]
mod nodes_test;

use super::Sites;
use crate::models::Config;
use crate::models::common::{Duration, TimeDomain, TimeWindow};
use crate::models::problem::{Dataset, LocationCategory};
use crate::utils::ValidationError;
use serde::{Deserialize, Serialize};

/// An action performed at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeAction {
    /// Item is loaded on a vessel.
    #[serde(rename = "loading")]
    Load,
    /// Item is unloaded from a vessel.
    #[serde(rename = "unloading")]
    Unload,
}

/// An atomic visitable event of the routing model: the depot, a vessel terminal, an item load
/// or an item unload.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualNode {
    /// An index of the physical site.
    pub site: usize,
    /// A label of the physical site.
    pub location: String,
    pub category: LocationCategory,
    /// An action, absent for the depot and vessel terminals.
    pub action: Option<NodeAction>,
    /// Signed weight change: positive at load, negative at unload, zero otherwise.
    pub demand: i64,
    /// An index of the item handled at the node.
    pub cargo: Option<usize>,
    pub lifts: i64,
    pub service_time: Duration,
    pub time_domain: TimeDomain,
}

impl VirtualNode {
    /// Creates a node without any action.
    pub fn new(site: usize, location: &str, category: LocationCategory, window: TimeWindow) -> Self {
        Self {
            site,
            location: location.to_string(),
            category,
            action: None,
            demand: 0,
            cargo: None,
            lifts: 0,
            service_time: 0,
            time_domain: TimeDomain::new(window),
        }
    }
}

/// A pair of load and unload nodes of the same item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PickupDeliveryPair {
    pub pickup: usize,
    pub delivery: usize,
}

/// An ordered sequence of virtual nodes with vessel terminals and item pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeLayout {
    pub nodes: Vec<VirtualNode>,
    /// Item pairs in item order.
    pub pairs: Vec<PickupDeliveryPair>,
    /// A start node index per vessel.
    pub starts: Vec<usize>,
    /// An end node index per vessel.
    pub ends: Vec<usize>,
    /// A depot node index, if synthesized.
    pub depot: Option<usize>,
}

/// Expands vessels and items into an ordered sequence of virtual nodes.
///
/// Node order is load bearing: the depot first (only if some vessel has no explicit start or end),
/// then explicit start nodes in vessel order, then explicit end nodes in vessel order, then
/// two adjacent nodes per item in item order.
pub fn build_virtual_nodes(dataset: &Dataset, sites: &Sites, config: &Config) -> Result<NodeLayout, ValidationError> {
    let window = config.base_time_window();
    let mut nodes = vec![];

    let depot = if dataset.vessels.iter().any(|vessel| vessel.needs_depot()) {
        let depot = Sites::DEPOT;
        let site = sites.get(depot).ok_or_else(|| {
            ValidationError::new("E1000", "depot site is missing".to_string(), "check location set".to_string())
        })?;

        nodes.push(VirtualNode::new(depot, site.label.as_str(), site.category, window));
        Some(nodes.len() - 1)
    } else {
        None
    };

    let add_terminals = |kind: &str, code: &str, nodes: &mut Vec<VirtualNode>| {
        dataset
            .vessels
            .iter()
            .map(|vessel| {
                let terminal = if kind == "start" { vessel.start.as_ref() } else { vessel.end.as_ref() };

                match (terminal, depot) {
                    (Some(location), _) => {
                        let (site, location) = resolve_site(sites, location).ok_or_else(|| {
                            ValidationError::new(
                                code,
                                format!("vessel '{}' has unknown {kind} location '{location}'", vessel.id),
                                format!("use one of the known locations as vessel {kind} location"),
                            )
                        })?;

                        nodes.push(VirtualNode::new(site, location.label.as_str(), location.category, window));
                        Ok(nodes.len() - 1)
                    }
                    (None, Some(depot)) => Ok(depot),
                    (None, None) => Err(ValidationError::new(
                        code,
                        format!("vessel '{}' has no {kind} location", vessel.id),
                        format!("specify vessel {kind} location"),
                    )),
                }
            })
            .collect::<Result<Vec<_>, _>>()
    };

    let starts = add_terminals("start", "E1001", &mut nodes)?;
    let ends = add_terminals("end", "E1002", &mut nodes)?;

    let mut pairs = Vec::with_capacity(dataset.items.len());
    for (item_idx, item) in dataset.items.iter().enumerate() {
        let lifts = item.lifts(config.one_lift);

        let (pickup_site, pickup) = resolve_site(sites, item.pickup.as_str()).ok_or_else(|| {
            ValidationError::new(
                "E1003",
                format!("item '{}' has unknown pickup location '{}'", item.id, item.pickup),
                "use one of the known locations as item pickup location".to_string(),
            )
        })?;
        let (delivery_site, delivery) = resolve_site(sites, item.delivery.as_str()).ok_or_else(|| {
            ValidationError::new(
                "E1004",
                format!("item '{}' has unknown delivery location '{}'", item.id, item.delivery),
                "use one of the known locations as item delivery location".to_string(),
            )
        })?;

        nodes.push(VirtualNode {
            action: Some(NodeAction::Load),
            demand: item.weight,
            cargo: Some(item_idx),
            lifts,
            service_time: config.time_per_lift_loaded * lifts,
            ..VirtualNode::new(pickup_site, pickup.label.as_str(), pickup.category, window)
        });
        nodes.push(VirtualNode {
            action: Some(NodeAction::Unload),
            demand: -item.weight,
            cargo: Some(item_idx),
            lifts,
            service_time: config.time_per_lift_unloaded * lifts,
            ..VirtualNode::new(delivery_site, delivery.label.as_str(), delivery.category, window)
        });

        pairs.push(PickupDeliveryPair { pickup: nodes.len() - 2, delivery: nodes.len() - 1 });
    }

    Ok(NodeLayout { nodes, pairs, starts, ends, depot })
}

fn resolve_site<'a>(sites: &'a Sites, location: &str) -> Option<(usize, &'a super::Site)> {
    sites.index_of(location).and_then(|index| sites.get(index).map(|site| (index, site)))
}
