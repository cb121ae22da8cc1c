#[cfg(test)]
#[path = "../../tests/unit/solution/decoder_test.rs"]
mod decoder_test;

use super::{Assignment, Visit};
use crate::formulation::{ConstraintModel, NodeAction};
use serde::{Deserialize, Serialize};

/// A decoded move of a vessel from one node to the next one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(rename = "Current Node Index")]
    pub current_node: usize,
    #[serde(rename = "Next Node Index")]
    pub next_node: usize,
    #[serde(rename = "Action Start Node")]
    pub action: Option<NodeAction>,
    #[serde(rename = "Loaded Cargo id")]
    pub loaded_cargo_id: Option<String>,
    #[serde(rename = "Unloaded Cargo Id")]
    pub unloaded_cargo_id: Option<String>,
    #[serde(rename = "Loaded Item Name")]
    pub loaded_item: Option<String>,
    #[serde(rename = "Unloaded Item Name")]
    pub unloaded_item: Option<String>,
    #[serde(rename = "Vessel")]
    pub vessel: String,
    #[serde(rename = "Leg")]
    pub leg: usize,
    #[serde(rename = "Current Node Location")]
    pub current_location: String,
    #[serde(rename = "Next Node Location")]
    pub next_location: String,
    #[serde(rename = "Weight Loaded")]
    pub weight_loaded: i64,
    #[serde(rename = "Weight Unloaded")]
    pub weight_unloaded: i64,
    #[serde(rename = "Current Node Time")]
    pub current_time: i64,
    #[serde(rename = "Next Node Time")]
    pub next_time: i64,
    #[serde(rename = "Pickup Location")]
    pub pickup_location: Option<String>,
    #[serde(rename = "Delivery Location")]
    pub delivery_location: Option<String>,
    #[serde(rename = "Loaded Cargo Lifts")]
    pub loaded_lifts: Option<i64>,
    #[serde(rename = "Unloaded Cargo Lifts")]
    pub unloaded_lifts: Option<i64>,
    /// Travelled distance in kilometers.
    #[serde(rename = "Distance")]
    pub distance: f64,
    /// Elapsed time in minutes.
    #[serde(rename = "Time")]
    pub time: i64,
    #[serde(rename = "Data Source")]
    pub data_source: String,
}

/// Decodes assignment into legs: one leg per consecutive visit pair of every vehicle route,
/// the final move into the end node included. Leg numbers are zero based per vehicle.
pub fn decode_assignment(model: &ConstraintModel, assignment: &Assignment, data_source: &str) -> Vec<Leg> {
    assignment
        .routes
        .iter()
        .flat_map(|route| {
            let vessel = model.vehicles.get(route.vehicle).map(|vehicle| vehicle.id.clone()).unwrap_or_default();
            let last_leg = route.visits.len().saturating_sub(2);
            let is_empty = route.is_empty();

            route
                .visits
                .windows(2)
                .enumerate()
                .map(|(leg_idx, visits)| {
                    let is_idle = is_empty && leg_idx == last_leg;
                    create_leg(model, (&visits[0], &visits[1]), vessel.clone(), leg_idx, is_idle, data_source)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn create_leg(
    model: &ConstraintModel,
    (current, next): (&Visit, &Visit),
    vessel: String,
    leg: usize,
    is_idle: bool,
    data_source: &str,
) -> Leg {
    let node = &model.nodes[current.node];
    let is_load = node.action == Some(NodeAction::Load);
    let is_unload = node.action == Some(NodeAction::Unload);

    let item = node.cargo.and_then(|cargo| model.items.get(cargo).map(|item| (cargo, item)));
    let cargo_id = item.map(|(cargo, _)| cargo.to_string());
    let item_name = item.map(|(_, item)| item.id.clone());

    let (pickup_location, delivery_location) = model
        .pair_of(current.node)
        .filter(|_| item.is_some())
        .and_then(|pair_idx| model.pairs.get(pair_idx))
        .map(|pair| {
            (Some(model.nodes[pair.pickup].location.clone()), Some(model.nodes[pair.delivery].location.clone()))
        })
        .unwrap_or((None, None));

    let (distance, time) = if is_idle {
        (0., 0)
    } else {
        ((next.distance - current.distance) as f64 * model.distance_unit_m / 1000., next.time - current.time)
    };

    Leg {
        current_node: current.node,
        next_node: next.node,
        action: node.action,
        loaded_cargo_id: cargo_id.clone().filter(|_| is_load),
        unloaded_cargo_id: cargo_id.filter(|_| is_unload),
        loaded_item: item_name.clone().filter(|_| is_load),
        unloaded_item: item_name.filter(|_| is_unload),
        vessel,
        leg,
        current_location: node.location.clone(),
        next_location: model.nodes[next.node].location.clone(),
        weight_loaded: node.demand.max(0),
        weight_unloaded: -node.demand.min(0),
        current_time: current.time,
        next_time: next.time,
        pickup_location,
        delivery_location,
        loaded_lifts: Some(node.lifts).filter(|_| is_load),
        unloaded_lifts: Some(node.lifts).filter(|_| is_unload),
        distance,
        time,
        data_source: data_source.to_string(),
    }
}
