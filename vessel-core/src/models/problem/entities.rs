#[cfg(test)]
#[path = "../../../tests/unit/models/problem/entities_test.rs"]
mod entities_test;

use crate::models::common::Position;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Specifies a location kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    /// A synthesized node where vessels without explicit start or end begin and finish.
    Depot,
    /// An onshore port.
    Port,
    /// An offshore platform. Any unknown category label is treated as a platform.
    #[serde(other)]
    Platform,
}

/// A period when a location cannot be serviced. Both bounds are optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unavailability {
    /// Start of the blackout, absent means "since the beginning of the planning window".
    pub start: Option<OffsetDateTime>,
    /// End of the blackout, absent means "till the end of the planning window".
    pub end: Option<OffsetDateTime>,
}

/// A named geographical site.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub id: String,
    pub category: LocationCategory,
    pub position: Position,
    pub unavailability: Vec<Unavailability>,
}

impl Location {
    /// Creates a location which is always available.
    pub fn new(id: &str, category: LocationCategory, position: Position) -> Self {
        Self { id: id.to_string(), category, position, unavailability: vec![] }
    }
}

/// A cargo item to be moved from its pickup location to its delivery location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub pickup: String,
    pub delivery: String,
    /// Weight in kilograms, always positive.
    pub weight: i64,
    /// Explicit number of crane lifts.
    pub lifts: Option<i64>,
}

impl Item {
    /// Creates an item without explicit lifts.
    pub fn new(id: &str, pickup: &str, delivery: &str, weight: i64) -> Self {
        Self { id: id.to_string(), pickup: pickup.to_string(), delivery: delivery.to_string(), weight, lifts: None }
    }

    /// Returns number of lifts: explicit value or weight divided by one lift capacity rounded up.
    pub fn lifts(&self, one_lift: i64) -> i64 {
        self.lifts.unwrap_or_else(|| {
            let weight = self.weight.abs();
            if one_lift > 0 { (weight + one_lift - 1) / one_lift } else { 0 }
        })
    }
}

/// A vessel which transports items.
#[derive(Clone, Debug, PartialEq)]
pub struct Vessel {
    pub id: String,
    /// Capacity in kilograms.
    pub capacity: i64,
    /// Speed in knots.
    pub speed: f64,
    /// Explicit start location id.
    pub start: Option<String>,
    /// Explicit end location id.
    pub end: Option<String>,
}

impl Vessel {
    /// Creates a vessel which starts and ends at the depot.
    pub fn new(id: &str, capacity: i64, speed: f64) -> Self {
        Self { id: id.to_string(), capacity, speed, start: None, end: None }
    }

    /// Sets explicit start and end locations.
    pub fn with_terminals(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.start = start.map(|start| start.to_string());
        self.end = end.map(|end| end.to_string());
        self
    }

    /// Returns speed in distance units per minute.
    pub fn speed_per_minute(&self, distance_unit_m: f64) -> f64 {
        self.speed * 1852. / distance_unit_m / 60.
    }

    /// Returns true if vessel has no explicit start or end, so it needs a depot.
    pub fn needs_depot(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }
}

/// A problem dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub locations: Vec<Location>,
    pub items: Vec<Item>,
    pub vessels: Vec<Vessel>,
}
