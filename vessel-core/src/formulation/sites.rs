#[cfg(test)]
#[path = "../../tests/unit/formulation/sites_test.rs"]
mod sites_test;

use crate::models::common::Position;
use crate::models::problem::{Location, LocationCategory, Unavailability};
use crate::utils::ValidationError;
use rustc_hash::FxHashMap;

/// A label of the synthesized depot site.
pub const DEPOT_LABEL: &str = "depot";

/// A physical site: either the depot proxy or one of the dataset locations.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub label: String,
    pub category: LocationCategory,
    pub position: Position,
    pub unavailability: Vec<Unavailability>,
}

/// An ordered collection of physical sites. Row 0 is the depot proxy which is a copy of the
/// default pickup location, row `i + 1` is the location `i`.
#[derive(Clone, Debug)]
pub struct Sites {
    sites: Vec<Site>,
    index: FxHashMap<String, usize>,
}

impl Sites {
    /// An index of the depot proxy.
    pub const DEPOT: usize = 0;

    /// Creates sites from locations, fails if the default pickup location is unknown.
    pub fn new(locations: &[Location], default_pickup: &str) -> Result<Self, ValidationError> {
        let depot = locations.iter().find(|location| location.id == default_pickup).ok_or_else(|| {
            ValidationError::new(
                "E1000",
                format!("default pickup location '{default_pickup}' is not in the location set"),
                "add the location or change 'pickupLocationDefault' setting".to_string(),
            )
        })?;

        let depot = Site {
            label: DEPOT_LABEL.to_string(),
            category: LocationCategory::Depot,
            position: depot.position,
            unavailability: vec![],
        };

        let sites = std::iter::once(depot)
            .chain(locations.iter().map(|location| Site {
                label: location.id.clone(),
                category: location.category,
                position: location.position,
                unavailability: location.unavailability.clone(),
            }))
            .collect::<Vec<_>>();

        let index = locations.iter().enumerate().map(|(idx, location)| (location.id.clone(), idx + 1)).collect();

        Ok(Self { sites, index })
    }

    /// Returns an index of the site which represents the given location.
    pub fn index_of(&self, location: &str) -> Option<usize> {
        self.index.get(location).copied()
    }

    /// Returns site by its index.
    pub fn get(&self, index: usize) -> Option<&Site> {
        self.sites.get(index)
    }

    /// Returns all sites.
    pub fn all(&self) -> &[Site] {
        self.sites.as_slice()
    }

    /// Returns amount of sites including the depot proxy.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns true if there are no sites. Never happens for successfully created sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
