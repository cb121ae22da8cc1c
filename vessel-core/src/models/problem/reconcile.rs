#[cfg(test)]
#[path = "../../../tests/unit/models/problem/reconcile_test.rs"]
mod reconcile_test;

use super::Dataset;
use crate::utils::InfoLogger;
use rustc_hash::FxHashMap;

/// A result of name reconciliation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Names after reconciliation, in the same order as targets.
    pub names: Vec<String>,
    /// Target names which have no canonical counterpart, kept unchanged.
    pub unmatched: Vec<String>,
}

/// Normalizes name: lowercase without non word characters.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().chars().filter(|ch| ch.is_alphanumeric() || *ch == '_').collect()
}

/// Replaces each target name with the canonical name which has the same normalized form.
/// When several canonical names collide after normalization, the last one wins.
pub fn reconcile_names<S: AsRef<str>>(targets: &[S], canonical: &[S]) -> Reconciliation {
    let mapping = canonical
        .iter()
        .map(|name| (normalize_name(name.as_ref()), name.as_ref()))
        .collect::<FxHashMap<_, _>>();

    targets.iter().fold(Reconciliation::default(), |mut acc, target| {
        let target = target.as_ref();
        match mapping.get(&normalize_name(target)) {
            Some(name) => acc.names.push(name.to_string()),
            None => {
                acc.names.push(target.to_string());
                if !acc.unmatched.iter().any(|unmatched| unmatched == target) {
                    acc.unmatched.push(target.to_string());
                }
            }
        }

        acc
    })
}

/// Rewrites item pickup and delivery names to the spelling used by the location set.
/// Unmatched names are left unchanged and reported through the logger.
pub fn reconcile_item_locations(dataset: &mut Dataset, logger: &InfoLogger) -> Vec<String> {
    let canonical = dataset.locations.iter().map(|location| location.id.as_str()).collect::<Vec<_>>();

    let pickups = dataset.items.iter().map(|item| item.pickup.as_str()).collect::<Vec<_>>();
    let pickups = reconcile_names(&pickups, &canonical);

    let deliveries = dataset.items.iter().map(|item| item.delivery.as_str()).collect::<Vec<_>>();
    let deliveries = reconcile_names(&deliveries, &canonical);

    dataset.items.iter_mut().zip(pickups.names.into_iter().zip(deliveries.names)).for_each(
        |(item, (pickup, delivery))| {
            item.pickup = pickup;
            item.delivery = delivery;
        },
    );

    let mut unmatched = pickups.unmatched;
    deliveries.unmatched.into_iter().for_each(|name| {
        if !unmatched.contains(&name) {
            unmatched.push(name);
        }
    });

    unmatched.iter().for_each(|name| (logger)(&format!("cannot match location name '{name}' with known locations")));

    unmatched
}
