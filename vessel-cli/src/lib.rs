//! A crate to solve vessel pickup and delivery routing for data sources stored on disk.
//!
//! A data source is a folder which contains:
//!
//! - `locations.json`: ports and platforms with their coordinates and unavailability periods
//! - `items.csv`: items to be moved from their pickup to their delivery locations
//! - `vessels.csv`: vessels with their capacity, speed and optional start/end locations
//! - `config.json` (optional): configuration overrides applied to this data source only
//!
//! The result of solving is a leg table which is written as csv.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;

use crate::extensions::config::read_data_source_config;
use crate::extensions::import::read_dataset;
use std::path::Path;
use std::sync::Arc;
use vessel_core::prelude::*;

/// A default name of the data source folder.
pub const DEFAULT_DATA_SOURCE: &str = "sample";

/// Loads data source from `data_root` folder, applies its configuration overrides followed by
/// `overrides` and solves it with the default routing solver.
///
/// Item location names are reconciled with known locations before the model is assembled, names
/// which cannot be matched are reported through the environment logger.
pub fn solve_data_source(
    data_root: &Path,
    data_source: &str,
    overrides: ConfigOverrides,
    environment: Arc<Environment>,
) -> GenericResult<Option<Vec<Leg>>> {
    let directory = data_root.join(data_source);

    let mut dataset = read_dataset(&directory)?;
    let config = Config::default().with_overrides(&read_data_source_config(&directory)?.merge(overrides));

    (environment.logger)(&format!(
        "data source '{data_source}' is loaded: {} locations, {} items, {} vessels",
        dataset.locations.len(),
        dataset.items.len(),
        dataset.vessels.len()
    ));

    let unmatched = reconcile_item_locations(&mut dataset, &environment.logger);
    if !unmatched.is_empty() {
        (environment.logger)(&format!("{} item location name(s) are left as is", unmatched.len()));
    }

    let solver = InsertionSolver::new(environment.clone());

    solve_dataset(&dataset, config, &solver, data_source, environment.as_ref())
}
