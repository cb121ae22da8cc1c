//! Core crate contains building blocks to formulate a capacitated, time windowed, multi vessel
//! ***Pickup and Delivery Problem*** from logistics records and to decode a route assignment into
//! a leg table.
//!
//! The pipeline flows strictly forward:
//!
//! - **models**: locations, items, vessels and the configuration
//! - **formulation**: virtual nodes, distance and time matrices, unavailability windows and the
//!   constraint model consumed by a solver
//! - **solver**: a routing solver interface and a reference implementation
//! - **solution**: an assignment returned by a solver and its decoding into legs
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use vessel_core::prelude::*;
//!
//! let locations = vec![
//!     Location::new("Port", LocationCategory::Port, Position::new(35.0, 10.0)),
//!     Location::new("one", LocationCategory::Platform, Position::new(34.5, 11.0)),
//! ];
//! let items = vec![Item::new("Item 1", "Port", "one", 140)];
//! let vessels = vec![Vessel::new("Vessel1", 200, 8.)];
//! let dataset = Dataset { locations, items, vessels };
//!
//! let environment = Arc::new(Environment::new_silent());
//! let solver = InsertionSolver::new(environment.clone());
//! let config = Config::default();
//!
//! let legs = solve_dataset(&dataset, config, &solver, "doc", environment.as_ref())
//!     .expect("cannot formulate a model")
//!     .expect("cannot find a solution");
//!
//! assert_eq!(legs.len(), 3);
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod formulation;
pub mod models;
pub mod prelude;
pub mod solution;
pub mod solver;
pub mod utils;

use crate::formulation::assemble_model;
use crate::models::{Config, Dataset};
use crate::solution::{Leg, decode_assignment, log_solution_summary};
use crate::solver::RoutingSolver;
use crate::utils::{Environment, GenericResult};

/// Formulates a model from the dataset, submits it to the solver and decodes the assignment.
///
/// Returns `Ok(None)` when the solver reports no solution: this result is terminal and is not retried.
pub fn solve_dataset(
    dataset: &Dataset,
    config: Config,
    solver: &(dyn RoutingSolver + Send + Sync),
    data_source: &str,
    environment: &Environment,
) -> GenericResult<Option<Vec<Leg>>> {
    let model = assemble_model(dataset, config)?;

    (environment.logger)(&format!(
        "model is assembled: {} nodes, {} vessels, {} items",
        model.node_count(),
        model.vehicle_count(),
        model.pairs.len()
    ));

    match solver.solve(&model) {
        Some(assignment) => {
            log_solution_summary(&model, &assignment, &environment.logger);
            Ok(Some(decode_assignment(&model, &assignment, data_source)))
        }
        None => {
            (environment.logger)("no solution found");
            Ok(None)
        }
    }
}
