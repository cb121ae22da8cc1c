//! This module reimports commonly used types.

pub use crate::formulation::{ConstraintModel, NodeAction, PickupDeliveryPair, VirtualNode, assemble_model};

pub use crate::models::common::{Position, TimeDomain, TimeWindow};
pub use crate::models::problem::reconcile_item_locations;
pub use crate::models::{
    Config, ConfigOverrides, Dataset, FirstSolutionStrategy, Item, LocalSearchMetaheuristic, Location,
    LocationCategory, SearchParameters, Unavailability, Vessel,
};

pub use crate::solution::{Assignment, Leg, decode_assignment};
pub use crate::solver::{InsertionSolver, RoutingSolver};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger, ValidationError};

pub use crate::solve_dataset;
