//! Contains a routing solver interface and a reference implementation of it.

use crate::formulation::ConstraintModel;
use crate::solution::Assignment;

mod schedule;
pub use self::schedule::*;

mod insertion;
pub use self::insertion::InsertionSolver;

/// A routing solver which consumes a constraint model and returns an assignment.
///
/// The call is synchronous and blocking. `None` signals that no feasible assignment was found
/// within the configured limits: this outcome is terminal and is never retried.
pub trait RoutingSolver {
    /// Solves the model.
    fn solve(&self, model: &ConstraintModel) -> Option<Assignment>;
}
