//! The formulation pipeline turns a dataset into a constraint model consumed by a routing solver.
//!
//! Stages run strictly forward:
//!
//! - [`Sites`] fixes the physical index space (a depot proxy followed by every location)
//! - [`build_virtual_nodes`] expands vessels and items into visitable nodes
//! - [`build_distance_matrix`] and [`build_time_matrices`] synthesize travel data
//! - [`translate_unavailability`] narrows node time domains
//! - [`assemble_model`] packages everything into a [`ConstraintModel`]

mod sites;
pub use self::sites::*;

mod nodes;
pub use self::nodes::*;

mod matrices;
pub use self::matrices::*;

mod unavailability;
pub use self::unavailability::*;

mod assembly;
pub use self::assembly::*;
