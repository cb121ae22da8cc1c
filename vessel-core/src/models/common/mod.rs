//! Common models.

mod domain;
pub use self::domain::*;

mod geo;
pub use self::geo::*;

mod matrix;
pub use self::matrix::*;
