//! Problem inputs: locations, items and vessels.

mod entities;
pub use self::entities::*;

mod reconcile;
pub use self::reconcile::*;
