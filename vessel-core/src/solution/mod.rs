//! Contains an assignment returned by a routing solver and its decoding into legs.

mod assignment;
pub use self::assignment::*;

mod decoder;
pub use self::decoder::*;

mod report;
pub use self::report::*;
