//! A collection of models to represent the routing problem inputs and its configuration.

pub mod common;

mod config;
pub use self::config::*;

pub mod problem;
pub use self::problem::{Dataset, Item, Location, LocationCategory, Unavailability, Vessel};
