//! Contains data source import, configuration, output and comparison logic.

pub mod compare;
pub mod config;
pub mod import;
pub mod output;
