//! A pipeline configuration.
//!
//! Configuration is an explicit value: a base configuration is overlaid with per data source
//! overrides and then passed into the pipeline. There is no process-wide state.

#[cfg(test)]
#[path = "../../tests/unit/models/config_test.rs"]
mod config_test;

use crate::models::common::TimeWindow;
use serde::Deserialize;

/// Specifies the way to build the first solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstSolutionStrategy {
    /// Lets solver decide.
    #[default]
    Automatic,
    /// Inserts the globally cheapest item first.
    CheapestInsertion,
    /// Inserts items in declaration order, each one at its cheapest position.
    Sequential,
}

/// Specifies the local search metaheuristic used after the first solution is found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalSearchMetaheuristic {
    /// Lets solver decide.
    #[default]
    Automatic,
    /// Ruins a few items and recreates the solution, accepts only improvements.
    GreedyDescent,
    /// Stops after the first solution.
    Disabled,
}

/// Solver tuning parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParameters {
    /// Wall clock limit of the search.
    pub time_limit_secs: f64,
    /// Limit to the number of solutions generated during the search.
    pub solution_limit: usize,
    /// A first solution strategy.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// A local search metaheuristic.
    pub local_search_metaheuristic: LocalSearchMetaheuristic,
    /// Enables logging of the search process.
    pub log_search: bool,
    /// A seed of the random generator used by the search.
    pub seed: u64,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            time_limit_secs: 10.,
            solution_limit: 10_000,
            first_solution_strategy: FirstSolutionStrategy::default(),
            local_search_metaheuristic: LocalSearchMetaheuristic::default(),
            log_search: true,
            seed: 0,
        }
    }
}

/// A pipeline configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Solver tuning parameters.
    pub search: SearchParameters,
    /// Maximum travelled distance per vessel in distance units.
    pub max_distance_per_vehicle: i64,
    /// Maximum waiting time (slack) at a node in minutes.
    pub max_waiting_time: i64,
    /// Maximum cumulative time of a vessel in minutes.
    pub max_time_per_vehicle: i64,
    /// A penalty for dropping a node.
    pub penalty: i64,
    /// A length of the distance unit in meters.
    pub distance_unit_m: f64,
    /// A name of the location used as a depot.
    pub pickup_location_default: String,
    /// Time to load one lift.
    pub time_per_lift_loaded: i64,
    /// Time to unload one lift.
    pub time_per_lift_unloaded: i64,
    /// Weight which fits into one lift.
    pub one_lift: i64,
    /// Time to unmoor from one location and moor to another one.
    pub mooring_time: i64,
    /// Time to unmoor from a platform and moor to a port.
    pub mooring_time_port: i64,
    /// Number of vessels a platform can handle at the same time.
    pub platform_capacity: usize,
    /// Number of vessels a port can handle at the same time.
    pub port_capacity: usize,
    /// A reference epoch in RFC 3339 format, all times are minutes from it.
    pub start_timestamp: String,
    /// Start of the planning window in hours.
    pub time_window_start: i64,
    /// End of the planning window in hours.
    pub time_window_end: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchParameters::default(),
            max_distance_per_vehicle: 100_000_000,
            max_waiting_time: 100_000,
            max_time_per_vehicle: 100_000,
            penalty: 100_000_000,
            distance_unit_m: 100.,
            pickup_location_default: "Port".to_string(),
            time_per_lift_loaded: 3,
            time_per_lift_unloaded: 3,
            one_lift: 100,
            mooring_time: 10,
            mooring_time_port: 120,
            platform_capacity: 1,
            port_capacity: 6,
            start_timestamp: "2022-01-01T00:00:00+04:00".to_string(),
            time_window_start: 0,
            time_window_end: 24,
        }
    }
}

impl Config {
    /// Returns a new configuration with given overrides applied on top.
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Self {
        let search = SearchParameters {
            time_limit_secs: overrides.solution_time_limit_seconds.unwrap_or(self.search.time_limit_secs),
            solution_limit: overrides.solution_limit.unwrap_or(self.search.solution_limit),
            first_solution_strategy: overrides.first_solution_strategy.unwrap_or(self.search.first_solution_strategy),
            local_search_metaheuristic: overrides
                .local_search_metaheuristic
                .unwrap_or(self.search.local_search_metaheuristic),
            log_search: overrides.log_search.unwrap_or(self.search.log_search),
            seed: overrides.seed.unwrap_or(self.search.seed),
        };

        Self {
            search,
            max_distance_per_vehicle: overrides.max_distance_per_vehicle.unwrap_or(self.max_distance_per_vehicle),
            max_waiting_time: overrides.max_waiting_time.unwrap_or(self.max_waiting_time),
            max_time_per_vehicle: overrides.max_waiting_time_per_vehicle.unwrap_or(self.max_time_per_vehicle),
            penalty: overrides.penalty.unwrap_or(self.penalty),
            distance_unit_m: overrides.distance_units_m.unwrap_or(self.distance_unit_m),
            pickup_location_default: overrides
                .pickup_location_default
                .clone()
                .unwrap_or(self.pickup_location_default),
            time_per_lift_loaded: overrides.time_per_item_loaded.unwrap_or(self.time_per_lift_loaded),
            time_per_lift_unloaded: overrides.time_per_item_unloaded.unwrap_or(self.time_per_lift_unloaded),
            one_lift: overrides.one_lift.unwrap_or(self.one_lift),
            mooring_time: overrides.mooring_time.unwrap_or(self.mooring_time),
            mooring_time_port: overrides.mooring_time_port.unwrap_or(self.mooring_time_port),
            platform_capacity: overrides.platform_capacity.unwrap_or(self.platform_capacity),
            port_capacity: overrides.port_capacity.unwrap_or(self.port_capacity),
            start_timestamp: overrides.start_timestamp.clone().unwrap_or(self.start_timestamp),
            time_window_start: overrides.time_window_start.unwrap_or(self.time_window_start),
            time_window_end: overrides.time_window_end.unwrap_or(self.time_window_end),
        }
    }

    /// Returns the planning window in minutes.
    pub fn base_time_window(&self) -> TimeWindow {
        TimeWindow::new(self.time_window_start * 60, self.time_window_end * 60)
    }
}

/// Per data source or per run configuration overrides. Absent values keep the base ones.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub solution_time_limit_seconds: Option<f64>,
    pub solution_limit: Option<usize>,
    pub first_solution_strategy: Option<FirstSolutionStrategy>,
    pub local_search_metaheuristic: Option<LocalSearchMetaheuristic>,
    pub log_search: Option<bool>,
    pub seed: Option<u64>,
    pub max_distance_per_vehicle: Option<i64>,
    pub max_waiting_time: Option<i64>,
    pub max_waiting_time_per_vehicle: Option<i64>,
    pub penalty: Option<i64>,
    pub distance_units_m: Option<f64>,
    pub pickup_location_default: Option<String>,
    pub time_per_item_loaded: Option<i64>,
    pub time_per_item_unloaded: Option<i64>,
    pub one_lift: Option<i64>,
    pub mooring_time: Option<i64>,
    pub mooring_time_port: Option<i64>,
    pub platform_capacity: Option<usize>,
    pub port_capacity: Option<usize>,
    pub start_timestamp: Option<String>,
    pub time_window_start: Option<i64>,
    pub time_window_end: Option<i64>,
}

impl ConfigOverrides {
    /// Combines two overrides, values of `other` take precedence.
    pub fn merge(self, other: ConfigOverrides) -> Self {
        Self {
            solution_time_limit_seconds: other.solution_time_limit_seconds.or(self.solution_time_limit_seconds),
            solution_limit: other.solution_limit.or(self.solution_limit),
            first_solution_strategy: other.first_solution_strategy.or(self.first_solution_strategy),
            local_search_metaheuristic: other.local_search_metaheuristic.or(self.local_search_metaheuristic),
            log_search: other.log_search.or(self.log_search),
            seed: other.seed.or(self.seed),
            max_distance_per_vehicle: other.max_distance_per_vehicle.or(self.max_distance_per_vehicle),
            max_waiting_time: other.max_waiting_time.or(self.max_waiting_time),
            max_waiting_time_per_vehicle: other.max_waiting_time_per_vehicle.or(self.max_waiting_time_per_vehicle),
            penalty: other.penalty.or(self.penalty),
            distance_units_m: other.distance_units_m.or(self.distance_units_m),
            pickup_location_default: other.pickup_location_default.or(self.pickup_location_default),
            time_per_item_loaded: other.time_per_item_loaded.or(self.time_per_item_loaded),
            time_per_item_unloaded: other.time_per_item_unloaded.or(self.time_per_item_unloaded),
            one_lift: other.one_lift.or(self.one_lift),
            mooring_time: other.mooring_time.or(self.mooring_time),
            mooring_time_port: other.mooring_time_port.or(self.mooring_time_port),
            platform_capacity: other.platform_capacity.or(self.platform_capacity),
            port_capacity: other.port_capacity.or(self.port_capacity),
            start_timestamp: other.start_timestamp.or(self.start_timestamp),
            time_window_start: other.time_window_start.or(self.time_window_start),
            time_window_end: other.time_window_end.or(self.time_window_end),
        }
    }
}
