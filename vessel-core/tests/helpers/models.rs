use crate::formulation::{Sites, VirtualNode, parse_timestamp};
use crate::models::common::{Duration, Position, TimeWindow};
use crate::models::problem::*;
use crate::models::{Config, SearchParameters};
use time::OffsetDateTime;

/// Returns a timestamp of 2022-01-01 at given local (+04:00) time.
pub fn at(hour: u8, minute: u8) -> OffsetDateTime {
    parse_timestamp(&format!("2022-01-01T{hour:02}:{minute:02}:00+04:00")).unwrap()
}

pub fn create_unavailability(start: Option<(u8, u8)>, end: Option<(u8, u8)>) -> Unavailability {
    Unavailability { start: start.map(|(h, m)| at(h, m)), end: end.map(|(h, m)| at(h, m)) }
}

pub fn create_location(id: &str, category: LocationCategory, lat: f64, lng: f64) -> Location {
    Location::new(id, category, Position::new(lat, lng))
}

/// Creates a configuration with silent and short search.
pub fn create_test_config() -> Config {
    Config {
        search: SearchParameters {
            time_limit_secs: 5.,
            solution_limit: 50,
            log_search: false,
            ..SearchParameters::default()
        },
        ..Config::default()
    }
}

/// Creates locations of the sample data source.
pub fn create_sample_locations() -> Vec<Location> {
    vec![
        Location {
            unavailability: vec![create_unavailability(None, Some((6, 0)))],
            ..create_location("Port", LocationCategory::Port, 35.0, 10.0)
        },
        Location {
            unavailability: vec![create_unavailability(Some((12, 0)), Some((13, 0)))],
            ..create_location("one", LocationCategory::Platform, 34.5, 11.0)
        },
        Location {
            unavailability: vec![
                create_unavailability(Some((10, 0)), Some((12, 0))),
                create_unavailability(Some((0, 0)), Some((20, 0))),
            ],
            ..create_location("two", LocationCategory::Platform, 34.8, 9.5)
        },
        create_location("three", LocationCategory::Platform, 35.2, 10.5),
    ]
}

/// Creates the sample data source: 10 items, 4 locations, 3 vessels starting and ending at port.
pub fn create_sample_dataset() -> Dataset {
    let deliveries = ["one", "one", "one", "one", "one", "two", "one", "one", "two", "three"];
    let weights = [140, 130, 100, 1, 1, 1, 1, 1, 1, 122];

    let items = deliveries
        .iter()
        .zip(weights.iter())
        .enumerate()
        .map(|(idx, (delivery, weight))| {
            let pickup = if idx == 9 { "one" } else { "Port" };
            Item::new(&format!("Item {}", idx + 1), pickup, delivery, *weight)
        })
        .collect();

    let vessels = [("Vessel1", 200, 7.9), ("Vessel2", 250, 8.), ("Vessel3", 200, 8.1)]
        .into_iter()
        .map(|(id, capacity, speed)| Vessel::new(id, capacity, speed).with_terminals(Some("Port"), Some("Port")))
        .collect();

    Dataset { locations: create_sample_locations(), items, vessels }
}

/// Creates a data source where vessels have no explicit start and end, so they use the depot.
pub fn create_depot_dataset() -> Dataset {
    let locations = vec![
        create_location("Port", LocationCategory::Port, 35.0, 10.0),
        create_location("one", LocationCategory::Platform, 34.1, 10.1),
    ];
    let items = (1..=10).map(|idx| Item::new(&format!("Item {idx}"), "Port", "one", 50)).collect();
    let vessels =
        vec![Vessel::new("Vessel1", 200, 7.9), Vessel::new("Vessel2", 200, 8.), Vessel::new("Vessel3", 200, 8.1)];

    Dataset { locations, items, vessels }
}

pub fn create_sites(dataset: &Dataset, config: &Config) -> Sites {
    Sites::new(&dataset.locations, config.pickup_location_default.as_str()).unwrap()
}

/// Creates a node with given service time and a full day window.
pub fn create_node(site: usize, category: LocationCategory, service_time: Duration) -> VirtualNode {
    VirtualNode { service_time, ..VirtualNode::new(site, &format!("site{site}"), category, TimeWindow::new(0, 1440)) }
}
