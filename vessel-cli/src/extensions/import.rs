//! Import of data source files.

#[cfg(test)]
#[path = "../../tests/unit/extensions/import_test.rs"]
mod import_test;

use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use vessel_core::formulation::parse_timestamp;
use vessel_core::prelude::*;

/// A name of the file with locations.
pub const LOCATIONS_FILE: &str = "locations.json";
/// A name of the file with items.
pub const ITEMS_FILE: &str = "items.csv";
/// A name of the file with vessels.
pub const VESSELS_FILE: &str = "vessels.csv";

#[derive(Debug, Deserialize)]
struct JsonLocation {
    name: String,
    latitude: f64,
    longitude: f64,
    category: String,
    #[serde(default)]
    unavailability: Vec<(Option<String>, Option<String>)>,
}

#[derive(Debug, Deserialize)]
struct CsvItem {
    item_name: String,
    pickup_location: String,
    delivery_location: String,
    weight: f64,
    #[serde(default)]
    lifts: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct CsvVessel {
    vessel_name: String,
    vessel_capacity: i64,
    vessel_speed: f64,
    #[serde(default)]
    vessel_start_location: Option<String>,
    #[serde(default)]
    vessel_end_location: Option<String>,
}

/// Reads a dataset from the data source folder.
pub fn read_dataset(directory: &Path) -> GenericResult<Dataset> {
    let locations = read_locations(open_data_file(directory, LOCATIONS_FILE)?)?;
    let items = read_items(open_data_file(directory, ITEMS_FILE)?)?;
    let vessels = read_vessels(open_data_file(directory, VESSELS_FILE)?)?;

    Ok(Dataset { locations, items, vessels })
}

/// Reads locations from json array. Category labels are case insensitive: `port` and `depot` are
/// recognized, anything else is a platform.
pub fn read_locations<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Location>> {
    let locations: Vec<JsonLocation> =
        serde_json::from_reader(reader).map_err(|err| format!("cannot read locations: '{err}'"))?;

    locations
        .into_iter()
        .map(|location| -> GenericResult<Location> {
            let category = match location.category.to_lowercase().as_str() {
                "port" => LocationCategory::Port,
                "depot" => LocationCategory::Depot,
                _ => LocationCategory::Platform,
            };

            let unavailability = location
                .unavailability
                .iter()
                .map(|(start, end)| -> GenericResult<Unavailability> {
                    let start = parse_optional_time(start.as_deref())?;
                    let end = parse_optional_time(end.as_deref())?;

                    Ok(Unavailability { start, end })
                })
                .collect::<GenericResult<Vec<_>>>()
                .map_err(|err| format!("location '{}' has invalid unavailability: {err}", location.name))?;

            Ok(Location {
                unavailability,
                ..Location::new(&location.name, category, Position::new(location.latitude, location.longitude))
            })
        })
        .collect()
}

/// Reads items from csv. Fractional weight is truncated to whole kilograms and has to stay positive.
pub fn read_items<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Item>> {
    read_csv_entries::<CsvItem, _>(reader)?
        .into_iter()
        .map(|item| -> GenericResult<Item> {
            let weight = if item.weight.is_finite() { item.weight.trunc() as i64 } else { 0 };
            if weight <= 0 {
                return Err(format!("item '{}' has non-positive weight: {}", item.item_name, item.weight).into());
            }

            if item.lifts.is_some_and(|lifts| lifts < 0) {
                return Err(format!("item '{}' has negative lifts", item.item_name).into());
            }

            Ok(Item {
                lifts: item.lifts,
                ..Item::new(&item.item_name, &item.pickup_location, &item.delivery_location, weight)
            })
        })
        .collect()
}

/// Reads vessels from csv. Capacity and speed have to be positive. Empty start or end location
/// means that the vessel uses the depot.
pub fn read_vessels<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Vessel>> {
    read_csv_entries::<CsvVessel, _>(reader)?
        .into_iter()
        .map(|vessel| -> GenericResult<Vessel> {
            if vessel.vessel_capacity <= 0 {
                return Err(format!("vessel '{}' has non-positive capacity", vessel.vessel_name).into());
            }

            if !vessel.vessel_speed.is_finite() || vessel.vessel_speed <= 0. {
                return Err(format!("vessel '{}' has non-positive speed", vessel.vessel_name).into());
            }

            let start = non_empty(vessel.vessel_start_location.as_deref());
            let end = non_empty(vessel.vessel_end_location.as_deref());

            Ok(Vessel::new(&vessel.vessel_name, vessel.vessel_capacity, vessel.vessel_speed).with_terminals(start, end))
        })
        .collect()
}

fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> GenericResult<Vec<T>>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = vec![];

    for entry in reader.deserialize() {
        entries.push(entry.map_err(|err| format!("cannot read csv entry: '{err}'"))?);
    }

    Ok(entries)
}

fn open_data_file(directory: &Path, name: &str) -> GenericResult<BufReader<File>> {
    let path = directory.join(name);

    File::open(&path)
        .map(BufReader::new)
        .map_err(|err| format!("cannot open data file '{}': '{err}'", path.display()).into())
}

fn parse_optional_time(value: Option<&str>) -> GenericResult<Option<time::OffsetDateTime>> {
    value.map(parse_timestamp).transpose()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
