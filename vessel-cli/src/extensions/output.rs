//! Writes legs as csv.

#[cfg(test)]
#[path = "../../tests/unit/extensions/output_test.rs"]
mod output_test;

use std::io::Write;
use vessel_core::prelude::{GenericResult, Leg};

/// Column names of the leg table in the order they are written.
pub const LEG_COLUMNS: [&str; 22] = [
    "Current Node Index",
    "Next Node Index",
    "Action Start Node",
    "Loaded Cargo id",
    "Unloaded Cargo Id",
    "Loaded Item Name",
    "Unloaded Item Name",
    "Vessel",
    "Leg",
    "Current Node Location",
    "Next Node Location",
    "Weight Loaded",
    "Weight Unloaded",
    "Current Node Time",
    "Next Node Time",
    "Pickup Location",
    "Delivery Location",
    "Loaded Cargo Lifts",
    "Unloaded Cargo Lifts",
    "Distance",
    "Time",
    "Data Source",
];

/// Writes legs as csv table with a header row. The header is written even when there are no legs.
pub fn write_legs<W: Write>(legs: &[Leg], writer: W) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    if legs.is_empty() {
        writer.write_record(LEG_COLUMNS).map_err(|err| format!("cannot write leg header: '{err}'"))?;
    }

    legs.iter().try_for_each(|leg| writer.serialize(leg)).map_err(|err| format!("cannot write leg: '{err}'"))?;

    writer.flush()?;

    Ok(())
}
