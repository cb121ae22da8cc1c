//! Configuration overrides stored as json.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use vessel_core::prelude::{ConfigOverrides, GenericResult};

/// A name of the optional data source configuration file.
pub const CONFIG_FILE: &str = "config.json";

/// Reads configuration overrides from json.
pub fn read_config_overrides<R: Read>(reader: BufReader<R>) -> GenericResult<ConfigOverrides> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Reads configuration overrides of the data source. Missing file means no overrides.
pub fn read_data_source_config(directory: &Path) -> GenericResult<ConfigOverrides> {
    let path = directory.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(ConfigOverrides::default());
    }

    let file = File::open(&path).map_err(|err| format!("cannot open config file '{}': '{err}'", path.display()))?;

    read_config_overrides(BufReader::new(file))
}
