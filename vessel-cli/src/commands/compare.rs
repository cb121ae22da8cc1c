#[cfg(test)]
#[path = "../../tests/unit/commands/compare_test.rs"]
mod compare_test;

use super::*;

use clap::{Arg, Command};
use std::io::BufReader;
use vessel_cli::extensions::compare::{compare_leg_tables, read_leg_table};

const EXPECTED_ARG_NAME: &str = "EXPECTED";
const ACTUAL_ARG_NAME: &str = "ACTUAL";

pub fn get_compare_app() -> Command {
    Command::new("compare")
        .about("Compares two leg tables and fails when they differ")
        .arg(Arg::new(EXPECTED_ARG_NAME).help("Sets the expected leg table csv file").required(true).index(1))
        .arg(Arg::new(ACTUAL_ARG_NAME).help("Sets the actual leg table csv file").required(true).index(2))
}

pub fn run_compare(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let expected_path = matches.get_one::<String>(EXPECTED_ARG_NAME).ok_or("expected file is not set")?;
    let actual_path = matches.get_one::<String>(ACTUAL_ARG_NAME).ok_or("actual file is not set")?;

    let expected = read_leg_table(BufReader::new(open_file(expected_path, "expected"))).map_err(|err| err.to_string())?;
    let actual = read_leg_table(BufReader::new(open_file(actual_path, "actual"))).map_err(|err| err.to_string())?;

    let comparison = compare_leg_tables(&expected, &actual);
    let mut writer = out_writer_func(None);

    if comparison.is_same() {
        writeln!(writer, "Files {expected_path} and {actual_path} are the same.").map_err(|err| err.to_string())?;
        return Ok(());
    }

    comparison
        .describe()
        .iter()
        .try_for_each(|line| writeln!(writer, "{line}"))
        .map_err(|err| err.to_string())?;

    Err(format!("files '{expected_path}' and '{actual_path}' differ"))
}
