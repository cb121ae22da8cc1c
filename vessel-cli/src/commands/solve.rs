#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use vessel_cli::extensions::config::read_config_overrides;
use vessel_cli::extensions::output::write_legs;
use vessel_cli::{DEFAULT_DATA_SOURCE, solve_data_source};
use vessel_core::prelude::{ConfigOverrides, Environment};

const DATA_SOURCE_ARG_NAME: &str = "DATA_SOURCE";
const DATA_ROOT_ARG_NAME: &str = "data-root";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const TIME_ARG_NAME: &str = "max-time";
const SOLUTION_LIMIT_ARG_NAME: &str = "solution-limit";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const CONFIG_ARG_NAME: &str = "config";
const QUIET_ARG_NAME: &str = "quiet";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves vessel pickup and delivery routing problem stored in a data source folder")
        .arg(
            Arg::new(DATA_SOURCE_ARG_NAME)
                .help("Sets the data source folder name inside data root")
                .default_value(DEFAULT_DATA_SOURCE)
                .index(1),
        )
        .arg(
            Arg::new(DATA_ROOT_ARG_NAME)
                .help("Specifies path to the folder with data sources")
                .long(DATA_ROOT_ARG_NAME)
                .default_value("data"),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for the leg table output, stdout is used when not set")
                .short('o')
                .long(OUT_RESULT_ARG_NAME),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies search time limit in seconds")
                .short('t')
                .long(TIME_ARG_NAME),
        )
        .arg(
            Arg::new(SOLUTION_LIMIT_ARG_NAME)
                .help("Specifies maximum amount of search iterations")
                .short('n')
                .long(SOLUTION_LIMIT_ARG_NAME),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed of the search")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the json file with configuration overrides")
                .short('c')
                .long(CONFIG_ARG_NAME),
        )
        .arg(
            Arg::new(QUIET_ARG_NAME)
                .help("Disables search progress and summary logging")
                .short('q')
                .long(QUIET_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let data_source =
        matches.get_one::<String>(DATA_SOURCE_ARG_NAME).map_or(DEFAULT_DATA_SOURCE, |value| value.as_str());
    let data_root = matches.get_one::<String>(DATA_ROOT_ARG_NAME).map_or("data", |value| value.as_str());

    let max_time = parse_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let solution_limit = parse_value::<usize>(matches, SOLUTION_LIMIT_ARG_NAME, "solution limit")?;
    let seed = parse_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")?;
    let is_quiet = matches.get_flag(QUIET_ARG_NAME);

    let file_overrides = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config_overrides(BufReader::new(open_file(path, "config"))))
        .transpose()
        .map_err(|err| err.to_string())?
        .unwrap_or_default();

    let arg_overrides = ConfigOverrides {
        solution_time_limit_seconds: max_time,
        solution_limit,
        seed,
        log_search: if is_quiet { Some(false) } else { None },
        ..ConfigOverrides::default()
    };

    let environment = Arc::new(if is_quiet { Environment::new_silent() } else { Environment::default() });
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    let legs = solve_data_source(Path::new(data_root), data_source, file_overrides.merge(arg_overrides), environment)
        .map_err(|err| format!("cannot solve data source '{data_source}': {err}"))?
        .ok_or_else(|| format!("no solution found for data source '{data_source}'"))?;

    write_legs(legs.as_slice(), out_writer_func(out_result)).map_err(|err| err.to_string())
}
