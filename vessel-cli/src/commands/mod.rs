use clap::ArgMatches;

pub mod compare;
pub mod solve;

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;

/// Creates a buffered writer to the file, falls back to stdout.
pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    let writer: Box<dyn Write> = match out_file {
        Some(out_file) => Box::new(out_file),
        None => Box::new(stdout()),
    };

    BufWriter::new(writer)
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| exit_with_file_error("open", description, path, err))
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| exit_with_file_error("create", description, path, err))
}

fn exit_with_file_error(action: &str, description: &str, path: &str, err: std::io::Error) -> ! {
    eprintln!("cannot {action} {description} file '{path}': '{err}'");
    process::exit(1);
}

/// Parses an optional argument value, e.g. a time limit or a seed.
fn parse_value<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .get_one::<String>(arg_name)
        .map(|value| value.parse::<T>().map_err(|err| format!("invalid {arg_desc} '{value}': {err}")))
        .transpose()
}
