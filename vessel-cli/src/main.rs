//! A command line interface to vessel pickup and delivery routing.

mod commands;

use crate::commands::compare::{get_compare_app, run_compare};
use crate::commands::create_write_buffer;
use crate::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Vessel Routing")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to vessel pickup and delivery routing")
        .arg_required_else_help(true)
        .subcommand(get_solve_app())
        .subcommand(get_compare_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("compare", compare_matches)) => run_compare(compare_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
