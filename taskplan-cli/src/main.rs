//! A command line interface to the task assignment optimizer.

mod commands;

use clap::Command;
use commands::generate::{get_generate_app, run_generate};
use commands::grid::{get_grid_app, run_grid};
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn get_app() -> Command {
    Command::new("taskplan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assigns tasks to employees with an evolutionary algorithm")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
        .subcommand(get_grid_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        Some(("grid", grid_matches)) => run_grid(grid_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
