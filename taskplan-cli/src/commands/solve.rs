#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use taskplan_cli::extensions::solve::run_experiment;

pub const CONFIG_ARG_NAME: &str = "CONFIG";
pub const OUT_DIR_ARG_NAME: &str = "out-dir";
pub const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Runs an experiment described by a config file")
        .arg(Arg::new(CONFIG_ARG_NAME).help("Sets experiment config file").required(true).index(1))
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies directory for results, input matrices and the best solution")
                .short('o')
                .long(OUT_DIR_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether evolution progress is written into stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(matches: &ArgMatches) -> GenericResult<()> {
    let config_path = get_path(matches, CONFIG_ARG_NAME)?;
    let out_dir = get_path(matches, OUT_DIR_ARG_NAME)?;
    let logger = create_logger(matches.get_flag(LOG_ARG_NAME));

    let result = run_experiment(config_path.as_path(), out_dir.as_path(), logger)?;

    let mut writer = create_write_buffer(None);
    writeln!(writer, "generations: {}, elapsed: {:.3}s", result.generations, result.elapsed)?;
    write!(writer, "{}", result.best)?;

    Ok(writer.flush()?)
}
