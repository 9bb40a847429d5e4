#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, Command};
use std::fs;
use std::path::Path;
use taskplan_cli::extensions::generate::*;
use taskplan_cli::extensions::io::{create_file, write_json};
use taskplan_cli::extensions::text::{TextProblem, write_text_problem};
use taskplan_core::utils::{DefaultRandom, Random};

pub const EMPLOYEES_SIZE_ARG_NAME: &str = "employees-size";
pub const TASKS_SIZE_ARG_NAME: &str = "tasks-size";
pub const OUT_DIR_ARG_NAME: &str = "out-dir";
pub const SEED_ARG_NAME: &str = "seed";
pub const BUDGET_ARG_NAME: &str = "budget";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates employees, tasks and input matrices predicted from them")
        .arg(
            Arg::new(EMPLOYEES_SIZE_ARG_NAME)
                .help("Amount of employees")
                .short('e')
                .long(EMPLOYEES_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(TASKS_SIZE_ARG_NAME)
                .help("Amount of tasks")
                .short('t')
                .long(TASKS_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies directory where generated files are written")
                .short('o')
                .long(OUT_DIR_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a seed of the random generator")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BUDGET_ARG_NAME)
                .help("Specifies a time budget, when set a plain text problem file is written too")
                .short('b')
                .long(BUDGET_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> GenericResult<()> {
    let employees_size = parse_int_value::<usize>(matches, EMPLOYEES_SIZE_ARG_NAME, "employees size")?.unwrap_or(0);
    let tasks_size = parse_int_value::<usize>(matches, TASKS_SIZE_ARG_NAME, "tasks size")?.unwrap_or(0);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let budget = parse_int_value::<u32>(matches, BUDGET_ARG_NAME, "budget")?;
    let out_dir = get_path(matches, OUT_DIR_ARG_NAME)?;

    if employees_size == 0 || tasks_size == 0 {
        return Err("amount of employees and tasks must be positive".into());
    }

    let random = seed.map_or_else(DefaultRandom::default, DefaultRandom::new_repeatable);

    generate_data(out_dir.as_path(), (employees_size, tasks_size), budget, &random)
}

/// Writes `employees.json`, `tasks.json`, `T.json`, `Z.json` and `p.json` into the directory.
/// With budget, everything is also written into `problem.txt`.
fn generate_data(out_dir: &Path, sizes: (usize, usize), budget: Option<u32>, random: &dyn Random) -> GenericResult<()> {
    let (employees_size, tasks_size) = sizes;

    fs::create_dir_all(out_dir)
        .map_err(|err| format!("cannot create output directory '{}': '{err}'", out_dir.display()))?;

    let tasks = generate_tasks(tasks_size, random);
    let employees = generate_employees(employees_size, random);
    let matrices = generate_input_matrices(&employees, &tasks, random);

    write_json(&mut create_file(&out_dir.join("employees.json"), "employees")?, &employees, "employees")?;
    write_json(&mut create_file(&out_dir.join("tasks.json"), "tasks")?, &tasks, "tasks")?;
    write_json(&mut create_file(&out_dir.join("T.json"), "time matrix")?, &matrices.time, "time matrix")?;
    write_json(
        &mut create_file(&out_dir.join("Z.json"), "satisfaction matrix")?,
        &matrices.satisfaction,
        "satisfaction matrix",
    )?;
    write_json(&mut create_file(&out_dir.join("p.json"), "priority vector")?, &matrices.priority, "priority vector")?;

    if let Some(budget) = budget {
        let problem = TextProblem { budget, employees, tasks, matrices };
        write_text_problem(&mut create_file(&out_dir.join("problem.txt"), "text problem")?, &problem)?;
    }

    Ok(())
}
