//! Runs a single experiment described by a config file and logs its results.

#[cfg(test)]
#[path = "../../tests/unit/extensions/solve_test.rs"]
mod solve_test;

use crate::extensions::config::*;
use crate::extensions::io::*;
use crate::extensions::results::*;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use taskplan_core::prelude::*;

/// A csv file with fitness components of the best solution per generation.
pub const RESULTS_FILE: &str = "results.csv";
/// A file with the best assignment of every generation.
pub const SOLUTIONS_FILE: &str = "solutions.txt";
/// A file with the best assignment found.
pub const BEST_SOLUTION_FILE: &str = "best_solution.json";

/// Reads config from file, runs evolution and writes results into the output directory.
/// Input files referenced by config are resolved against the config file directory.
pub fn run_experiment(config_path: &Path, out_dir: &Path, logger: InfoLogger) -> GenericResult<EvolutionResult> {
    let config = read_config(open_file(config_path, "config")?)?;
    let data_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let random: Arc<dyn Random> = match config.seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let environment = Environment::new(random, logger);
    let random = environment.random.as_ref();

    let data = create_input_data(&config, data_dir, random)?;
    let problem = create_problem(&config, &data)?;
    let population = create_population(&config, problem.clone(), data_dir, random)?;

    (environment.logger)(
        format!(
            "loaded problem with {} employees and {} tasks, initial population of {} individuals",
            problem.employees(),
            problem.tasks(),
            population.len()
        )
        .as_str(),
    );

    fs::create_dir_all(out_dir)
        .map_err(|err| format!("cannot create output directory '{}': '{err}'", out_dir.display()))?;

    if config.save_matrices.unwrap_or(false) {
        let matrices = &data.matrices;
        write_json(&mut create_file(&out_dir.join("T.json"), "time matrix")?, &matrices.time, "time matrix")?;
        write_json(
            &mut create_file(&out_dir.join("Z.json"), "satisfaction matrix")?,
            &matrices.satisfaction,
            "satisfaction matrix",
        )?;
        write_json(
            &mut create_file(&out_dir.join("p.json"), "priority vector")?,
            &matrices.priority,
            "priority vector",
        )?;
        write_population(&mut create_file(&out_dir.join("starting_population.json"), "population")?, &population)?;
    }

    let writer = Arc::new(Mutex::new(ResultWriter::new(
        Box::new(create_file(&out_dir.join(RESULTS_FILE), "results")?),
        Box::new(create_file(&out_dir.join(SOLUTIONS_FILE), "solutions")?),
    )?));

    let evolution_config = create_builder_from_config(&config, environment.logger.clone())?
        .with_progress(create_progress_sink(writer.clone()))
        .build()?;

    let result = Evolution::new(evolution_config).run(population, &environment)?;

    writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).finish()?;

    write_json(
        &mut create_file(&out_dir.join(BEST_SOLUTION_FILE), "best solution")?,
        result.best.assignment(),
        "best solution",
    )?;

    Ok(result)
}
