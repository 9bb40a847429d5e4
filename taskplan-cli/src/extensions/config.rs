//! Contains an experiment configuration which is read from a json file.
//!
//! Relative file paths in the configuration are resolved against a data directory, usually the
//! directory of the configuration file.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use crate::extensions::generate::*;
use crate::extensions::io::*;
use crate::extensions::text::read_text_problem;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use taskplan_core::prelude::*;

/// An experiment configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Amount of generations to run.
    pub generations: usize,
    /// Initial population settings.
    pub population: PopulationConfig,
    /// Names of operator strategies.
    pub operators: OperatorsConfig,
    /// Objective weights, defaults are used for missing ones.
    pub weights: Option<WeightsConfig>,
    /// Employee time budget. Required unless the data source defines it, overrides the one
    /// defined by the data source otherwise.
    pub budget: Option<u32>,
    /// Specifies where input data comes from.
    pub data: DataConfig,
    /// When set, input matrices and the initial population are saved next to results.
    pub save_matrices: Option<bool>,
    /// A seed of the random generator, runs are repeatable when it is set.
    pub seed: Option<u64>,
    /// Telemetry settings.
    pub telemetry: Option<TelemetryConfig>,
}

/// Specifies how the initial population is created.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "type")]
pub enum PopulationConfig {
    /// Population is built by the constructive solver.
    #[serde(rename(deserialize = "auto"))]
    Auto {
        /// Amount of individuals.
        size: usize,
    },

    /// Population is loaded from a json file with assignment matrices.
    #[serde(rename(deserialize = "fromFile"))]
    FromFile {
        /// A path to the population file.
        path: String,
    },
}

/// Names of breed, mutate and select strategies.
#[derive(Clone, Deserialize, Debug)]
pub struct OperatorsConfig {
    /// A breed strategy name.
    pub breed: String,
    /// A mutate strategy name.
    pub mutate: String,
    /// A select strategy name.
    pub select: String,
}

/// Objective weights.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct WeightsConfig {
    /// Weight of load imbalance.
    pub alpha: Option<f64>,
    /// Weight of time spent on low priority tasks.
    pub beta: Option<f64>,
    /// Weight of dissatisfaction.
    pub gamma: Option<f64>,
    /// Weight of unused capacity.
    pub delta: Option<f64>,
}

/// Specifies input data source.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "type")]
pub enum DataConfig {
    /// `T`, `Z` and `p` are read from json files.
    #[serde(rename(deserialize = "matrices"))]
    Matrices {
        /// A time matrix file, `T.json` by default.
        time: Option<String>,
        /// A satisfaction matrix file, `Z.json` by default.
        satisfaction: Option<String>,
        /// A priority vector file, `p.json` by default.
        priority: Option<String>,
    },

    /// Employees and tasks are read from json files, matrices are predicted from them.
    #[serde(rename(deserialize = "generated"))]
    Generated {
        /// An employees file, `employees.json` by default.
        employees: Option<String>,
        /// A tasks file, `tasks.json` by default.
        tasks: Option<String>,
    },

    /// Budget, employees, tasks and matrices are read from a plain text problem file.
    #[serde(rename(deserialize = "text"))]
    Text {
        /// A problem file, `problem.txt` by default.
        path: Option<String>,
    },

    /// Employees and tasks are generated.
    #[serde(rename(deserialize = "auto"))]
    Auto {
        /// Amount of employees.
        employees: usize,
        /// Amount of tasks.
        tasks: usize,
    },
}

/// Telemetry settings.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Logging settings.
    pub logging: Option<LoggingConfig>,
}

/// Logging settings.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables logging.
    pub enabled: bool,
    /// How often the best individual is logged.
    pub log_best: Option<usize>,
}

/// Default value of logging frequency.
pub const LOG_BEST: usize = 100;

/// Min amount of individuals in the initial population.
pub const MIN_POPULATION_SIZE: usize = 2;

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Returns objective weights.
pub fn create_weights(config: &Config) -> Weights {
    let defaults = Weights::default();
    let weights = config.weights.clone().unwrap_or_default();

    Weights::new(
        weights.alpha.unwrap_or(defaults.alpha),
        weights.beta.unwrap_or(defaults.beta),
        weights.gamma.unwrap_or(defaults.gamma),
        weights.delta.unwrap_or(defaults.delta),
    )
}

/// Input matrices with a budget when the data source defines one.
#[derive(Clone, Debug)]
pub struct InputData {
    /// Input matrices.
    pub matrices: InputMatrices,
    /// A budget defined by the data source.
    pub budget: Option<u32>,
}

impl From<InputMatrices> for InputData {
    fn from(matrices: InputMatrices) -> Self {
        Self { matrices, budget: None }
    }
}

/// Loads or generates input matrices.
pub fn create_input_data(config: &Config, directory: &Path, random: &dyn Random) -> GenericResult<InputData> {
    let resolve = |path: &Option<String>, default: &str| directory.join(path.as_deref().unwrap_or(default));

    let matrices = match &config.data {
        DataConfig::Matrices { time, satisfaction, priority } => read_input_matrices(
            open_file(&resolve(time, "T.json"), "time matrix")?,
            open_file(&resolve(satisfaction, "Z.json"), "satisfaction matrix")?,
            open_file(&resolve(priority, "p.json"), "priority vector")?,
        )?,
        DataConfig::Generated { employees, tasks } => {
            let employees = read_employees(open_file(&resolve(employees, "employees.json"), "employees")?)?;
            let tasks = read_tasks(open_file(&resolve(tasks, "tasks.json"), "tasks")?)?;

            generate_input_matrices(&employees, &tasks, random)
        }
        DataConfig::Text { path } => {
            let problem = read_text_problem(open_file(&resolve(path, "problem.txt"), "text problem")?)?;

            return Ok(InputData { matrices: problem.matrices, budget: Some(problem.budget) });
        }
        DataConfig::Auto { employees, tasks } => {
            if *employees == 0 || *tasks == 0 {
                return Err("amount of employees and tasks must be positive in 'auto' data mode".into());
            }

            let tasks = generate_tasks(*tasks, random);
            let employees = generate_employees(*employees, random);

            generate_input_matrices(&employees, &tasks, random)
        }
    };

    Ok(matrices.into())
}

/// Creates the problem from config and input data.
pub fn create_problem(config: &Config, data: &InputData) -> GenericResult<Arc<Problem>> {
    let budget = config.budget.or(data.budget).ok_or_else(|| {
        "missing budget: it must be set in config when the data source does not define it".to_string()
    })?;

    data.matrices.create_problem(budget, create_weights(config))
}

/// Creates the initial population.
pub fn create_population(
    config: &Config,
    problem: Arc<Problem>,
    directory: &Path,
    random: &dyn Random,
) -> GenericResult<Vec<Solution>> {
    let population = match &config.population {
        PopulationConfig::Auto { size } => {
            check_population_size(*size)?;
            create_initial_population(problem, *size, random)
        }
        PopulationConfig::FromFile { path } => {
            if !path.ends_with(".json") {
                return Err(format!("population file must be a json file, got '{path}'").into());
            }

            read_population(open_file(&directory.join(path), "population")?, problem)?
        }
    };

    check_population_size(population.len())?;

    Ok(population)
}

/// Creates an evolution config builder with generations, strategies and telemetry from config.
pub fn create_builder_from_config(config: &Config, logger: InfoLogger) -> GenericResult<EvolutionConfigBuilder> {
    let breed = config.operators.breed.parse::<BreedType>()?;
    let mutate = config.operators.mutate.parse::<MutateType>()?;
    let select = config.operators.select.parse::<SelectType>()?;

    let telemetry = match config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()) {
        Some(LoggingConfig { enabled: true, log_best }) => {
            TelemetryMode::OnlyLogging { logger, log_best: log_best.unwrap_or(LOG_BEST) }
        }
        _ => TelemetryMode::None,
    };

    Ok(EvolutionConfigBuilder::default()
        .with_generations(config.generations)
        .with_breed_type(breed)
        .with_mutate_type(mutate)
        .with_select_type(select)
        .with_telemetry(telemetry))
}

fn check_population_size(size: usize) -> GenericResult<()> {
    if size < MIN_POPULATION_SIZE {
        Err(format!("population size must be at least {MIN_POPULATION_SIZE}, got {size}").into())
    } else {
        Ok(())
    }
}
