//! Contains functionality to run the generational evolution loop.

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolution_test.rs"]
mod evolution_test;

mod config;
pub use self::config::*;

pub mod telemetry;
pub use self::telemetry::*;

use crate::models::Solution;
use crate::utils::{Environment, GenericResult, compare_floats};

/// Keeps the outcome of an evolution run.
pub struct EvolutionResult {
    /// The best solution observed during the run.
    pub best: Solution,
    /// The final population.
    pub population: Vec<Solution>,
    /// Amount of generations run.
    pub generations: usize,
    /// Elapsed time in seconds.
    pub elapsed: f64,
}

/// Runs breed, mutate and select strategies for a fixed amount of generations keeping track of
/// the best solution found.
pub struct Evolution {
    config: EvolutionConfig,
}

impl Evolution {
    /// Creates a new instance of `Evolution`.
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// Runs evolution starting from the given population.
    pub fn run(self, mut population: Vec<Solution>, environment: &Environment) -> GenericResult<EvolutionResult> {
        let EvolutionConfig { generations, breed, mutate, select, telemetry, mut progress } = self.config;

        let telemetry = Telemetry::new(telemetry);
        let random = environment.random.as_ref();

        let mut best =
            find_best(population.as_slice()).cloned().ok_or_else(|| "initial population is empty".to_string())?;

        telemetry.on_initial(population.as_slice(), &best);

        for generation in 1..=generations {
            let mut children = breed.breed(population.as_slice(), random)?;
            mutate.mutate(children.as_mut_slice(), random);

            let is_improved = match find_best(children.as_slice()) {
                Some(child) if child.fitness() < best.fitness() => {
                    best = child.clone();
                    true
                }
                _ => false,
            };

            population = select.select(population, children);

            telemetry.on_generation(generation, &best, is_improved);

            if let Some(progress) = progress.as_mut() {
                let timestamp = telemetry.timestamp();
                let fitness = *best.objectives();
                let population = population.as_slice();
                (progress)(&Progress { generation, best: &best, population, fitness, timestamp });
            }
        }

        telemetry.on_result(&best, generations);

        Ok(EvolutionResult { best, population, generations, elapsed: telemetry.timestamp() })
    }
}

/// Returns the solution with the lowest fitness, the first one on ties.
pub fn find_best(solutions: &[Solution]) -> Option<&Solution> {
    solutions.iter().min_by(|a, b| compare_floats(a.fitness(), b.fitness()))
}
