//! A grid search over strategy and parameter combinations. Every combination runs a complete
//! evolution in parallel with its own random stream and population, only the problem is shared.

#[cfg(test)]
#[path = "../../tests/unit/extensions/grid_test.rs"]
mod grid_test;

use rayon::prelude::*;
use std::io::Write;
use std::sync::Arc;
use taskplan_core::prelude::*;

/// Parameter values to sweep.
#[derive(Clone, Debug)]
pub struct GridParams {
    /// Breed strategies.
    pub breeds: Vec<BreedType>,
    /// Mutate strategies.
    pub mutates: Vec<MutateType>,
    /// Select strategies.
    pub selects: Vec<SelectType>,
    /// Amounts of generations.
    pub generations: Vec<usize>,
    /// Sizes of the initial population.
    pub population_sizes: Vec<usize>,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            breeds: BreedType::ALL.to_vec(),
            mutates: MutateType::ALL.to_vec(),
            selects: SelectType::ALL.to_vec(),
            generations: vec![1, 10, 100],
            population_sizes: vec![2, 20, 100],
        }
    }
}

/// One point of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCombination {
    /// A breed strategy.
    pub breed: BreedType,
    /// A mutate strategy.
    pub mutate: MutateType,
    /// A select strategy.
    pub select: SelectType,
    /// Amount of generations.
    pub generations: usize,
    /// Initial population size.
    pub population_size: usize,
}

/// The best solution found for a combination.
pub struct GridResult {
    /// Parameters of the run.
    pub combination: GridCombination,
    /// The best solution.
    pub best: Solution,
}

impl GridParams {
    /// Returns all combinations in a stable order: the last parameter changes fastest.
    pub fn combinations(&self) -> Vec<GridCombination> {
        let mut combinations = Vec::new();

        for &breed in &self.breeds {
            for &mutate in &self.mutates {
                for &select in &self.selects {
                    for &generations in &self.generations {
                        for &population_size in &self.population_sizes {
                            combinations.push(GridCombination { breed, mutate, select, generations, population_size });
                        }
                    }
                }
            }
        }

        combinations
    }
}

/// Runs every combination. The run with index `i` uses `seed + i` as a seed, so results do not
/// depend on thread scheduling.
pub fn run_grid_search(problem: Arc<Problem>, params: &GridParams, seed: u64) -> GenericResult<Vec<GridResult>> {
    let combinations = params.combinations();

    if combinations.is_empty() {
        return Err("grid search has no combinations to run".into());
    }

    combinations
        .into_par_iter()
        .enumerate()
        .map(|(idx, combination)| run_combination(problem.clone(), combination, seed.wrapping_add(idx as u64)))
        .collect()
}

/// Returns the result with the lowest fitness, the first one on ties.
pub fn find_best_result(results: &[GridResult]) -> Option<&GridResult> {
    results.iter().min_by(|a, b| compare_floats(a.best.fitness(), b.best.fitness()))
}

/// Writes results as csv.
pub fn write_grid_results<W: Write>(writer: W, results: &[GridResult]) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record(["breed", "mutate", "select", "generations", "population_size", "f1", "f2", "f3", "f4", "f"])
        .map_err(|err| format!("cannot write grid header: '{err}'"))?;

    results.iter().try_for_each(|result| {
        let GridCombination { breed, mutate, select, generations, population_size } = result.combination;

        let record = [breed.to_string(), mutate.to_string(), select.to_string()]
            .into_iter()
            .chain([generations.to_string(), population_size.to_string()])
            .chain(result.best.objectives().values().into_iter().map(|value| format!("{value:.3}")));

        writer.write_record(record).map_err(|err| GenericError::from(format!("cannot write grid record: '{err}'")))
    })?;

    Ok(writer.flush()?)
}

fn run_combination(problem: Arc<Problem>, combination: GridCombination, seed: u64) -> GenericResult<GridResult> {
    let environment = Environment::new_repeatable(seed);
    let population = create_initial_population(problem, combination.population_size, environment.random.as_ref());

    let config = EvolutionConfigBuilder::default()
        .with_generations(combination.generations)
        .with_breed_type(combination.breed)
        .with_mutate_type(combination.mutate)
        .with_select_type(combination.select)
        .build()?;

    let result = Evolution::new(config).run(population, &environment)?;

    Ok(GridResult { combination, best: result.best })
}
