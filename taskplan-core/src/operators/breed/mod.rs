//! Breed strategies: parents are picked from the population in pairs and crossed over.

#[cfg(test)]
#[path = "../../../tests/unit/operators/breed/breed_test.rs"]
mod breed_test;

mod crossover;
pub use self::crossover::*;

use super::Breed;
use crate::models::Solution;
use crate::utils::{GenericResult, Random, compare_floats};

/// Default probability to pick the best individual as the first parent in rank biased breeding.
pub const DEFAULT_DOMINANCE_BIAS: f64 = 0.7;

/// Specifies how a pair of parents is drawn from the population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParentSelection {
    /// Both parents are drawn uniformly with repetition.
    Uniform,
    /// Both parents are drawn with probability proportional to inverted fitness.
    FitnessProportional,
    /// The first parent is the best individual with given probability, the second best otherwise;
    /// the second parent is drawn uniformly from the rest.
    Dominance {
        /// Probability to pick the best individual.
        bias: f64,
    },
}

/// A breed strategy which draws `⌊n/2⌋` pairs of parents and produces two children per pair.
pub struct PairBreed {
    parents: ParentSelection,
    crossover: Crossover,
}

impl PairBreed {
    /// Creates a new instance of `PairBreed`.
    pub fn new(parents: ParentSelection, crossover: Crossover) -> Self {
        Self { parents, crossover }
    }
}

impl Breed for PairBreed {
    fn breed(&self, population: &[Solution], random: &dyn Random) -> GenericResult<Vec<Solution>> {
        ensure_can_breed(population)?;

        let pairs = population.len() / 2;

        let children = match self.parents {
            ParentSelection::Uniform => (0..pairs)
                .flat_map(|_| {
                    let (first, second) = (pick_uniform(population, random), pick_uniform(population, random));
                    self.crossover.apply(first, second, random)
                })
                .collect(),
            ParentSelection::FitnessProportional => {
                let weights =
                    population.iter().map(|individual| 1. / individual.fitness().max(f64::EPSILON)).collect::<Vec<_>>();

                (0..pairs)
                    .flat_map(|_| {
                        let first = &population[random.weighted(weights.as_slice())];
                        let second = &population[random.weighted(weights.as_slice())];
                        self.crossover.apply(first, second, random)
                    })
                    .collect()
            }
            ParentSelection::Dominance { bias } => {
                let mut ranked = population.iter().collect::<Vec<_>>();
                ranked.sort_by(|a, b| compare_floats(a.fitness(), b.fitness()));

                let (alpha, beta) = (ranked[0], ranked[1]);

                if ranked.len() == 2 {
                    return Ok(self.crossover.apply(alpha, beta, random).into());
                }

                let rest = &ranked[2..];

                (0..pairs)
                    .flat_map(|_| {
                        let first = if random.is_hit(bias) { alpha } else { beta };
                        let second = rest[random.uniform_int(0, rest.len() as i32 - 1) as usize];
                        self.crossover.apply(first, second, random)
                    })
                    .collect()
            }
        };

        Ok(children)
    }
}

/// Returns an error when the population has fewer than two individuals.
pub fn ensure_can_breed(population: &[Solution]) -> GenericResult<()> {
    if population.len() < 2 {
        Err(format!("population too small: breeding needs at least 2 individuals, got {}", population.len()).into())
    } else {
        Ok(())
    }
}

fn pick_uniform<'a>(population: &'a [Solution], random: &dyn Random) -> &'a Solution {
    &population[random.uniform_int(0, population.len() as i32 - 1) as usize]
}
