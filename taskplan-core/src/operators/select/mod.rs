//! Select strategies. Each of them returns exactly as many individuals as the current
//! population has, regardless of the amount of children.

#[cfg(test)]
#[path = "../../../tests/unit/operators/select/select_test.rs"]
mod select_test;

use super::Select;
use crate::models::Solution;
use crate::utils::compare_floats;

/// Default max age which an individual can reach in [`AgeCapped`] selection.
pub const DEFAULT_MAX_AGE: usize = 5;

/// Merges population and children and keeps the fittest.
pub struct MergeTruncate;

impl Select for MergeTruncate {
    fn select(&self, population: Vec<Solution>, children: Vec<Solution>) -> Vec<Solution> {
        let size = population.len();
        let mut individuals = population.into_iter().chain(children).collect::<Vec<_>>();

        sort_by_key(&mut individuals, Solution::fitness);
        individuals.truncate(size);

        individuals
    }
}

/// Ages the population, then keeps the individuals with the lowest age penalized fitness:
/// `F * (10 + age) / 10`.
pub struct AgeWeighted;

impl Select for AgeWeighted {
    fn select(&self, mut population: Vec<Solution>, children: Vec<Solution>) -> Vec<Solution> {
        let size = population.len();
        population.iter_mut().for_each(Solution::grow_older);

        let mut individuals = population.into_iter().chain(children).collect::<Vec<_>>();

        sort_by_key(&mut individuals, |individual| individual.fitness() * ((10 + individual.age()) as f64 / 10.));
        individuals.truncate(size);

        individuals
    }
}

/// Ages the population and drops individuals older than max age, then keeps the fittest.
/// When too few individuals are young enough, the best of the old ones fill the gap.
pub struct AgeCapped {
    max_age: usize,
}

impl AgeCapped {
    /// Creates a new instance of `AgeCapped`.
    pub fn new(max_age: usize) -> Self {
        Self { max_age }
    }
}

impl Default for AgeCapped {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE)
    }
}

impl Select for AgeCapped {
    fn select(&self, mut population: Vec<Solution>, children: Vec<Solution>) -> Vec<Solution> {
        let size = population.len();
        population.iter_mut().for_each(Solution::grow_older);

        let (mut young, mut old): (Vec<_>, Vec<_>) =
            population.into_iter().chain(children).partition(|individual| individual.age() <= self.max_age);

        sort_by_key(&mut young, Solution::fitness);
        young.truncate(size);

        if young.len() < size {
            sort_by_key(&mut old, Solution::fitness);
            let missing = size - young.len();
            young.extend(old.into_iter().take(missing));
        }

        young
    }
}

/// Children replace the population. When the amounts differ, the fittest children are kept or
/// the fittest parents fill the gap.
pub struct ReplaceWithChildren;

impl Select for ReplaceWithChildren {
    fn select(&self, mut population: Vec<Solution>, mut children: Vec<Solution>) -> Vec<Solution> {
        let size = population.len();
        if children.len() == size {
            return children;
        }

        sort_by_key(&mut children, Solution::fitness);
        children.truncate(size);

        if children.len() < size {
            sort_by_key(&mut population, Solution::fitness);
            let missing = size - children.len();
            children.extend(population.into_iter().take(missing));
        }

        children
    }
}

fn sort_by_key<F>(individuals: &mut [Solution], key: F)
where
    F: Fn(&Solution) -> f64,
{
    individuals.sort_by(|a, b| compare_floats(key(a), key(b)));
}
