use crate::construction::create_initial_population;
use crate::evolution::{Evolution, EvolutionConfigBuilder, Progress};
use crate::models::Problem;
use crate::objectives::Weights;
use crate::operators::{BreedType, MutateType, SelectType};
use crate::utils::Environment;
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

prop_compose! {
    fn get_problem()
    (employees in 1_usize..5, tasks in 1_usize..12)
    (
     time in prop::collection::vec(prop::collection::vec(0_u32..20, tasks), employees),
     satisfaction in prop::collection::vec(prop::collection::vec(0_u32..=10, tasks), employees),
     priority in prop::collection::vec(0_u32..=10, tasks),
     budget in 1_u32..30,
    ) -> Arc<Problem> {
        let problem = Problem::new(time, satisfaction, priority, budget, Weights::default());
        Arc::new(problem.expect("valid generated problem"))
    }
}

fn run_with_legality_check(
    problem: Arc<Problem>,
    strategies: (BreedType, MutateType, SelectType),
    population_size: usize,
    seed: u64,
) -> Vec<usize> {
    let (breed, mutate, select) = strategies;
    let environment = Environment::new_repeatable(seed);
    let population = create_initial_population(problem, population_size, environment.random.as_ref());

    let illegal_generations = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let illegal_generations = illegal_generations.clone();
        Box::new(move |progress: &Progress<'_>| {
            let is_legal = progress.best.is_legal() && progress.population.iter().all(|solution| solution.is_legal());
            if !is_legal || progress.population.len() != population_size {
                illegal_generations.lock().unwrap().push(progress.generation);
            }
        })
    };

    let config = EvolutionConfigBuilder::default()
        .with_generations(3)
        .with_breed_type(breed)
        .with_mutate_type(mutate)
        .with_select_type(select)
        .with_progress(sink)
        .build()
        .unwrap();

    Evolution::new(config).run(population, &environment).unwrap();

    illegal_generations.lock().unwrap().clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    #[test]
    fn can_keep_population_legal_with_every_strategy_combination(
        problem in get_problem(),
        population_size in 2_usize..6,
        seed in any::<u64>(),
    ) {
        for &breed in BreedType::ALL {
            for &mutate in MutateType::ALL {
                for &select in SelectType::ALL {
                    let strategies = (breed, mutate, select);
                    let illegal = run_with_legality_check(problem.clone(), strategies, population_size, seed);

                    prop_assert!(illegal.is_empty(), "{breed}/{mutate}/{select}: illegal generations {illegal:?}");
                }
            }
        }
    }
}
