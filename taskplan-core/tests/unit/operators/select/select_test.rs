use super::*;
use crate::helpers::models::*;
use crate::objectives::Fitness;
use crate::operators::SelectType;

fn create_individual(total: f64, age: usize) -> Solution {
    let problem = create_uniform_problem(1, 1, 1, 1);
    let fitness = Fitness { load_imbalance: 0., priority_cost: 0., dissatisfaction: 0., unused_capacity: 0., total };

    let mut individual = create_solution(problem, vec![vec![0]]).with_fitness(fitness);
    (0..age).for_each(|_| individual.grow_older());

    individual
}

fn create_individuals(totals: &[f64]) -> Vec<Solution> {
    totals.iter().map(|&total| create_individual(total, 0)).collect()
}

fn get_totals(individuals: &[Solution]) -> Vec<f64> {
    individuals.iter().map(|individual| individual.fitness()).collect()
}

parameterized_test! {can_keep_population_size, (select, children), {
    can_keep_population_size_impl(select, children);
}}

can_keep_population_size! {
    case01_merge_no_children: (SelectType::MergeTruncate, 0),
    case02_merge_many_children: (SelectType::MergeTruncate, 9),
    case03_age_weighted_no_children: (SelectType::AgeWeighted, 0),
    case04_age_weighted_few_children: (SelectType::AgeWeighted, 2),
    case05_age_capped_no_children: (SelectType::AgeCapped, 0),
    case06_age_capped_many_children: (SelectType::AgeCapped, 12),
    case07_replace_no_children: (SelectType::ReplaceWithChildren, 0),
    case08_replace_few_children: (SelectType::ReplaceWithChildren, 3),
    case09_replace_same_children: (SelectType::ReplaceWithChildren, 5),
    case10_replace_many_children: (SelectType::ReplaceWithChildren, 8),
}

fn can_keep_population_size_impl(select: SelectType, children: usize) {
    let population = create_individuals(&[5., 3., 8., 1., 9.]);
    let children = (0..children).map(|idx| create_individual(idx as f64 + 0.5, 0)).collect();

    let next = select.create().select(population, children);

    assert_eq!(next.len(), 5);
}

#[test]
fn can_merge_and_truncate() {
    let population = create_individuals(&[5., 3., 8.]);
    let children = create_individuals(&[4., 9., 1.]);

    let next = MergeTruncate.select(population, children);

    assert_eq!(get_totals(&next), vec![1., 3., 4.]);
}

#[test]
fn can_penalize_older_individuals() {
    let population = vec![create_individual(10., 0), create_individual(20., 0)];
    let children = create_individuals(&[10.5, 30.]);

    let next = AgeWeighted.select(population, children);

    assert_eq!(get_totals(&next), vec![10.5, 10.]);
    assert_eq!(next.iter().map(|individual| individual.age()).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn can_drop_individuals_older_than_max_age() {
    let population = vec![create_individual(1., 5), create_individual(2., 0), create_individual(3., 0)];
    let children = create_individuals(&[4., 5.]);

    let next = AgeCapped::default().select(population, children);

    assert_eq!(get_totals(&next), vec![2., 3., 4.]);
}

#[test]
fn can_refill_with_best_old_individuals() {
    let population = vec![create_individual(3., 5), create_individual(1., 5), create_individual(2., 5)];
    let children = create_individuals(&[7.]);

    let next = AgeCapped::new(5).select(population, children);

    assert_eq!(get_totals(&next), vec![7., 1., 2.]);
}

#[test]
fn can_replace_population_with_children() {
    let population = create_individuals(&[1., 2., 3.]);

    let same = ReplaceWithChildren.select(population.clone(), create_individuals(&[9., 8., 7.]));
    let more = ReplaceWithChildren.select(population.clone(), create_individuals(&[9., 8., 7., 6.]));
    let fewer = ReplaceWithChildren.select(population, create_individuals(&[9.]));

    assert_eq!(get_totals(&same), vec![9., 8., 7.]);
    assert_eq!(get_totals(&more), vec![6., 7., 8.]);
    assert_eq!(get_totals(&fewer), vec![9., 1., 2.]);
}

#[test]
fn can_keep_ages_in_age_unaware_selections() {
    let population = vec![create_individual(1., 2), create_individual(2., 0)];
    let children = create_individuals(&[3.]);

    let merged = MergeTruncate.select(population.clone(), children.clone());
    let replaced = ReplaceWithChildren.select(population, children);

    assert_eq!(merged.iter().map(|individual| individual.age()).collect::<Vec<_>>(), vec![2, 0]);
    assert_eq!(replaced.iter().map(|individual| individual.age()).collect::<Vec<_>>(), vec![0, 2]);
}
