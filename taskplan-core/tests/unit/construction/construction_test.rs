use super::*;
use crate::helpers::models::*;
use crate::utils::{DefaultRandom, Random};
use rand::seq::SliceRandom;

#[test]
fn can_assign_exactly_one_of_two_tasks_when_budget_fits_one() {
    let problem = create_test_problem(vec![vec![5, 5]], vec![vec![1, 1]], vec![1, 1], 5);

    (0..50).for_each(|seed| {
        let solution = construct_solution(problem.clone(), &DefaultRandom::new_repeatable(seed));

        assert!(solution.is_legal());
        assert_eq!(solution.assignment().assignments(), 1, "seed {seed}");
    });
}

#[test]
fn can_stop_employee_turn_at_first_unaffordable_task() {
    let time = vec![vec![1, 5, 1]];
    let mut counts = [0_usize; 3];

    (0..100).for_each(|seed| {
        let mut order = vec![0_usize, 1, 2];
        order.shuffle(&mut DefaultRandom::new_repeatable(seed).get_rng());
        // tasks are taken from the back of the shuffled order until the expensive one
        let expected = order.iter().rev().take_while(|&&task| task != 1).count();

        let assignment = construct_assignment(time.as_slice(), 2, &DefaultRandom::new_repeatable(seed));

        assert_eq!(assignment.assignments(), expected, "seed {seed}");
        assert!(!assignment.is_assigned(0, 1));
        counts[expected] += 1;
    });

    assert!(counts.iter().all(|&count| count > 0), "{counts:?}");
}

#[test]
fn can_pass_unaffordable_tasks_to_next_employee() {
    let time = vec![vec![10, 10, 10], vec![1, 1, 1]];

    let assignment = construct_assignment(time.as_slice(), 5, &DefaultRandom::new_repeatable(0));

    assert_eq!(assignment.assigned_tasks(0).count(), 0);
    assert_eq!(assignment.assigned_tasks(1).count(), 3);
}

#[test]
fn can_take_zero_cost_tasks_with_exhausted_budget() {
    let time = vec![vec![0, 0, 0]];

    let assignment = construct_assignment(time.as_slice(), 0, &DefaultRandom::new_repeatable(0));

    assert_eq!(assignment.assignments(), 3);
}

#[test]
fn can_build_legal_solutions_for_random_problems() {
    let random = DefaultRandom::new_repeatable(11);

    (0..20).for_each(|idx| {
        let problem = create_random_problem(1 + idx % 5, 1 + idx * 3, 10 + idx as u32, &random);

        let solution = construct_solution(problem, &random);

        assert!(solution.is_legal());
    });
}

#[test]
fn can_create_initial_population() {
    let problem = create_default_problem();
    let random = DefaultRandom::new_repeatable(0);

    let population = create_initial_population(problem, 5, &random);

    assert_eq!(population.len(), 5);
    assert!(population.iter().all(|solution| solution.is_legal() && solution.age() == 0));
}
