use crate::constraints::{is_legal, repair};
use crate::construction::construct_assignment;
use crate::models::{AssignmentMatrix, Problem};
use crate::objectives::Weights;
use crate::utils::DefaultRandom;
use proptest::prelude::*;

prop_compose! {
    fn get_problem_with_assignment()
    (employees in 1_usize..6, tasks in 1_usize..16)
    (
     time in prop::collection::vec(prop::collection::vec(0_u32..25, tasks), employees),
     satisfaction in prop::collection::vec(prop::collection::vec(0_u32..=10, tasks), employees),
     priority in prop::collection::vec(0_u32..=10, tasks),
     cells in prop::collection::vec(prop::collection::vec(0_u8..=1, tasks), employees),
     budget in 1_u32..40,
    ) -> (Problem, AssignmentMatrix) {
        let problem = Problem::new(time, satisfaction, priority, budget, Weights::default()).expect("valid problem");

        (problem, AssignmentMatrix::from_rows(cells).expect("rectangular rows"))
    }
}

proptest! {
    #[test]
    fn can_repair_any_assignment_idempotently(
        (problem, assignment) in get_problem_with_assignment(),
        seed in any::<u64>(),
    ) {
        let random = DefaultRandom::new_repeatable(seed);
        let mut assignment = assignment;

        repair(&problem, &mut assignment, &random);
        let repaired = assignment.clone();
        repair(&problem, &mut assignment, &random);

        prop_assert!(is_legal(&problem, &assignment));
        prop_assert_eq!(assignment, repaired);
    }

    #[test]
    fn can_construct_legal_assignment(
        time in prop::collection::vec(prop::collection::vec(0_u32..50, 1..20), 1..6),
        budget in 0_u32..60,
        seed in any::<u64>(),
    ) {
        let tasks = time[0].len();
        let time = time.into_iter().map(|row| row.into_iter().cycle().take(tasks).collect()).collect::<Vec<Vec<_>>>();

        let assignment = construct_assignment(time.as_slice(), budget, &DefaultRandom::new_repeatable(seed));

        prop_assert!(assignment.has_shape(time.len(), tasks));
        prop_assert!((0..tasks).all(|task| assignment.assignees(task).count() <= 1));
        let is_within_budget = time.iter().enumerate().all(|(employee, row)| {
            assignment.assigned_tasks(employee).map(|task| row[task] as u64).sum::<u64>() <= budget as u64
        });
        prop_assert!(is_within_budget, "assignment exceeds budget {}", budget);
    }
}
