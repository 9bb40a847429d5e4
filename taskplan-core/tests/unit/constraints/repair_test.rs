use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

#[test]
fn can_keep_randomly_selected_assignee() {
    let mut assignment = AssignmentMatrix::from_rows(vec![vec![1, 1], vec![1, 0], vec![1, 0]]).unwrap();

    resolve_duplicates(&mut assignment, &FakeRandom::new(vec![2], vec![]));

    assert_eq!(assignment.rows(), &[vec![0, 1], vec![0, 0], vec![1, 0]]);
}

#[test]
fn can_trim_cheapest_tasks_first() {
    let problem = create_test_problem(vec![vec![1, 2, 3], vec![1, 1, 1]], vec![vec![0; 3]; 2], vec![0; 3], 4);
    let mut assignment = AssignmentMatrix::from_rows(vec![vec![1, 1, 1], vec![0, 0, 0]]).unwrap();

    trim_overloaded(problem.as_ref(), &mut assignment);

    assert_eq!(assignment.rows(), &[vec![0, 0, 1], vec![0, 0, 0]]);
}

#[test]
fn can_backfill_by_descending_priority() {
    let problem = create_test_problem(vec![vec![3, 3, 3], vec![3, 3, 3]], vec![vec![0; 3]; 2], vec![1, 10, 5], 5);
    let mut assignment = AssignmentMatrix::new(2, 3);

    backfill_by_priority(problem.as_ref(), &mut assignment);

    assert_eq!(assignment.rows(), &[vec![0, 1, 0], vec![0, 0, 1]]);
}

#[test]
fn can_repair_duplicates_and_overload() {
    let problem = create_test_problem(vec![vec![3, 3, 3], vec![3, 3, 3]], vec![vec![0; 3]; 2], vec![1, 10, 5], 6);
    let mut assignment = AssignmentMatrix::from_rows(vec![vec![1, 1, 1], vec![1, 1, 1]]).unwrap();

    repair(problem.as_ref(), &mut assignment, &DefaultRandom::new_repeatable(0));

    assert!(is_legal(problem.as_ref(), &assignment));
    assert_eq!(assignment.unassigned_tasks(), Vec::<usize>::new());
}

#[test]
fn can_clear_columns_until_legal() {
    let problem = create_test_problem(vec![vec![3, 3, 3], vec![3, 3, 3]], vec![vec![0; 3]; 2], vec![0; 3], 6);
    let mut assignment = AssignmentMatrix::from_rows(vec![vec![1, 1, 1], vec![0, 0, 0]]).unwrap();

    clear_tasks_until_legal(problem.as_ref(), &mut assignment);

    assert_eq!(assignment.rows(), &[vec![0, 1, 1], vec![0, 0, 0]]);
}

#[test]
fn can_repair_idempotently() {
    let random = DefaultRandom::new_repeatable(3);

    (0..50).for_each(|idx| {
        let problem = create_random_problem(1 + idx % 4, 2 + idx % 7, 15, &random);
        let rows = (0..problem.employees())
            .map(|_| (0..problem.tasks()).map(|_| random.uniform_int(0, 1) as u8).collect())
            .collect();
        let mut assignment = AssignmentMatrix::from_rows(rows).unwrap();

        repair(problem.as_ref(), &mut assignment, &random);
        let repaired = assignment.clone();
        repair(problem.as_ref(), &mut assignment, &random);

        assert!(is_legal(problem.as_ref(), &assignment));
        assert_eq!(assignment, repaired);
    });
}
