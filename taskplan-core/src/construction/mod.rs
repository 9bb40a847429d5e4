//! The construction module contains logic to build initial solutions from scratch.

#[cfg(test)]
#[path = "../../tests/unit/construction/construction_test.rs"]
mod construction_test;

use crate::models::{AssignmentMatrix, Problem, Solution};
use crate::utils::Random;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Builds a legal assignment greedily: tasks are shuffled once, then every employee takes
/// tasks from the front of the shared order while they fit into the remaining budget.
/// An employee's turn ends at the first task which does not fit, cheaper tasks further in
/// the order are not looked up.
pub fn construct_assignment(time: &[Vec<u32>], budget: u32, random: &dyn Random) -> AssignmentMatrix {
    let employees = time.len();
    let tasks = time.first().map_or(0, |row| row.len());

    let mut order = (0..tasks).collect::<Vec<_>>();
    order.shuffle(&mut random.get_rng());

    let mut assignment = AssignmentMatrix::new(employees, tasks);

    for (employee, row) in time.iter().enumerate() {
        let mut time_left = budget as u64;

        while let Some(&task) = order.last() {
            let cost = row[task] as u64;
            if cost > time_left {
                break;
            }

            order.pop();
            assignment.assign(employee, task);
            time_left -= cost;
        }
    }

    assignment
}

/// Creates a solution using [`construct_assignment`].
pub fn construct_solution(problem: Arc<Problem>, random: &dyn Random) -> Solution {
    let assignment = construct_assignment(problem.time_matrix(), problem.budget(), random);
    Solution::new(problem, assignment)
}

/// Creates a population of independently constructed solutions.
pub fn create_initial_population(problem: Arc<Problem>, size: usize, random: &dyn Random) -> Vec<Solution> {
    (0..size).map(|_| construct_solution(problem.clone(), random)).collect()
}
