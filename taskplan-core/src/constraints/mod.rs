//! The constraints module contains the legality check and the logic which restores legality
//! of assignments produced by operators.

#[cfg(test)]
#[path = "../../tests/unit/constraints/legality_test.rs"]
mod legality_test;

mod repair;
pub use self::repair::*;

use crate::models::{AssignmentMatrix, Problem};

/// Checks that every cell is binary, every employee stays within the time budget and every
/// task has at most one assignee.
pub fn is_legal(problem: &Problem, assignment: &AssignmentMatrix) -> bool {
    if !assignment.has_shape(problem.employees(), problem.tasks()) {
        return false;
    }

    let budget = problem.budget() as u64;

    let is_within_budget = (0..problem.employees()).all(|employee| {
        let mut load = 0_u64;
        for task in 0..problem.tasks() {
            let cell = assignment.cell(employee, task);
            if cell > 1 {
                return false;
            }

            load += problem.time(employee, task) as u64 * cell as u64;
        }

        load <= budget
    });

    is_within_budget && (0..problem.tasks()).all(|task| assignment.assignees(task).nth(1).is_none())
}

/// Returns time spent by the employee on assigned tasks.
pub fn employee_load(problem: &Problem, assignment: &AssignmentMatrix, employee: usize) -> u64 {
    assignment.assigned_tasks(employee).map(|task| problem.time(employee, task) as u64).sum()
}

/// Returns time spent by every employee.
pub fn employee_loads(problem: &Problem, assignment: &AssignmentMatrix) -> Vec<u64> {
    (0..assignment.employees()).map(|employee| employee_load(problem, assignment, employee)).collect()
}

/// Tracks employee loads and task coverage of a legal assignment, so that many single cell
/// insertions can be checked without rescanning the matrix.
pub struct Capacity {
    budget: u64,
    loads: Vec<u64>,
    covered: Vec<bool>,
}

impl Capacity {
    /// Creates a new instance of `Capacity` from the current state of the assignment.
    pub fn new(problem: &Problem, assignment: &AssignmentMatrix) -> Self {
        Self {
            budget: problem.budget() as u64,
            loads: employee_loads(problem, assignment),
            covered: (0..assignment.tasks()).map(|task| assignment.is_task_assigned(task)).collect(),
        }
    }

    /// Checks whether the task is free and fits into the employee's remaining budget.
    pub fn can_assign(&self, problem: &Problem, employee: usize, task: usize) -> bool {
        !self.covered[task] && self.loads[employee] + problem.time(employee, task) as u64 <= self.budget
    }

    /// Assigns the task if [`Capacity::can_assign`] allows it, returns whether it was assigned.
    pub fn try_assign(
        &mut self,
        problem: &Problem,
        assignment: &mut AssignmentMatrix,
        employee: usize,
        task: usize,
    ) -> bool {
        if !self.can_assign(problem, employee, task) {
            return false;
        }

        assignment.assign(employee, task);
        self.loads[employee] += problem.time(employee, task) as u64;
        self.covered[task] = true;

        true
    }
}
