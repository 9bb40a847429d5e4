#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::MAX_SCORE;
use crate::objectives::Weights;
use crate::utils::GenericResult;

/// An immutable problem context: the time matrix `T`, the satisfaction matrix `Z`, the
/// priority vector `p`, the per employee time budget `L` and objective weights.
///
/// It is built once, validated and shared by reference between the constructive solver,
/// every operator and the evolution loop.
#[derive(Clone, Debug)]
pub struct Problem {
    time: Vec<Vec<u32>>,
    satisfaction: Vec<Vec<u32>>,
    priority: Vec<u32>,
    budget: u32,
    weights: Weights,
}

impl Problem {
    /// Creates a new problem validating input dimensions and value ranges.
    pub fn new(
        time: Vec<Vec<u32>>,
        satisfaction: Vec<Vec<u32>>,
        priority: Vec<u32>,
        budget: u32,
        weights: Weights,
    ) -> GenericResult<Self> {
        let tasks = priority.len();

        if time.is_empty() {
            return Err("problem has no employees".into());
        }

        if tasks == 0 {
            return Err("problem has no tasks".into());
        }

        if budget == 0 {
            return Err("time budget must be a positive integer".into());
        }

        if satisfaction.len() != time.len() {
            return Err(format!(
                "satisfaction matrix has {} employees, time matrix has {}",
                satisfaction.len(),
                time.len()
            )
            .into());
        }

        for (employee, (time_row, satisfaction_row)) in time.iter().zip(satisfaction.iter()).enumerate() {
            if time_row.len() != tasks || satisfaction_row.len() != tasks {
                let err = format!("employee {employee} has a row of unexpected length, expected {tasks} tasks");
                return Err(err.into());
            }

            if let Some(task) = satisfaction_row.iter().position(|&value| value > MAX_SCORE) {
                let err = format!("satisfaction of employee {employee} for task {task} is out of [0, 10] range");
                return Err(err.into());
            }
        }

        if let Some(task) = priority.iter().position(|&value| value > MAX_SCORE) {
            return Err(format!("priority of task {task} is out of [0, 10] range").into());
        }

        weights.validate()?;

        Ok(Self { time, satisfaction, priority, budget, weights })
    }

    /// Returns amount of employees.
    pub fn employees(&self) -> usize {
        self.time.len()
    }

    /// Returns amount of tasks.
    pub fn tasks(&self) -> usize {
        self.priority.len()
    }

    /// Returns time the employee needs for the task.
    pub fn time(&self, employee: usize, task: usize) -> u32 {
        self.time[employee][task]
    }

    /// Returns predicted satisfaction of the employee doing the task.
    pub fn satisfaction(&self, employee: usize, task: usize) -> u32 {
        self.satisfaction[employee][task]
    }

    /// Returns the task priority.
    pub fn priority(&self, task: usize) -> u32 {
        self.priority[task]
    }

    /// Returns per employee time budget.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Returns objective weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Returns the whole time matrix.
    pub fn time_matrix(&self) -> &[Vec<u32>] {
        self.time.as_slice()
    }
}
