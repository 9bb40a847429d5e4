#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

/// A binary employee x task matrix: a non-zero cell means that the employee does the task.
///
/// Cells are kept as raw bytes, so data loaded from outside can be range checked by the
/// legality check instead of being silently coerced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentMatrix {
    rows: Vec<Vec<u8>>,
}

impl AssignmentMatrix {
    /// Creates an empty assignment of given shape.
    pub fn new(employees: usize, tasks: usize) -> Self {
        Self { rows: vec![vec![0; tasks]; employees] }
    }

    /// Creates an assignment from nested rows, fails if rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> GenericResult<Self> {
        let tasks = rows.first().map_or(0, |row| row.len());

        if let Some(idx) = rows.iter().position(|row| row.len() != tasks) {
            return Err(format!("assignment row {idx} has {} tasks, expected {tasks}", rows[idx].len()).into());
        }

        Ok(Self { rows })
    }

    /// Returns amount of employees (rows).
    pub fn employees(&self) -> usize {
        self.rows.len()
    }

    /// Returns amount of tasks (columns).
    pub fn tasks(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Checks whether matrix has given shape.
    pub fn has_shape(&self, employees: usize, tasks: usize) -> bool {
        self.rows.len() == employees && self.rows.iter().all(|row| row.len() == tasks)
    }

    /// Returns raw rows.
    pub fn rows(&self) -> &[Vec<u8>] {
        self.rows.as_slice()
    }

    /// Returns a raw cell value.
    pub fn cell(&self, employee: usize, task: usize) -> u8 {
        self.rows[employee][task]
    }

    /// Checks whether the employee does the task.
    pub fn is_assigned(&self, employee: usize, task: usize) -> bool {
        self.rows[employee][task] != 0
    }

    /// Assigns or unassigns the task to the employee.
    pub fn set(&mut self, employee: usize, task: usize, is_assigned: bool) {
        self.rows[employee][task] = u8::from(is_assigned);
    }

    /// Assigns the task to the employee.
    pub fn assign(&mut self, employee: usize, task: usize) {
        self.set(employee, task, true);
    }

    /// Removes the task from the employee.
    pub fn unassign(&mut self, employee: usize, task: usize) {
        self.set(employee, task, false);
    }

    /// Returns the employee's row.
    pub fn row(&self, employee: usize) -> &[u8] {
        self.rows[employee].as_slice()
    }

    /// Replaces the employee's row with a copy of given one.
    pub fn set_row(&mut self, employee: usize, row: &[u8]) {
        self.rows[employee].copy_from_slice(row);
    }

    /// Exchanges the employee's rows between two matrices.
    pub fn swap_row_with(&mut self, other: &mut AssignmentMatrix, employee: usize) {
        std::mem::swap(&mut self.rows[employee], &mut other.rows[employee]);
    }

    /// Returns all employees assigned to the task.
    pub fn assignees(&self, task: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().enumerate().filter(move |(_, row)| row[task] != 0).map(|(employee, _)| employee)
    }

    /// Returns first employee assigned to the task, if any.
    pub fn assignee(&self, task: usize) -> Option<usize> {
        self.assignees(task).next()
    }

    /// Checks whether the task is assigned to anyone.
    pub fn is_task_assigned(&self, task: usize) -> bool {
        self.rows.iter().any(|row| row[task] != 0)
    }

    /// Returns tasks nobody is assigned to.
    pub fn unassigned_tasks(&self) -> Vec<usize> {
        (0..self.tasks()).filter(|&task| !self.is_task_assigned(task)).collect()
    }

    /// Returns tasks assigned to the employee.
    pub fn assigned_tasks(&self, employee: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[employee].iter().enumerate().filter(|(_, cell)| **cell != 0).map(|(task, _)| task)
    }

    /// Removes the task from every employee.
    pub fn clear_task(&mut self, task: usize) {
        self.rows.iter_mut().for_each(|row| row[task] = 0);
    }

    /// Exchanges two task columns.
    pub fn swap_tasks(&mut self, first: usize, second: usize) {
        self.rows.iter_mut().for_each(|row| row.swap(first, second));
    }

    /// Returns total amount of non-zero cells.
    pub fn assignments(&self) -> usize {
        self.rows.iter().flat_map(|row| row.iter()).filter(|cell| **cell != 0).count()
    }
}
