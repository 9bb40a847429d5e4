#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::constraints::is_legal;
use crate::models::{AssignmentMatrix, Problem};
use crate::objectives::{Fitness, evaluate};
use crate::utils::GenericResult;
use std::cell::OnceCell;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A candidate solution: an assignment matrix with lazily evaluated fitness and age.
///
/// Fitness is cached on first access and dropped whenever the assignment is changed through
/// [`Solution::assignment_mut`].
#[derive(Clone, Debug)]
pub struct Solution {
    problem: Arc<Problem>,
    assignment: AssignmentMatrix,
    age: usize,
    fitness: OnceCell<Fitness>,
}

impl Solution {
    /// Creates a new solution with zero age. The assignment must have the problem's shape.
    pub fn new(problem: Arc<Problem>, assignment: AssignmentMatrix) -> Self {
        debug_assert!(assignment.has_shape(problem.employees(), problem.tasks()));
        Self { problem, assignment, age: 0, fitness: OnceCell::new() }
    }

    /// Creates a new solution from an externally provided assignment, checking its shape.
    pub fn from_assignment(problem: Arc<Problem>, assignment: AssignmentMatrix) -> GenericResult<Self> {
        if !assignment.has_shape(problem.employees(), problem.tasks()) {
            return Err(format!(
                "assignment has shape {}x{}, expected {}x{}",
                assignment.employees(),
                assignment.tasks(),
                problem.employees(),
                problem.tasks()
            )
            .into());
        }

        Ok(Self::new(problem, assignment))
    }

    /// Creates an offspring which starts with a copy of this solution's assignment.
    pub fn offspring(&self) -> Self {
        Self::new(self.problem.clone(), self.assignment.clone())
    }

    /// Primes cached fitness with already known value.
    pub fn with_fitness(self, fitness: Fitness) -> Self {
        Self { fitness: OnceCell::from(fitness), ..self }
    }

    /// Returns the shared problem context.
    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    /// Returns assignment matrix.
    pub fn assignment(&self) -> &AssignmentMatrix {
        &self.assignment
    }

    /// Returns mutable assignment matrix, invalidates cached fitness.
    pub fn assignment_mut(&mut self) -> &mut AssignmentMatrix {
        self.fitness.take();
        &mut self.assignment
    }

    /// Consumes the solution returning its assignment.
    pub fn into_assignment(self) -> AssignmentMatrix {
        self.assignment
    }

    /// Returns amount of generations this solution has survived.
    pub fn age(&self) -> usize {
        self.age
    }

    /// Increments the age.
    pub fn grow_older(&mut self) {
        self.age += 1;
    }

    /// Returns scalar fitness value, lower is better.
    pub fn fitness(&self) -> f64 {
        self.objectives().total
    }

    /// Returns all objective components.
    pub fn objectives(&self) -> &Fitness {
        self.fitness.get_or_init(|| evaluate(self.problem.as_ref(), &self.assignment))
    }

    /// Checks whether budget and single assignee constraints hold.
    pub fn is_legal(&self) -> bool {
        is_legal(self.problem.as_ref(), &self.assignment)
    }

    /// Returns time spent by the employee on assigned tasks.
    pub fn employee_load(&self, employee: usize) -> u64 {
        self.assignment.assigned_tasks(employee).map(|task| self.problem.time(employee, task) as u64).sum()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "fitness: {}, age: {}", self.objectives(), self.age)?;
        self.assignment.rows().iter().try_for_each(|row| {
            let cells = row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>().join(",");
            writeln!(f, "[{cells}]")
        })
    }
}
