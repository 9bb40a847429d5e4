//! Specifies objective functions and their scalarization into a single fitness value.

#[cfg(test)]
#[path = "../../tests/unit/objectives/objectives_test.rs"]
mod objectives_test;

use crate::models::{AssignmentMatrix, MAX_SCORE, Problem};
use crate::utils::GenericResult;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Weights of the objective components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    /// Weight of load imbalance (`f1`).
    pub alpha: f64,
    /// Weight of time spent on low priority tasks (`f2`).
    pub beta: f64,
    /// Weight of inverse satisfaction (`f3`).
    pub gamma: f64,
    /// Weight of unused capacity (`f4`).
    pub delta: f64,
}

impl Weights {
    /// Creates a new instance of `Weights`.
    pub fn new(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Self {
        Self { alpha, beta, gamma, delta }
    }

    /// Checks that all weights are finite and non-negative.
    pub fn validate(&self) -> GenericResult<()> {
        [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma), ("delta", self.delta)]
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.)
            .map_or(Ok(()), |(name, value)| Err(format!("weight {name} must be non-negative, got {value}").into()))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self { alpha: 10., beta: 1., gamma: 100., delta: 10. }
    }
}

/// Objective components of a solution together with their weighted sum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fitness {
    /// `f1`: difference between the most and the least loaded employee.
    pub load_imbalance: f64,
    /// `f2`: time spent weighted by inverted task priority.
    pub priority_cost: f64,
    /// `f3`: inverse of aggregated satisfaction.
    pub dissatisfaction: f64,
    /// `f4`: total unused time budget.
    pub unused_capacity: f64,
    /// `F`: weighted sum of all components, lower is better.
    pub total: f64,
}

impl Fitness {
    /// Returns components in `[f1, f2, f3, f4, F]` order.
    pub fn values(&self) -> [f64; 5] {
        [self.load_imbalance, self.priority_cost, self.dissatisfaction, self.unused_capacity, self.total]
    }
}

impl Display for Fitness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} (f1={:.3}, f2={:.3}, f3={:.5}, f4={:.3})",
            self.total, self.load_imbalance, self.priority_cost, self.dissatisfaction, self.unused_capacity
        )
    }
}

/// Evaluates all objectives of the assignment.
pub fn evaluate(problem: &Problem, assignment: &AssignmentMatrix) -> Fitness {
    let budget = problem.budget() as f64;
    let priority_cap = (MAX_SCORE + 1) as f64;

    let (loads, priority_cost, satisfaction_sum) = (0..problem.employees()).fold(
        (Vec::with_capacity(problem.employees()), 0., 0.),
        |(mut loads, priority_cost, satisfaction_sum), employee| {
            let (load, cost, satisfaction) = assignment.assigned_tasks(employee).fold(
                (0., 0., 0.),
                |(load, cost, satisfaction), task| {
                    let time = problem.time(employee, task) as f64;
                    (
                        load + time,
                        cost + time * (priority_cap - problem.priority(task) as f64),
                        satisfaction + problem.satisfaction(employee, task) as f64,
                    )
                },
            );

            loads.push(load);

            (loads, priority_cost + cost, satisfaction_sum + f64::sqrt(satisfaction))
        },
    );

    let max_load = loads.iter().copied().fold(f64::MIN, f64::max);
    let min_load = loads.iter().copied().fold(f64::MAX, f64::min);

    let load_imbalance = if loads.is_empty() { 0. } else { max_load - min_load };
    let dissatisfaction = 1. / (1. + satisfaction_sum);
    let unused_capacity = loads.iter().map(|load| budget - load).sum::<f64>();

    let weights = problem.weights();
    let total = weights.alpha * load_imbalance
        + weights.beta * priority_cost
        + weights.gamma * dissatisfaction
        + weights.delta * unused_capacity;

    Fitness { load_imbalance, priority_cost, dissatisfaction, unused_capacity, total }
}
