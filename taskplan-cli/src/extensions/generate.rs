//! Generates synthetic tasks, employees and the input matrices predicted from them.

#[cfg(test)]
#[path = "../../tests/unit/extensions/generate_test.rs"]
mod generate_test;

use rand::seq::index::sample;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use taskplan_core::models::{Employee, MAX_SCORE, Problem, Task};
use taskplan_core::objectives::Weights;
use taskplan_core::utils::{GenericResult, Random};

/// Max task category id.
pub const MAX_CATEGORY: u32 = 10;

/// Amount of categories and difficulty levels employees pick their preferences from.
const PREFERENCE_LEVELS: usize = 10;

const TASK_DIFFICULTY_MEAN: f64 = 8.;
const TASK_DIFFICULTY_STD_DEV: f64 = 8.;
const TIME_STD_DEV: f64 = 4.;
const SATISFACTION_STD_DEV: f64 = 2.;

/// Input matrices of the problem: `T`, `Z` and `p`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMatrices {
    /// Predicted time per employee and task.
    pub time: Vec<Vec<u32>>,
    /// Predicted satisfaction per employee and task.
    pub satisfaction: Vec<Vec<u32>>,
    /// Task priorities.
    pub priority: Vec<u32>,
}

impl InputMatrices {
    /// Creates a validated problem from matrices.
    pub fn create_problem(&self, budget: u32, weights: Weights) -> GenericResult<Arc<Problem>> {
        Problem::new(self.time.clone(), self.satisfaction.clone(), self.priority.clone(), budget, weights).map(Arc::new)
    }
}

/// Predicts how long it takes for the employee to finish the task: task difficulty plus
/// an absolute normal noise centered lower for experienced employees and skilled categories.
pub fn predict_time(employee: &Employee, task: &Task, random: &dyn Random) -> u32 {
    let skill_bonus = if employee.is_good_at(task) { 5. } else { 0. };
    let mean = (10. - employee.experience as f64 - skill_bonus).max(0.);

    let noise = sample_normal(mean, TIME_STD_DEV, random).abs();

    (task.difficulty as f64 + noise).round() as u32
}

/// Predicts how much the employee enjoys the task: liked category and comfortable difficulty
/// both shift the mean up.
pub fn predict_satisfaction(employee: &Employee, task: &Task, random: &dyn Random) -> u32 {
    let like_factor = employee.likes(task) as u32 + employee.is_comfortable_with(task) as u32;
    let mean = 3. + 2. * like_factor as f64;

    sample_normal(mean, SATISFACTION_STD_DEV, random).clamp(0., MAX_SCORE as f64).round() as u32
}

/// Generates tasks with normally distributed difficulty, uniform category and priority.
pub fn generate_tasks(size: usize, random: &dyn Random) -> Vec<Task> {
    (0..size)
        .map(|_| {
            let difficulty = sample_normal(TASK_DIFFICULTY_MEAN, TASK_DIFFICULTY_STD_DEV, random).max(1.) as u32;
            let category = random.uniform_int(0, MAX_CATEGORY as i32) as u32;
            let priority = random.uniform_int(0, MAX_SCORE as i32) as u32;

            Task::new(difficulty, category, priority)
        })
        .collect()
}

/// Generates employees with random preferences, skills and experience.
pub fn generate_employees(size: usize, random: &dyn Random) -> Vec<Employee> {
    (0..size).map(|_| generate_employee(random)).collect()
}

/// Predicts `T` and `Z` for every employee and task pair, takes `p` from tasks.
pub fn generate_input_matrices(employees: &[Employee], tasks: &[Task], random: &dyn Random) -> InputMatrices {
    let (time, satisfaction) = employees
        .iter()
        .map(|employee| {
            let time = tasks.iter().map(|task| predict_time(employee, task, random)).collect::<Vec<_>>();
            let satisfaction =
                tasks.iter().map(|task| predict_satisfaction(employee, task, random)).collect::<Vec<_>>();

            (time, satisfaction)
        })
        .unzip();

    InputMatrices { time, satisfaction, priority: tasks.iter().map(|task| task.priority).collect() }
}

fn generate_employee(random: &dyn Random) -> Employee {
    let liked_categories = sample_levels(random);
    let experience = random.uniform_int(1, 10) as u32;

    let difficulty = sample(&mut random.get_rng(), PREFERENCE_LEVELS, 2);
    let comfortable_difficulty = (difficulty.index(0) as u32, difficulty.index(1) as u32);

    let skilled_categories = sample_levels(random);

    Employee::new(liked_categories, experience, comfortable_difficulty, skilled_categories)
}

fn sample_levels(random: &dyn Random) -> Vec<u32> {
    let amount = random.uniform_int(0, PREFERENCE_LEVELS as i32) as usize;

    sample(&mut random.get_rng(), PREFERENCE_LEVELS, amount).into_iter().map(|level| level as u32).collect()
}

fn sample_normal(mean: f64, std_dev: f64, random: &dyn Random) -> f64 {
    Normal::new(mean, std_dev).map_or(mean, |normal| normal.sample(&mut random.get_rng()))
}
