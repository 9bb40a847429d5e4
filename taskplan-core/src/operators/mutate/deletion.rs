use super::for_each_hit;
use crate::models::Solution;
use crate::operators::Mutate;
use crate::utils::Random;
use std::cmp::Reverse;

/// Specifies which task of a random employee is removed by [`DeleteMutation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletePolicy {
    /// A task with the lowest satisfaction.
    LeastLiked,
    /// A task with the lowest priority.
    LowestPriority,
    /// A task which takes the most time.
    Longest,
}

/// Removes one task from a random employee according to the policy. The first task wins ties.
pub struct DeleteMutation {
    policy: DeletePolicy,
    probability: f64,
}

impl DeleteMutation {
    /// Creates a new instance of `DeleteMutation` with default probability.
    pub fn new(policy: DeletePolicy) -> Self {
        Self::new_with_probability(policy, 0.05)
    }

    /// Creates a new instance of `DeleteMutation`.
    pub fn new_with_probability(policy: DeletePolicy, probability: f64) -> Self {
        Self { policy, probability }
    }
}

impl Mutate for DeleteMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        for_each_hit(children, self.probability, random, |child| {
            let problem = child.problem().clone();
            let employee = random.uniform_int(0, problem.employees() as i32 - 1) as usize;
            let tasks = child.assignment().assigned_tasks(employee);

            let victim = match self.policy {
                DeletePolicy::LeastLiked => tasks.min_by_key(|&task| problem.satisfaction(employee, task)),
                DeletePolicy::LowestPriority => tasks.min_by_key(|&task| problem.priority(task)),
                DeletePolicy::Longest => tasks.min_by_key(|&task| Reverse(problem.time(employee, task))),
            };

            if let Some(task) = victim {
                child.assignment_mut().unassign(employee, task);
            }
        });
    }
}

/// Clears every assignment of a child with given probability.
pub struct RandomDeleteMutation {
    probability: f64,
    cell_probability: f64,
}

impl RandomDeleteMutation {
    /// Creates a new instance of `RandomDeleteMutation`.
    pub fn new(probability: f64, cell_probability: f64) -> Self {
        Self { probability, cell_probability }
    }
}

impl Default for RandomDeleteMutation {
    fn default() -> Self {
        Self::new(0.01, 0.1)
    }
}

impl Mutate for RandomDeleteMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        for_each_hit(children, self.probability, random, |child| {
            let assignment = child.assignment_mut();

            for employee in 0..assignment.employees() {
                let tasks = assignment.assigned_tasks(employee).collect::<Vec<_>>();
                tasks.into_iter().filter(|_| random.is_hit(self.cell_probability)).for_each(|task| {
                    assignment.unassign(employee, task);
                });
            }
        });
    }
}
