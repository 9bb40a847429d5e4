use super::for_each_hit;
use crate::constraints::is_legal;
use crate::models::Solution;
use crate::operators::Mutate;
use crate::utils::Random;

/// Swaps whole task columns: the employee of one task takes the other one and vice versa.
/// The first legal swap is kept, illegal ones are reverted. A child gets `max(1, tasks / 50)`
/// attempts.
pub struct SwapMutation {
    probability: f64,
}

impl SwapMutation {
    /// Creates a new instance of `SwapMutation`.
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Default for SwapMutation {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl Mutate for SwapMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        for_each_hit(children, self.probability, random, |child| {
            let problem = child.problem().clone();
            let tasks = problem.tasks();
            if tasks < 2 {
                return;
            }

            let attempts = (tasks / 50).max(1);

            for _ in 0..attempts {
                let first = random.uniform_int(0, tasks as i32 - 1) as usize;
                let second = (first + random.uniform_int(1, tasks as i32 - 1) as usize) % tasks;

                child.assignment_mut().swap_tasks(first, second);

                if is_legal(problem.as_ref(), child.assignment()) {
                    break;
                }

                child.assignment_mut().swap_tasks(first, second);
            }
        });
    }
}

/// Moves a random task to the next employee (cyclically), reverts the move when it breaks
/// legality. Unassigned tasks are left as is.
pub struct RotateMutation;

impl Mutate for RotateMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        children.iter_mut().for_each(|child| {
            let problem = child.problem().clone();
            let task = random.uniform_int(0, problem.tasks() as i32 - 1) as usize;

            let Some(current) = child.assignment().assignee(task) else {
                return;
            };

            let next = (current + 1) % problem.employees();
            if next == current {
                return;
            }

            let assignment = child.assignment_mut();
            assignment.unassign(current, task);
            assignment.assign(next, task);

            if !is_legal(problem.as_ref(), assignment) {
                assignment.unassign(next, task);
                assignment.assign(current, task);
            }
        });
    }
}
