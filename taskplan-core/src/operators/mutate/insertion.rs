use super::for_each_hit;
use crate::constraints::{Capacity, repair};
use crate::models::Solution;
use crate::operators::Mutate;
use crate::utils::Random;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

/// Picks one random unassigned task and gives it to the first employee, in shuffled order,
/// who can take it.
pub struct AddMutation {
    probability: f64,
}

impl AddMutation {
    /// Creates a new instance of `AddMutation`.
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Default for AddMutation {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl Mutate for AddMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        for_each_hit(children, self.probability, random, |child| {
            let problem = child.problem().clone();

            let Some(&task) = child.assignment().unassigned_tasks().choose(&mut random.get_rng()) else {
                return;
            };

            let mut employees = (0..problem.employees()).collect::<Vec<_>>();
            employees.shuffle(&mut random.get_rng());

            let mut capacity = Capacity::new(problem.as_ref(), child.assignment());
            let assignment = child.assignment_mut();
            for employee in employees {
                if capacity.try_assign(problem.as_ref(), assignment, employee, task) {
                    break;
                }
            }
        });
    }
}

/// Offers every unassigned task to one random employee, keeps the assignment only when
/// it is legal.
pub struct BackfillMutation {
    attempts: usize,
}

impl BackfillMutation {
    /// Creates a new instance of `BackfillMutation` with amount of random employees tried per task.
    pub fn new(attempts: usize) -> Self {
        Self { attempts: attempts.max(1) }
    }
}

impl Default for BackfillMutation {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Mutate for BackfillMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        children.iter_mut().for_each(|child| {
            let problem = child.problem().clone();
            let unassigned = child.assignment().unassigned_tasks();
            if unassigned.is_empty() {
                return;
            }

            let mut capacity = Capacity::new(problem.as_ref(), child.assignment());
            let assignment = child.assignment_mut();
            let last_employee = problem.employees() as i32 - 1;

            for task in unassigned {
                for _ in 0..self.attempts {
                    let employee = random.uniform_int(0, last_employee) as usize;
                    if capacity.try_assign(problem.as_ref(), assignment, employee, task) {
                        break;
                    }
                }
            }
        });
    }
}

/// Forces every employee to take its most satisfying task, then repairs the child.
pub struct GreedyAssignMutation {
    probability: f64,
}

impl GreedyAssignMutation {
    /// Creates a new instance of `GreedyAssignMutation`.
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Default for GreedyAssignMutation {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Mutate for GreedyAssignMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        for_each_hit(children, self.probability, random, |child| {
            let problem = child.problem().clone();
            let assignment = child.assignment_mut();

            for employee in 0..problem.employees() {
                let favorite = (0..problem.tasks()).min_by_key(|&task| Reverse(problem.satisfaction(employee, task)));

                if let Some(task) = favorite {
                    assignment.assign(employee, task);
                }
            }

            repair(problem.as_ref(), assignment, random);
        });
    }
}
