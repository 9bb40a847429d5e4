use super::*;
use crate::constraints::trim_overloaded;
use crate::operators::Mutate;
use std::sync::Arc;

/// Splits children into equal consecutive slices, one per inner mutation. Children which do
/// not fit into equal slices are left untouched.
pub struct FusionMutation {
    mutations: Vec<Arc<dyn Mutate>>,
}

impl FusionMutation {
    /// Creates a new instance of `FusionMutation`.
    pub fn new(mutations: Vec<Arc<dyn Mutate>>) -> Self {
        Self { mutations }
    }
}

impl Default for FusionMutation {
    fn default() -> Self {
        Self::new(vec![
            Arc::new(SwapMutation::default()),
            Arc::new(AddMutation::default()),
            Arc::new(DeleteMutation::new(DeletePolicy::LeastLiked)),
            Arc::new(DeleteMutation::new(DeletePolicy::Longest)),
            Arc::new(DeleteMutation::new(DeletePolicy::LowestPriority)),
        ])
    }
}

impl Mutate for FusionMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        if self.mutations.is_empty() {
            return;
        }

        let size = children.len() / self.mutations.len();
        if size == 0 {
            return;
        }

        children.chunks_mut(size).zip(self.mutations.iter()).for_each(|(slice, mutation)| {
            mutation.mutate(slice, random);
        });
    }
}

/// Performs random moves across all children: a random task of a random child is given to a
/// random employee. Amount of moves is drawn from `[1, tasks)`. Afterwards, overloaded
/// employees of every child drop their cheapest tasks.
pub struct ReassignMutation;

impl Mutate for ReassignMutation {
    fn mutate(&self, children: &mut [Solution], random: &dyn Random) {
        let Some(problem) = children.first().map(|child| child.problem().clone()) else {
            return;
        };

        let last_child = children.len() as i32 - 1;
        let last_employee = problem.employees() as i32 - 1;
        let last_task = problem.tasks() as i32 - 1;

        let moves = random.uniform_int(1, last_task.max(1));

        for _ in 0..moves {
            let child = &mut children[random.uniform_int(0, last_child) as usize];
            let employee = random.uniform_int(0, last_employee) as usize;
            let task = random.uniform_int(0, last_task) as usize;

            let assignment = child.assignment_mut();
            assignment.clear_task(task);
            assignment.assign(employee, task);
        }

        children.iter_mut().for_each(|child| trim_overloaded(problem.as_ref(), child.assignment_mut()));
    }
}
