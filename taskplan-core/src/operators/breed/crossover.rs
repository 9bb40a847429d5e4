use crate::constraints::{Capacity, clear_tasks_until_legal, repair, trim_overloaded};
use crate::models::{AssignmentMatrix, Solution};
use crate::utils::Random;
use rand::seq::SliceRandom;

/// Default probability to keep the first parent's assignment in [`Crossover::RandomDeletion`].
pub const DEFAULT_KEEP_PROBABILITY: f64 = 2. / 11.;

/// Default probability to take the second parent's assignment in [`Crossover::RandomDeletion`].
pub const DEFAULT_ADD_PROBABILITY: f64 = 5. / 11.;

/// Specifies how two parents are combined into two legal children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossover {
    /// Swaps rows of a random half of employees between parents, then repairs.
    RowSwap,
    /// Copies rows of a "happy" and a "productive" employee from the parent where the employee
    /// has more satisfaction and more work respectively, then repairs.
    ObjectiveTargeted,
    /// Adds the second parent's assignments to the first one while they stay legal.
    UnionFill,
    /// Keeps the first parent's assignments with `keep` probability and adds the second
    /// parent's ones with `add` probability while they stay legal.
    RandomDeletion {
        /// Probability to keep an assignment of the first parent.
        keep: f64,
        /// Probability to take an assignment of the second parent.
        add: f64,
    },
    /// Builds every task column from the preferred parent of each employee, then clears columns
    /// until the child is legal.
    RowInterleave,
    /// Moves random tasks of the first parent to random employees, then trims overloaded ones.
    TaskReassignment,
}

impl Crossover {
    /// Produces two children. For asymmetric crossovers the second child is built with swapped
    /// parent roles.
    pub fn apply(&self, first: &Solution, second: &Solution, random: &dyn Random) -> [Solution; 2] {
        match self {
            Crossover::RowSwap => row_swap(first, second, random),
            Crossover::ObjectiveTargeted => objective_targeted(first, second, random),
            Crossover::UnionFill => [union_fill(first, second), union_fill(second, first)],
            Crossover::RandomDeletion { keep, add } => [
                random_deletion(first, second, *keep, *add, random),
                random_deletion(second, first, *keep, *add, random),
            ],
            Crossover::RowInterleave => [row_interleave(first, second), row_interleave(second, first)],
            Crossover::TaskReassignment => [task_reassignment(first, random), task_reassignment(second, random)],
        }
    }
}

fn row_swap(first: &Solution, second: &Solution, random: &dyn Random) -> [Solution; 2] {
    let (mut child1, mut child2) = (first.offspring(), second.offspring());

    let mut employees = (0..first.problem().employees()).collect::<Vec<_>>();
    employees.shuffle(&mut random.get_rng());

    employees.iter().take(employees.len() / 2).for_each(|&employee| {
        child1.assignment_mut().swap_row_with(child2.assignment_mut(), employee);
    });

    [repaired(child1, random), repaired(child2, random)]
}

fn objective_targeted(first: &Solution, second: &Solution, random: &dyn Random) -> [Solution; 2] {
    let problem = first.problem().clone();
    let (mut child1, mut child2) = (first.offspring(), second.offspring());

    let mut employees = (0..problem.employees()).collect::<Vec<_>>();
    employees.shuffle(&mut random.get_rng());

    let happy = employees[0];
    let productive = employees.get(1).copied().unwrap_or(happy);

    let satisfaction = |solution: &Solution| -> u64 {
        solution.assignment().assigned_tasks(happy).map(|task| problem.satisfaction(happy, task) as u64).sum()
    };

    let copy_row = |winner: &Solution, loser: &mut Solution, employee: usize| {
        loser.assignment_mut().set_row(employee, winner.assignment().row(employee));
    };

    if satisfaction(first) > satisfaction(second) {
        copy_row(first, &mut child2, happy);
    } else {
        copy_row(second, &mut child1, happy);
    }

    if first.employee_load(productive) > second.employee_load(productive) {
        copy_row(first, &mut child2, productive);
    } else {
        copy_row(second, &mut child1, productive);
    }

    [repaired(child1, random), repaired(child2, random)]
}

fn union_fill(first: &Solution, second: &Solution) -> Solution {
    let problem = first.problem().clone();
    let mut child = first.offspring();
    let mut capacity = Capacity::new(problem.as_ref(), child.assignment());

    let assignment = child.assignment_mut();
    for employee in 0..problem.employees() {
        for task in second.assignment().assigned_tasks(employee) {
            capacity.try_assign(problem.as_ref(), assignment, employee, task);
        }
    }

    child
}

fn random_deletion(first: &Solution, second: &Solution, keep: f64, add: f64, random: &dyn Random) -> Solution {
    let problem = first.problem().clone();
    let mut child = first.offspring();

    {
        let assignment = child.assignment_mut();
        for employee in 0..problem.employees() {
            for task in first.assignment().assigned_tasks(employee) {
                if !random.is_hit(keep) {
                    assignment.unassign(employee, task);
                }
            }
        }
    }

    let mut capacity = Capacity::new(problem.as_ref(), child.assignment());
    let assignment = child.assignment_mut();

    for employee in 0..problem.employees() {
        for task in second.assignment().assigned_tasks(employee) {
            if !assignment.is_assigned(employee, task) && random.is_hit(add) {
                capacity.try_assign(problem.as_ref(), assignment, employee, task);
            }
        }
    }

    child
}

fn row_interleave(first: &Solution, second: &Solution) -> Solution {
    let problem = first.problem().clone();
    let (first, second) = (first.assignment(), second.assignment());
    let mut child = AssignmentMatrix::new(problem.employees(), problem.tasks());

    for task in 0..problem.tasks() {
        let mut is_assigned = false;
        let mut fallback = None;

        for employee in 0..problem.employees() {
            let (preferred, other) = if employee % 2 == 1 { (first, second) } else { (second, first) };

            if preferred.is_assigned(employee, task) && !is_assigned {
                child.assign(employee, task);
                is_assigned = true;
            } else if other.is_assigned(employee, task) {
                fallback = Some(employee);
            }
        }

        if let Some(employee) = fallback.filter(|_| !is_assigned) {
            child.assign(employee, task);
        }
    }

    clear_tasks_until_legal(problem.as_ref(), &mut child);

    Solution::new(problem, child)
}

fn task_reassignment(parent: &Solution, random: &dyn Random) -> Solution {
    let problem = parent.problem().clone();
    let mut child = parent.offspring();
    let (employees, tasks) = (problem.employees() as i32, problem.tasks() as i32);

    let assignment = child.assignment_mut();
    let moves = random.uniform_int(1, tasks);

    for _ in 0..moves {
        let removed = random.uniform_int(0, tasks - 1) as usize;
        let moved = random.uniform_int(0, tasks - 1) as usize;

        assignment.clear_task(removed);
        assignment.clear_task(moved);
        assignment.assign(random.uniform_int(0, employees - 1) as usize, moved);
    }

    trim_overloaded(problem.as_ref(), assignment);

    child
}

fn repaired(mut child: Solution, random: &dyn Random) -> Solution {
    let problem = child.problem().clone();
    repair(problem.as_ref(), child.assignment_mut(), random);

    child
}
