#[cfg(test)]
#[path = "../../tests/unit/constraints/repair_test.rs"]
mod repair_test;

use super::*;
use crate::utils::Random;

/// Restores legality of the assignment:
/// - every task with multiple assignees keeps one randomly chosen assignee;
/// - employees over budget drop their cheapest tasks, see [`trim_overloaded`];
/// - unassigned tasks are offered, in descending priority order, to employees in index order
///   and taken by the first one who has enough budget left.
///
/// Not every task is guaranteed to be covered. Applying repair to its own output changes nothing.
pub fn repair(problem: &Problem, assignment: &mut AssignmentMatrix, random: &dyn Random) {
    resolve_duplicates(assignment, random);
    trim_overloaded(problem, assignment);
    backfill_by_priority(problem, assignment);
}

/// Keeps exactly one randomly selected assignee for every task assigned more than once.
pub fn resolve_duplicates(assignment: &mut AssignmentMatrix, random: &dyn Random) {
    for task in 0..assignment.tasks() {
        let assignees = assignment.assignees(task).collect::<Vec<_>>();
        if assignees.len() < 2 {
            continue;
        }

        let keep = assignees[random.uniform_int(0, assignees.len() as i32 - 1) as usize];
        assignees.into_iter().filter(|&employee| employee != keep).for_each(|employee| {
            assignment.unassign(employee, task);
        });
    }
}

/// Drops tasks of every employee whose total time exceeds the budget, starting from the
/// cheapest one, until the budget is satisfied.
pub fn trim_overloaded(problem: &Problem, assignment: &mut AssignmentMatrix) {
    let budget = problem.budget() as u64;

    for employee in 0..assignment.employees() {
        let mut load = employee_load(problem, assignment, employee);
        if load <= budget {
            continue;
        }

        let mut tasks = assignment.assigned_tasks(employee).collect::<Vec<_>>();
        tasks.sort_by_key(|&task| problem.time(employee, task));

        for task in tasks {
            assignment.unassign(employee, task);
            load -= problem.time(employee, task) as u64;

            if load <= budget {
                break;
            }
        }
    }
}

/// Assigns unassigned tasks, highest priority first, to the first employee who can take them.
pub fn backfill_by_priority(problem: &Problem, assignment: &mut AssignmentMatrix) {
    let budget = problem.budget() as u64;
    let mut loads = employee_loads(problem, assignment);

    let mut unassigned = assignment.unassigned_tasks();
    unassigned.sort_by(|&a, &b| problem.priority(b).cmp(&problem.priority(a)));

    for task in unassigned {
        let candidate = (0..assignment.employees())
            .find(|&employee| loads[employee] + problem.time(employee, task) as u64 <= budget);

        if let Some(employee) = candidate {
            assignment.assign(employee, task);
            loads[employee] += problem.time(employee, task) as u64;
        }
    }
}

/// Clears whole task columns, in task order, until the assignment becomes legal.
pub fn clear_tasks_until_legal(problem: &Problem, assignment: &mut AssignmentMatrix) {
    for task in 0..assignment.tasks() {
        if is_legal(problem, assignment) {
            return;
        }

        assignment.clear_task(task);
    }
}
