//! Reads and writes problem data and populations as json.
//!
//! Matrices are plain nested arrays, tasks and employees are arrays of objects, a population is
//! an array of assignment matrices.

#[cfg(test)]
#[path = "../../tests/unit/extensions/io_test.rs"]
mod io_test;

use crate::extensions::generate::InputMatrices;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;
use taskplan_core::models::{AssignmentMatrix, Employee, MAX_SCORE, Problem, Solution, Task};
use taskplan_core::utils::GenericResult;

/// Opens file for reading.
pub fn open_file(path: &Path, description: &str) -> GenericResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| format!("cannot open {description} file '{}': '{err}'", path.display()).into())
}

/// Creates file for writing, an existing one is truncated.
pub fn create_file(path: &Path, description: &str) -> GenericResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|err| format!("cannot create {description} file '{}': '{err}'", path.display()).into())
}

/// Deserializes a value from json.
pub fn read_json<T: DeserializeOwned, R: Read>(reader: BufReader<R>, description: &str) -> GenericResult<T> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize {description}: '{err}'").into())
}

/// Serializes a value as json followed by a new line.
pub fn write_json<T: Serialize + ?Sized, W: Write>(writer: &mut W, value: &T, description: &str) -> GenericResult<()> {
    serde_json::to_writer(&mut *writer, value).map_err(|err| format!("cannot serialize {description}: '{err}'"))?;
    writeln!(writer)?;

    Ok(writer.flush()?)
}

/// Reads `T`, `Z` and `p`.
pub fn read_input_matrices<R: Read>(
    time: BufReader<R>,
    satisfaction: BufReader<R>,
    priority: BufReader<R>,
) -> GenericResult<InputMatrices> {
    Ok(InputMatrices {
        time: read_json(time, "time matrix")?,
        satisfaction: read_json(satisfaction, "satisfaction matrix")?,
        priority: read_json(priority, "priority vector")?,
    })
}

/// Reads tasks checking their difficulties and priorities.
pub fn read_tasks<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Task>> {
    let tasks: Vec<Task> = read_json(reader, "tasks")?;
    check_tasks(tasks.as_slice())?;

    Ok(tasks)
}

/// Checks that every task has a positive difficulty and a priority within `[0, 10]` range.
pub fn check_tasks(tasks: &[Task]) -> GenericResult<()> {
    tasks.iter().enumerate().try_for_each(|(idx, task)| {
        if task.difficulty == 0 {
            Err(format!("task {idx} has zero difficulty, expected at least 1").into())
        } else if task.priority > MAX_SCORE {
            Err(format!("task {idx} has priority {} out of [0, 10] range", task.priority).into())
        } else {
            Ok(())
        }
    })
}

/// Reads employees, a reversed comfortable difficulty range is put in ascending order.
pub fn read_employees<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Employee>> {
    let employees: Vec<Employee> = read_json(reader, "employees")?;

    Ok(employees
        .into_iter()
        .map(|employee| {
            Employee::new(
                employee.liked_categories,
                employee.experience,
                employee.comfortable_difficulty,
                employee.skilled_categories,
            )
        })
        .collect())
}

/// Writes assignment matrices of the population.
pub fn write_population<W: Write>(writer: &mut W, population: &[Solution]) -> GenericResult<()> {
    let assignments = population.iter().map(|solution| solution.assignment()).collect::<Vec<_>>();

    write_json(writer, &assignments, "population")
}

/// Reads a population of the given problem. Every individual must have the problem's shape and
/// be legal.
pub fn read_population<R: Read>(reader: BufReader<R>, problem: Arc<Problem>) -> GenericResult<Vec<Solution>> {
    let rows: Vec<Vec<Vec<u8>>> = read_json(reader, "population")?;

    rows.into_iter()
        .enumerate()
        .map(|(idx, rows)| -> GenericResult<Solution> {
            let solution = AssignmentMatrix::from_rows(rows)
                .and_then(|assignment| Solution::from_assignment(problem.clone(), assignment))
                .map_err(|err| format!("invalid individual {idx} in population: {err}"))?;

            if solution.is_legal() {
                Ok(solution)
            } else {
                Err(format!("individual {idx} in population violates constraints").into())
            }
        })
        .collect()
}
