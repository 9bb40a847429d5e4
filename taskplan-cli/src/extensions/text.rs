//! Reads and writes a plain text problem file.
//!
//! The first line is the time budget, then every employee is written as a tuple
//! `(liked categories, experience, [low, high], skilled categories)` and every task as a tuple
//! `(difficulty, category, priority)`. Definitions are followed by `# Matrix T` and
//! `# Matrix Z` sections with one matrix row per line:
//!
//! ```text
//! 40
//! ([1, 4], 5, [2, 7], [3])
//! (6, 1, 8)
//! (3, 4, 2)
//!
//! # Matrix T
//! [9, 5]
//!
//! # Matrix Z
//! [4, 7]
//! ```

#[cfg(test)]
#[path = "../../tests/unit/extensions/text_test.rs"]
mod text_test;

use crate::extensions::generate::InputMatrices;
use crate::extensions::io::check_tasks;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io::{BufRead, BufReader, Read, Write};
use taskplan_core::models::{Employee, Task};
use taskplan_core::utils::GenericResult;

const TIME_SECTION: &str = "# Matrix T";
const SATISFACTION_SECTION: &str = "# Matrix Z";

/// A problem definition together with its predicted matrices.
#[derive(Clone, Debug, PartialEq)]
pub struct TextProblem {
    /// Employee time budget.
    pub budget: u32,
    /// Employees.
    pub employees: Vec<Employee>,
    /// Tasks.
    pub tasks: Vec<Task>,
    /// Input matrices, priorities are taken from tasks.
    pub matrices: InputMatrices,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionLine {
    Employee(Vec<u32>, u32, (u32, u32), Vec<u32>),
    Task(u32, u32, u32),
}

enum Section {
    Definitions,
    Time,
    Satisfaction,
}

/// Reads a plain text problem.
pub fn read_text_problem<R: Read>(reader: BufReader<R>) -> GenericResult<TextProblem> {
    let mut budget = None;
    let mut section = Section::Definitions;
    let (mut employees, mut tasks) = (Vec::new(), Vec::new());
    let (mut time, mut satisfaction) = (Vec::new(), Vec::new());

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let (line, line_no) = (line.trim(), idx + 1);

        if line.is_empty() {
            continue;
        }

        if budget.is_none() {
            let value = line.parse::<u32>().map_err(|err| format!("cannot parse budget at line {line_no}: '{err}'"))?;
            budget = Some(value);
            continue;
        }

        if line.starts_with(TIME_SECTION) {
            section = Section::Time;
            continue;
        } else if line.starts_with(SATISFACTION_SECTION) {
            section = Section::Satisfaction;
            continue;
        } else if line.starts_with('#') {
            continue;
        }

        match section {
            Section::Definitions => match parse_line::<DefinitionLine>(line, line_no)? {
                DefinitionLine::Employee(liked, experience, comfortable, skilled) => {
                    employees.push(Employee::new(liked, experience, comfortable, skilled))
                }
                DefinitionLine::Task(difficulty, category, priority) => {
                    tasks.push(Task { difficulty, category, priority })
                }
            },
            Section::Time => time.push(parse_line::<Vec<u32>>(line, line_no)?),
            Section::Satisfaction => satisfaction.push(parse_line::<Vec<u32>>(line, line_no)?),
        }
    }

    let budget = budget.ok_or_else(|| "text problem is empty".to_string())?;
    check_tasks(tasks.as_slice())?;
    check_rows("time matrix", time.as_slice(), employees.len())?;
    check_rows("satisfaction matrix", satisfaction.as_slice(), employees.len())?;

    let priority = tasks.iter().map(|task| task.priority).collect();

    Ok(TextProblem { budget, employees, tasks, matrices: InputMatrices { time, satisfaction, priority } })
}

/// Writes a plain text problem.
pub fn write_text_problem<W: Write>(writer: &mut W, problem: &TextProblem) -> GenericResult<()> {
    writeln!(writer, "{}", problem.budget)?;

    for employee in problem.employees.iter() {
        let (low, high) = employee.comfortable_difficulty;
        writeln!(
            writer,
            "({}, {}, [{low}, {high}], {})",
            format_categories(employee.liked_categories.iter()),
            employee.experience,
            format_categories(employee.skilled_categories.iter())
        )?;
    }

    for task in problem.tasks.iter() {
        writeln!(writer, "({}, {}, {})", task.difficulty, task.category, task.priority)?;
    }

    let sections = [(TIME_SECTION, &problem.matrices.time), (SATISFACTION_SECTION, &problem.matrices.satisfaction)];
    for (title, rows) in sections {
        writeln!(writer, "\n{title}")?;
        rows.iter().try_for_each(|row| writeln!(writer, "{}", format_list(row.as_slice())))?;
    }

    Ok(writer.flush()?)
}

fn parse_line<T: DeserializeOwned>(line: &str, line_no: usize) -> GenericResult<T> {
    let json = line.replace('(', "[").replace(')', "]");

    serde_json::from_str(json.as_str()).map_err(|err| format!("cannot parse line {line_no}: '{err}'").into())
}

fn check_rows(description: &str, rows: &[Vec<u32>], employees: usize) -> GenericResult<()> {
    if rows.len() != employees {
        Err(format!("{description} has {} rows, expected one per each of {employees} employees", rows.len()).into())
    } else {
        Ok(())
    }
}

fn format_categories<'a>(categories: impl Iterator<Item = &'a u32>) -> String {
    let mut categories = categories.copied().collect::<Vec<_>>();
    categories.sort_unstable();

    format_list(categories.as_slice())
}

fn format_list(values: &[u32]) -> String {
    format!("[{}]", values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", "))
}
