use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Max value of task priority and of predicted satisfaction.
pub const MAX_SCORE: u32 = 10;

/// Represents a unit of work to be assigned to an employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// How hard the task is, at least one.
    pub difficulty: u32,
    /// A category id.
    pub category: u32,
    /// A priority in `[0, 10]` range, higher is more important.
    pub priority: u32,
}

impl Task {
    /// Creates a new instance of `Task`.
    pub fn new(difficulty: u32, category: u32, priority: u32) -> Self {
        Self { difficulty: difficulty.max(1), category, priority: priority.min(MAX_SCORE) }
    }
}

/// Describes an employee's preferences and skills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Categories the employee likes to work on.
    #[serde(rename = "likes_categories")]
    pub liked_categories: FxHashSet<u32>,
    /// An experience level, the higher the more experienced.
    pub experience: u32,
    /// A difficulty range the employee is comfortable with.
    pub comfortable_difficulty: (u32, u32),
    /// Categories the employee is good at.
    #[serde(rename = "is_good_at_categories")]
    pub skilled_categories: FxHashSet<u32>,
}

impl Employee {
    /// Creates a new instance of `Employee`.
    pub fn new(
        liked_categories: impl IntoIterator<Item = u32>,
        experience: u32,
        comfortable_difficulty: (u32, u32),
        skilled_categories: impl IntoIterator<Item = u32>,
    ) -> Self {
        let (low, high) = comfortable_difficulty;

        Self {
            liked_categories: liked_categories.into_iter().collect(),
            experience,
            comfortable_difficulty: (low.min(high), low.max(high)),
            skilled_categories: skilled_categories.into_iter().collect(),
        }
    }

    /// Checks whether the employee likes the category of the task.
    pub fn likes(&self, task: &Task) -> bool {
        self.liked_categories.contains(&task.category)
    }

    /// Checks whether the employee is skilled in the category of the task.
    pub fn is_good_at(&self, task: &Task) -> bool {
        self.skilled_categories.contains(&task.category)
    }

    /// Checks whether task difficulty lies strictly inside the comfortable range.
    pub fn is_comfortable_with(&self, task: &Task) -> bool {
        let (low, high) = self.comfortable_difficulty;
        low < task.difficulty && task.difficulty < high
    }
}
