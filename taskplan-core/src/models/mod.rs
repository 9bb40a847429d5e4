//! A collection of models which describe the task assignment problem and its solutions.

mod domain;
pub use self::domain::*;

mod matrix;
pub use self::matrix::AssignmentMatrix;

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::Solution;
