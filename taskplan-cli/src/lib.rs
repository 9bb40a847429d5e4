//! A library behind the `taskplan` command line tool.
//!
//! It produces inputs for the evolutionary engine from `taskplan-core` and consumes its
//! outputs: experiment configuration, synthetic data generation, json exchange of matrices and
//! populations, csv result logging and a parallel grid search over strategy combinations.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

pub mod extensions;
