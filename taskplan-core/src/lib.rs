//! This crate contains an evolutionary engine which assigns tasks to employees.
//!
//! Every employee has the same time budget, every task has a priority and each employee has its
//! own predicted time and satisfaction per task. A candidate solution is a binary
//! employee x task matrix which is legal when no task has more than one assignee and nobody
//! works longer than the budget allows. Solutions are scored by a weighted sum of four
//! objectives (load imbalance, time spent on low priority tasks, dissatisfaction and unused
//! capacity) and improved by a generational loop of pluggable breed, mutate and select strategies.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use taskplan_core::prelude::*;
//!
//! let problem = Problem::new(
//!     vec![vec![2, 3, 4], vec![3, 2, 1]],
//!     vec![vec![5, 6, 7], vec![1, 2, 3]],
//!     vec![1, 5, 10],
//!     5,
//!     Weights::default(),
//! )
//! .expect("valid problem");
//! let problem = Arc::new(problem);
//!
//! let environment = Environment::new_repeatable(42);
//! let population = create_initial_population(problem, 4, environment.random.as_ref());
//!
//! let config = EvolutionConfigBuilder::default()
//!     .with_generations(10)
//!     .with_breed_type(BreedType::RowSwap)
//!     .with_mutate_type(MutateType::Swap)
//!     .with_select_type(SelectType::MergeTruncate)
//!     .build()
//!     .expect("valid config");
//!
//! let result = Evolution::new(config).run(population, &environment).expect("successful run");
//! assert!(result.best.is_legal());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod construction;
pub mod constraints;
pub mod evolution;
pub mod models;
pub mod objectives;
pub mod operators;
pub mod prelude;
pub mod utils;
