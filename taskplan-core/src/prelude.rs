//! This module reimports commonly used types.

pub use crate::construction::{construct_solution, create_initial_population};

pub use crate::constraints::{is_legal, repair};

pub use crate::evolution::{
    Evolution, EvolutionConfig, EvolutionConfigBuilder, EvolutionResult, Progress, ProgressSink, TelemetryMode,
};

pub use crate::models::{AssignmentMatrix, Employee, Problem, Solution, Task};

pub use crate::objectives::{Fitness, Weights};

pub use crate::operators::{Breed, BreedType, Mutate, MutateType, Select, SelectType};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};
