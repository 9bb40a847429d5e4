//! Specifies operator contracts used by the evolution loop and their strategies.
//!
//! Each role (breed, mutate, select) has one trait and a closed set of named strategies which
//! are resolved once, at configuration time, into shared trait objects.

#[cfg(test)]
#[path = "../../tests/unit/operators/registry_test.rs"]
mod registry_test;

use crate::models::Solution;
use crate::utils::{GenericError, GenericResult, Random};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

pub mod breed;
pub mod mutate;
pub mod select;

use self::breed::*;
use self::mutate::*;
use self::select::*;

/// Produces children from the population. All children must be legal.
pub trait Breed: Send + Sync {
    /// Breeds children. Fails when population has fewer than two individuals.
    fn breed(&self, population: &[Solution], random: &dyn Random) -> GenericResult<Vec<Solution>>;
}

/// Modifies children in place keeping them legal.
pub trait Mutate: Send + Sync {
    /// Mutates children.
    fn mutate(&self, children: &mut [Solution], random: &dyn Random);
}

/// Builds the next population from the current population and children.
pub trait Select: Send + Sync {
    /// Selects exactly as many individuals as the population has.
    fn select(&self, population: Vec<Solution>, children: Vec<Solution>) -> Vec<Solution>;
}

macro_rules! strategy_type {
    ($(#[$meta:meta])* $type_name:ident, $role:literal, $($variant:ident => $name:literal,)+) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $type_name {
            $(
                #[doc = concat!("A `", $name, "` strategy.")]
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl $type_name {
            /// All known strategies.
            pub const ALL: &'static [$type_name] = &[$($type_name::$variant,)+];

            /// Returns strategy name.
            pub fn name(&self) -> &'static str {
                match self {
                    $($type_name::$variant => $name,)+
                }
            }
        }

        impl Display for $type_name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl FromStr for $type_name {
            type Err = GenericError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $type_name::ALL.iter().find(|strategy| strategy.name() == value).copied().ok_or_else(|| {
                    let names = $type_name::ALL.iter().map(|strategy| strategy.name()).collect::<Vec<_>>();
                    format!("cannot find {} strategy '{value}', try one of: {}", $role, names.join(", ")).into()
                })
            }
        }
    };
}

strategy_type! {
    /// Specifies breed strategies.
    BreedType, "breed",
    RowSwap => "row-swap",
    ObjectiveTargeted => "objective-targeted",
    DominanceRowSwap => "dominance-row-swap",
    DominanceObjectiveTargeted => "dominance-objective-targeted",
    UnionFill => "union-fill",
    RandomDeletion => "random-deletion",
    RowInterleave => "row-interleave",
    TaskReassignment => "task-reassignment",
}

strategy_type! {
    /// Specifies mutate strategies.
    MutateType, "mutate",
    Swap => "swap",
    Add => "add",
    DeleteLeastLiked => "delete-least-liked",
    DeleteLowestPriority => "delete-lowest-priority",
    DeleteLongest => "delete-longest",
    GreedyAssign => "greedy-assign",
    Fusion => "fusion",
    Reassign => "reassign",
    Backfill => "backfill",
    Rotate => "rotate",
    RandomDelete => "random-delete",
}

strategy_type! {
    /// Specifies select strategies.
    SelectType, "select",
    MergeTruncate => "merge-truncate",
    AgeWeighted => "age-weighted",
    AgeCapped => "age-capped",
    ReplaceWithChildren => "replace-with-children",
}

impl BreedType {
    /// Creates a strategy with default parameters.
    pub fn create(&self) -> Arc<dyn Breed> {
        let dominance = ParentSelection::Dominance { bias: DEFAULT_DOMINANCE_BIAS };

        let (parents, crossover) = match self {
            BreedType::RowSwap => (ParentSelection::Uniform, Crossover::RowSwap),
            BreedType::ObjectiveTargeted => (ParentSelection::Uniform, Crossover::ObjectiveTargeted),
            BreedType::DominanceRowSwap => (dominance, Crossover::RowSwap),
            BreedType::DominanceObjectiveTargeted => (dominance, Crossover::ObjectiveTargeted),
            BreedType::UnionFill => (ParentSelection::FitnessProportional, Crossover::UnionFill),
            BreedType::RandomDeletion => (
                ParentSelection::Uniform,
                Crossover::RandomDeletion { keep: DEFAULT_KEEP_PROBABILITY, add: DEFAULT_ADD_PROBABILITY },
            ),
            BreedType::RowInterleave => (ParentSelection::Uniform, Crossover::RowInterleave),
            BreedType::TaskReassignment => (ParentSelection::Uniform, Crossover::TaskReassignment),
        };

        Arc::new(PairBreed::new(parents, crossover))
    }
}

impl MutateType {
    /// Creates a strategy with default parameters.
    pub fn create(&self) -> Arc<dyn Mutate> {
        match self {
            MutateType::Swap => Arc::new(SwapMutation::default()),
            MutateType::Add => Arc::new(AddMutation::default()),
            MutateType::DeleteLeastLiked => Arc::new(DeleteMutation::new(DeletePolicy::LeastLiked)),
            MutateType::DeleteLowestPriority => Arc::new(DeleteMutation::new(DeletePolicy::LowestPriority)),
            MutateType::DeleteLongest => Arc::new(DeleteMutation::new(DeletePolicy::Longest)),
            MutateType::GreedyAssign => Arc::new(GreedyAssignMutation::default()),
            MutateType::Fusion => Arc::new(FusionMutation::default()),
            MutateType::Reassign => Arc::new(ReassignMutation),
            MutateType::Backfill => Arc::new(BackfillMutation::default()),
            MutateType::Rotate => Arc::new(RotateMutation),
            MutateType::RandomDelete => Arc::new(RandomDeleteMutation::default()),
        }
    }
}

impl SelectType {
    /// Creates a strategy with default parameters.
    pub fn create(&self) -> Arc<dyn Select> {
        match self {
            SelectType::MergeTruncate => Arc::new(MergeTruncate),
            SelectType::AgeWeighted => Arc::new(AgeWeighted),
            SelectType::AgeCapped => Arc::new(AgeCapped::default()),
            SelectType::ReplaceWithChildren => Arc::new(ReplaceWithChildren),
        }
    }
}
