//! Mutate strategies. Every strategy keeps children legal: changes which would break legality
//! are either reverted or followed by repair.

#[cfg(test)]
#[path = "../../../tests/unit/operators/mutate/mutate_test.rs"]
mod mutate_test;

mod column;
pub use self::column::*;

mod composite;
pub use self::composite::*;

mod deletion;
pub use self::deletion::*;

mod insertion;
pub use self::insertion::*;

use crate::models::Solution;
use crate::utils::Random;

/// Applies the action to every child selected with given probability.
fn for_each_hit<F>(children: &mut [Solution], probability: f64, random: &dyn Random, mut action: F)
where
    F: FnMut(&mut Solution),
{
    children.iter_mut().filter(|_| random.is_hit(probability)).for_each(|child| action(child));
}
