//! Whole-object hash codes composed from per-member hash steps.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use memberwise_core::{MemberValue, DEFAULT_SEED, DEFAULT_STEP};

use crate::registry::{same_operations, Operation};

/// Erased per-member hash function.
pub type HashFn = Arc<dyn Fn(&dyn MemberValue) -> u64 + Send + Sync>;

/// The implicit per-member hash function: native hash for leaves,
/// element-wise combination for sequences, under the default seed and step.
pub fn default_hash() -> HashFn {
    Arc::new(|value| default_member_hash(value, DEFAULT_SEED, DEFAULT_STEP))
}

/// Default hash of one member value.
///
/// Sequences combine element hashes recursively with the same seed/step
/// fold as the whole-object combiner; absent elements contribute 0. With
/// the default seed, a collection of only absent elements therefore hashes
/// the same as an empty collection.
pub fn default_member_hash(value: &dyn MemberValue, seed: u64, step: u64) -> u64 {
    match value.as_sequence() {
        Some(elements) => elements.iter().fold(seed, |acc, element| {
            acc ^ default_member_hash(*element, seed, step).wrapping_mul(step)
        }),
        None => value.native_hash(),
    }
}

/// A built whole-object hash function.
///
/// Folds `acc ^ (member_hash * step)` left-to-right over the order-stable
/// resolved operation sequence, starting from `seed`. Absent member values
/// hash as 0 before the multiplication.
pub struct HashCode<O> {
    operations: Vec<Operation<HashFn>>,
    seed: u64,
    step: u64,
    _target: PhantomData<fn(&O)>,
}

impl<O: 'static> HashCode<O> {
    /// Creates a hash function over an already resolved operation sequence.
    pub fn new(operations: Vec<Operation<HashFn>>, seed: u64, step: u64) -> Self {
        HashCode {
            operations,
            seed,
            step,
            _target: PhantomData,
        }
    }

    /// Computes the combined hash of `target`.
    pub fn hash(&self, target: &O) -> u64 {
        self.operations.iter().fold(self.seed, |acc, op| {
            let member_hash = match op.member().value(target as &dyn Any) {
                None => 0,
                Some(value) => (op.function())(value),
            };
            acc ^ member_hash.wrapping_mul(self.step)
        })
    }

    /// The resolved operations this hash function closes over.
    pub fn operations(&self) -> &[Operation<HashFn>] {
        &self.operations
    }

    /// The accumulator seed in effect.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The per-member multiplier in effect.
    pub fn step(&self) -> u64 {
        self.step
    }
}

impl<O: 'static> PartialEq for HashCode<O> {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed
            && self.step == other.step
            && same_operations(&self.operations, &other.operations, Arc::ptr_eq)
    }
}
