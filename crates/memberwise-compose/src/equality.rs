//! Whole-object equality composed from per-member comparators.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use memberwise_core::MemberValue;

use crate::registry::{same_operations, Operation, OperationSource};

/// Erased per-member equality function.
pub type EqFn = Arc<dyn Fn(&dyn MemberValue, &dyn MemberValue) -> bool + Send + Sync>;

/// How sequence-valued members without a more specific override compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionMode {
    /// Equal iff same length and pairwise-equal in iteration order.
    #[default]
    SameOrder,
    /// Equal iff a multiset match: every element of one side removes one
    /// matching element from the other, with nothing left over. Duplicate
    /// counts matter; this is not set equality.
    IgnoreOrder,
}

/// The implicit per-member equality function: native equality of the
/// member's value type.
pub fn default_eq() -> EqFn {
    Arc::new(|a, b| a.native_eq(b))
}

/// A built whole-object equality comparator.
///
/// Immutable snapshot of the resolved operations; freely shareable across
/// threads. Two comparators are equal when they hold the same operation
/// set (member identity, provenance, and function identity).
pub struct Equivalence<O> {
    operations: Vec<Operation<EqFn>>,
    mode: CollectionMode,
    _target: PhantomData<fn(&O)>,
}

impl<O: 'static> Equivalence<O> {
    /// Creates a comparator over an already resolved operation sequence.
    pub fn new(operations: Vec<Operation<EqFn>>, mode: CollectionMode) -> Self {
        Equivalence {
            operations,
            mode,
            _target: PhantomData,
        }
    }

    /// Compares two objects member by member.
    ///
    /// The same object compared against itself is equal without any member
    /// being read. The first unequal member short-circuits the whole result.
    pub fn eq(&self, a: &O, b: &O) -> bool {
        if std::ptr::eq(a, b) {
            return true;
        }
        self.operations.iter().all(|op| self.member_eq(op, a, b))
    }

    /// Null-tolerant comparison: two absent objects are equal, an absent
    /// object never equals a present one.
    pub fn eq_opt(&self, a: Option<&O>, b: Option<&O>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.eq(a, b),
            _ => false,
        }
    }

    /// The resolved operations this comparator closes over.
    pub fn operations(&self) -> &[Operation<EqFn>] {
        &self.operations
    }

    /// The collection comparison mode in effect.
    pub fn mode(&self) -> CollectionMode {
        self.mode
    }

    fn member_eq(&self, op: &Operation<EqFn>, a: &O, b: &O) -> bool {
        let va = op.member().value(a as &dyn Any);
        let vb = op.member().value(b as &dyn Any);
        match (va, vb) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                if std::ptr::addr_eq(x as *const dyn MemberValue, y as *const dyn MemberValue) {
                    return true;
                }
                if op.source() == OperationSource::Implicit
                    && self.mode == CollectionMode::IgnoreOrder
                {
                    if let (Some(xs), Some(ys)) = (x.as_sequence(), y.as_sequence()) {
                        return multiset_eq(&xs, &ys);
                    }
                }
                (op.function())(x, y)
            }
            _ => false,
        }
    }
}

impl<O: 'static> PartialEq for Equivalence<O> {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && same_operations(&self.operations, &other.operations, Arc::ptr_eq)
    }
}

/// Duplicate-sensitive, order-insensitive element match.
fn multiset_eq(xs: &[&dyn MemberValue], ys: &[&dyn MemberValue]) -> bool {
    if xs.len() != ys.len() {
        return false;
    }
    let mut pool: Vec<&dyn MemberValue> = ys.to_vec();
    for x in xs {
        match pool.iter().position(|y| x.native_eq(*y)) {
            Some(found) => {
                pool.swap_remove(found);
            }
            None => return false,
        }
    }
    true
}
