//! Operation working set and precedence resolution.
//!
//! Each builder owns one [`OperationRegistry`]: an insertion-ordered set of
//! member/function associations plus a table of per-type overrides. At build
//! time [`OperationRegistry::resolve`] picks exactly one winning function per
//! collected member:
//!
//! 1. an explicit per-member function wins unconditionally;
//! 2. otherwise the most specific matching type override wins, ties among
//!    equally specific registrations going to the last one registered;
//! 3. otherwise the implicit function chosen when the member was appended.

use memberwise_core::{MemberDescriptor, TypeKey};


/// Where an operation's function came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationSource {
    /// The builder's default policy, chosen at append time.
    Implicit,
    /// A function pinned to this exact member.
    ExplicitMember,
    /// A function taken from the type-override table at resolution time.
    ExplicitType,
}

/// One member paired with the function that handles it.
#[derive(Clone)]
pub struct Operation<F> {
    member: MemberDescriptor,
    function: F,
    source: OperationSource,
}

impl<F> Operation<F> {
    /// The member this operation handles.
    pub fn member(&self) -> &MemberDescriptor {
        &self.member
    }

    /// The behavior function.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Provenance of the function.
    pub fn source(&self) -> OperationSource {
        self.source
    }

    /// Replaces the behavior function, keeping member identity and
    /// provenance.
    pub fn with_function(mut self, function: F) -> Self {
        self.function = function;
        self
    }
}

struct TypeOverride<F> {
    key: TypeKey,
    function: F,
    order: usize,
}

/// Per-builder working set of member/function associations.
pub struct OperationRegistry<F> {
    operations: Vec<Operation<F>>,
    type_overrides: Vec<TypeOverride<F>>,
    next_order: usize,
}

impl<F: Clone> OperationRegistry<F> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        OperationRegistry {
            operations: Vec::new(),
            type_overrides: Vec::new(),
            next_order: 0,
        }
    }

    /// Unions new members into the working set as implicit operations.
    ///
    /// `default_fn` supplies the implicit function for each newly appended
    /// member. A member already present (by descriptor identity) is left
    /// untouched, so repeated appends are idempotent.
    pub fn append_members<I>(&mut self, members: I, default_fn: impl Fn(&MemberDescriptor) -> F)
    where
        I: IntoIterator<Item = MemberDescriptor>,
    {
        for member in members {
            if self.operations.iter().any(|op| op.member == member) {
                continue;
            }
            let function = default_fn(&member);
            self.operations.push(Operation {
                member,
                function,
                source: OperationSource::Implicit,
            });
        }
    }

    /// Pins a function to one exact member, inserting the member into the
    /// working set if it was not appended yet.
    pub fn set_member_fn(&mut self, member: MemberDescriptor, function: F) {
        match self.operations.iter_mut().find(|op| op.member == member) {
            Some(op) => {
                op.function = function;
                op.source = OperationSource::ExplicitMember;
            }
            None => self.operations.push(Operation {
                member,
                function,
                source: OperationSource::ExplicitMember,
            }),
        }
    }

    /// Inserts or replaces a type-override table entry.
    ///
    /// Registering the same key again replaces the previous entry and moves
    /// it to the back of the registration order.
    pub fn set_type_fn(&mut self, key: TypeKey, function: F) {
        let order = self.next_order;
        self.next_order += 1;
        match self.type_overrides.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.function = function;
                entry.order = order;
            }
            None => self.type_overrides.push(TypeOverride {
                key,
                function,
                order,
            }),
        }
    }

    /// Resolves the final operation per collected member, lazily.
    ///
    /// Resolution is pure: calling this twice without intervening mutation
    /// yields equal sequences.
    pub fn resolve(&self) -> impl Iterator<Item = Operation<F>> + '_ {
        self.operations.iter().map(move |op| {
            if op.source == OperationSource::ExplicitMember {
                return op.clone();
            }
            match self.best_type_override(&op.member) {
                Some(entry) => Operation {
                    member: op.member.clone(),
                    function: entry.function.clone(),
                    source: OperationSource::ExplicitType,
                },
                None => op.clone(),
            }
        })
    }

    fn best_type_override(&self, member: &MemberDescriptor) -> Option<&TypeOverride<F>> {
        self.type_overrides
            .iter()
            .filter(|entry| member.accepts(entry.key))
            .max_by_key(|entry| (entry.key.specificity(), entry.order))
    }

    /// Number of members in the working set.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the working set is empty.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of entries in the type-override table.
    pub fn type_override_count(&self) -> usize {
        self.type_overrides.len()
    }
}

impl<F: Clone> Default for OperationRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set-equality over two resolved operation slices, comparing member
/// identity, provenance, and function identity via `same_fn`.
pub fn same_operations<F>(
    a: &[Operation<F>],
    b: &[Operation<F>],
    same_fn: impl Fn(&F, &F) -> bool,
) -> bool {
    a.len() == b.len()
        && a.iter().all(|x| {
            b.iter().any(|y| {
                x.member == y.member && x.source == y.source && same_fn(&x.function, &y.function)
            })
        })
}
