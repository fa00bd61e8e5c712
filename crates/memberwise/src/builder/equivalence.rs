//! Builder for whole-object equality comparators.

use std::marker::PhantomData;
use std::sync::Arc;

use memberwise_compose::{default_eq, CollectionMode, EqFn, Equivalence, OperationRegistry};
use memberwise_core::{MemberDescriptor, MemberValue, Members, Result, TypeKey};

use super::typed_member;

/// Configures and builds an [`Equivalence`] over `O`.
pub struct EquivalenceBuilder<O: Members> {
    registry: OperationRegistry<EqFn>,
    mode: CollectionMode,
    _target: PhantomData<fn(&O)>,
}

impl<O: Members> EquivalenceBuilder<O> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        EquivalenceBuilder {
            registry: OperationRegistry::new(),
            mode: CollectionMode::default(),
            _target: PhantomData,
        }
    }

    /// Appends every inspectable member of `O` with the default comparison.
    ///
    /// Appending is a set union: members already present are untouched, so
    /// calling this twice changes nothing.
    pub fn append_public_members(mut self) -> Self {
        self.registry.append_members(O::members(), |_| default_eq());
        self
    }

    /// Appends only the members carrying the given marker tag.
    pub fn append_members_tagged(mut self, tag: &str) -> Self {
        self.registry
            .append_members(O::members_tagged(tag), |_| default_eq());
        self
    }

    /// Appends one externally built member descriptor.
    pub fn append_member(mut self, member: MemberDescriptor) -> Self {
        self.registry.append_members([member], |_| default_eq());
        self
    }

    /// Pins a typed comparison to the named member. Wins over every type
    /// override and over the default.
    pub fn compare_member_with<T, F>(mut self, name: &str, compare: F) -> Result<Self>
    where
        T: MemberValue,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let member = typed_member::<O, T>(name)?;
        self.registry.set_member_fn(member, erase_eq(compare));
        Ok(self)
    }

    /// Registers a comparison for every member of the exact value type `T`.
    pub fn compare_type_with<T, F>(mut self, compare: F) -> Self
    where
        T: MemberValue,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.registry
            .set_type_fn(TypeKey::of::<T>(), erase_eq(compare));
        self
    }

    /// Registers a comparison for every sequence-valued member.
    pub fn compare_sequences_with<F>(mut self, compare: F) -> Self
    where
        F: Fn(&dyn MemberValue, &dyn MemberValue) -> bool + Send + Sync + 'static,
    {
        self.registry
            .set_type_fn(TypeKey::AnySequence, Arc::new(compare));
        self
    }

    /// Registers a catch-all comparison; the least specific override.
    pub fn compare_any_with<F>(mut self, compare: F) -> Self
    where
        F: Fn(&dyn MemberValue, &dyn MemberValue) -> bool + Send + Sync + 'static,
    {
        self.registry
            .set_type_fn(TypeKey::AnyValue, Arc::new(compare));
        self
    }

    /// Sets how sequence members without a more specific override compare.
    pub fn collection_mode(mut self, mode: CollectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for [`CollectionMode::IgnoreOrder`].
    pub fn ignore_collection_order(self) -> Self {
        self.collection_mode(CollectionMode::IgnoreOrder)
    }

    /// Snapshots the current configuration into an immutable comparator.
    pub fn build(&self) -> Equivalence<O> {
        tracing::debug!(
            target_type = O::type_name(),
            members = self.registry.len(),
            type_overrides = self.registry.type_override_count(),
            "built equivalence"
        );
        Equivalence::new(self.registry.resolve().collect(), self.mode)
    }
}

impl<O: Members> Default for EquivalenceBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

fn erase_eq<T, F>(compare: F) -> EqFn
where
    T: MemberValue,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Arc::new(move |a, b| {
        match (a.as_any().downcast_ref::<T>(), b.as_any().downcast_ref::<T>()) {
            (Some(a), Some(b)) => compare(a, b),
            // Differently typed operands fall back to native equality.
            _ => a.native_eq(b),
        }
    })
}
