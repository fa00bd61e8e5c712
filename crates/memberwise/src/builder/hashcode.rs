//! Builder for whole-object hash functions.

use std::marker::PhantomData;
use std::sync::Arc;

use memberwise_compose::{
    default_hash, default_member_hash, HashCode, HashFn, OperationRegistry, OperationSource,
};
use memberwise_core::{
    MemberDescriptor, MemberValue, Members, Result, TypeKey, DEFAULT_SEED, DEFAULT_STEP,
};

use super::typed_member;

/// Configures and builds a [`HashCode`] over `O`.
pub struct HashCodeBuilder<O: Members> {
    registry: OperationRegistry<HashFn>,
    seed: u64,
    step: u64,
    _target: PhantomData<fn(&O)>,
}

impl<O: Members> HashCodeBuilder<O> {
    /// Creates an empty builder with the default seed and step.
    pub fn new() -> Self {
        HashCodeBuilder {
            registry: OperationRegistry::new(),
            seed: DEFAULT_SEED,
            step: DEFAULT_STEP,
            _target: PhantomData,
        }
    }

    /// Appends every inspectable member of `O` with the default hash.
    /// Idempotent set union, same as the equality builder.
    pub fn append_public_members(mut self) -> Self {
        self.registry.append_members(O::members(), |_| default_hash());
        self
    }

    /// Appends only the members carrying the given marker tag.
    pub fn append_members_tagged(mut self, tag: &str) -> Self {
        self.registry
            .append_members(O::members_tagged(tag), |_| default_hash());
        self
    }

    /// Appends one externally built member descriptor.
    pub fn append_member(mut self, member: MemberDescriptor) -> Self {
        self.registry.append_members([member], |_| default_hash());
        self
    }

    /// Pins a typed hash step to the named member.
    pub fn hash_member_with<T, F>(mut self, name: &str, hash: F) -> Result<Self>
    where
        T: MemberValue,
        F: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        let member = typed_member::<O, T>(name)?;
        self.registry.set_member_fn(member, erase_hash(hash));
        Ok(self)
    }

    /// Registers a hash step for every member of the exact value type `T`.
    pub fn hash_type_with<T, F>(mut self, hash: F) -> Self
    where
        T: MemberValue,
        F: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        self.registry
            .set_type_fn(TypeKey::of::<T>(), erase_hash(hash));
        self
    }

    /// Registers a hash step for every sequence-valued member.
    pub fn hash_sequences_with<F>(mut self, hash: F) -> Self
    where
        F: Fn(&dyn MemberValue) -> u64 + Send + Sync + 'static,
    {
        self.registry.set_type_fn(TypeKey::AnySequence, Arc::new(hash));
        self
    }

    /// Registers a catch-all hash step; the least specific override.
    pub fn hash_any_with<F>(mut self, hash: F) -> Self
    where
        F: Fn(&dyn MemberValue) -> u64 + Send + Sync + 'static,
    {
        self.registry.set_type_fn(TypeKey::AnyValue, Arc::new(hash));
        self
    }

    /// Sets the accumulator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the per-member multiplier.
    pub fn with_step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    /// Snapshots the current configuration into an immutable hash function.
    ///
    /// Members without an explicit override get the default hash bound to
    /// the seed and step configured at this point, so seed/step changes made
    /// after an append still apply.
    pub fn build(&self) -> HashCode<O> {
        tracing::debug!(
            target_type = O::type_name(),
            members = self.registry.len(),
            type_overrides = self.registry.type_override_count(),
            seed = self.seed,
            step = self.step,
            "built hashcode"
        );
        let seed = self.seed;
        let step = self.step;
        let operations = self
            .registry
            .resolve()
            .map(|op| match op.source() {
                OperationSource::Implicit => {
                    let function: HashFn =
                        Arc::new(move |value| default_member_hash(value, seed, step));
                    op.with_function(function)
                }
                _ => op,
            })
            .collect();
        HashCode::new(operations, seed, step)
    }
}

impl<O: Members> Default for HashCodeBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

fn erase_hash<T, F>(hash: F) -> HashFn
where
    T: MemberValue,
    F: Fn(&T) -> u64 + Send + Sync + 'static,
{
    Arc::new(move |value| match value.as_any().downcast_ref::<T>() {
        Some(value) => hash(value),
        None => value.native_hash(),
    })
}
