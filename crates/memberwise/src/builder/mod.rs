//! The builder facades.
//!
//! Builders are mutable, fluent configuration objects. Configuration
//! accumulates: `build` snapshots the current state without resetting it,
//! so one builder can produce a function, take more overrides, and produce
//! a richer one. A fresh start is a new builder.

use std::any::TypeId;

use memberwise_core::{MemberDescriptor, MemberValue, Members, MemberwiseError, Result};

mod equivalence;
mod format;
mod hashcode;

#[cfg(test)]
mod tests;

pub use equivalence::EquivalenceBuilder;
pub use format::FormatBuilder;
pub use hashcode::HashCodeBuilder;

/// Looks up a member by name and checks the caller's value type against it.
fn typed_member<O: Members, T: MemberValue>(name: &str) -> Result<MemberDescriptor> {
    let member = O::member(name).ok_or_else(|| MemberwiseError::UnknownMember {
        owner: O::type_name(),
        name: name.to_string(),
    })?;
    if member.value_type() != TypeId::of::<T>() {
        return Err(MemberwiseError::MemberTypeMismatch {
            owner: O::type_name(),
            name: member.name(),
            expected: std::any::type_name::<T>(),
            actual: member.value_type_name(),
        });
    }
    Ok(member)
}
