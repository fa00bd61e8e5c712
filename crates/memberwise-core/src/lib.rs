//! Memberwise Core - Leaf types for the memberwise function builders
//!
//! This crate provides the fundamental abstractions shared by the builders:
//! - `MemberValue` for type-erased member values with native behaviors
//! - `MemberDescriptor` for member identity plus an erased accessor
//! - `Members` for enumerating a type's inspectable members
//! - `TypeKey` for keying per-type behavior overrides

pub mod error;
pub mod member;
pub mod value;

pub use error::{MemberwiseError, Result};
pub use member::{Accessor, MemberDescriptor, Members};
pub use value::{fnv1a, MemberValue, TypeKey, DEFAULT_SEED, DEFAULT_STEP};
