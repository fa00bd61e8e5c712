//! Memberwise Compose - Operation resolution and function composition
//!
//! This crate holds the engine behind the memberwise builders:
//! - `OperationRegistry` keeps the per-builder member working set and the
//!   type-override table, and resolves one winning function per member
//! - equality and hashcode composers turn a resolved operation sequence
//!   into one whole-object function
//! - the format combinator engine assembles configurable object, sequence,
//!   and mapping string representations from small composable pieces

pub mod equality;
pub mod format;
pub mod hashing;
pub mod registry;

pub use equality::{default_eq, CollectionMode, EqFn, Equivalence};
pub use format::{
    collect, default_format, unless_null, unless_null_or, Enclosure, Formatter, MappingFormat,
    MappingStyle, ObjectFormat, ObjectStyle, SequenceFormat, SequenceStyle, ValueFormatter,
    Writer,
};
pub use hashing::{default_hash, default_member_hash, HashCode, HashFn};
pub use registry::{same_operations, Operation, OperationRegistry, OperationSource};
