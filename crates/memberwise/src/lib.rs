//! Memberwise - Fluent builders for memberwise functions
//!
//! Builds equality comparators, hash functions, and string formatters for
//! arbitrary data objects from their inspectable members, without
//! hand-writing the boilerplate per type.
//!
//! # Example
//!
//! ```rust
//! use memberwise::prelude::*;
//!
//! #[derive(Members)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let eq = EquivalenceBuilder::<Point>::new()
//!     .append_public_members()
//!     .build();
//! assert!(eq.eq(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }));
//! ```

// User-facing derive macro; shares its name with the trait it implements,
// so `use memberwise::Members` brings in both.
pub use memberwise_macros::Members;

// Member collection seam and core types
pub use memberwise_core::{
    Accessor, MemberDescriptor, MemberValue, MemberwiseError, Members, Result, TypeKey,
    DEFAULT_SEED, DEFAULT_STEP,
};

// Composition engine surface
pub use memberwise_compose::{
    collect, default_eq, default_format, default_hash, unless_null, unless_null_or,
    CollectionMode, Enclosure, EqFn, Equivalence, Formatter, HashCode, HashFn, MappingFormat,
    MappingStyle, ObjectFormat, ObjectStyle, Operation, OperationRegistry, OperationSource,
    SequenceFormat, SequenceStyle, ValueFormatter, Writer,
};

mod builder;

pub use builder::{EquivalenceBuilder, FormatBuilder, HashCodeBuilder};

/// Commonly used imports.
pub mod prelude {
    pub use crate::builder::{EquivalenceBuilder, FormatBuilder, HashCodeBuilder};
    pub use crate::{
        CollectionMode, Enclosure, Equivalence, HashCode, MappingFormat, MappingStyle,
        MemberDescriptor, MemberValue, Members, ObjectFormat, ObjectStyle, SequenceFormat,
        SequenceStyle, TypeKey,
    };
}
