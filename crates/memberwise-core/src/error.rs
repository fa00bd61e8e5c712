//! Error types for memberwise

use thiserror::Error;

/// Main error type for memberwise configuration.
#[derive(Debug, Error)]
pub enum MemberwiseError {
    /// A member lookup named a member the owner type does not have.
    #[error("unknown member `{name}` on `{owner}`")]
    UnknownMember {
        /// Owner type name.
        owner: &'static str,
        /// Requested member name.
        name: String,
    },

    /// A typed override was registered against a member of a different type.
    #[error("member `{name}` on `{owner}` has type `{actual}`, expected `{expected}`")]
    MemberTypeMismatch {
        /// Owner type name.
        owner: &'static str,
        /// Member name.
        name: &'static str,
        /// Type the caller supplied.
        expected: &'static str,
        /// Actual member value type.
        actual: &'static str,
    },
}

/// Result type alias for memberwise operations.
pub type Result<T> = std::result::Result<T, MemberwiseError>;
