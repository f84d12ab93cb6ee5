//! Error types for the collections crate.

use thiserror::Error;

/// Errors reported by observable collections.
///
/// Every operation validates its arguments before touching the backing
/// sequence, so a returned error means the collection and its subscribers
/// were left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An index lies outside the bounds the operation accepts.
    #[error("index {index} is out of range for a collection of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// An index and count describe a span extending past the end of the collection.
    #[error("range of {count} items starting at {index} extends beyond a collection of length {len}")]
    InvalidRange { index: usize, count: usize, len: usize },

    /// A loosely-typed value does not have the collection's element type.
    #[error("value cannot be cast to {expected}")]
    InvalidCast { expected: &'static str },

    /// A malformed argument, such as an undersized copy target.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CollectionError::OutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 4 is out of range for a collection of length 2"
        );

        let err = CollectionError::InvalidRange {
            index: 1,
            count: 3,
            len: 2,
        };
        assert!(err.to_string().contains("extends beyond"));

        let err = CollectionError::InvalidCast { expected: "i32" };
        assert_eq!(err.to_string(), "value cannot be cast to i32");
    }
}
