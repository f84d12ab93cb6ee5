//! Index and range validation shared by every list operation.

use crate::error::{CollectionError, Result};

/// Checks that `index..index + count` lies within a collection of length `len`.
///
/// Indices and counts are unsigned, so the only failure is a span running past
/// the end (including `index + count` overflowing), reported as
/// [`CollectionError::InvalidRange`].
pub fn validate_range(len: usize, index: usize, count: usize) -> Result<()> {
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(CollectionError::InvalidRange { index, count, len }),
    }
}

/// Checks that `index` addresses an existing element.
pub fn validate_index(len: usize, index: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::OutOfRange { index, len })
    }
}

/// Checks that `index` is a valid insertion point (`index <= len`).
pub fn validate_insert_index(len: usize, index: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(CollectionError::OutOfRange { index, len })
    }
}
