//! Structural change records.
//!
//! A [`CollectionChange`] fully describes one logically atomic mutation of an
//! observable list: what kind of change happened, where, and which items were
//! involved. Records are created immediately before dispatch and are not
//! retained by the list.

use std::fmt;

use crate::error::{CollectionError, Result};
use crate::range::{validate_insert_index, validate_range};

/// The kind of a structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// Items were inserted.
    Add,
    /// Items were removed.
    Remove,
    /// Items were replaced in place.
    Replace,
    /// A contiguous block of items changed position.
    Move,
}

/// A single structural change emitted by an observable list.
///
/// Replaying every record raised by a call, in order, against the contents the
/// list had before the call reproduces the contents after the call. See
/// [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionChange<T> {
    /// `items` were inserted, the first of them at `index`.
    Add { items: Vec<T>, index: usize },

    /// `items` were removed, the first of them from `index`.
    Remove { items: Vec<T>, index: usize },

    /// `old_items` starting at `index` were replaced by `new_items`.
    Replace {
        new_items: Vec<T>,
        old_items: Vec<T>,
        index: usize,
    },

    /// The block `items`, previously starting at `old_index`, was moved.
    ///
    /// When moving backward (`new_index < old_index`) the block now starts at
    /// `new_index`. When moving forward, `new_index` is the final position of
    /// the block's last item, so the block starts at
    /// `new_index + 1 - items.len()`. For single items both readings agree.
    Move {
        items: Vec<T>,
        new_index: usize,
        old_index: usize,
    },
}

impl<T> CollectionChange<T> {
    /// Returns the kind of this change.
    pub fn action(&self) -> ChangeAction {
        match self {
            Self::Add { .. } => ChangeAction::Add,
            Self::Remove { .. } => ChangeAction::Remove,
            Self::Replace { .. } => ChangeAction::Replace,
            Self::Move { .. } => ChangeAction::Move,
        }
    }

    /// Returns the index the change starts at (the new index for moves).
    pub fn index(&self) -> usize {
        match self {
            Self::Add { index, .. } | Self::Remove { index, .. } | Self::Replace { index, .. } => {
                *index
            }
            Self::Move { new_index, .. } => *new_index,
        }
    }

    /// Returns the number of items the change carries.
    pub fn len(&self) -> usize {
        match self {
            Self::Add { items, .. } | Self::Remove { items, .. } | Self::Move { items, .. } => {
                items.len()
            }
            Self::Replace { new_items, .. } => new_items.len(),
        }
    }

    /// Returns `true` if the change carries no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the net change in element count caused by this record.
    pub fn count_delta(&self) -> isize {
        match self {
            Self::Add { items, .. } => items.len() as isize,
            Self::Remove { items, .. } => -(items.len() as isize),
            Self::Replace { .. } | Self::Move { .. } => 0,
        }
    }

    /// Items present after the change (empty for removals).
    pub fn new_items(&self) -> &[T] {
        match self {
            Self::Add { items, .. } | Self::Move { items, .. } => items,
            Self::Replace { new_items, .. } => new_items,
            Self::Remove { .. } => &[],
        }
    }

    /// Items present before the change (empty for additions).
    pub fn old_items(&self) -> &[T] {
        match self {
            Self::Remove { items, .. } | Self::Move { items, .. } => items,
            Self::Replace { old_items, .. } => old_items,
            Self::Add { .. } => &[],
        }
    }
}

impl<T: Clone> CollectionChange<T> {
    /// Replays this change against `target`.
    ///
    /// This is how a consumer keeps a mirror of an observable list in sync.
    /// The target is left untouched if the record does not fit it.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_collections::CollectionChange;
    ///
    /// let mut mirror = vec![1, 2, 5];
    /// CollectionChange::Add { items: vec![3, 4], index: 2 }
    ///     .apply(&mut mirror)
    ///     .unwrap();
    /// assert_eq!(mirror, vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn apply(&self, target: &mut Vec<T>) -> Result<()> {
        match self {
            Self::Add { items, index } => {
                validate_insert_index(target.len(), *index)?;
                target.splice(*index..*index, items.iter().cloned());
            }
            Self::Remove { items, index } => {
                validate_range(target.len(), *index, items.len())?;
                target.drain(*index..*index + items.len());
            }
            Self::Replace {
                new_items,
                old_items,
                index,
            } => {
                validate_range(target.len(), *index, old_items.len())?;
                target.splice(*index..*index + old_items.len(), new_items.iter().cloned());
            }
            Self::Move {
                items,
                new_index,
                old_index,
            } => {
                let count = items.len();
                validate_range(target.len(), *old_index, count)?;
                let destination = if new_index > old_index {
                    (new_index + 1)
                        .checked_sub(count)
                        .ok_or(CollectionError::InvalidRange {
                            index: *new_index,
                            count,
                            len: target.len(),
                        })?
                } else {
                    *new_index
                };
                validate_range(target.len() - count, destination, 0)?;

                let moved: Vec<T> = target.drain(*old_index..*old_index + count).collect();
                target.splice(destination..destination, moved);
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Display for CollectionChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { items, index } => write!(f, "Add {items:?} @ {index}"),
            Self::Remove { items, index } => write!(f, "Remove {items:?} @ {index}"),
            Self::Replace {
                new_items,
                old_items,
                index,
            } => write!(f, "Replace {old_items:?} -> {new_items:?} @ {index}"),
            Self::Move {
                items,
                new_index,
                old_index,
            } => write!(f, "Move {items:?} {old_index} -> {new_index}"),
        }
    }
}
