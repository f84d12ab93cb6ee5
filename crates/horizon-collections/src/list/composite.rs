//! Composite operations on an observable list.
//!
//! Each operation here mutates the backing vector directly, then reports its
//! net effect as the smallest set of records that describes it: one record
//! for everything except `remove_all`, which raises one record per maximal
//! run of removed items. The count signal fires once, after all records, and
//! only if the count changed.

use std::collections::HashSet;
use std::hash::Hash;

use horizon_collections_core::PerfSpan;
use horizon_collections_core::logging::targets;

use super::change::CollectionChange;
use super::observable_list::ObservableList;
use crate::error::{CollectionError, Result};
use crate::math::modulo;
use crate::range::{validate_index, validate_insert_index, validate_range};
use crate::rotate;

impl<T: Clone + PartialEq + Send + Sync + 'static> ObservableList<T> {
    // -------------------------------------------------------------------------
    // Bulk insertion
    // -------------------------------------------------------------------------

    /// Appends every item of `items`.
    ///
    /// Raises a single `Add` covering the appended span. Appending nothing
    /// raises nothing. `items` is drained before the list is locked, so it may
    /// read this list (`list.extend_from(list.iter())`).
    pub fn extend_from<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = items.into_iter().collect();
        if incoming.is_empty() {
            return;
        }

        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            let index = backing.len();
            tracing::trace!(
                target: targets::LIST,
                list = self.config().label(),
                index,
                added = incoming.len(),
                "extend_from"
            );
            if record {
                backing.extend(incoming.iter().cloned());
                Some(CollectionChange::Add {
                    items: incoming,
                    index,
                })
            } else {
                backing.extend(incoming);
                None
            }
        };

        self.notify(change, true);
    }

    /// Inserts every item of `items`, the first of them at `index`.
    ///
    /// Raises a single `Add` covering the inserted span. Like
    /// [`extend_from`](Self::extend_from), `items` is drained before the list
    /// is locked.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `index > len()`.
    pub fn insert_range<I>(&self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = items.into_iter().collect();

        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            validate_insert_index(backing.len(), index)?;
            if incoming.is_empty() {
                return Ok(());
            }
            tracing::trace!(
                target: targets::LIST,
                list = self.config().label(),
                index,
                added = incoming.len(),
                "insert_range"
            );

            if record {
                backing.splice(index..index, incoming.iter().cloned());
                Some(CollectionChange::Add {
                    items: incoming,
                    index,
                })
            } else {
                backing.splice(index..index, incoming);
                None
            }
        };

        self.notify(change, true);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------------

    /// Moves the item at `old_index` so that it ends up at `new_index`.
    ///
    /// Raises one `Move`. Equal indices are a no-op.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if either index is `>= len()`.
    pub fn move_item(&self, old_index: usize, new_index: usize) -> Result<()> {
        self.move_block(old_index, 1, new_index, true)
    }

    /// Moves the `count` items starting at `old_index`.
    ///
    /// Moving backward (`new_index < old_index`), the block ends up starting
    /// at `new_index`: the span `[new_index, old_index + count)` is rotated
    /// right by `count`. Moving forward, the block ends up with its last item
    /// at `new_index`: the span `[old_index, new_index + 1)` is rotated left
    /// by `count`. Raises one `Move` when anything moved.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidRange`] if the block does not fit in the list,
    /// or if a forward move would place the block's end before its own end.
    pub fn move_range(&self, old_index: usize, count: usize, new_index: usize) -> Result<()> {
        self.move_block(old_index, count, new_index, false)
    }

    /// `move_range`, optionally checking both indices as element positions
    /// first (the `move_item` contract). Validation and mutation share one
    /// critical section.
    fn move_block(
        &self,
        old_index: usize,
        count: usize,
        new_index: usize,
        element_indices: bool,
    ) -> Result<()> {
        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            let len = backing.len();
            if element_indices {
                validate_index(len, old_index)?;
                validate_index(len, new_index)?;
            }
            validate_range(len, old_index, count)?;
            if new_index == old_index {
                return Ok(());
            }

            let moved = if new_index > old_index {
                if new_index >= len || new_index + 1 < old_index + count {
                    return Err(CollectionError::InvalidRange {
                        index: new_index,
                        count,
                        len,
                    });
                }
                let span = new_index + 1 - old_index;
                let snapshot = record.then(|| backing[old_index..old_index + count].to_vec());
                rotate::rotate_left_by(&mut backing, old_index, span, count)?.then_some(snapshot)
            } else {
                let span = old_index + count - new_index;
                let snapshot = record.then(|| backing[old_index..old_index + count].to_vec());
                rotate::rotate_right_by(&mut backing, new_index, span, count)?.then_some(snapshot)
            };

            let Some(snapshot) = moved else {
                return Ok(());
            };
            tracing::trace!(
                target: targets::LIST,
                list = self.config().label(),
                old_index,
                new_index,
                count,
                "move_range"
            );
            snapshot.map(|items| CollectionChange::Move {
                items,
                new_index,
                old_index,
            })
        };

        self.notify(change, false);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Bulk removal
    // -------------------------------------------------------------------------

    /// Removes the `count` items starting at `index`.
    ///
    /// Raises one `Remove` unless `count` is zero.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidRange`] if the span does not fit in the list.
    pub fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            validate_range(backing.len(), index, count)?;
            if count == 0 {
                return Ok(());
            }

            let removed: Vec<T> = backing.drain(index..index + count).collect();
            tracing::trace!(
                target: targets::LIST,
                list = self.config().label(),
                index,
                count,
                "remove_range"
            );
            record.then_some(CollectionChange::Remove {
                items: removed,
                index,
            })
        };

        self.notify(change, true);
        Ok(())
    }

    /// Removes every item for which `doomed` returns `true`.
    ///
    /// The list is scanned from the end toward the start, accumulating runs of
    /// contiguous doomed items. Each maximal run is reported as one `Remove`,
    /// highest index first, so the index of every record is still valid after
    /// the records before it have been replayed. The backing vector is rebuilt
    /// in a single pass and reflects the whole removal before the first record
    /// is delivered. The count signal fires once.
    ///
    /// `doomed` runs over a snapshot with no lock held, so it may read the
    /// list. If the list is mutated before the removal is applied, nothing is
    /// removed.
    ///
    /// Returns the number of items removed.
    pub fn remove_where<F>(&self, mut doomed: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let snapshot = self.to_vec();
        let marks: Vec<bool> = snapshot.iter().map(&mut doomed).collect();
        if !marks.contains(&true) {
            return 0;
        }

        self.remove_marked("remove_where", |current| {
            if current == snapshot.as_slice() {
                Some(marks)
            } else {
                tracing::warn!(
                    target: targets::LIST,
                    list = self.config().label(),
                    "list changed while evaluating remove_where; nothing removed"
                );
                None
            }
        })
    }

    /// Removes the items flagged by `mark`, which sees the locked contents and
    /// returns one flag per item, or `None` to abort.
    fn remove_marked<M>(&self, operation: &'static str, mark: M) -> usize
    where
        M: FnOnce(&[T]) -> Option<Vec<bool>>,
    {
        let _span = PerfSpan::new(operation);
        let record = self.wants_records();
        let (changes, removed_total) = {
            let mut backing = self.write_items();
            let Some(marks) = mark(backing.as_slice()) else {
                return 0;
            };

            // Maximal runs as (start, length), highest start first.
            let mut runs: Vec<(usize, usize)> = Vec::new();
            let mut pending = 0usize;
            for i in (0..marks.len()).rev() {
                if marks[i] {
                    pending += 1;
                } else if pending > 0 {
                    runs.push((i + 1, pending));
                    pending = 0;
                }
            }
            if pending > 0 {
                runs.push((0, pending));
            }
            if runs.is_empty() {
                return 0;
            }

            let removed_total: usize = runs.iter().map(|&(_, length)| length).sum();
            let mut removed: Vec<Vec<T>> = runs
                .iter()
                .map(|&(_, length)| Vec::with_capacity(length))
                .collect();
            let mut kept = Vec::with_capacity(backing.len() - removed_total);

            // Walk forward; runs[slot - 1] is the lowest run not yet passed.
            let mut slot = runs.len();
            for (i, item) in std::mem::take(&mut *backing).into_iter().enumerate() {
                while slot > 0 && runs[slot - 1].0 + runs[slot - 1].1 <= i {
                    slot -= 1;
                }
                if slot > 0 && i >= runs[slot - 1].0 {
                    removed[slot - 1].push(item);
                } else {
                    kept.push(item);
                }
            }
            *backing = kept;

            tracing::debug!(
                target: targets::LIST,
                list = self.config().label(),
                runs = runs.len(),
                removed = removed_total,
                "{operation}"
            );

            let changes = if record {
                runs.iter()
                    .zip(removed)
                    .map(|(&(index, _), items)| CollectionChange::Remove { items, index })
                    .collect()
            } else {
                Vec::new()
            };
            (changes, removed_total)
        };

        self.notify_all(changes, true);
        removed_total
    }

    // -------------------------------------------------------------------------
    // Reversal
    // -------------------------------------------------------------------------

    /// Reverses the whole list.
    ///
    /// Raises one `Replace` of the full contents if the list holds more than
    /// one item.
    pub fn reverse(&self) {
        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            if backing.len() < 2 {
                return;
            }
            let old_items = record.then(|| backing.clone());
            backing.reverse();
            tracing::trace!(target: targets::LIST, list = self.config().label(), "reverse");
            old_items.map(|old_items| CollectionChange::Replace {
                new_items: backing.clone(),
                old_items,
                index: 0,
            })
        };

        self.notify(change, false);
    }

    /// Reverses the `count` items starting at `index`.
    ///
    /// Raises one `Replace` over the span if it holds more than one item.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidRange`] if the span does not fit in the list.
    pub fn reverse_range(&self, index: usize, count: usize) -> Result<()> {
        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            validate_range(backing.len(), index, count)?;
            if count < 2 {
                return Ok(());
            }
            let span = index..index + count;
            let old_items = record.then(|| backing[span.clone()].to_vec());
            backing[span.clone()].reverse();
            tracing::trace!(
                target: targets::LIST,
                list = self.config().label(),
                index,
                count,
                "reverse_range"
            );
            old_items.map(|old_items| CollectionChange::Replace {
                new_items: backing[span].to_vec(),
                old_items,
                index,
            })
        };

        self.notify(change, false);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rotation
    // -------------------------------------------------------------------------

    /// Rotates the whole list left by `count` places.
    ///
    /// Negative counts rotate right. Raises one `Replace` of the full
    /// contents unless the list has fewer than two items or `count` is a
    /// multiple of the length.
    pub fn rotate_left(&self, count: isize) {
        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            let len = backing.len();
            if len < 2 || modulo(count, len) == 0 {
                return;
            }
            let old_items = record.then(|| backing.clone());
            // The whole-list span always fits, so this cannot fail.
            if !matches!(rotate::rotate_left(&mut backing, 0, len, count), Ok(true)) {
                return;
            }
            tracing::trace!(target: targets::LIST, list = self.config().label(), count, "rotate_left");
            old_items.map(|old_items| CollectionChange::Replace {
                new_items: backing.clone(),
                old_items,
                index: 0,
            })
        };

        self.notify(change, false);
    }

    /// Rotates the whole list right by `count` places.
    ///
    /// Equivalent to [`rotate_left`](Self::rotate_left) with `count` negated.
    pub fn rotate_right(&self, count: isize) {
        let len = self.len();
        if len < 2 {
            return;
        }
        // Negate after canonicalizing so isize::MIN cannot overflow.
        let right = modulo(count, len);
        self.rotate_left(((len - right) % len) as isize);
    }

    /// Rotates the `item_count` items starting at `index` left by
    /// `rotate_count` places.
    ///
    /// Raises one `Replace` over the span if anything moved.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidRange`] if the span does not fit in the list.
    pub fn rotate_range_left(&self, index: usize, item_count: usize, rotate_count: isize) -> Result<()> {
        self.rotate_range(index, item_count, rotate_count, rotate::rotate_left)
    }

    /// Rotates the `item_count` items starting at `index` right by
    /// `rotate_count` places.
    ///
    /// Equivalent to [`rotate_range_left`](Self::rotate_range_left) with
    /// `rotate_count` negated.
    pub fn rotate_range_right(&self, index: usize, item_count: usize, rotate_count: isize) -> Result<()> {
        self.rotate_range(index, item_count, rotate_count, rotate::rotate_right)
    }

    fn rotate_range(
        &self,
        index: usize,
        item_count: usize,
        rotate_count: isize,
        rotation: fn(&mut [T], usize, usize, isize) -> Result<bool>,
    ) -> Result<()> {
        let record = self.wants_records();
        let change = {
            let mut backing = self.write_items();
            validate_range(backing.len(), index, item_count)?;
            let span = index..index + item_count;
            let old_items = record.then(|| backing[span.clone()].to_vec());
            if !rotation(&mut backing, index, item_count, rotate_count)? {
                return Ok(());
            }
            tracing::trace!(
                target: targets::LIST,
                list = self.config().label(),
                index,
                item_count,
                rotate_count,
                "rotate_range"
            );
            old_items.map(|old_items| CollectionChange::Replace {
                new_items: backing[span].to_vec(),
                old_items,
                index,
            })
        };

        self.notify(change, false);
        Ok(())
    }
}

impl<T: Clone + Eq + Hash + Send + Sync + 'static> ObservableList<T> {
    /// Removes every item equal to any item of `items`.
    ///
    /// See [`remove_where`](Self::remove_where) for how removals are reported.
    /// `items` is collected before the list is locked.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_collections::ObservableList;
    ///
    /// let list = ObservableList::from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(list.remove_all([1, 2, 4, 5]), 4);
    /// assert_eq!(list.to_vec(), vec![3]);
    /// ```
    pub fn remove_all<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let doomed: HashSet<T> = items.into_iter().collect();
        if doomed.is_empty() {
            return 0;
        }
        self.remove_marked("remove_all", |current| {
            Some(current.iter().map(|item| doomed.contains(item)).collect())
        })
    }
}
