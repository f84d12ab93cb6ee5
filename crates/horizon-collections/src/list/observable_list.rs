//! The observable list and its primitive mutators.
//!
//! `ObservableList<T>` owns an ordered sequence and reports every mutation on
//! two channels (see [`ListSignals`]). Primitive mutators touch a single
//! element or a single insertion point and raise at most one record each.
//! Composite operations live in `composite.rs`.

use std::fmt;

use parking_lot::RwLock;

use horizon_collections_core::logging::{span_names, targets};

use super::change::CollectionChange;
use super::signals::ListSignals;
use crate::config::ListConfig;
use crate::error::{CollectionError, Result};
use crate::range::{validate_index, validate_insert_index};

/// An ordered, indexable collection that emits change notifications.
///
/// All mutators take `&self`; the backing vector sits behind a lock that is
/// always released before any signal is emitted. A slot connected to one of
/// the list's signals may therefore read or mutate the list while it is being
/// notified. The nested call runs to completion, including its own count
/// signal, before the outer call emits its count signal.
///
/// Do not call a mutator while holding the guard returned by
/// [`items`](Self::items); the lock is not reentrant.
///
/// # Example
///
/// ```
/// use horizon_collections::{CollectionChange, ObservableList};
/// use std::sync::{Arc, Mutex};
///
/// let list = ObservableList::from_vec(vec![1, 2, 3]);
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let recv = seen.clone();
/// list.signals().collection_changed.connect(move |change| {
///     recv.lock().unwrap().push(change.clone());
/// });
///
/// list.push(4);
/// assert_eq!(
///     seen.lock().unwrap()[0],
///     CollectionChange::Add { items: vec![4], index: 3 }
/// );
/// ```
pub struct ObservableList<T: 'static> {
    items: RwLock<Vec<T>>,
    signals: ListSignals<T>,
    config: ListConfig,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ObservableList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), ListConfig::default())
    }

    /// Creates a list holding `items`. No notification fires for them.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_parts(items, ListConfig::default())
    }

    /// Creates an empty list with the given configuration.
    pub fn with_config(config: ListConfig) -> Self {
        Self::from_parts(Vec::new(), config)
    }

    pub(crate) fn from_parts(mut items: Vec<T>, config: ListConfig) -> Self {
        items.reserve(config.initial_capacity.saturating_sub(items.len()));
        Self {
            items: RwLock::new(items),
            signals: ListSignals::new(),
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns the capacity of the backing vector.
    pub fn capacity(&self) -> usize {
        self.items.read().capacity()
    }

    /// Returns a clone of the item at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.read().get(index).cloned()
    }

    /// Returns `true` if the list contains an item equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.read().contains(item)
    }

    /// Returns the index of the first item equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.read().iter().position(|candidate| candidate == item)
    }

    /// Returns a copy of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Returns a read guard over the items.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Runs `f` with a view of the current contents.
    pub fn with_items<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        f(&self.items.read())
    }

    /// Returns a lazy iterator over the list.
    ///
    /// Each step reads the element at the next position at that moment; no
    /// snapshot is taken. Call `iter` again to restart.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: 0,
        }
    }

    /// Copies the contents into `target`, starting at `offset`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `target` has fewer than
    /// `len()` slots from `offset` onward. Nothing is written in that case.
    pub fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()> {
        let items = self.items.read();
        let room = target.len().checked_sub(offset).ok_or_else(|| {
            CollectionError::InvalidArgument(format!(
                "offset {offset} exceeds the target length {}",
                target.len()
            ))
        })?;
        if room < items.len() {
            return Err(CollectionError::InvalidArgument(
                "the target slice is too small".to_string(),
            ));
        }

        target[offset..offset + items.len()].clone_from_slice(&items);
        Ok(())
    }

    /// Returns the signals for this list.
    pub fn signals(&self) -> &ListSignals<T> {
        &self.signals
    }

    /// Returns the configuration this list was created with.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Primitive mutators
    // -------------------------------------------------------------------------

    /// Appends an item to the end of the list.
    ///
    /// Raises `Add` at the old length, then the count signal.
    pub fn push(&self, item: T) {
        let record = self.wants_records();
        let change = {
            let mut items = self.items.write();
            let index = items.len();
            let change = record.then(|| CollectionChange::Add {
                items: vec![item.clone()],
                index,
            });
            items.push(item);
            tracing::trace!(target: targets::LIST, list = self.config.label(), index, "push");
            change
        };

        self.notify(change, true);
    }

    /// Inserts an item at `index`, shifting later items up.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `index > len()`.
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        let record = self.wants_records();
        let change = {
            let mut items = self.items.write();
            validate_insert_index(items.len(), index)?;
            let change = record.then(|| CollectionChange::Add {
                items: vec![item.clone()],
                index,
            });
            items.insert(index, item);
            tracing::trace!(target: targets::LIST, list = self.config.label(), index, "insert");
            change
        };

        self.notify(change, true);
        Ok(())
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `index >= len()`.
    pub fn remove_at(&self, index: usize) -> Result<T> {
        let record = self.wants_records();
        let (removed, change) = {
            let mut items = self.items.write();
            validate_index(items.len(), index)?;
            let removed = items.remove(index);
            tracing::trace!(target: targets::LIST, list = self.config.label(), index, "remove_at");
            let change = record.then(|| CollectionChange::Remove {
                items: vec![removed.clone()],
                index,
            });
            (removed, change)
        };

        self.notify(change, true);
        Ok(removed)
    }

    /// Removes the first item equal to `item`.
    ///
    /// Returns `false`, raising nothing, if no such item exists.
    pub fn remove(&self, item: &T) -> bool {
        let record = self.wants_records();
        let change = {
            let mut items = self.items.write();
            let Some(index) = items.iter().position(|candidate| candidate == item) else {
                return false;
            };
            let removed = items.remove(index);
            tracing::trace!(target: targets::LIST, list = self.config.label(), index, "remove");
            record.then(|| CollectionChange::Remove {
                items: vec![removed],
                index,
            })
        };

        self.notify(change, true);
        true
    }

    /// Replaces the item at `index`, returning the previous item.
    ///
    /// Raises `Replace` at `index`. The count does not change.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `index >= len()`.
    pub fn set(&self, index: usize, value: T) -> Result<T> {
        let record = self.wants_records();
        let (old, change) = {
            let mut items = self.items.write();
            validate_index(items.len(), index)?;
            let change = record.then(|| CollectionChange::Replace {
                new_items: vec![value.clone()],
                old_items: vec![items[index].clone()],
                index,
            });
            let old = std::mem::replace(&mut items[index], value);
            tracing::trace!(target: targets::LIST, list = self.config.label(), index, "set");
            (old, change)
        };

        self.notify(change, false);
        Ok(old)
    }

    /// Removes every item.
    ///
    /// Raises one `Remove` of all items at index 0. Clearing an empty list
    /// raises nothing.
    pub fn clear(&self) {
        let old_items = std::mem::take(&mut *self.items.write());
        if old_items.is_empty() {
            return;
        }
        tracing::trace!(target: targets::LIST, list = self.config.label(), removed = old_items.len(), "clear");

        let change = self.wants_records().then(|| CollectionChange::Remove {
            items: old_items,
            index: 0,
        });
        self.notify(change, true);
    }

    // -------------------------------------------------------------------------
    // Notification helpers
    // -------------------------------------------------------------------------

    /// Whether this call should build change records at all.
    pub(crate) fn wants_records(&self) -> bool {
        self.config.snapshot_when_unobserved || self.signals.is_observed()
    }

    /// Raises at most one record, then the count signal if `count_changed`.
    ///
    /// Must be called with the items lock released.
    pub(crate) fn notify(&self, change: Option<CollectionChange<T>>, count_changed: bool) {
        self.signals
            .emit_changes(change, count_changed, || self.len());
    }

    /// Raises a batch of records in order, then the count signal once.
    pub(crate) fn notify_all(&self, changes: Vec<CollectionChange<T>>, count_changed: bool) {
        let _span = tracing::trace_span!(
            target: targets::LIST,
            span_names::LIST_OPERATION,
            list = self.config.label(),
            records = changes.len()
        )
        .entered();
        self.signals
            .emit_changes(changes, count_changed, || self.len());
    }

    /// Write access to the backing vector for composite operations.
    pub(crate) fn write_items(&self) -> parking_lot::RwLockWriteGuard<'_, Vec<T>> {
        self.items.write()
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> FromIterator<T> for ObservableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableList")
            .field("name", &self.config.name)
            .field("items", &*self.items.read())
            .finish()
    }
}

impl<'a, T: Clone + PartialEq + Send + Sync + 'static> IntoIterator for &'a ObservableList<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over an [`ObservableList`], yielding clones.
pub struct Iter<'a, T: 'static> {
    list: &'a ObservableList<T>,
    next: usize,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.list.get(self.next)?;
        self.next += 1;
        Some(item)
    }
}

static_assertions::assert_impl_all!(ObservableList<i32>: Send, Sync);
static_assertions::assert_impl_all!(ObservableList<String>: Send, Sync);
