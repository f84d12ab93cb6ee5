//! Notification channels of an observable list.

use horizon_collections_core::Signal;

use super::change::CollectionChange;

/// The two independent signals an observable list emits on.
///
/// - `collection_changed` carries one [`CollectionChange`] per logically
///   atomic mutation (several, in order, for `remove_all`).
/// - `count_changed` carries the element count, and fires at most once per
///   mutating call, only when that call changed the count.
///
/// Views connect to both to stay synchronized with the list.
pub struct ListSignals<T: 'static> {
    /// Emitted after the backing sequence changed.
    /// Args: the change record
    pub collection_changed: Signal<CollectionChange<T>>,

    /// Emitted after the structural records of a call, if the call changed
    /// the element count.
    /// Args: the element count at the time of emission
    pub count_changed: Signal<usize>,
}

impl<T: 'static> Default for ListSignals<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ListSignals<T> {
    /// Creates a new set of list signals.
    pub fn new() -> Self {
        Self {
            collection_changed: Signal::new(),
            count_changed: Signal::new(),
        }
    }

    /// Returns `true` if a structural record emitted now would reach anyone.
    pub fn is_observed(&self) -> bool {
        !self.collection_changed.is_blocked() && self.collection_changed.has_connections()
    }

    /// Emits the records of one call, then the count signal if the count moved.
    ///
    /// Every record is delivered before the count signal fires.
    pub fn emit_changes<I>(&self, changes: I, count_changed: bool, count: impl FnOnce() -> usize)
    where
        I: IntoIterator<Item = CollectionChange<T>>,
    {
        for change in changes {
            self.collection_changed.emit(change);
        }
        if count_changed {
            self.count_changed.emit(count());
        }
    }
}
