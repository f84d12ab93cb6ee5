//! Recording of list notifications for debugging and tests.

use std::fmt;
use std::sync::Arc;

use horizon_collections_core::ConnectionId;
use parking_lot::Mutex;

use crate::error::Result;
use crate::list::{CollectionChange, ObservableList};

/// One notification captured by a [`ChangeRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent<T> {
    /// A structural record from `collection_changed`.
    Change(CollectionChange<T>),
    /// A `count_changed` emission.
    Count(usize),
}

/// Subscribes to both signals of a list and keeps everything it receives,
/// interleaved in delivery order.
///
/// # Example
///
/// ```
/// use horizon_collections::{ChangeRecorder, ObservableList};
///
/// let list = ObservableList::from_vec(vec![1, 2, 3]);
/// let recorder = ChangeRecorder::attach(&list);
///
/// list.reverse();
/// list.push(0);
///
/// assert_eq!(recorder.changes().len(), 2);
/// assert_eq!(recorder.counts(), vec![4]);
/// assert_eq!(recorder.replay(vec![1, 2, 3]).unwrap(), list.to_vec());
/// println!("{recorder}");
/// ```
pub struct ChangeRecorder<T: 'static> {
    events: Arc<Mutex<Vec<RecordedEvent<T>>>>,
    change_connection: ConnectionId,
    count_connection: ConnectionId,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ChangeRecorder<T> {
    /// Connects a new recorder to `list`.
    pub fn attach(list: &ObservableList<T>) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));

        let recv = events.clone();
        let change_connection = list
            .signals()
            .collection_changed
            .connect(move |change: &CollectionChange<T>| {
                recv.lock().push(RecordedEvent::Change(change.clone()));
            });

        let recv = events.clone();
        let count_connection = list
            .signals()
            .count_changed
            .connect(move |&count| recv.lock().push(RecordedEvent::Count(count)));

        Self {
            events,
            change_connection,
            count_connection,
        }
    }

    /// Disconnects from `list`. Calling this more than once is harmless.
    pub fn detach(&self, list: &ObservableList<T>) {
        list.signals().collection_changed.disconnect(self.change_connection);
        list.signals().count_changed.disconnect(self.count_connection);
    }

    /// Every event received so far, in delivery order.
    pub fn events(&self) -> Vec<RecordedEvent<T>> {
        self.events.lock().clone()
    }

    /// The structural records received so far.
    pub fn changes(&self) -> Vec<CollectionChange<T>> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                RecordedEvent::Change(change) => Some(change.clone()),
                RecordedEvent::Count(_) => None,
            })
            .collect()
    }

    /// The payloads of the count signals received so far.
    pub fn counts(&self) -> Vec<usize> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                RecordedEvent::Count(count) => Some(*count),
                RecordedEvent::Change(_) => None,
            })
            .collect()
    }

    /// Returns `true` if any count signal was received.
    pub fn count_changed(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|event| matches!(event, RecordedEvent::Count(_)))
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<RecordedEvent<T>> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Replays the recorded changes, in order, on top of `initial`.
    pub fn replay(&self, mut initial: Vec<T>) -> Result<Vec<T>> {
        for change in self.changes() {
            change.apply(&mut initial)?;
        }
        Ok(initial)
    }
}

impl<T: fmt::Debug + 'static> fmt::Display for ChangeRecorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events = self.events.lock();
        writeln!(f, "Recorded events ({} total):", events.len())?;
        if events.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for event in events.iter() {
            match event {
                RecordedEvent::Change(change) => writeln!(f, "  {change}")?,
                RecordedEvent::Count(count) => writeln!(f, "  count -> {count}")?,
            }
        }
        Ok(())
    }
}
