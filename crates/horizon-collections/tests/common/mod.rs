//! Shared helpers for the list integration tests.

#![allow(dead_code)]

use std::fmt::Debug;

use horizon_collections::{ChangeRecorder, ObservableList};

/// Routes collection traces to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_collections=trace,horizon_collections_core=debug")
        .with_test_writer()
        .try_init();
}

/// A list under observation together with the contents it started from.
pub struct Observed<T: 'static> {
    pub list: ObservableList<T>,
    pub recorder: ChangeRecorder<T>,
    initial: Vec<T>,
}

impl<T: Clone + PartialEq + Debug + Send + Sync + 'static> Observed<T> {
    pub fn new(items: Vec<T>) -> Self {
        init_tracing();
        let list = ObservableList::from_vec(items.clone());
        let recorder = ChangeRecorder::attach(&list);
        Self {
            list,
            recorder,
            initial: items,
        }
    }

    /// Asserts that replaying every record on the initial contents yields the
    /// current contents, and that the count signal matches the net count
    /// change: one emission carrying the final count, or none at all.
    pub fn assert_consistent(&self) {
        let current = self.list.to_vec();
        let replayed = self
            .recorder
            .replay(self.initial.clone())
            .expect("records replay cleanly");
        assert_eq!(replayed, current, "replayed records diverge from the list");

        let counts = self.recorder.counts();
        if current.len() == self.initial.len() {
            assert!(counts.is_empty(), "count fired without a net change: {counts:?}");
        } else {
            assert_eq!(counts, vec![current.len()]);
        }
    }

    /// Asserts the call raised nothing at all.
    pub fn assert_silent(&self) {
        assert!(
            self.recorder.events().is_empty(),
            "unexpected notifications:\n{}",
            self.recorder
        );
        assert_eq!(self.list.to_vec(), self.initial);
    }
}
