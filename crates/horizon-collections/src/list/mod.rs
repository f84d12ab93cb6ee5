//! Observable list: an ordered collection that reports its own mutations.
//!
//! # Core Types
//!
//! - `ObservableList`: The collection, with primitive and composite mutators
//! - `CollectionChange`: One structural change record
//! - `ListSignals`: The structural and count notification channels
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────────┐  CollectionChange  ┌─────────────┐
//! │ ObservableList │──────────────────>│    View     │
//! │   (Vec<T>)     │  count (usize)     │  (mirror)   │
//! └────────────────┘──────────────────>└─────────────┘
//! ```
//!
//! Every mutator validates, mutates the backing vector, releases its lock,
//! then emits its records followed by at most one count signal.

mod change;
mod composite;
mod observable_list;
mod signals;

pub use change::{ChangeAction, CollectionChange};
pub use observable_list::{Iter, ObservableList};
pub use signals::ListSignals;
