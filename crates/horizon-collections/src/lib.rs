//! Horizon Collections - observable collections with index-exact change
//! notifications.
//!
//! An [`ObservableList`] reports every mutation on two channels: a structural
//! channel carrying [`CollectionChange`] records precise enough to replay the
//! mutation on a mirror, and a count channel that fires only when the number
//! of items actually changed. Composite operations (block moves, multi-item
//! removal, reversal, rotation) raise the fewest records that describe their
//! net effect.
//!
//! # Example
//!
//! ```
//! use horizon_collections::{ChangeRecorder, CollectionChange, ObservableList};
//!
//! let list = ObservableList::from_vec(vec![1, 2, 3, 4, 5]);
//! let recorder = ChangeRecorder::attach(&list);
//!
//! list.move_range(0, 2, 3).unwrap();
//! assert_eq!(list.to_vec(), vec![3, 4, 1, 2, 5]);
//! assert_eq!(
//!     recorder.changes(),
//!     vec![CollectionChange::Move { items: vec![1, 2], new_index: 3, old_index: 0 }]
//! );
//!
//! // Moves never change the count.
//! assert!(!recorder.count_changed());
//! ```
//!
//! # Building a list
//!
//! ```
//! use horizon_collections::ObservableListBuilder;
//!
//! let list = ObservableListBuilder::new()
//!     .name("inventory")
//!     .capacity(16)
//!     .items(["a", "b"])
//!     .build();
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Logging
//!
//! Mutations are traced under the `horizon_collections::list` target and
//! signal delivery under `horizon_collections_core::signal`. Install any
//! `tracing` subscriber to see them.

mod config;
mod error;
pub mod interop;
pub mod list;
pub mod math;
pub mod range;
mod recorder;
pub mod rotate;

pub use config::{ListConfig, ObservableListBuilder};
pub use error::{CollectionError, Result};
pub use interop::{DynList, ErasedArray};
pub use list::{ChangeAction, CollectionChange, Iter, ListSignals, ObservableList};
pub use recorder::{ChangeRecorder, RecordedEvent};

pub use horizon_collections_core::{ConnectionGuard, ConnectionId, Signal};
