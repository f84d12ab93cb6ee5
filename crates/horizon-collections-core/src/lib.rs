//! Core systems for Horizon Collections.
//!
//! This crate provides the building blocks the observable collections are made
//! of, with no knowledge of collections themselves:
//!
//! - **Signal/Slot System**: Type-safe, synchronous observer channels
//! - **Errors**: Error types for signal misuse
//! - **Logging**: `tracing` targets, span names and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_collections_core::Signal;
//!
//! // Create a signal that notifies when a count changes
//! let count_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = count_changed.connect(|count| {
//!     println!("Count is now: {}", count);
//! });
//!
//! // Emit the signal
//! count_changed.emit(3);
//!
//! // Disconnect when done
//! count_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
