//! Logging and tracing facilities for Horizon Collections.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Target and span names for filtering collection traces
//! - Performance tracing hooks for timing bulk operations
//!
//! # Tracing Integration
//!
//! Horizon Collections uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_collections=trace")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Horizon Collections for tracing.
pub mod span_names {
    /// Timing span opened by [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "horizon_collections::perf";
    /// Delivery of a batch of change records from one list operation.
    pub const LIST_OPERATION: &str = "horizon_collections::list_operation";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_collections_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_collections_core::signal";
    /// Observable list mutations.
    pub const LIST: &str = "horizon_collections::list";
    /// Loosely-typed interop entry points.
    pub const INTEROP: &str = "horizon_collections::interop";
    /// Performance spans.
    pub const PERF: &str = "horizon_collections::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for measuring how long a bulk operation takes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, span_names::PERF, operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros pinned to
/// [`targets::CORE`].
#[macro_export]
macro_rules! collections_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! collections_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_perf_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("bulk_insert");
            collections_trace!(items = 3, "inside span");
            collections_debug!("debug event");
        });
    }

    #[test]
    fn test_targets_share_prefix() {
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        assert!(targets::LIST.starts_with("horizon_collections"));
        assert!(targets::PERF.starts_with("horizon_collections::"));
        assert_eq!(span_names::PERF, targets::PERF);
        assert!(span_names::LIST_OPERATION.starts_with("horizon_collections::"));
    }
}
