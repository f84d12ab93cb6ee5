//! Configuration for observable lists.

use crate::list::ObservableList;

/// Configuration for an [`ObservableList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConfig {
    /// Label attached to the list's tracing events.
    pub name: Option<String>,
    /// Number of elements to pre-allocate room for.
    pub initial_capacity: usize,
    /// Build change records even while nobody is connected to
    /// `collection_changed`.
    ///
    /// Off by default: an unobserved list skips snapshotting entirely. The
    /// count signal is unaffected.
    pub snapshot_when_unobserved: bool,
}

impl ListConfig {
    /// Create a new configuration with the given list name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// The label used in tracing output.
    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Builder for creating observable lists with custom configuration.
///
/// # Example
///
/// ```
/// use horizon_collections::ObservableListBuilder;
///
/// let list = ObservableListBuilder::new()
///     .name("playlist")
///     .capacity(64)
///     .items(vec!["intro", "verse"])
///     .build();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.config().name.as_deref(), Some("playlist"));
/// ```
#[derive(Debug)]
pub struct ObservableListBuilder<T> {
    config: ListConfig,
    items: Vec<T>,
}

impl<T> Default for ObservableListBuilder<T> {
    fn default() -> Self {
        Self {
            config: ListConfig::default(),
            items: Vec::new(),
        }
    }
}

impl<T> ObservableListBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list name used in tracing output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Set the initial capacity of the backing vector.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set whether change records are built while unobserved.
    pub fn snapshot_when_unobserved(mut self, enabled: bool) -> Self {
        self.config.snapshot_when_unobserved = enabled;
        self
    }

    /// Set the initial contents. No notification fires for them.
    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ObservableListBuilder<T> {
    /// Build the list.
    pub fn build(self) -> ObservableList<T> {
        ObservableList::from_parts(self.items, self.config)
    }
}
