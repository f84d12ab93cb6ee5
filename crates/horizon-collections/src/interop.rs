//! Loosely-typed access to observable lists.
//!
//! [`DynList`] is an object-safe view of an [`ObservableList`] that accepts and
//! returns type-erased values, for hosts that only know they hold "some list".
//! It is a thin adapter over the strongly-typed API.
//!
//! The entry points differ in how they treat a value of the wrong type, and
//! the difference is part of the contract:
//!
//! - [`add_dyn`](DynList::add_dyn) declines: it returns `None` and raises
//!   nothing.
//! - [`insert_dyn`](DynList::insert_dyn) and [`set_dyn`](DynList::set_dyn)
//!   fail with [`CollectionError::InvalidCast`].
//! - Lookups ([`contains_dyn`](DynList::contains_dyn),
//!   [`index_of_dyn`](DynList::index_of_dyn),
//!   [`remove_dyn`](DynList::remove_dyn)) treat a mismatch as "not found".

use std::any::{Any, type_name};

use horizon_collections_core::logging::targets;

use crate::error::{CollectionError, Result};
use crate::list::ObservableList;

/// Object-safe, loosely-typed list operations.
pub trait DynList: Send + Sync {
    /// Returns the number of items.
    fn len_dyn(&self) -> usize;

    /// Appends `value` if it has the element type.
    ///
    /// Returns the new count, or `None` (raising nothing) on a type mismatch.
    fn add_dyn(&self, value: Box<dyn Any>) -> Option<usize>;

    /// Inserts `value` at `index`.
    ///
    /// The type is checked before the index, so a mistyped value always
    /// yields `InvalidCast`.
    fn insert_dyn(&self, index: usize, value: Box<dyn Any>) -> Result<()>;

    /// Replaces the item at `index` with `value`.
    fn set_dyn(&self, index: usize, value: Box<dyn Any>) -> Result<()>;

    /// Returns a boxed clone of the item at `index`.
    fn get_dyn(&self, index: usize) -> Option<Box<dyn Any + Send>>;

    /// Returns `true` if an equal item exists.
    fn contains_dyn(&self, value: &dyn Any) -> bool;

    /// Returns the index of the first equal item.
    fn index_of_dyn(&self, value: &dyn Any) -> Option<usize>;

    /// Removes the first equal item, if any.
    fn remove_dyn(&self, value: &dyn Any);

    /// Copies every item into `array`, starting at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `array` is not one-dimensional
    /// or has fewer than `len_dyn()` slots from `index` onward.
    fn copy_to_array(&self, array: &mut ErasedArray, index: usize) -> Result<()>;
}

/// A loosely-typed, possibly multi-dimensional buffer of optional values.
///
/// Slots are stored in row-major order; a fresh array has every slot empty.
pub struct ErasedArray {
    shape: Vec<usize>,
    slots: Vec<Option<Box<dyn Any + Send>>>,
}

impl ErasedArray {
    /// Creates a one-dimensional array of `len` empty slots.
    pub fn new(len: usize) -> Self {
        Self::with_shape(&[len])
    }

    /// Creates an array with the given dimensions.
    pub fn with_shape(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value in slot `index`, if the slot is filled.
    pub fn get(&self, index: usize) -> Option<&(dyn Any + Send)> {
        self.slots.get(index)?.as_deref()
    }

    /// Returns the value in slot `index` if it has type `U`.
    pub fn get_as<U: Any>(&self, index: usize) -> Option<&U> {
        let value: &dyn Any = self.get(index)?;
        value.downcast_ref::<U>()
    }

    /// Stores `value` in slot `index`, returning `false` if out of bounds.
    pub fn set(&mut self, index: usize, value: Box<dyn Any + Send>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }
}

impl<T> ObservableList<T>
where
    T: Any + Clone + PartialEq + Send + Sync,
{
    fn cast(value: Box<dyn Any>) -> Result<T> {
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| CollectionError::InvalidCast {
                expected: type_name::<T>(),
            })
    }
}

impl<T> DynList for ObservableList<T>
where
    T: Any + Clone + PartialEq + Send + Sync,
{
    fn len_dyn(&self) -> usize {
        self.len()
    }

    fn add_dyn(&self, value: Box<dyn Any>) -> Option<usize> {
        match Self::cast(value) {
            Ok(item) => {
                self.push(item);
                Some(self.len())
            }
            Err(_) => {
                tracing::debug!(
                    target: targets::INTEROP,
                    expected = type_name::<T>(),
                    "add_dyn declined a value of another type"
                );
                None
            }
        }
    }

    fn insert_dyn(&self, index: usize, value: Box<dyn Any>) -> Result<()> {
        let item = Self::cast(value)?;
        self.insert(index, item)
    }

    fn set_dyn(&self, index: usize, value: Box<dyn Any>) -> Result<()> {
        let item = Self::cast(value)?;
        self.set(index, item).map(|_| ())
    }

    fn get_dyn(&self, index: usize) -> Option<Box<dyn Any + Send>> {
        self.get(index)
            .map(|item| Box::new(item) as Box<dyn Any + Send>)
    }

    fn contains_dyn(&self, value: &dyn Any) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|item| self.contains(item))
    }

    fn index_of_dyn(&self, value: &dyn Any) -> Option<usize> {
        self.index_of(value.downcast_ref::<T>()?)
    }

    fn remove_dyn(&self, value: &dyn Any) {
        if let Some(item) = value.downcast_ref::<T>() {
            self.remove(item);
        }
    }

    fn copy_to_array(&self, array: &mut ErasedArray, index: usize) -> Result<()> {
        if array.rank() != 1 {
            return Err(CollectionError::InvalidArgument(
                "multi-dimensional arrays are not supported".to_string(),
            ));
        }

        let items = self.to_vec();
        let room = array.len().saturating_sub(index);
        if index > array.len() || room < items.len() {
            return Err(CollectionError::InvalidArgument(
                "the target array is too small".to_string(),
            ));
        }

        for (offset, item) in items.into_iter().enumerate() {
            array.set(index + offset, Box::new(item));
        }
        Ok(())
    }
}
