//! The backing-store adapter contract consumed by cursors and views.
//!
//! A slot store is a dense array of `(key, value)` entries addressed by slot
//! `0..len()`. Keys are kept in order by the store itself; nothing in this
//! crate ever re-sorts. Slots are *not* stable across structural mutation:
//! removing slot `i` shifts every later slot down by one.

use crate::sieve_error::SieveError;

/// Slot-addressed, key-ordered random-access collection.
///
/// Reads hand out owned keys and values. For object-valued stores with large
/// payloads, instantiate the store with `V = Arc<T>`: traversal and export then
/// clone the handle (cheap) rather than the payload.
///
/// Mutations default to [`SieveError::UnsupportedOperation`], so read-only
/// adapters only implement the three read methods.
pub trait SlotStore {
    /// Key type; ordering is guaranteed by the store.
    type Key: Clone;
    /// Value type.
    type Value: Clone;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Whether the store has zero slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key stored at `slot`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `slot >= len()`.
    fn key_at(&self, slot: usize) -> Result<Self::Key, SieveError>;

    /// Value stored at `slot`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `slot >= len()`.
    fn value_at(&self, slot: usize) -> Result<Self::Value, SieveError>;

    /// Replace the value at `slot`, returning the previous one.
    fn set_value_at(&mut self, slot: usize, value: Self::Value) -> Result<Self::Value, SieveError> {
        let _ = (slot, value);
        Err(SieveError::UnsupportedOperation("set_value_at"))
    }

    /// Remove the entry at `slot`, shifting later slots down by one.
    fn remove_at(&mut self, slot: usize) -> Result<(Self::Key, Self::Value), SieveError> {
        let _ = slot;
        Err(SieveError::UnsupportedOperation("remove_at"))
    }
}

/// Shared borrows read through; mutations are unsupported.
impl<T: SlotStore + ?Sized> SlotStore for &T {
    type Key = T::Key;
    type Value = T::Value;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
    #[inline]
    fn key_at(&self, slot: usize) -> Result<Self::Key, SieveError> {
        (**self).key_at(slot)
    }
    #[inline]
    fn value_at(&self, slot: usize) -> Result<Self::Value, SieveError> {
        (**self).value_at(slot)
    }
}

impl<T: SlotStore + ?Sized> SlotStore for &mut T {
    type Key = T::Key;
    type Value = T::Value;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
    #[inline]
    fn key_at(&self, slot: usize) -> Result<Self::Key, SieveError> {
        (**self).key_at(slot)
    }
    #[inline]
    fn value_at(&self, slot: usize) -> Result<Self::Value, SieveError> {
        (**self).value_at(slot)
    }
    #[inline]
    fn set_value_at(&mut self, slot: usize, value: Self::Value) -> Result<Self::Value, SieveError> {
        (**self).set_value_at(slot, value)
    }
    #[inline]
    fn remove_at(&mut self, slot: usize) -> Result<(Self::Key, Self::Value), SieveError> {
        (**self).remove_at(slot)
    }
}

/// Check `slot < len`, producing the adapter's out-of-range error otherwise.
#[inline]
pub fn check_slot(slot: usize, len: usize) -> Result<(), SieveError> {
    if slot < len {
        Ok(())
    } else {
        Err(SieveError::IndexOutOfRange { slot, len })
    }
}
