//! Write-side operations: removal, retention and write-through traversal.
//!
//! All of these need a store that supports mutation (`&mut SparseMap`, an
//! owned map, or a translated view over one). Through a shared borrow they
//! fail with [`SieveError::UnsupportedOperation`].

use super::export::read_entry;
use super::{Entry, View, pipeline};
use crate::cursor::{Cursor, FilteringCursor, Probe, RawCursor};
use crate::filter::Not;
use crate::sieve_error::SieveError;
use crate::store::SlotStore;

impl<'a, S: SlotStore + 'a> View<'a, S> {
    /// Delete every selected entry from the store and clear the stage chain.
    ///
    /// The view's direction is kept. Returns how many entries were removed.
    pub fn remove(&mut self) -> Result<usize, SieveError> {
        let mut cursor = self.filtered_cursor(false);
        let removed = drain_removing(cursor.as_mut(), &mut self.store)?;
        self.clear_filters();
        log::debug!("removed {removed} entries; {} remain", self.store.len());
        Ok(removed)
    }

    /// Delete every entry that is *not* selected and clear the stage chain.
    ///
    /// Returns how many entries were removed.
    pub fn retain(&mut self) -> Result<usize, SieveError> {
        let keep = pipeline::capture(&self.store, &self.stages, self.reversed);
        let mut cursor = FilteringCursor::new(
            Box::new(RawCursor::forward(&self.store)),
            Box::new(Not(keep)),
        );
        let removed = drain_removing(&mut cursor, &mut self.store)?;
        self.clear_filters();
        log::debug!("retained {} entries; removed {removed}", self.store.len());
        Ok(removed)
    }

    /// Replace each selected value with `f(key, value)`, returning how many
    /// were written. The stage chain is kept.
    pub fn update_values<F>(&mut self, mut f: F) -> Result<usize, SieveError>
    where
        F: FnMut(&S::Key, S::Value) -> S::Value,
    {
        let mut traversal = self.traverse();
        let mut updated = 0;
        while let Some(mut slot) = traversal.advance()? {
            let (key, value) = slot.detach()?.into_pair();
            slot.set_value(f(&key, value))?;
            updated += 1;
        }
        log::debug!("updated {updated} values");
        Ok(updated)
    }

    /// Step through the selection with write access to each entry.
    ///
    /// ```
    /// use sparse_sieve::store::SparseIntArray;
    ///
    /// let mut map: SparseIntArray = (0..6).map(|k| (k, k)).collect();
    /// {
    ///     let mut view = map.view_mut().only().from(3);
    ///     let mut walk = view.traverse();
    ///     while let Some(slot) = walk.advance().unwrap() {
    ///         if slot.value().unwrap() % 2 == 0 {
    ///             slot.remove().unwrap();
    ///         }
    ///     }
    /// }
    /// assert_eq!(map.keys(), &[0, 1, 2, 3, 5]);
    /// ```
    pub fn traverse(&mut self) -> Traversal<'_, 'a, S> {
        Traversal {
            cursor: self.filtered_cursor(false),
            store: &mut self.store,
        }
    }
}

fn drain_removing<S: SlotStore, C: Cursor<S> + ?Sized>(
    cursor: &mut C,
    store: &mut S,
) -> Result<usize, SieveError> {
    let mut removed = 0;
    while cursor.has_next(store) {
        cursor.next(store)?;
        cursor.remove(store)?;
        removed += 1;
    }
    Ok(removed)
}

/// In-progress write-through traversal; see [`View::traverse`].
pub struct Traversal<'v, 'a, S: SlotStore + 'a> {
    store: &'v mut S,
    cursor: Box<dyn Cursor<S> + 'a>,
}

impl<'v, 'a, S: SlotStore + 'a> Traversal<'v, 'a, S> {
    /// Move to the next selected entry.
    ///
    /// The returned handle borrows the traversal, so it must be dropped (or
    /// consumed by [`SlotMut::remove`]) before advancing again.
    pub fn advance(&mut self) -> Result<Option<SlotMut<'_, 'a, S>>, SieveError> {
        if !self.cursor.has_next(self.store) {
            return Ok(None);
        }
        let probe = self.cursor.next(self.store)?;
        Ok(Some(SlotMut {
            store: &mut *self.store,
            cursor: self.cursor.as_mut(),
            probe,
        }))
    }
}

/// Write access to the entry a [`Traversal`] is positioned on.
pub struct SlotMut<'t, 'a, S: SlotStore + 'a> {
    store: &'t mut S,
    cursor: &'t mut (dyn Cursor<S> + 'a),
    probe: Probe,
}

impl<'t, 'a, S: SlotStore + 'a> SlotMut<'t, 'a, S> {
    /// Current physical slot.
    #[inline]
    pub fn slot(&self) -> usize {
        self.probe.slot
    }

    /// Slot at the start of the traversal.
    #[inline]
    pub fn origin(&self) -> usize {
        self.probe.origin
    }

    pub fn key(&self) -> Result<S::Key, SieveError> {
        self.store.key_at(self.probe.slot)
    }

    pub fn value(&self) -> Result<S::Value, SieveError> {
        self.store.value_at(self.probe.slot)
    }

    /// Owned copy of the entry.
    pub fn detach(&self) -> Result<Entry<S::Key, S::Value>, SieveError> {
        read_entry(&*self.store, self.probe.slot)
    }

    /// Write `value` back, returning the value it replaced.
    pub fn set_value(&mut self, value: S::Value) -> Result<S::Value, SieveError> {
        self.store.set_value_at(self.probe.slot, value)
    }

    /// Remove the entry, returning it.
    pub fn remove(self) -> Result<Entry<S::Key, S::Value>, SieveError> {
        let entry = read_entry(&*self.store, self.probe.slot)?;
        self.cursor.remove(self.store)?;
        Ok(entry)
    }
}
