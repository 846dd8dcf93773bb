//! Unfiltered cursor over every slot of a store, forward or reverse.

use super::{Cursor, Probe};
use crate::sieve_error::SieveError;
use crate::store::SlotStore;

/// Walks slots `0..len` (forward) or `len-1..=0` (reverse).
///
/// Removal during a forward walk shifts every later element down by one, so
/// the cursor tracks how many elements it removed and maps origin slots to
/// physical slots as `origin - removed`. A reverse walk only ever removes
/// slots above the ones still to visit, so origin and physical coincide.
#[derive(Clone, Debug)]
pub struct RawCursor {
    reverse: bool,
    /// Store length when the traversal started.
    start_len: usize,
    /// Forward: next origin to produce. Reverse: exclusive upper bound.
    cursor: usize,
    removed: usize,
    emitted: usize,
    last: Option<Probe>,
}

impl RawCursor {
    /// Fresh cursor over a store that currently holds `len` slots.
    pub fn new(len: usize, reverse: bool) -> Self {
        Self {
            reverse,
            start_len: len,
            cursor: if reverse { len } else { 0 },
            removed: 0,
            emitted: 0,
            last: None,
        }
    }

    /// Forward cursor over `store`.
    pub fn forward<S: SlotStore>(store: &S) -> Self {
        Self::new(store.len(), false)
    }

    /// Reverse cursor over `store`.
    pub fn reverse<S: SlotStore>(store: &S) -> Self {
        Self::new(store.len(), true)
    }

    /// Whether this cursor walks from the last slot down.
    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Probe for the element the cursor would produce next, if any.
    #[inline]
    fn peek(&self, len: usize) -> Option<Probe> {
        if self.reverse {
            let origin = self.cursor.checked_sub(1)?;
            (origin < len).then_some(Probe::at(origin))
        } else {
            let slot = self.cursor - self.removed;
            (slot < len).then_some(Probe {
                slot,
                origin: self.cursor,
            })
        }
    }
}

impl<S: SlotStore> Cursor<S> for RawCursor {
    #[inline]
    fn has_next(&mut self, store: &S) -> bool {
        self.peek(store.len()).is_some()
    }

    fn next(&mut self, store: &S) -> Result<Probe, SieveError> {
        let probe = self.peek(store.len()).ok_or(SieveError::NoSuchElement)?;
        if self.reverse {
            self.cursor -= 1;
        } else {
            self.cursor += 1;
        }
        self.emitted += 1;
        self.last = Some(probe);
        Ok(probe)
    }

    fn remove(&mut self, store: &mut S) -> Result<Probe, SieveError> {
        let probe = self.last.take().ok_or(SieveError::NoSuchElement)?;
        if let Err(e) = store.remove_at(probe.slot) {
            self.last = Some(probe);
            return Err(e);
        }
        self.removed += 1;
        Ok(probe)
    }

    #[inline]
    fn origin_slot(&self) -> Option<usize> {
        self.last.map(|p| p.origin)
    }

    #[inline]
    fn emitted(&self) -> usize {
        self.emitted
    }

    fn reset(&mut self) {
        // Removed elements are gone: the restarted walk numbers slots afresh.
        self.start_len = self.start_len.saturating_sub(self.removed);
        self.cursor = if self.reverse { self.start_len } else { 0 };
        self.removed = 0;
        self.emitted = 0;
        self.last = None;
    }
}
