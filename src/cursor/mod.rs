//! Cursors: single-pass, slot-producing traversal state machines.
//!
//! A cursor never owns or borrows its store. Every step receives the store
//! explicitly (`&S` to read, `&mut S` to remove), which keeps a stacked chain
//! of cursors down to one borrow of the backing store at a time.
//!
//! Each produced element is described by a [`Probe`]: its current physical
//! slot and its *origin* slot, i.e. the slot it occupied when the traversal
//! started. The two differ only after the traversal itself removed an earlier
//! element; origin slots stay stable for the whole traversal, which is what
//! snapshot membership tests rely on.

pub mod filtering;
pub mod raw;

pub use filtering::FilteringCursor;
pub use raw::RawCursor;

use crate::sieve_error::SieveError;
use crate::store::SlotStore;

/// One produced element: where it is now and where it was at traversal start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Probe {
    /// Physical slot right now; use this to read the store.
    pub slot: usize,
    /// Slot at the start of the traversal; stable across in-traversal removal.
    pub origin: usize,
}

impl Probe {
    /// Probe whose physical and origin slots coincide.
    #[inline]
    pub const fn at(slot: usize) -> Self {
        Self { slot, origin: slot }
    }
}

/// Lazy sequence-production primitive.
///
/// Contract:
/// - `next` fails with `NoSuchElement` unless a preceding `has_next` returned
///   true (or would have).
/// - `remove` deletes the element produced by the last `next`; it fails with
///   `NoSuchElement` without an intervening successful `next`, so it can
///   succeed at most once per `next`.
/// - `reset` rewinds to the start of the same direction and range without
///   rebuilding any filters.
pub trait Cursor<S: SlotStore> {
    /// Whether another element is available. May advance inner cursors.
    fn has_next(&mut self, store: &S) -> bool;

    /// Produce the next element.
    fn next(&mut self, store: &S) -> Result<Probe, SieveError>;

    /// Remove the element produced by the last `next` from `store`, returning
    /// the probe it was produced with.
    fn remove(&mut self, store: &mut S) -> Result<Probe, SieveError>;

    /// Origin slot of the last produced element.
    fn origin_slot(&self) -> Option<usize>;

    /// Number of elements produced since the start (or the last reset).
    fn emitted(&self) -> usize;

    /// Rewind to the start of the same traversal.
    fn reset(&mut self);
}

impl<S: SlotStore, C: Cursor<S> + ?Sized> Cursor<S> for Box<C> {
    #[inline]
    fn has_next(&mut self, store: &S) -> bool {
        (**self).has_next(store)
    }
    #[inline]
    fn next(&mut self, store: &S) -> Result<Probe, SieveError> {
        (**self).next(store)
    }
    #[inline]
    fn remove(&mut self, store: &mut S) -> Result<Probe, SieveError> {
        (**self).remove(store)
    }
    #[inline]
    fn origin_slot(&self) -> Option<usize> {
        (**self).origin_slot()
    }
    #[inline]
    fn emitted(&self) -> usize {
        (**self).emitted()
    }
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Drain `cursor`, collecting every produced probe.
pub fn drain<S: SlotStore, C: Cursor<S> + ?Sized>(cursor: &mut C, store: &S) -> Vec<Probe> {
    let mut out = Vec::new();
    while cursor.has_next(store) {
        match cursor.next(store) {
            Ok(p) => out.push(p),
            Err(_) => break,
        }
    }
    out
}
