//! Views: a store plus an ordered chain of filter stages and reversal markers.
//!
//! A [`View`] is the handle applications hold. Declaring filters is cheap:
//! `only()`/`but()` selectors and `reverse()` only append stages. Work
//! happens when the view is traversed, exported or mutated, at which point
//! the stage chain is composed into a single lazy cursor (see
//! [`View::filtered_cursor`]).
//!
//! The store type decides what a view may do. `View<&SparseMap<_, _>>` reads
//! only; `View<&mut SparseMap<_, _>>` can also remove entries and write
//! values back; an owned store works as well.

pub mod entry;
mod export;
mod mutate;
mod pipeline;
pub mod typed;

pub(crate) use pipeline::compose;
pub use entry::Entry;
pub use export::Entries;
pub use mutate::{SlotMut, Traversal};
pub use typed::{
    BoolView, BoolViewMut, IntView, IntViewMut, LongView, LongViewMut, ObjectView, ObjectViewMut,
};

use core::fmt;

use crate::cursor::Cursor;
use crate::filter::{FilterBuilder, Stage};
use crate::store::SlotStore;

/// Lazy, composable selection over a slot store.
///
/// `'a` bounds the filters attached to the view (closures, borrowed
/// comparison sets); for views over `&'a SparseMap` it is the borrow itself.
pub struct View<'a, S: SlotStore + 'a> {
    store: S,
    stages: Vec<Stage<'a, S>>,
    /// Leading stages that survive `clear_filters` (a translated view's scope).
    pinned: usize,
    /// Baseline direction; reversal markers flip it per traversal.
    reversed: bool,
}

impl<'a, S: SlotStore + 'a> View<'a, S> {
    /// Forward view over every entry of `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            stages: Vec::new(),
            pinned: 0,
            reversed: false,
        }
    }

    /// View over every entry of `store`, last slot first.
    pub fn reversed_from(store: S) -> Self {
        Self {
            reversed: true,
            ..Self::new(store)
        }
    }

    pub(crate) fn scoped(store: S, scope: Option<Stage<'a, S>>, reversed: bool) -> Self {
        let stages: Vec<_> = scope.into_iter().collect();
        Self {
            store,
            pinned: stages.len(),
            stages,
            reversed,
        }
    }

    /// The backing store.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give up the view, returning the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Start an inclusive selector: keep what it matches.
    pub fn only(self) -> FilterBuilder<'a, S> {
        FilterBuilder::new(self, true)
    }

    /// Start an exclusive selector: drop what it matches.
    pub fn but(self) -> FilterBuilder<'a, S> {
        FilterBuilder::new(self, false)
    }

    /// Reverse the order of everything selected so far.
    ///
    /// Later stages see the reversed sequence, so `only().to(2).reverse()`
    /// is "the first three, last first" while `reverse().only().to(2)` is
    /// "the last three, last first".
    pub fn reverse(mut self) -> Self {
        self.stages.push(Stage::Snapshot);
        self
    }

    /// Whether a traversal currently runs from the highest slot down.
    pub fn is_reversed(&self) -> bool {
        let flips = self.stages.iter().filter(|s| s.is_snapshot()).count();
        self.reversed ^ (flips % 2 == 1)
    }

    /// Number of stages declared since the last clear.
    #[inline]
    pub fn stage_count(&self) -> usize {
        self.stages.len() - self.pinned
    }

    /// Drop every declared stage, keeping the current direction.
    pub fn clear_filters(&mut self) {
        let flips = self.stages[self.pinned..]
            .iter()
            .filter(|s| s.is_snapshot())
            .count();
        self.reversed ^= flips % 2 == 1;
        self.stages.truncate(self.pinned);
    }

    pub(crate) fn push_stage(&mut self, stage: Stage<'a, S>) {
        self.stages.push(stage);
    }

    /// Stage chain and baseline direction, for building a derived view.
    pub(crate) fn into_parts(self) -> (S, Vec<Stage<'a, S>>, bool) {
        (self.store, self.stages, self.reversed)
    }

    /// Compose the stage chain into one lazy cursor.
    ///
    /// With `reverse == false` this is the cursor every export and mutation
    /// uses. With `reverse == true` the chain is evaluated as if the view's
    /// baseline direction were flipped: selectors such as `first(n)` then
    /// pick from the other end.
    ///
    /// The cursor does not borrow the view; pass `self.store()` to it.
    pub fn filtered_cursor(&self, reverse: bool) -> Box<dyn Cursor<S> + 'a> {
        pipeline::compose(&self.store, &self.stages, self.reversed ^ reverse)
    }
}

impl<'a, S: SlotStore + Clone + 'a> Clone for View<'a, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            stages: self.stages.clone(),
            pinned: self.pinned,
            reversed: self.reversed,
        }
    }
}

impl<'a, S: SlotStore + fmt::Debug + 'a> fmt::Debug for View<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("store", &self.store)
            .field("stages", &self.stages)
            .field("pinned", &self.pinned)
            .field("reversed", &self.reversed)
            .finish()
    }
}

#[cfg(test)]
mod tests;
