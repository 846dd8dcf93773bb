//! Filters: per-element predicates and their stateful, pre-scanning variant.
//!
//! A [`Filter`] decides membership from the store, the candidate's
//! [`Probe`] and its position in the stage input. An [`AdvancedFilter`] may
//! additionally consume one full pre-pass over the cursor it will later
//! filter, which is how order-dependent selectors ("last N", reversal
//! snapshots) stay correct in a single forward traversal.

pub mod builder;
pub mod builtin;

pub use builder::FilterBuilder;
pub use builtin::{ContainedIn, EntryMatching, First, Indexes, KeyIn, Last, Snapshot, ValueIn};

use std::rc::Rc;

use crate::cursor::{Cursor, Probe};
use crate::store::SlotStore;

/// Stateless predicate over one candidate element.
///
/// Evaluated exactly once per candidate during a pass. Implementations may
/// look at `position` and the probe's slots but must not assume look-ahead.
pub trait Filter<S: SlotStore> {
    fn matches(&self, store: &S, probe: Probe, position: usize) -> bool;
}

/// Filter that needs a full pre-pass before it can answer.
pub trait AdvancedFilter<S: SlotStore>: Filter<S> {
    /// Drain `cursor` (already filtered by every earlier stage) to build
    /// internal state. The caller resets the cursor afterwards.
    fn initialize(&mut self, store: &S, cursor: &mut dyn Cursor<S>);
}

impl<S: SlotStore, F: Filter<S> + ?Sized> Filter<S> for &F {
    #[inline]
    fn matches(&self, store: &S, probe: Probe, position: usize) -> bool {
        (**self).matches(store, probe, position)
    }
}

impl<S: SlotStore, F: Filter<S> + ?Sized> Filter<S> for Box<F> {
    #[inline]
    fn matches(&self, store: &S, probe: Probe, position: usize) -> bool {
        (**self).matches(store, probe, position)
    }
}

impl<S: SlotStore, F: AdvancedFilter<S> + ?Sized> AdvancedFilter<S> for Box<F> {
    #[inline]
    fn initialize(&mut self, store: &S, cursor: &mut dyn Cursor<S>) {
        (**self).initialize(store, cursor)
    }
}

impl<S: SlotStore, F: Filter<S> + ?Sized> Filter<S> for Rc<F> {
    #[inline]
    fn matches(&self, store: &S, probe: Probe, position: usize) -> bool {
        (**self).matches(store, probe, position)
    }
}

/// Logical inverse of a filter; initialization passes straight through.
#[derive(Clone, Debug)]
pub struct Not<F>(pub F);

impl<S: SlotStore, F: Filter<S>> Filter<S> for Not<F> {
    #[inline]
    fn matches(&self, store: &S, probe: Probe, position: usize) -> bool {
        !self.0.matches(store, probe, position)
    }
}

impl<S: SlotStore, F: AdvancedFilter<S>> AdvancedFilter<S> for Not<F> {
    #[inline]
    fn initialize(&mut self, store: &S, cursor: &mut dyn Cursor<S>) {
        self.0.initialize(store, cursor)
    }
}

/// Produces a fresh advanced filter for every traversal.
pub(crate) type FilterFactory<'a, S> = Rc<dyn Fn() -> Box<dyn AdvancedFilter<S> + 'a> + 'a>;

/// One link of a view's chain.
pub(crate) enum Stage<'a, S: SlotStore> {
    Plain(Rc<dyn Filter<S> + 'a>),
    /// Rebuilt from its factory on every traversal so state never leaks
    /// between passes.
    Advanced(FilterFactory<'a, S>),
    /// Reverse the remaining traversal over a snapshot of what is selected.
    Snapshot,
}

impl<'a, S: SlotStore + 'a> Stage<'a, S> {
    pub(crate) fn plain<F: Filter<S> + 'a>(filter: F) -> Self {
        Stage::Plain(Rc::new(filter))
    }

    pub(crate) fn advanced<F, G>(factory: G) -> Self
    where
        F: AdvancedFilter<S> + 'a,
        G: Fn() -> F + 'a,
    {
        Stage::Advanced(Rc::new(move || Box::new(factory()) as Box<dyn AdvancedFilter<S> + 'a>))
    }

    /// Same stage with the predicate negated.
    pub(crate) fn inverted(self) -> Self {
        match self {
            Stage::Plain(f) => Stage::Plain(Rc::new(Not(f))),
            Stage::Advanced(factory) => Stage::Advanced(Rc::new(move || {
                Box::new(Not(factory())) as Box<dyn AdvancedFilter<S> + 'a>
            })),
            Stage::Snapshot => Stage::Snapshot,
        }
    }

    #[inline]
    pub(crate) fn is_snapshot(&self) -> bool {
        matches!(self, Stage::Snapshot)
    }
}

impl<'a, S: SlotStore> Clone for Stage<'a, S> {
    fn clone(&self) -> Self {
        match self {
            Stage::Plain(f) => Stage::Plain(Rc::clone(f)),
            Stage::Advanced(factory) => Stage::Advanced(Rc::clone(factory)),
            Stage::Snapshot => Stage::Snapshot,
        }
    }
}

impl<'a, S: SlotStore> core::fmt::Debug for Stage<'a, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Stage::Plain(_) => f.write_str("Plain"),
            Stage::Advanced(_) => f.write_str("Advanced"),
            Stage::Snapshot => f.write_str("Snapshot"),
        }
    }
}
