//! Turning a stage chain into a single cursor.

use std::rc::Rc;

use crate::cursor::{Cursor, FilteringCursor, RawCursor};
use crate::filter::{Filter, Snapshot, Stage};
use crate::store::SlotStore;

/// Build the composed cursor for `stages` over `store`, starting in
/// direction `reverse`.
///
/// Plain stages wrap the cursor so far. Advanced stages first get a full
/// pre-pass over it. A reversal marker drains what is selected so far into a
/// [`Snapshot`] and restarts from a raw cursor in the other direction,
/// filtered by membership in that snapshot; if nothing has filtered yet the
/// raw cursor is simply rebuilt the other way round.
pub(crate) fn compose<'a, S: SlotStore + 'a>(
    store: &S,
    stages: &[Stage<'a, S>],
    reverse: bool,
) -> Box<dyn Cursor<S> + 'a> {
    let mut reverse = reverse;
    let mut filtered = false;
    let mut cursor: Box<dyn Cursor<S> + 'a> = Box::new(RawCursor::new(store.len(), reverse));

    for stage in stages {
        match stage {
            Stage::Plain(filter) => {
                let filter: Box<dyn Filter<S> + 'a> = Box::new(Rc::clone(filter));
                cursor = Box::new(FilteringCursor::new(cursor, filter));
                filtered = true;
            }
            Stage::Advanced(factory) => {
                let mut filter = factory();
                cursor.reset();
                filter.initialize(store, cursor.as_mut());
                cursor.reset();
                let filter: Box<dyn Filter<S> + 'a> = Box::new(filter);
                cursor = Box::new(FilteringCursor::new(cursor, filter));
                filtered = true;
            }
            Stage::Snapshot => {
                reverse = !reverse;
                let raw: Box<dyn Cursor<S> + 'a> = Box::new(RawCursor::new(store.len(), reverse));
                if filtered {
                    let snapshot = Snapshot::capture(store, cursor.as_mut());
                    log::trace!(
                        "reversal snapshot holds {} of {} slots",
                        snapshot.len(),
                        store.len()
                    );
                    cursor = Box::new(FilteringCursor::new(raw, Box::new(snapshot)));
                } else {
                    cursor = raw;
                }
            }
        }
    }

    log::trace!(
        "composed {} stages over {} slots ({})",
        stages.len(),
        store.len(),
        if reverse { "reverse" } else { "forward" }
    );
    cursor
}

/// Origin slots selected by the full chain: the chain followed by one final
/// snapshot step.
pub(crate) fn capture<'a, S: SlotStore + 'a>(
    store: &S,
    stages: &[Stage<'a, S>],
    reverse: bool,
) -> Snapshot {
    let mut cursor = compose(store, stages, reverse);
    Snapshot::capture(store, cursor.as_mut())
}
