//! Cursor that lazily pulls from an inner cursor and emits only matches.

use super::{Cursor, Probe};
use crate::filter::Filter;
use crate::sieve_error::SieveError;
use crate::store::SlotStore;

/// Wraps an inner cursor with one filter stage.
///
/// The filter sees each candidate together with its position in *this
/// stage's input*, i.e. the number of candidates pulled from the inner cursor
/// before it.
pub struct FilteringCursor<'a, S: SlotStore> {
    inner: Box<dyn Cursor<S> + 'a>,
    filter: Box<dyn Filter<S> + 'a>,
    pending: Option<Probe>,
    last: Option<Probe>,
    /// The inner cursor moved past `last` while looking ahead.
    stale: bool,
    pulled: usize,
    emitted: usize,
}

impl<'a, S: SlotStore> FilteringCursor<'a, S> {
    pub fn new(inner: Box<dyn Cursor<S> + 'a>, filter: Box<dyn Filter<S> + 'a>) -> Self {
        Self {
            inner,
            filter,
            pending: None,
            last: None,
            stale: false,
            pulled: 0,
            emitted: 0,
        }
    }
}

impl<'a, S: SlotStore> Cursor<S> for FilteringCursor<'a, S> {
    fn has_next(&mut self, store: &S) -> bool {
        if self.pending.is_some() {
            return true;
        }
        while self.inner.has_next(store) {
            let Ok(probe) = self.inner.next(store) else {
                return false;
            };
            if self.last.is_some() {
                self.stale = true;
            }
            let position = self.pulled;
            self.pulled += 1;
            if self.filter.matches(store, probe, position) {
                self.pending = Some(probe);
                return true;
            }
        }
        false
    }

    fn next(&mut self, store: &S) -> Result<Probe, SieveError> {
        if !self.has_next(store) {
            return Err(SieveError::NoSuchElement);
        }
        let probe = self.pending.take().ok_or(SieveError::NoSuchElement)?;
        self.last = Some(probe);
        self.stale = false;
        self.emitted += 1;
        Ok(probe)
    }

    fn remove(&mut self, store: &mut S) -> Result<Probe, SieveError> {
        if self.last.is_none() {
            return Err(SieveError::NoSuchElement);
        }
        if self.stale {
            return Err(SieveError::IllegalState(
                "remove() after the cursor looked ahead past the last element",
            ));
        }
        let removed = self.inner.remove(store)?;
        self.last = None;
        Ok(removed)
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
        self.inner.reset();
        self.pending = None;
        self.last = None;
        self.stale = false;
        self.pulled = 0;
        self.emitted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{RawCursor, drain};
    use crate::store::SparseIntArray;

    struct EvenKeys;

    impl Filter<SparseIntArray> for EvenKeys {
        fn matches(&self, store: &SparseIntArray, probe: Probe, _position: usize) -> bool {
            store.key_at(probe.slot).is_ok_and(|k| k % 2 == 0)
        }
    }

    struct PositionBelow(usize);

    impl Filter<SparseIntArray> for PositionBelow {
        fn matches(&self, _: &SparseIntArray, _: Probe, position: usize) -> bool {
            position < self.0
        }
    }

    fn store(n: i32) -> SparseIntArray {
        (0..n).map(|k| (k, k)).collect()
    }

    fn even(s: &SparseIntArray) -> FilteringCursor<'static, SparseIntArray> {
        FilteringCursor::new(Box::new(RawCursor::forward(s)), Box::new(EvenKeys))
    }

    #[test]
    fn emits_only_matches() {
        let s = store(7);
        let slots: Vec<_> = drain(&mut even(&s), &s).into_iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![0, 2, 4, 6]);
    }

    #[test]
    fn positions_count_stage_input() {
        let s = store(7);
        // second stage sees [0, 2, 4, 6] and keeps the first two of those
        let mut c = FilteringCursor::new(Box::new(even(&s)), Box::new(PositionBelow(2)));
        let slots: Vec<_> = drain(&mut c, &s).into_iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![0, 2]);
    }

    #[test]
    fn remove_after_next_deletes_emitted_element() {
        let mut s = store(5);
        let mut c = even(&s);
        while c.has_next(&s) {
            c.next(&s).unwrap();
            c.remove(&mut s).unwrap();
        }
        assert_eq!(s.keys(), &[1, 3]);
    }

    #[test]
    fn remove_after_look_ahead_is_rejected() {
        let mut s = store(5);
        let mut c = even(&s);
        c.next(&s).unwrap();
        assert!(c.has_next(&s));
        assert!(matches!(c.remove(&mut s), Err(SieveError::IllegalState(_))));
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn double_remove_is_no_such_element() {
        let mut s = store(3);
        let mut c = even(&s);
        c.next(&s).unwrap();
        c.remove(&mut s).unwrap();
        assert_eq!(c.remove(&mut s), Err(SieveError::NoSuchElement));
    }

    #[test]
    fn reset_replays_from_start() {
        let s = store(5);
        let mut c = even(&s);
        drain(&mut c, &s);
        c.reset();
        assert_eq!(c.next(&s).map(|p| p.slot), Ok(0));
        assert_eq!(c.origin_slot(), Some(0));
        assert_eq!(c.emitted(), 1);
    }
}
