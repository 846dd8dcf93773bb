//! Built-in selectors used by [`FilterBuilder`](super::FilterBuilder).

use std::collections::BTreeSet;

use super::{AdvancedFilter, Filter};
use crate::cursor::{Cursor, Probe};
use crate::store::SlotStore;

/// Positions `0..n` of the stage input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct First {
    pub n: usize,
}

impl<S: SlotStore> Filter<S> for First {
    #[inline]
    fn matches(&self, _store: &S, _probe: Probe, position: usize) -> bool {
        position < self.n
    }
}

/// The final `n` positions of the stage input; needs the total count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Last {
    pub n: usize,
    total: usize,
}

impl Last {
    pub fn new(n: usize) -> Self {
        Self { n, total: 0 }
    }
}

impl<S: SlotStore> Filter<S> for Last {
    #[inline]
    fn matches(&self, _store: &S, _probe: Probe, position: usize) -> bool {
        position >= self.total.saturating_sub(self.n)
    }
}

impl<S: SlotStore> AdvancedFilter<S> for Last {
    fn initialize(&mut self, store: &S, cursor: &mut dyn Cursor<S>) {
        let mut total = 0;
        while cursor.has_next(store) {
            if cursor.next(store).is_err() {
                break;
            }
            total += 1;
        }
        self.total = total;
    }
}

/// Explicit set of positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Indexes {
    positions: BTreeSet<usize>,
}

impl FromIterator<usize> for Indexes {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl<S: SlotStore> Filter<S> for Indexes {
    #[inline]
    fn matches(&self, _store: &S, _probe: Probe, position: usize) -> bool {
        self.positions.contains(&position)
    }
}

/// Key equal to one of a small set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyIn<K> {
    keys: Vec<K>,
}

impl<K> FromIterator<K> for KeyIn<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<S> Filter<S> for KeyIn<S::Key>
where
    S: SlotStore,
    S::Key: PartialEq,
{
    fn matches(&self, store: &S, probe: Probe, _position: usize) -> bool {
        store
            .key_at(probe.slot)
            .is_ok_and(|k| self.keys.contains(&k))
    }
}

/// Value equal to one of a small set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueIn<V> {
    values: Vec<V>,
}

impl<V> FromIterator<V> for ValueIn<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<S> Filter<S> for ValueIn<S::Value>
where
    S: SlotStore,
    S::Value: PartialEq,
{
    fn matches(&self, store: &S, probe: Probe, _position: usize) -> bool {
        store
            .value_at(probe.slot)
            .is_ok_and(|v| self.values.contains(&v))
    }
}

/// Entry whose key is present in another store with an equal value.
///
/// The other store is copied when the filter is built, so the filter does
/// not borrow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainedIn<K, V> {
    /// Sorted by key.
    entries: Vec<(K, V)>,
}

impl<K: Ord + Clone, V: Clone> ContainedIn<K, V> {
    /// Copy every readable entry of `other`.
    pub fn of<T: SlotStore<Key = K, Value = V>>(other: &T) -> Self {
        let mut entries: Vec<(K, V)> = (0..other.len())
            .filter_map(|slot| Some((other.key_at(slot).ok()?, other.value_at(slot).ok()?)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.entries
            .binary_search_by(|(k, _)| k.cmp(key))
            .ok()
            .map(|i| &self.entries[i].1)
    }
}

impl<S> Filter<S> for ContainedIn<S::Key, S::Value>
where
    S: SlotStore,
    S::Key: Ord,
    S::Value: PartialEq,
{
    fn matches(&self, store: &S, probe: Probe, _position: usize) -> bool {
        let (Ok(key), Ok(value)) = (store.key_at(probe.slot), store.value_at(probe.slot)) else {
            return false;
        };
        self.lookup(&key).is_some_and(|v| *v == value)
    }
}

/// Arbitrary predicate over `(key, value)`.
#[derive(Clone, Copy)]
pub struct EntryMatching<F>(pub F);

impl<S, F> Filter<S> for EntryMatching<F>
where
    S: SlotStore,
    F: Fn(&S::Key, &S::Value) -> bool,
{
    fn matches(&self, store: &S, probe: Probe, _position: usize) -> bool {
        match (store.key_at(probe.slot), store.value_at(probe.slot)) {
            (Ok(k), Ok(v)) => (self.0)(&k, &v),
            _ => false,
        }
    }
}

/// Sorted origin slots captured from a full pass; membership by binary search.
///
/// This is the reversal marker's workhorse: draining the cursor built so far
/// fixes exactly which elements are selected, after which the remaining stages
/// can run over a fresh cursor in the other direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    slots: Vec<usize>,
}

impl Snapshot {
    /// Drain `cursor` into a new snapshot.
    pub fn capture<S: SlotStore, C: Cursor<S> + ?Sized>(store: &S, cursor: &mut C) -> Self {
        let mut slots = Vec::new();
        while cursor.has_next(store) {
            match cursor.next(store) {
                Ok(p) => slots.push(p.origin),
                Err(_) => break,
            }
        }
        slots.sort_unstable();
        slots.dedup();
        Self { slots }
    }

    /// Captured origin slots, ascending.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn contains(&self, origin: usize) -> bool {
        self.slots.binary_search(&origin).is_ok()
    }
}

impl<S: SlotStore> Filter<S> for Snapshot {
    #[inline]
    fn matches(&self, _store: &S, probe: Probe, _position: usize) -> bool {
        self.contains(probe.origin)
    }
}

impl<S: SlotStore> AdvancedFilter<S> for Snapshot {
    fn initialize(&mut self, store: &S, cursor: &mut dyn Cursor<S>) {
        *self = Snapshot::capture(store, cursor);
    }
}
