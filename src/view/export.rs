//! Read-side operations: enumeration, search, bulk export and comparison.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::iter::FusedIterator;

use itertools::{EitherOrBoth, Itertools};

use super::{Entry, View};
use crate::cursor::Cursor;
use crate::sieve_error::SieveError;
use crate::store::SlotStore;

/// Read the entry at `slot` as a detached record.
pub(crate) fn read_entry<S: SlotStore>(
    store: &S,
    slot: usize,
) -> Result<Entry<S::Key, S::Value>, SieveError> {
    Ok(Entry::new(store.key_at(slot)?, store.value_at(slot)?))
}

/// Iterator over the detached entries of a view, in view order.
///
/// Created by [`View::iter`]. A read error at a slot the cursor reported as
/// live ends the iteration (and is logged at `warn`).
pub struct Entries<'v, 'a, S: SlotStore + 'a> {
    store: &'v S,
    cursor: Box<dyn Cursor<S> + 'a>,
    done: bool,
}

impl<'v, 'a, S: SlotStore + 'a> Iterator for Entries<'v, 'a, S> {
    type Item = Entry<S::Key, S::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.cursor.has_next(self.store) {
            self.done = true;
            return None;
        }
        let read = self
            .cursor
            .next(self.store)
            .and_then(|probe| read_entry(self.store, probe.slot));
        match read {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("view traversal stopped early: {e}");
                self.done = true;
                None
            }
        }
    }
}

impl<'v, 'a, S: SlotStore + 'a> FusedIterator for Entries<'v, 'a, S> {}

impl<'v, 'a, S: SlotStore + 'a> IntoIterator for &'v View<'a, S> {
    type Item = Entry<S::Key, S::Value>;
    type IntoIter = Entries<'v, 'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: SlotStore + 'a> View<'a, S> {
    /// Fresh traversal of the selected entries. Each call starts over.
    pub fn iter(&self) -> Entries<'_, 'a, S> {
        Entries {
            store: self.store(),
            cursor: self.filtered_cursor(false),
            done: false,
        }
    }

    /// Number of selected entries.
    pub fn count(&self) -> usize {
        let store = self.store();
        let mut cursor = self.filtered_cursor(false);
        let mut n = 0;
        while cursor.has_next(store) && cursor.next(store).is_ok() {
            n += 1;
        }
        n
    }

    /// Whether nothing is selected. Stops at the first match.
    pub fn is_empty(&self) -> bool {
        !self.filtered_cursor(false).has_next(self.store())
    }

    pub fn first(&self) -> Option<Entry<S::Key, S::Value>> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<Entry<S::Key, S::Value>> {
        self.iter().last()
    }

    /// First selected entry satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<Entry<S::Key, S::Value>>
    where
        P: FnMut(&S::Key, &S::Value) -> bool,
    {
        self.iter().find(|e| predicate(e.key(), e.value()))
    }

    /// Position of `key` within the selection.
    pub fn position_of_key(&self, key: &S::Key) -> Option<usize>
    where
        S::Key: PartialEq,
    {
        self.iter().position(|e| e.key() == key)
    }

    /// Position of the first entry holding `value`.
    pub fn position_of_value(&self, value: &S::Value) -> Option<usize>
    where
        S::Value: PartialEq,
    {
        self.iter().position(|e| e.value() == value)
    }

    pub fn contains_key(&self, key: &S::Key) -> bool
    where
        S::Key: PartialEq,
    {
        self.position_of_key(key).is_some()
    }

    pub fn contains_value(&self, value: &S::Value) -> bool
    where
        S::Value: PartialEq,
    {
        self.position_of_value(value).is_some()
    }

    pub fn keys(&self) -> Vec<S::Key> {
        self.iter().map(|e| e.into_pair().0).collect()
    }

    pub fn values(&self) -> Vec<S::Value> {
        self.iter().map(|e| e.into_pair().1).collect()
    }

    /// Every selected entry, detached, in view order.
    pub fn to_vec(&self) -> Vec<Entry<S::Key, S::Value>> {
        self.iter().collect()
    }

    /// Write the selected keys into the front of `buf`, returning how many
    /// were written.
    ///
    /// # Errors
    /// `BufferTooSmall` if more entries are selected than `buf` holds; `buf`
    /// is left untouched in that case.
    pub fn fill_keys(&self, buf: &mut [S::Key]) -> Result<usize, SieveError> {
        self.fill_with(buf, |e| e.into_pair().0)
    }

    /// Write the selected values into the front of `buf`; see
    /// [`fill_keys`](Self::fill_keys).
    pub fn fill_values(&self, buf: &mut [S::Value]) -> Result<usize, SieveError> {
        self.fill_with(buf, |e| e.into_pair().1)
    }

    fn fill_with<T, F>(&self, buf: &mut [T], mut pick: F) -> Result<usize, SieveError>
    where
        F: FnMut(Entry<S::Key, S::Value>) -> T,
    {
        let needed = self.count();
        if needed > buf.len() {
            return Err(SieveError::BufferTooSmall {
                needed,
                capacity: buf.len(),
            });
        }
        let mut written = 0;
        for (dst, entry) in buf.iter_mut().zip(self.iter()) {
            *dst = pick(entry);
            written += 1;
        }
        Ok(written)
    }

    /// Append every selected `(key, value)` to `target`, returning the count.
    pub fn copy_into<E>(&self, target: &mut E) -> usize
    where
        E: Extend<(S::Key, S::Value)>,
    {
        let mut n = 0;
        target.extend(self.iter().inspect(|_| n += 1).map(Entry::into_pair));
        n
    }

    /// Selected entries as a hash map; later duplicates of a key win.
    pub fn to_hash_map(&self) -> HashMap<S::Key, S::Value>
    where
        S::Key: Hash + Eq,
    {
        self.iter().map(Entry::into_pair).collect()
    }

    /// Selected entries as an ordered map; later duplicates of a key win.
    pub fn to_btree_map(&self) -> BTreeMap<S::Key, S::Value>
    where
        S::Key: Ord,
    {
        self.iter().map(Entry::into_pair).collect()
    }

    /// Same entries as `other`, in any order.
    ///
    /// Compares as multisets: counts must agree and every entry here must
    /// pair off with a distinct equal entry there.
    pub fn is_equal_to<'b, T>(&self, other: &View<'b, T>) -> bool
    where
        T: SlotStore<Key = S::Key, Value = S::Value> + 'b,
        S::Key: PartialEq,
        S::Value: PartialEq,
    {
        let mut rest = other.to_vec();
        if rest.len() != self.count() {
            return false;
        }
        self.iter().all(|e| match rest.iter().position(|o| *o == e) {
            Some(i) => {
                rest.swap_remove(i);
                true
            }
            None => false,
        })
    }

    /// Same entries as `other`, in the same order.
    pub fn is_strictly_equal_to<'b, T>(&self, other: &View<'b, T>) -> bool
    where
        T: SlotStore<Key = S::Key, Value = S::Value> + 'b,
        S::Key: PartialEq,
        S::Value: PartialEq,
    {
        self.iter()
            .zip_longest(other.iter())
            .all(|pair| matches!(pair, EitherOrBoth::Both(a, b) if a == b))
    }
}
