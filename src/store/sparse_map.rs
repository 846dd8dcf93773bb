//! SparseMap: sorted, slot-addressed map from integer-like keys to values.
//!
//! Keys and values live in two parallel vectors; keys are kept strictly
//! increasing so slot order is key order. Lookup by key is a binary search,
//! access by slot is O(1), and insertion/removal shift the tail (O(n)).
//! Appending a key larger than every existing key is amortized O(1).

use core::fmt::{self, Debug};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::sieve_error::SieveError;
use crate::store::slot_store::{SlotStore, check_slot};
use crate::view::View;

/// Sorted sparse map.
///
/// # Invariants
///
/// - `keys.len() == values.len()`.
/// - `keys` is strictly increasing.
///
/// These are checked after mutations in debug builds and when the
/// `check-invariants` feature is enabled.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SparseMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

/// Sparse map keyed by `i32`.
pub type SparseArray<V> = SparseMap<i32, V>;
/// `i32 -> i32` sparse map.
pub type SparseIntArray = SparseMap<i32, i32>;
/// `i32 -> i64` sparse map.
pub type SparseLongArray = SparseMap<i32, i64>;
/// `i32 -> bool` sparse map.
pub type SparseBooleanArray = SparseMap<i32, bool>;
/// Sparse map keyed by `i64`.
pub type LongSparseArray<V> = SparseMap<i64, V>;

impl<K, V> Default for SparseMap<K, V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<K: Debug, V: Debug> Debug for SparseMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.keys.iter().zip(&self.values)).finish()
    }
}

impl<K: Ord + Copy, V> SparseMap<K, V> {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Binary search for `key`: `Ok(slot)` if present, `Err(insertion slot)`
    /// otherwise.
    #[inline]
    pub fn index_of_key(&self, key: &K) -> Result<usize, usize> {
        self.keys.binary_search(key)
    }

    /// Returns true iff `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of_key(key).is_ok()
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index_of_key(key).ok().map(|slot| &self.values[slot])
    }

    /// Mutable value for `key`, if present.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.index_of_key(key) {
            Ok(slot) => Some(&mut self.values[slot]),
            Err(_) => None,
        }
    }

    /// Insert or replace; returns the previous value for `key`.
    ///
    /// # Complexity
    /// **O(log n)** search plus **O(n)** shift for a fresh key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = match self.index_of_key(&key) {
            Ok(slot) => Some(core::mem::replace(&mut self.values[slot], value)),
            Err(slot) => {
                self.keys.insert(slot, key);
                self.values.insert(slot, value);
                None
            }
        };
        crate::debug_invariants!(self.validate_invariants(), "SparseMap::insert");
        old
    }

    /// Insert, taking the O(1) path when `key` is larger than every stored key.
    pub fn append(&mut self, key: K, value: V) -> Option<V> {
        match self.keys.last() {
            Some(last) if key <= *last => self.insert(key, value),
            _ => {
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index_of_key(key).ok()?;
        self.keys.remove(slot);
        let value = self.values.remove(slot);
        crate::debug_invariants!(self.validate_invariants(), "SparseMap::remove");
        Some(value)
    }

    /// Smallest key.
    pub fn first_key(&self) -> Option<K> {
        self.keys.first().copied()
    }

    /// Largest key.
    pub fn last_key(&self) -> Option<K> {
        self.keys.last().copied()
    }

    /// Keys in slot (ascending) order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Values in slot order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Borrowing iterator over `(key, &value)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.keys.iter().copied().zip(self.values.iter())
    }
}

impl<K: Ord + Copy, V: Clone> SparseMap<K, V> {
    /// Read-only view over this map.
    pub fn view(&self) -> View<'_, &Self> {
        View::new(self)
    }

    /// View that can remove entries and write values back.
    pub fn view_mut(&mut self) -> View<'_, &mut Self> {
        View::new(self)
    }
}

impl<K: Ord + Copy, V: Clone> SlotStore for SparseMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn key_at(&self, slot: usize) -> Result<K, SieveError> {
        check_slot(slot, self.keys.len())?;
        Ok(self.keys[slot])
    }

    #[inline]
    fn value_at(&self, slot: usize) -> Result<V, SieveError> {
        check_slot(slot, self.values.len())?;
        Ok(self.values[slot].clone())
    }

    fn set_value_at(&mut self, slot: usize, value: V) -> Result<V, SieveError> {
        check_slot(slot, self.values.len())?;
        Ok(core::mem::replace(&mut self.values[slot], value))
    }

    fn remove_at(&mut self, slot: usize) -> Result<(K, V), SieveError> {
        check_slot(slot, self.keys.len())?;
        let key = self.keys.remove(slot);
        let value = self.values.remove(slot);
        crate::debug_invariants!(self.validate_invariants(), "SparseMap::remove_at");
        Ok((key, value))
    }
}

impl<K: Ord + Copy, V> DebugInvariants for SparseMap<K, V> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SparseMap invalid");
    }

    fn validate_invariants(&self) -> Result<(), SieveError> {
        if self.keys.len() != self.values.len() {
            return Err(SieveError::LengthMismatch {
                keys: self.keys.len(),
                values: self.values.len(),
            });
        }
        if let Some(slot) = self.keys.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SieveError::UnsortedKeys { slot: slot + 1 });
        }
        Ok(())
    }
}

/// Later pairs win on duplicate keys.
impl<K: Ord + Copy, V> FromIterator<(K, V)> for SparseMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut pairs: Vec<(K, V)> = iter.into_iter().collect();
        // stable sort keeps insertion order among equal keys; keep the last
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        let mut map = Self::with_capacity(pairs.len());
        for (k, v) in pairs {
            match map.keys.last() {
                Some(last) if *last == k => {
                    if let Some(slot) = map.values.last_mut() {
                        *slot = v;
                    }
                }
                _ => {
                    map.keys.push(k);
                    map.values.push(v);
                }
            }
        }
        map
    }
}

impl<K: Ord + Copy, V> Extend<(K, V)> for SparseMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}

impl<K: Ord + Copy, V, const N: usize> From<[(K, V); N]> for SparseMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Serialized as an ordered sequence of `(key, value)` pairs.
impl<K: Serialize, V: Serialize> Serialize for SparseMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.keys.iter().zip(self.values.iter()))
    }
}

/// Pairs are re-sorted on load; the payload need not be ordered.
impl<'de, K, V> Deserialize<'de> for SparseMap<K, V>
where
    K: Deserialize<'de> + Ord + Copy,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(K, V)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
