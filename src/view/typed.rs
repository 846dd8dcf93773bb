//! Named views over the stock sparse maps.
//!
//! These are plain aliases: every operation is the generic [`View`] one.
//! `fill_keys`/`fill_values` are the bulk primitive exports for the numeric
//! variants.

use super::View;
use crate::store::{SparseArray, SparseBooleanArray, SparseIntArray, SparseLongArray};

/// Read-only view over object values; use `V = Arc<T>` for shared payloads.
pub type ObjectView<'a, V> = View<'a, &'a SparseArray<V>>;
pub type IntView<'a> = View<'a, &'a SparseIntArray>;
pub type LongView<'a> = View<'a, &'a SparseLongArray>;
pub type BoolView<'a> = View<'a, &'a SparseBooleanArray>;

pub type ObjectViewMut<'a, V> = View<'a, &'a mut SparseArray<V>>;
pub type IntViewMut<'a> = View<'a, &'a mut SparseIntArray>;
pub type LongViewMut<'a> = View<'a, &'a mut SparseLongArray>;
pub type BoolViewMut<'a> = View<'a, &'a mut SparseBooleanArray>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve_error::SieveError;
    use std::sync::Arc;

    #[test]
    fn int_view_fills_primitive_buffers() {
        let map: SparseIntArray = (0..5).map(|k| (k * 10, k)).collect();
        let view: IntView<'_> = map.view().only().from(3);
        let mut keys = [0; 4];
        assert_eq!(view.fill_keys(&mut keys), Ok(2));
        assert_eq!(keys, [30, 40, 0, 0]);
        let mut values = [0; 1];
        assert_eq!(
            view.fill_values(&mut values),
            Err(SieveError::BufferTooSmall {
                needed: 2,
                capacity: 1
            })
        );
        assert_eq!(values, [0]);
    }

    #[test]
    fn long_and_bool_views_share_the_machinery() {
        let longs: SparseLongArray = SparseLongArray::from([(1, i64::MAX), (2, -1)]);
        let view: LongView<'_> = longs.view().but().value(-1);
        assert_eq!(view.values(), vec![i64::MAX]);

        let flags: SparseBooleanArray = SparseBooleanArray::from([(1, true), (5, false), (9, true)]);
        let view: BoolView<'_> = flags.view().only().value(true).reverse();
        assert_eq!(view.keys(), vec![9, 1]);
    }

    #[test]
    fn object_view_clones_shared_handles() {
        let payload = Arc::new(String::from("shared"));
        let map: SparseArray<Arc<String>> =
            SparseArray::from([(1, Arc::clone(&payload)), (2, Arc::clone(&payload))]);
        let view: ObjectView<'_, Arc<String>> = map.view();
        let values = view.values();
        assert!(values.iter().all(|v| Arc::ptr_eq(v, &payload)));
        assert_eq!(Arc::strong_count(&payload), 5);
    }

    #[test]
    fn mutable_alias_writes_through() {
        let mut map: SparseIntArray = (0..4).map(|k| (k, k)).collect();
        let mut view: IntViewMut<'_> = map.view_mut().only().last(2);
        assert_eq!(view.update_values(|_, v| v * 100), Ok(2));
        drop(view);
        assert_eq!(map.values(), &[0, 1, 200, 300]);
    }
}
