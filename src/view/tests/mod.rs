use crate::store::{SparseArray, SparseMap};

mod mutate_tests;

/// Keys `0..=4` mapped to their decimal string.
fn digits() -> SparseArray<&'static str> {
    SparseMap::from([(0, "0"), (1, "1"), (2, "2"), (3, "3"), (4, "4")])
}
