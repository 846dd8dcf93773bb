//! Backing stores: the slot-addressed adapter contract and a sorted sparse map.

pub mod slot_store;
pub mod sparse_map;

pub use slot_store::SlotStore;
pub use sparse_map::{
    LongSparseArray, SparseArray, SparseBooleanArray, SparseIntArray, SparseLongArray, SparseMap,
};
