#![cfg_attr(docsrs, feature(doc_cfg))]
//! # sparse-sieve
//!
//! sparse-sieve is a query and transformation layer over sparse, key-ordered
//! collections: dense slot arrays that map an integer-like key to a value. You
//! declare what to keep, in which order and through which projection, and the
//! crate turns that declaration into one lazy pass over the backing store.
//!
//! ## Features
//! - [`SparseMap`](store::SparseMap) and its aliases (`SparseArray`,
//!   `SparseIntArray`, `SparseLongArray`, `SparseBooleanArray`,
//!   `LongSparseArray`) as ready-made backing stores
//! - The [`SlotStore`](store::SlotStore) adapter trait for bringing your own
//!   store
//! - Composable selectors (`first`, `last`, `to`, `from`, index sets, key and
//!   value sets, containment in another store, closures) in inclusive
//!   (`only()`) and exclusive (`but()`) form
//! - Reversal at any point of a chain, with later selectors seeing the
//!   reversed sequence
//! - In-place `remove()`, `retain()` and write-through traversal
//! - Key/value projections with optional inverses for write-back
//!
//! ## Usage
//!
//! ```
//! use sparse_sieve::prelude::*;
//!
//! let mut map: SparseArray<&str> =
//!     SparseMap::from([(0, "0"), (1, "1"), (2, "2"), (3, "3"), (4, "4")]);
//!
//! let pairs: Vec<_> = map
//!     .view()
//!     .only()
//!     .to(2)
//!     .reverse()
//!     .iter()
//!     .map(Entry::into_pair)
//!     .collect();
//! assert_eq!(pairs, [(2, "2"), (1, "1"), (0, "0")]);
//!
//! map.view_mut().only().from(2).but().last(2).remove()?;
//! assert_eq!(map.keys(), &[0, 1, 3, 4]);
//! # Ok::<(), SieveError>(())
//! ```
//!
//! ## Borrowing
//! A view over `&map` reads; a view over `&mut map` also mutates. Cursors
//! never hold the store: each step receives it, so a traversal that removes
//! entries needs only the one mutable borrow the view already has.
//!
//! ## Shared payloads
//! When values are large or shared, instantiate the map with `V = Arc<T>`.
//! Traversal and export clone the `Arc` handle (cheap) without copying `T`.
//!
//! ## Logging
//! The crate logs through the [`log`] facade: `trace` for pipeline
//! construction, `debug` for bulk mutation counts and `warn` when a traversal
//! hits an unreadable slot. Install any `log` backend to see them.

pub mod cursor;
pub mod debug_invariants;
pub mod filter;
pub mod sieve_error;
pub mod store;
pub mod translate;
pub mod view;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::cursor::{Cursor, Probe};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::filter::{AdvancedFilter, Filter, FilterBuilder};
    pub use crate::sieve_error::SieveError;
    pub use crate::store::{
        LongSparseArray, SlotStore, SparseArray, SparseBooleanArray, SparseIntArray,
        SparseLongArray, SparseMap,
    };
    pub use crate::translate::{FullTranslator, IDENTITY, Projection, Translated, Translator};
    pub use crate::view::{Entry, View};
}
