//! SieveError: Unified error type for sparse-sieve public APIs
//!
//! Every fallible operation in the crate (cursor stepping, slot access,
//! buffer export, write-through on projected views) reports through this enum.
//! All variants describe programming errors or contract violations; nothing
//! here is transient, so callers should never retry.

use thiserror::Error;

/// Unified error type for sparse-sieve operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// `next()` without a pending element, or `remove()` without an
    /// intervening successful `next()`.
    #[error("no such element: cursor is exhausted or has nothing to remove")]
    NoSuchElement,
    /// The cursor is in a state where the requested operation cannot be
    /// honoured (e.g. `remove()` after the cursor already looked ahead).
    #[error("illegal cursor state: {0}")]
    IllegalState(&'static str),
    /// A slot outside `0..len` was passed to a store adapter.
    #[error("slot {slot} is out of range for a store of length {len}")]
    IndexOutOfRange { slot: usize, len: usize },
    /// A caller-supplied buffer cannot hold every matched element.
    #[error("buffer too small: {needed} elements matched but capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
    /// `set_value` was called through a translator that has no inverse.
    #[error("value translator is not invertible; write-through is unavailable")]
    NotInvertible,
    /// Mutation through a read-only adapter (e.g. a shared borrow).
    #[error("unsupported store operation: {0}")]
    UnsupportedOperation(&'static str),
    /// Keys of a sparse map are not strictly increasing at `slot`.
    #[error("keys are not strictly increasing at slot {slot}")]
    UnsortedKeys { slot: usize },
    /// Key and value columns of a sparse map disagree in length.
    #[error("key/value length mismatch: {keys} keys vs {values} values")]
    LengthMismatch { keys: usize, values: usize },
}
