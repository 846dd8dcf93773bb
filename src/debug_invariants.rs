//! Invariant checks for the crate's backing stores.
//!
//! [`SparseMap`](crate::store::SparseMap) keeps two parallel columns: keys
//! strictly ascending, and exactly one value per key. Every mutating call
//! (`insert`, `remove`, `remove_at`) re-validates both through
//! [`debug_invariants!`](crate::debug_invariants) and panics on violation.
//! The check runs in debug builds, or in release builds with the
//! `check-invariants` / `strict-invariants` features. Views never check on
//! their own; they only reach a store through `SlotStore`.

use crate::sieve_error::SieveError;

/// A store whose structural invariants can be validated.
pub trait DebugInvariants {
    /// Panic on a broken invariant when checking is enabled; no-op otherwise.
    fn debug_assert_invariants(&self);
    /// First broken invariant as `UnsortedKeys` or `LengthMismatch`.
    fn validate_invariants(&self) -> Result<(), SieveError>;
}

/// Panic with `[invariants] <context>: <error>` if `$expr` is `Err`, when
/// invariant checking is enabled. Expands to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
