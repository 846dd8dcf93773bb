//! Projection layer: views whose keys and values are mapped on the fly.
//!
//! A [`Translator`] maps one stored component (key or value) to what the
//! caller sees. Translators that can also map back ("full translators") make
//! a translated view writable: [`SlotMut::set_value`](crate::view::SlotMut::set_value)
//! and [`View::update_values`](crate::view::View::update_values) revert the
//! caller's value before storing it.

pub mod translated;

pub use translated::Translated;

use core::fmt;
use core::marker::PhantomData;

use num_traits::{AsPrimitive, NumCast, One, Zero};

/// Maps a stored component of type `A` to a projected one.
pub trait Translator<A> {
    type Output: Clone;

    fn translate(&self, input: A) -> Self::Output;

    /// Map a projected component back, if this translator can.
    ///
    /// `None` means "no preimage"; write-through then fails with
    /// [`SieveError::NotInvertible`](crate::sieve_error::SieveError::NotInvertible).
    fn revert(&self, output: Self::Output) -> Option<A> {
        let _ = output;
        None
    }
}

/// Leaves the component unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// The identity translator.
pub const IDENTITY: Identity = Identity;

impl<A: Clone> Translator<A> for Identity {
    type Output = A;

    #[inline]
    fn translate(&self, input: A) -> A {
        input
    }

    #[inline]
    fn revert(&self, output: A) -> Option<A> {
        Some(output)
    }
}

/// Forward-only projection through a closure.
#[derive(Clone, Copy)]
pub struct Projection<F>(pub F);

impl<A, B: Clone, F: Fn(A) -> B> Translator<A> for Projection<F> {
    type Output = B;

    #[inline]
    fn translate(&self, input: A) -> B {
        (self.0)(input)
    }
}

impl<F> fmt::Debug for Projection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Projection(..)")
    }
}

/// Projection with an inverse.
///
/// `inverse` must undo `forward` on every value it is given back; the pair
/// is not checked.
#[derive(Clone, Copy)]
pub struct FullTranslator<F, R> {
    forward: F,
    inverse: R,
}

impl<F, R> FullTranslator<F, R> {
    pub fn new(forward: F, inverse: R) -> Self {
        Self { forward, inverse }
    }

    /// The same pair, swapped.
    pub fn inverse(self) -> FullTranslator<R, F> {
        FullTranslator {
            forward: self.inverse,
            inverse: self.forward,
        }
    }
}

impl<A, B, F, R> Translator<A> for FullTranslator<F, R>
where
    B: Clone,
    F: Fn(A) -> B,
    R: Fn(B) -> A,
{
    type Output = B;

    #[inline]
    fn translate(&self, input: A) -> B {
        (self.forward)(input)
    }

    #[inline]
    fn revert(&self, output: B) -> Option<A> {
        Some((self.inverse)(output))
    }
}

impl<F, R> fmt::Debug for FullTranslator<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FullTranslator(..)")
    }
}

/// Numeric conversion to `T`.
///
/// Forward uses `as` semantics; reverting a value that does not fit the
/// stored type has no preimage.
pub struct Cast<T>(PhantomData<fn() -> T>);

impl<T> Cast<T> {
    pub const fn new() -> Self {
        Cast(PhantomData)
    }
}

impl<T> Default for Cast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Cast<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cast<T> {}

impl<T> fmt::Debug for Cast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cast<{}>", core::any::type_name::<T>())
    }
}

impl<A, T> Translator<A> for Cast<T>
where
    A: AsPrimitive<T> + NumCast,
    T: Copy + NumCast + 'static,
{
    type Output = T;

    #[inline]
    fn translate(&self, input: A) -> T {
        input.as_()
    }

    #[inline]
    fn revert(&self, output: T) -> Option<A> {
        <A as NumCast>::from(output)
    }
}

/// Integer to flag: nonzero is `true`. Reverts to `1`/`0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NonZero;

impl<A: Zero + One> Translator<A> for NonZero {
    type Output = bool;

    #[inline]
    fn translate(&self, input: A) -> bool {
        !input.is_zero()
    }

    #[inline]
    fn revert(&self, output: bool) -> Option<A> {
        Some(if output { A::one() } else { A::zero() })
    }
}
