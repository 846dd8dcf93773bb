//! The translated store and the view constructors that produce it.

use std::rc::Rc;

use super::{Cast, IDENTITY, Identity, NonZero, Projection, Translator};
use crate::cursor::{Cursor, Probe};
use crate::filter::{AdvancedFilter, Filter, Snapshot, Stage};
use crate::sieve_error::SieveError;
use crate::store::SlotStore;
use crate::view::View;

/// A store seen through a key translator and a value translator.
///
/// Slots are the inner store's slots. Reads translate, removal passes
/// through, and writes revert the new value first.
#[derive(Clone, Debug)]
pub struct Translated<S, KT, VT> {
    inner: S,
    keys: KT,
    values: VT,
}

impl<S, KT, VT> Translated<S, KT, VT> {
    pub fn new(inner: S, keys: KT, values: VT) -> Self {
        Self {
            inner,
            keys,
            values,
        }
    }

    /// The untranslated store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, KT, VT> SlotStore for Translated<S, KT, VT>
where
    S: SlotStore,
    KT: Translator<S::Key>,
    VT: Translator<S::Value>,
{
    type Key = KT::Output;
    type Value = VT::Output;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn key_at(&self, slot: usize) -> Result<Self::Key, SieveError> {
        self.inner.key_at(slot).map(|k| self.keys.translate(k))
    }

    fn value_at(&self, slot: usize) -> Result<Self::Value, SieveError> {
        self.inner.value_at(slot).map(|v| self.values.translate(v))
    }

    /// # Errors
    /// `NotInvertible` if the value translator cannot revert `value`.
    fn set_value_at(&mut self, slot: usize, value: Self::Value) -> Result<Self::Value, SieveError> {
        let raw = self.values.revert(value).ok_or(SieveError::NotInvertible)?;
        let old = self.inner.set_value_at(slot, raw)?;
        Ok(self.values.translate(old))
    }

    fn remove_at(&mut self, slot: usize) -> Result<(Self::Key, Self::Value), SieveError> {
        let (k, v) = self.inner.remove_at(slot)?;
        Ok((self.keys.translate(k), self.values.translate(v)))
    }
}

/// The selection a view had when it was translated, re-evaluated against
/// the inner store at the start of every traversal.
struct ParentScope<'a, S: SlotStore + 'a> {
    stages: Rc<[Stage<'a, S>]>,
    reversed: bool,
    selected: Snapshot,
}

impl<'a, S, KT, VT> Filter<Translated<S, KT, VT>> for ParentScope<'a, S>
where
    S: SlotStore + 'a,
    KT: Translator<S::Key>,
    VT: Translator<S::Value>,
{
    #[inline]
    fn matches(&self, _store: &Translated<S, KT, VT>, probe: Probe, _position: usize) -> bool {
        self.selected.contains(probe.origin)
    }
}

impl<'a, S, KT, VT> AdvancedFilter<Translated<S, KT, VT>> for ParentScope<'a, S>
where
    S: SlotStore + 'a,
    KT: Translator<S::Key>,
    VT: Translator<S::Value>,
{
    fn initialize(
        &mut self,
        store: &Translated<S, KT, VT>,
        _cursor: &mut dyn Cursor<Translated<S, KT, VT>>,
    ) {
        let inner = store.inner();
        let mut parent = crate::view::compose(inner, &self.stages, self.reversed);
        self.selected = Snapshot::capture(inner, parent.as_mut());
    }
}

impl<'a, S: SlotStore + 'a> View<'a, S> {
    /// Project keys through `keys` and values through `values`.
    ///
    /// Every stage declared so far keeps applying to the new view, and the
    /// new view starts in this view's current direction. Stages declared on
    /// the new view see projected keys and values.
    ///
    /// ```
    /// use sparse_sieve::store::SparseIntArray;
    /// use sparse_sieve::translate::{FullTranslator, IDENTITY};
    ///
    /// let mut map: SparseIntArray = (0..5).map(|k| (k, k)).collect();
    /// let doubled = FullTranslator::new(|v: i32| v * 2, |v: i32| v / 2);
    /// {
    ///     let mut view = map.view_mut().only().from(3).translate(IDENTITY, doubled);
    ///     assert_eq!(view.values(), vec![6, 8]);
    ///     view.update_values(|_, v| v + 100).unwrap();
    /// }
    /// assert_eq!(map.values(), &[0, 1, 2, 53, 54]);
    /// ```
    pub fn translate<KT, VT>(self, keys: KT, values: VT) -> View<'a, Translated<S, KT, VT>>
    where
        KT: Translator<S::Key> + 'a,
        VT: Translator<S::Value> + 'a,
    {
        let reversed = self.is_reversed();
        let (store, stages, baseline) = self.into_parts();
        let store = Translated::new(store, keys, values);
        if stages.is_empty() {
            return View::scoped(store, None, reversed);
        }
        log::trace!("pinning {} stages under a translated view", stages.len());
        let stages: Rc<[Stage<'a, S>]> = stages.into();
        let scope = Stage::advanced(move || ParentScope {
            stages: Rc::clone(&stages),
            reversed: baseline,
            selected: Snapshot::default(),
        });
        View::scoped(store, Some(scope), reversed)
    }

    /// Project values through a closure; keys are unchanged. Read-only.
    pub fn map_values<B, F>(self, f: F) -> View<'a, Translated<S, Identity, Projection<F>>>
    where
        B: Clone,
        F: Fn(S::Value) -> B + 'a,
    {
        self.translate(IDENTITY, Projection(f))
    }

    /// Project keys through a closure; values are unchanged.
    pub fn map_keys<B, F>(self, f: F) -> View<'a, Translated<S, Projection<F>, Identity>>
    where
        B: Clone,
        F: Fn(S::Key) -> B + 'a,
    {
        self.translate(Projection(f), IDENTITY)
    }

    /// View numeric values as `T`. Writes that do not fit the stored type
    /// fail with `NotInvertible`.
    pub fn cast_values<T>(self) -> View<'a, Translated<S, Identity, Cast<T>>>
    where
        Cast<T>: Translator<S::Value>,
        T: 'a,
    {
        self.translate(IDENTITY, Cast::new())
    }

    /// View integer values as flags (nonzero is `true`).
    pub fn values_as_flags(self) -> View<'a, Translated<S, Identity, NonZero>>
    where
        NonZero: Translator<S::Value>,
    {
        self.translate(IDENTITY, NonZero)
    }
}
