//! Fluent selector vocabulary shared by `only()` and `but()`.

use super::builtin::{ContainedIn, EntryMatching, First, Indexes, KeyIn, Last, ValueIn};
use super::{AdvancedFilter, Filter, Stage};
use crate::store::SlotStore;
use crate::view::View;

/// Pending selector on a view.
///
/// Obtained from [`View::only`] (inclusive) or [`View::but`] (exclusive).
/// Every selector consumes the builder, appends one stage to the view and
/// hands the view back, so chains read left to right:
///
/// ```
/// use sparse_sieve::store::SparseIntArray;
///
/// let map: SparseIntArray = (0..10).map(|k| (k, k * k)).collect();
/// let keys = map.view().only().from(2).but().last(3).keys();
/// assert_eq!(keys, vec![2, 3, 4, 5, 6]);
/// ```
#[must_use = "a selector does nothing until applied"]
pub struct FilterBuilder<'a, S: SlotStore + 'a> {
    view: View<'a, S>,
    inclusive: bool,
}

impl<'a, S: SlotStore + 'a> FilterBuilder<'a, S> {
    pub(crate) fn new(view: View<'a, S>, inclusive: bool) -> Self {
        Self { view, inclusive }
    }

    /// `true` for `only()`, `false` for `but()`.
    #[inline]
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    fn push(self, stage: Stage<'a, S>) -> View<'a, S> {
        let Self { mut view, inclusive } = self;
        view.push_stage(if inclusive { stage } else { stage.inverted() });
        view
    }

    /// The first `n` elements.
    pub fn first(self, n: usize) -> View<'a, S> {
        self.push(Stage::plain(First { n }))
    }

    /// The last `n` elements. Costs one extra pass per traversal.
    pub fn last(self, n: usize) -> View<'a, S> {
        self.push(Stage::advanced(move || Last::new(n)))
    }

    /// Positions `0..=index`.
    pub fn to(self, index: usize) -> View<'a, S> {
        self.first(index.saturating_add(1))
    }

    /// Positions `index..`.
    pub fn from(self, index: usize) -> View<'a, S> {
        self.push(Stage::plain(First { n: index }).inverted())
    }

    /// The element at `position`.
    pub fn index(self, position: usize) -> View<'a, S> {
        self.indexes([position])
    }

    /// Elements at any of `positions`.
    pub fn indexes<I: IntoIterator<Item = usize>>(self, positions: I) -> View<'a, S> {
        self.push(Stage::plain(positions.into_iter().collect::<Indexes>()))
    }

    pub fn key(self, key: S::Key) -> View<'a, S>
    where
        S::Key: PartialEq + 'a,
    {
        self.keys([key])
    }

    pub fn keys<I: IntoIterator<Item = S::Key>>(self, keys: I) -> View<'a, S>
    where
        S::Key: PartialEq + 'a,
    {
        self.push(Stage::plain(keys.into_iter().collect::<KeyIn<S::Key>>()))
    }

    pub fn value(self, value: S::Value) -> View<'a, S>
    where
        S::Value: PartialEq + 'a,
    {
        self.values([value])
    }

    pub fn values<I: IntoIterator<Item = S::Value>>(self, values: I) -> View<'a, S>
    where
        S::Value: PartialEq + 'a,
    {
        self.push(Stage::plain(values.into_iter().collect::<ValueIn<S::Value>>()))
    }

    /// Entries whose key is also in `other` with an equal value.
    ///
    /// `other` is read once, now; later changes to it are not observed.
    pub fn contained_in<T>(self, other: &T) -> View<'a, S>
    where
        T: SlotStore<Key = S::Key, Value = S::Value>,
        S::Key: Ord + 'a,
        S::Value: PartialEq + 'a,
    {
        self.push(Stage::plain(ContainedIn::of(other)))
    }

    /// Entries satisfying `predicate`.
    pub fn entry_matching<F>(self, predicate: F) -> View<'a, S>
    where
        F: Fn(&S::Key, &S::Value) -> bool + 'a,
    {
        self.push(Stage::plain(EntryMatching(predicate)))
    }

    /// Custom stateless filter.
    pub fn matching<F: Filter<S> + 'a>(self, filter: F) -> View<'a, S> {
        self.push(Stage::plain(filter))
    }

    /// Custom advanced filter; `factory` is called once per traversal.
    pub fn matching_advanced<F, G>(self, factory: G) -> View<'a, S>
    where
        F: AdvancedFilter<S> + 'a,
        G: Fn() -> F + 'a,
    {
        self.push(Stage::advanced(factory))
    }
}
