use std::collections::BTreeSet;

use proptest::prelude::*;
use sparse_sieve::prelude::*;

fn build(keys: &BTreeSet<i32>) -> SparseIntArray {
    keys.iter().map(|&k| (k, k.wrapping_mul(7))).collect()
}

/// A small chain of selectors, applied in order.
#[derive(Clone, Debug)]
enum Step {
    OnlyFirst(usize),
    ButFirst(usize),
    OnlyLast(usize),
    ButLast(usize),
    EvenKeys,
    Reverse,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..12).prop_map(Step::OnlyFirst),
        (0usize..12).prop_map(Step::ButFirst),
        (0usize..12).prop_map(Step::OnlyLast),
        (0usize..12).prop_map(Step::ButLast),
        Just(Step::EvenKeys),
        Just(Step::Reverse),
    ]
}

fn apply<'a, S>(view: View<'a, S>, steps: &[Step]) -> View<'a, S>
where
    S: SlotStore<Key = i32> + 'a,
{
    steps.iter().fold(view, |v, s| match *s {
        Step::OnlyFirst(n) => v.only().first(n),
        Step::ButFirst(n) => v.but().first(n),
        Step::OnlyLast(n) => v.only().last(n),
        Step::ButLast(n) => v.but().last(n),
        Step::EvenKeys => v.only().entry_matching(|k, _| k % 2 == 0),
        Step::Reverse => v.reverse(),
    })
}

/// Straight-line evaluation of the same chain over a vector of keys.
fn model(keys: &BTreeSet<i32>, steps: &[Step]) -> Vec<i32> {
    let mut seq: Vec<i32> = keys.iter().copied().collect();
    for s in steps {
        let n = seq.len();
        seq = match *s {
            Step::OnlyFirst(k) => seq.into_iter().take(k).collect(),
            Step::ButFirst(k) => seq.into_iter().skip(k).collect(),
            Step::OnlyLast(k) => seq.into_iter().skip(n.saturating_sub(k)).collect(),
            Step::ButLast(k) => seq.into_iter().take(n.saturating_sub(k)).collect(),
            Step::EvenKeys => seq.into_iter().filter(|k| k % 2 == 0).collect(),
            Step::Reverse => seq.into_iter().rev().collect(),
        };
    }
    seq
}

proptest! {
    #[test]
    fn chain_matches_straight_line_model(
        keys in prop::collection::btree_set(-50i32..50, 0..30),
        steps in prop::collection::vec(step(), 0..6),
    ) {
        let map = build(&keys);
        let view = apply(map.view(), &steps);
        prop_assert_eq!(view.keys(), model(&keys, &steps));
        prop_assert_eq!(view.count(), model(&keys, &steps).len());
    }

    #[test]
    fn double_reverse_is_a_no_op(
        keys in prop::collection::btree_set(0i32..100, 0..25),
        steps in prop::collection::vec(step(), 0..4),
    ) {
        let map = build(&keys);
        let plain = apply(map.view(), &steps);
        let twice = apply(map.view(), &steps).reverse().reverse();
        prop_assert!(plain.is_strictly_equal_to(&twice));
    }

    #[test]
    fn first_then_but_first_is_a_range(
        keys in prop::collection::btree_set(0i32..100, 0..25),
        n in 0usize..30,
        k in 0usize..30,
    ) {
        prop_assume!(k < n);
        let map = build(&keys);
        let got = map.view().only().first(n).but().first(k).keys();
        let want: Vec<i32> = keys.iter().copied().take(n).skip(k).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn remove_and_retain_partition_the_store(
        keys in prop::collection::btree_set(-20i32..20, 0..30),
        steps in prop::collection::vec(step(), 0..5),
    ) {
        let base = build(&keys);
        let selected: BTreeSet<i32> = model(&keys, &steps).into_iter().collect();

        let mut removed = base.clone();
        let n_removed = apply(removed.view_mut(), &steps).remove().unwrap();
        let mut retained = base.clone();
        apply(retained.view_mut(), &steps).retain().unwrap();

        prop_assert_eq!(n_removed, selected.len());
        prop_assert_eq!(retained.keys().iter().copied().collect::<BTreeSet<_>>(), selected.clone());
        prop_assert!(removed.keys().iter().all(|k| !selected.contains(k)));
        prop_assert_eq!(removed.len() + retained.len(), base.len());
    }

    #[test]
    fn bijective_translation_round_trips(
        keys in prop::collection::btree_set(-1000i32..1000, 0..30),
        steps in prop::collection::vec(step(), 0..4),
    ) {
        let map = build(&keys);
        let neg = FullTranslator::new(|v: i32| -(v as i64), |v: i64| -v as i32);
        let direct = apply(map.view(), &steps).to_vec();
        let through: Vec<Entry<i32, i32>> = apply(map.view(), &steps)
            .translate(IDENTITY, neg)
            .iter()
            .map(|e| {
                let (k, v) = e.into_pair();
                Entry::new(k, neg.revert(v).unwrap())
            })
            .collect();
        prop_assert_eq!(through, direct);
    }
}
