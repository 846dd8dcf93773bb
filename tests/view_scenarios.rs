use sparse_sieve::prelude::*;

fn digits() -> SparseArray<&'static str> {
    SparseMap::from([(0, "0"), (1, "1"), (2, "2"), (3, "3"), (4, "4")])
}

fn pairs<S: SlotStore>(view: &View<'_, S>) -> Vec<(S::Key, S::Value)> {
    view.iter().map(Entry::into_pair).collect()
}

#[test]
fn only_to_then_reverse() {
    let map = digits();
    assert_eq!(
        pairs(&map.view().only().to(2).reverse()),
        vec![(2, "2"), (1, "1"), (0, "0")]
    );
}

#[test]
fn but_to_then_reverse() {
    let map = digits();
    assert_eq!(
        pairs(&map.view().but().to(2).reverse()),
        vec![(4, "4"), (3, "3")]
    );
}

#[test]
fn remove_from_minus_last() {
    let mut map = digits();
    map.view_mut()
        .only()
        .from(2)
        .but()
        .last(2)
        .remove()
        .unwrap();
    assert_eq!(map.keys(), &[0, 1, 3, 4]);
}

#[test]
fn retain_reversed_prefix() {
    let mut map = digits();
    map.view_mut().only().to(2).reverse().retain().unwrap();
    assert_eq!(map, SparseMap::from([(0, "0"), (1, "1"), (2, "2")]));
}

#[test]
fn view_outlives_its_own_mutation() {
    let mut map: SparseIntArray = (1..=10).map(|k| (k, k * k)).collect();
    {
        let mut view = map.view_mut().only().entry_matching(|k, _| k % 3 == 0);
        assert_eq!(view.remove(), Ok(3));
        // chain was cleared; the view now covers the whole remaining map
        assert_eq!(view.count(), 7);
        let mut view = view.only().last(2);
        assert_eq!(view.retain(), Ok(5));
        assert_eq!(view.keys(), vec![8, 10]);
    }
    assert_eq!(map.keys(), &[8, 10]);
}

#[test]
fn exports_over_long_keys() {
    let map: LongSparseArray<String> = [(1_i64 << 40, "far"), (-3, "neg"), (7, "seven")]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();
    let view = map.view().reverse();
    assert_eq!(view.keys(), vec![1_i64 << 40, 7, -3]);
    assert_eq!(view.position_of_key(&-3), Some(2));
    let ordered = view.to_btree_map();
    assert_eq!(ordered.values().cloned().collect::<Vec<_>>(), ["neg", "seven", "far"]);
}

#[test]
fn translation_then_more_selection() {
    let map: SparseIntArray = (0..10).map(|k| (k, k)).collect();
    let view = map
        .view()
        .but()
        .first(2)
        .reverse()
        .translate(IDENTITY, FullTranslator::new(|v: i32| v * 10, |v: i32| v / 10))
        .only()
        .to(2);
    assert_eq!(pairs(&view), vec![(9, 90), (8, 80), (7, 70)]);
}
