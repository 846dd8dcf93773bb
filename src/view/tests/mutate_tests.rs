use super::digits;
use crate::sieve_error::SieveError;
use crate::store::{SparseIntArray, SparseMap};

#[test]
fn remove_window_minus_tail() {
    let mut map = digits();
    let removed = map.view_mut().only().from(2).but().last(2).remove();
    assert_eq!(removed, Ok(1));
    assert_eq!(map.keys(), &[0, 1, 3, 4]);
}

#[test]
fn retain_reversed_window() {
    let mut map = digits();
    assert_eq!(map.view_mut().only().to(2).reverse().retain(), Ok(2));
    assert_eq!(map, SparseMap::from([(0, "0"), (1, "1"), (2, "2")]));
}

#[test]
fn remove_through_reversal_markers() {
    let mut map = digits();
    map.view_mut().only().to(2).reverse().remove().unwrap();
    assert_eq!(map.keys(), &[3, 4]);

    let mut map = digits();
    map.view_mut()
        .only()
        .from(1)
        .reverse()
        .reverse()
        .only()
        .first(2)
        .remove()
        .unwrap();
    assert_eq!(map.keys(), &[0, 3, 4]);
}

#[test]
fn retain_is_complement_of_remove() {
    let base: SparseIntArray = (0..20).map(|k| (k, k % 7)).collect();

    let mut removed = base.clone();
    removed
        .view_mut()
        .but()
        .value(3)
        .reverse()
        .only()
        .first(6)
        .remove()
        .unwrap();

    let mut retained = base.clone();
    retained
        .view_mut()
        .but()
        .value(3)
        .reverse()
        .only()
        .first(6)
        .retain()
        .unwrap();

    assert_eq!(removed.len() + retained.len(), base.len());
    for (k, _) in base.iter() {
        assert_ne!(removed.contains_key(&k), retained.contains_key(&k), "key {k}");
    }
}

#[test]
fn remove_clears_stages_but_keeps_direction() {
    let mut map = digits();
    let mut view = map.view_mut().only().first(1).reverse();
    assert_eq!(view.remove(), Ok(1));
    assert_eq!(view.stage_count(), 0);
    assert!(view.is_reversed());
    assert_eq!(view.keys(), vec![4, 3, 2, 1]);
    assert_eq!(view.remove(), Ok(4));
    assert!(view.is_empty());
}

#[test]
fn shared_borrow_cannot_mutate() {
    let map = digits();
    let mut view = map.view().only().first(2);
    assert_eq!(
        view.remove(),
        Err(SieveError::UnsupportedOperation("remove_at"))
    );
    assert_eq!(
        view.update_values(|_, v| v),
        Err(SieveError::UnsupportedOperation("set_value_at"))
    );
    assert_eq!(map.len(), 5);
}

#[test]
fn update_values_keeps_stages() {
    let mut map: SparseIntArray = (0..6).map(|k| (k, k)).collect();
    {
        let mut view = map.view_mut().only().entry_matching(|k, _| k % 2 == 1);
        assert_eq!(view.update_values(|k, v| k * 100 + v), Ok(3));
        assert_eq!(view.stage_count(), 1);
        assert_eq!(view.values(), vec![101, 303, 505]);
    }
    assert_eq!(map.values(), &[0, 101, 2, 303, 4, 505]);
}

#[test]
fn traversal_tracks_origin_across_removal() {
    let mut map: SparseIntArray = (0..6).map(|k| (k, k)).collect();
    let mut seen = Vec::new();
    {
        let mut view = map.view_mut();
        let mut walk = view.traverse();
        while let Some(mut slot) = walk.advance().unwrap() {
            seen.push((slot.slot(), slot.origin()));
            if slot.key().unwrap() < 3 {
                let entry = slot.remove().unwrap();
                assert!(*entry.key() < 3);
            } else {
                slot.set_value(-1).unwrap();
            }
        }
    }
    assert_eq!(
        seen,
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 4), (2, 5)]
    );
    assert_eq!(map.keys(), &[3, 4, 5]);
    assert_eq!(map.values(), &[-1, -1, -1]);
}

#[test]
fn detach_is_a_copy() {
    let mut map = digits();
    let mut view = map.view_mut().only().key(2);
    let mut walk = view.traverse();
    let mut slot = walk.advance().unwrap().unwrap();
    let before = slot.detach().unwrap();
    assert_eq!(slot.set_value("two"), Ok("2"));
    assert_eq!(before.into_pair(), (2, "2"));
    assert_eq!(slot.value(), Ok("two"));
}
