use super::*;
use crate::collections::Set;
use proptest::prelude::*;
use rand::Rng;

const REP: usize = if cfg!(miri) { 2 } else { 10 };
const N: usize = if cfg!(miri) { 100 } else { 10000 };

#[test]
fn exp_scenario_test() {
    let mut set = SortedSet::from_list(Some(vec![5, 3, 8, 1]));
    assert_eq!(set.as_slice(), &[1, 3, 5, 8]);
    set.add(3);
    assert_eq!(set.size(), 4);
    set.add(0);
    assert_eq!(set.as_slice(), &[0, 1, 3, 5, 8]);
    assert!(set.has_member(&8));
    assert!(!set.has_member(&9));
}

#[test]
fn exp_empty_insert_test() {
    let mut set = SortedSet::new();
    assert_eq!(set.insertion_point(&42), Some(0));
    assert!(set.probe_path(&42).is_empty());
    assert!(!set.contains(&42));
    set.insert(42);
    assert_eq!(set.as_slice(), &[42]);
}

#[test]
fn exp_random_insert_test() {
    let mut rng = rand::thread_rng();
    for _rep in 0..REP {
        let mut set = SortedSet::new();
        let mut std_set = std::collections::BTreeSet::new();
        for _ in 0..N / REP {
            let x: u32 = rng.gen_range(0..(N as u32));
            assert_eq!(set.insert(x), std_set.insert(x));
        }
        set.check();
        assert!(set.iter().eq(std_set.iter()));
        for x in 0..(N as u32) {
            assert_eq!(set.contains(&x), std_set.contains(&x));
        }
    }
}

#[test]
fn exp_insert_test() {
    let mut set = SortedSet::new();
    for i in (0..N).rev() {
        set.insert(i);
    }
    print_memory();
    assert_eq!(set.len(), N);
    assert_eq!(set.first(), Some(&0));
    assert_eq!(set.last(), Some(&(N - 1)));
    for i in 0..N {
        assert_eq!(set.index_of(&i), Some(i));
    }
}

#[test]
fn std_insert_test() {
    let mut set = std::collections::BTreeSet::new();
    for i in (0..N).rev() {
        set.insert(i);
    }
    print_memory();
    assert_eq!(set.len(), N);
    for i in 0..N {
        assert!(set.contains(&i));
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tagged {
    key: u8,
    tag: u8,
}

fn tagged(key: u8, tag: u8) -> Tagged {
    Tagged { key, tag }
}

#[test]
fn exp_comparator_equal_distinct_test() {
    let by_key = FnOrder(|a: &Tagged, b: &Tagged| a.key.cmp(&b.key));
    let mut set = SortedSet::with_comparator(by_key);
    set.insert(tagged(1, 0));
    set.insert(tagged(3, 0));
    set.insert(tagged(2, 0));
    assert!(!set.insert(tagged(2, 0)));
    // Same key, different value: not a member, so it is added next to its peer.
    assert!(!set.contains(&tagged(2, 7)));
    assert!(set.insert(tagged(2, 7)));
    assert_eq!(set.len(), 4);
    set.check();
    let keys: Vec<u8> = set.iter().map(|t| t.key).collect();
    assert_eq!(keys, [1, 2, 2, 3]);
    assert!(set.iter().any(|t| *t == tagged(2, 7)));
}

#[test]
fn exp_comparator_equal_first_test() {
    // Peer of the first member walks the probe below zero, which must not corrupt order.
    let by_key = FnOrder(|a: &Tagged, b: &Tagged| a.key.cmp(&b.key));
    let mut set = SortedSet::with_comparator(by_key);
    for k in 0..10 {
        set.insert(tagged(k, 0));
    }
    let path = set.probe_path(&tagged(0, 1));
    assert_eq!(path.result(), Err(0));
    assert!(path.steps().iter().any(|&i| i < 0));
    assert!(set.insert(tagged(0, 1)));
    set.check();
    assert_eq!(set.len(), 11);
}

#[test]
fn exp_comparator_tied_group_test() {
    let by_key = FnOrder(|a: &Tagged, b: &Tagged| a.key.cmp(&b.key));
    let mut set = SortedSet::with_comparator(by_key);
    for t in [tagged(1, 0), tagged(1, 1), tagged(1, 2), tagged(1, 3), tagged(2, 0)] {
        assert!(set.insert(t));
    }
    set.check();
    for t in 0..4 {
        assert!(set.contains(&tagged(1, t)), "tag {t}");
    }
    assert!(!set.insert(tagged(1, 2)));
    assert_eq!(set.len(), 5);
    assert!(!set.contains(&tagged(1, 4)));
}

#[test]
fn exp_reverse_test() {
    let mut set = SortedSet::with_comparator(Reverse(NaturalOrder));
    set.extend([1, 5, 3, 5]);
    assert_eq!(set.as_slice(), &[5, 3, 1]);
    assert_eq!(set.index_of(&1), Some(2));
}

#[test]
fn exp_partial_order_test() {
    let mut set = SortedSet::with_comparator(PartialOrder);
    for x in [0.5, -2.0, 9.25, 0.5, 3.0] {
        set.insert(x);
    }
    assert_eq!(set.as_slice(), &[-2.0, 0.5, 3.0, 9.25]);
    assert!(set.contains(&3.0));
    assert!(!set.contains(&3.5));
}

#[test]
fn exp_from_sorted_vec_test() {
    let set = SortedSet::from_sorted_vec(vec!["a", "b", "c"], NaturalOrder).unwrap();
    assert_eq!(set.index_of(&"c"), Some(2));

    let err = SortedSet::from_sorted_vec(vec![3, 1, 2], NaturalOrder).unwrap_err();
    assert_eq!(err, UnorderedError { index: 1 });
    assert_eq!(
        err.to_string(),
        "value at index 1 is not properly ordered relative to its predecessor"
    );

    let empty: SortedSet<i32> = SortedSet::from_sorted_vec(Vec::new(), NaturalOrder).unwrap();
    assert!(empty.is_empty());
}

fn fill<S: Container<u32>>(s: &mut S, values: &[u32]) -> Vec<(u32, usize)> {
    for v in values {
        s.add(*v);
    }
    let mut out = Vec::new();
    s.for_each(|x, i| out.push((*x, i)));
    out
}

#[test]
fn exp_container_test() {
    let values = [4, 2, 4, 9];
    let mut plain = Set::new();
    let mut sorted = SortedSet::new();
    assert_eq!(fill(&mut plain, &values), [(4, 0), (2, 1), (9, 2)]);
    assert_eq!(fill(&mut sorted, &values), [(2, 0), (4, 1), (9, 2)]);
    assert_eq!(plain.size(), sorted.size());
}

#[test]
fn exp_from_set_test() {
    let plain = Set::from([7, 1, 4]);
    let sorted = SortedSet::from_list(Some(plain.iter().copied()));
    assert_eq!(sorted.as_slice(), &[1, 4, 7]);
    let back: Set<i32> = sorted.into_iter().collect();
    assert_eq!(back.as_slice(), &[1, 4, 7]);
}

#[test]
fn exp_debug_test() {
    let set = SortedSet::from([2, 1]);
    assert_eq!(format!("{set:?}"), "{1, 2}");
}

#[test]
#[cfg(feature = "serde")]
fn exp_serde_test() {
    let set: SortedSet<u32> = (0..N as u32).collect();
    let ser = bincode::serialize(&set).unwrap();
    let back: SortedSet<u32> = bincode::deserialize(&ser).unwrap();
    assert_eq!(back, set);

    // Unordered input falls back to searching.
    let ser = bincode::serialize(&vec![1u32, 5, 3, 5, 0]).unwrap();
    let back: SortedSet<u32> = bincode::deserialize(&ser).unwrap();
    back.check();
    assert_eq!(back.as_slice(), &[0, 1, 3, 5]);
}

#[test]
#[cfg(feature = "serde")]
fn std_serde_test() {
    let set: std::collections::BTreeSet<u32> = (0..N as u32).collect();
    let ser = bincode::serialize(&set).unwrap();
    let back: std::collections::BTreeSet<u32> = bincode::deserialize(&ser).unwrap();
    assert_eq!(back, set);
}

proptest! {
    #[test]
    fn sorted_after_every_add_prop(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut set = SortedSet::new();
        for v in values {
            set.add(v);
            prop_assert!(set.as_slice().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn membership_prop(
        added in prop::collection::vec(0u16..1000, 0..150),
        probes in prop::collection::vec(0u16..1000, 0..50),
    ) {
        let set = SortedSet::from_list(Some(added.iter().copied()));
        for a in &added {
            prop_assert!(set.has_member(a));
        }
        for p in &probes {
            prop_assert_eq!(set.has_member(p), added.contains(p));
        }
    }

    #[test]
    fn matches_binary_search_prop(
        added in prop::collection::btree_set(any::<i64>(), 0..300),
        probe in any::<i64>(),
    ) {
        let set: SortedSet<i64> = added.iter().copied().collect();
        let items: Vec<i64> = added.into_iter().collect();
        prop_assert_eq!(set.probe_path(&probe).result(), items.binary_search(&probe));
    }

    #[test]
    fn idempotent_add_prop(values in prop::collection::vec(any::<u8>(), 1..100)) {
        let mut set = SortedSet::from_list(Some(values.clone()));
        let before = set.size();
        for v in values {
            prop_assert!(!set.add(v));
        }
        prop_assert_eq!(set.size(), before);
    }

    #[test]
    fn key_peers_stay_ordered_prop(pairs in prop::collection::vec((0u8..8, any::<u8>()), 0..100)) {
        let by_key = FnOrder(|a: &Tagged, b: &Tagged| a.key.cmp(&b.key));
        let mut set = SortedSet::with_comparator(by_key);
        for (key, tag) in pairs {
            set.insert(tagged(key, tag));
            prop_assert!(set.as_slice().windows(2).all(|w| w[0].key <= w[1].key));
        }
    }

    #[test]
    fn key_peers_stay_unique_prop(pairs in prop::collection::vec((0u8..50, 0u8..4), 0..200)) {
        let by_key = FnOrder(|a: &Tagged, b: &Tagged| a.key.cmp(&b.key));
        let mut set = SortedSet::with_comparator(by_key);
        let mut distinct: Vec<Tagged> = Vec::new();
        for (key, tag) in pairs {
            let t = tagged(key, tag);
            prop_assert_eq!(set.insert(t), !distinct.contains(&t));
            if !distinct.contains(&t) {
                distinct.push(t);
            }
        }
        prop_assert_eq!(set.len(), distinct.len());
        for (i, m) in set.iter().enumerate() {
            prop_assert_eq!(set.index_of(m), Some(i));
        }
    }
}
