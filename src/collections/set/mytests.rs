use crate::collections::{for_each, Container, Set};
use proptest::prelude::*;
use rand::Rng;

const N: usize = if cfg!(miri) { 100 } else { 2000 };

#[test]
fn exp_scenario_test() {
    let set = Set::from_list(Some(['a', 'b', 'a']));
    assert_eq!(set.size(), 2);
    let mut seen = Vec::new();
    set.for_each(|c, _| seen.push(*c));
    assert_eq!(seen, ['a', 'b']);
}

#[test]
fn exp_none_list_test() {
    let set: Set<String> = Set::from_list(None::<Vec<String>>);
    assert!(set.is_empty());
    assert_eq!(set.iter().next(), None);
}

#[test]
fn exp_insert_order_test() {
    let mut set = Set::new();
    for i in (0..N).rev() {
        assert!(set.add(i));
    }
    for i in 0..N {
        assert!(!set.add(i));
    }
    assert_eq!(set.len(), N);
    assert!(set.iter().copied().eq((0..N).rev()));
}

#[test]
fn std_insert_order_test() {
    let mut v = Vec::new();
    for i in (0..N).rev() {
        if !v.contains(&i) {
            v.push(i);
        }
    }
    assert_eq!(v.len(), N);
}

#[test]
fn exp_random_test() {
    let mut rng = rand::thread_rng();
    let mut set = Set::new();
    let mut distinct = std::collections::HashSet::new();
    for _ in 0..N {
        let x: u16 = rng.gen_range(0..500);
        assert_eq!(set.insert(x), distinct.insert(x));
        assert!(set.has_member(&x));
    }
    assert_eq!(set.len(), distinct.len());
}

#[test]
fn exp_index_of_test() {
    let set: Set<&str> = ["x", "y", "z"].into_iter().collect();
    assert_eq!(set.index_of(&"z"), Some(2));
    assert_eq!(Container::index_of(&set, &"w"), None);
    assert!(!set.has_member(&"w"));
}

#[test]
fn exp_for_each_list_test() {
    let inner = Set::from([3, 1, 2]);
    let mut visits = Vec::new();
    for_each(Some(&inner), |x, i| visits.push((*x, i)));
    assert_eq!(visits, [(3, 0), (1, 1), (2, 2)]);

    // A set built from another set keeps the source order.
    let copy = Set::from_list(Some(inner.iter().copied()));
    assert_eq!(copy, inner);
}

#[test]
fn exp_extend_test() {
    let mut set = Set::from([1, 2]);
    set.extend([2, 3]);
    set.extend(&[3, 4]);
    assert_eq!(set.into_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn exp_debug_test() {
    let set = Set::from(["b", "a"]);
    assert_eq!(format!("{set:?}"), r#"{"b", "a"}"#);
}

#[test]
fn exp_try_reserve_test() {
    let mut set: Set<u64> = Set::new();
    assert!(set.try_reserve(10).is_ok());
    assert!(set.try_reserve(usize::MAX).is_err());
    assert!(set.is_empty());
}

#[test]
#[cfg(feature = "serde")]
fn exp_serde_test() {
    let set: Set<u32> = (0..100).rev().collect();
    let ser = bincode::serialize(&set).unwrap();
    let back: Set<u32> = bincode::deserialize(&ser).unwrap();
    assert_eq!(back, set);

    // Duplicates in the input collapse.
    let ser = bincode::serialize(&vec![5u32, 5, 6]).unwrap();
    let back: Set<u32> = bincode::deserialize(&ser).unwrap();
    assert_eq!(back.as_slice(), &[5, 6]);
}

proptest! {
    #[test]
    fn uniqueness_prop(values in prop::collection::vec(0u8..40, 0..200)) {
        let set = Set::from_list(Some(values.iter().copied()));
        let mut first_seen = Vec::new();
        for v in &values {
            if !first_seen.contains(v) {
                first_seen.push(*v);
            }
        }
        prop_assert_eq!(set.as_slice(), first_seen.as_slice());
    }

    #[test]
    fn idempotent_add_prop(values in prop::collection::vec(any::<i16>(), 1..50)) {
        let mut set = Set::from_list(Some(values.clone()));
        let before = set.size();
        for v in values {
            prop_assert!(!set.add(v));
        }
        prop_assert_eq!(set.size(), before);
    }
}
