extern crate bincode;
extern crate rand;
extern crate splay_collections;

use rand::{Rng, SeedableRng, XorShiftRng};
use splay_collections::splay_tree::SplayTree;
use std::collections::BTreeMap;

fn root_key<T: Copy, U>(tree: &SplayTree<T, U>) -> Option<T> {
    tree.root().map(|(key, _)| *key)
}

#[test]
fn test_scenario_insert_three() {
    let mut tree = SplayTree::new();
    tree.insert(1, "a");
    tree.insert(2, "b");
    tree.insert(0, "c");

    assert_eq!(
        tree.in_order().collect::<Vec<_>>(),
        vec![(&0, &"c"), (&1, &"a"), (&2, &"b")],
    );
    assert_eq!(root_key(&tree), Some(0));
}

#[test]
fn test_scenario_ascending_then_search() {
    let mut tree = SplayTree::new();
    for key in 1..=5u32 {
        tree.insert(key, key * 100);
    }
    assert_eq!(root_key(&tree), Some(5));

    assert_eq!(tree.search(&1), Some(&100));
    assert_eq!(root_key(&tree), Some(1));
    assert_eq!(tree.search(&1), Some(&100));
    assert_eq!(root_key(&tree), Some(1));
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn test_scenario_delete_middle() {
    let mut tree = SplayTree::new();
    for key in 1..=3u32 {
        tree.insert(key, key);
    }
    tree.delete(&2, false);

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.in_order().map(|(key, _)| *key).collect::<Vec<_>>(), vec![1, 3]);
    assert!(!tree.contains(&2));
}

#[test]
fn test_contains_is_idempotent() {
    let mut tree: SplayTree<u32, u32> = (0..50).map(|key| (key * 2, key)).collect();
    for key in 0..100 {
        let first = tree.contains(&key);
        let second = tree.contains(&key);
        assert_eq!(first, second);
        assert_eq!(first, key % 2 == 0);
        assert_eq!(tree.len(), 50);
    }
}

#[test]
fn test_delete_absent_keeps_shape() {
    let mut tree: SplayTree<u32, u32> = vec![(5, 5), (1, 1), (9, 9), (3, 3)].into_iter().collect();
    let before: Vec<u32> = tree.pre_order().map(|(key, _)| *key).collect();

    assert_eq!(tree.delete(&4, true), None);
    assert_eq!(tree.remove(&100), None);

    let after: Vec<u32> = tree.pre_order().map(|(key, _)| *key).collect();
    assert_eq!(before, after);
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_random_operations() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
    let mut tree = SplayTree::new();
    let mut expected = BTreeMap::new();

    for step in 0..20_000 {
        let key = rng.gen_range(0u32, 512);
        match rng.gen_range(0u32, 4) {
            0 | 1 => {
                let value = rng.gen::<u32>();
                let old_len = tree.len();
                let replaced = tree.insert(key, value);
                assert_eq!(replaced, expected.insert(key, value));
                let growth = if replaced.is_some() { 0 } else { 1 };
                assert_eq!(tree.len(), old_len + growth);
                assert_eq!(root_key(&tree), Some(key));
            },
            2 => {
                let found = tree.search(&key).cloned();
                assert_eq!(found, expected.get(&key).cloned());
                if found.is_some() {
                    assert_eq!(root_key(&tree), Some(key));
                }
            },
            _ => {
                let old_len = tree.len();
                let removed = tree.remove(&key);
                assert_eq!(removed, expected.remove(&key).map(|value| (key, value)));
                let shrink = if removed.is_some() { 1 } else { 0 };
                assert_eq!(tree.len(), old_len - shrink);
            },
        }
        assert_eq!(tree.len(), expected.len());
        if step % 500 == 0 {
            assert_eq!(tree.check_invariants(), Ok(()));
        }
    }

    assert_eq!(tree.check_invariants(), Ok(()));
    assert_eq!(
        tree.iter().collect::<Vec<_>>(),
        expected.iter().collect::<Vec<_>>(),
    );
    assert_eq!(
        tree.reverse_in_order().collect::<Vec<_>>(),
        expected.iter().rev().collect::<Vec<_>>(),
    );
}

#[test]
fn test_in_order_is_ascending() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([4, 3, 2, 1]);
    let mut tree = SplayTree::new();
    for _ in 0..5_000 {
        tree.insert(rng.gen::<u32>(), ());
    }

    let keys: Vec<u32> = tree.in_order().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), tree.len());
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_traversals_visit_every_entry() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([7, 7, 7, 7]);
    let mut tree = SplayTree::new();
    for _ in 0..1_000 {
        let key = rng.gen_range(0u32, 10_000);
        tree.insert(key, key);
    }

    let mut sorted: Vec<u32> = tree.in_order().map(|(key, _)| *key).collect();
    for traversal in vec![
        tree.pre_order().map(|(key, _)| *key).collect::<Vec<_>>(),
        tree.post_order().map(|(key, _)| *key).collect::<Vec<_>>(),
        tree.level_order().map(|(key, _)| *key).collect::<Vec<_>>(),
    ] {
        let mut keys = traversal;
        keys.sort();
        assert_eq!(keys, sorted);
    }

    assert_eq!(tree.pre_order().next().map(|(key, _)| *key), root_key(&tree));
    assert_eq!(tree.level_order().next().map(|(key, _)| *key), root_key(&tree));
    assert_eq!(tree.post_order().last().map(|(key, _)| *key), root_key(&tree));

    sorted.reverse();
    assert_eq!(
        tree.reverse_in_order().map(|(key, _)| *key).collect::<Vec<_>>(),
        sorted,
    );
}

#[test]
fn test_repeated_access_stays_shallow() {
    let mut tree = SplayTree::new();
    for key in 0..2_000u32 {
        tree.insert(key, key);
    }
    // ascending inserts leave a left spine; searching its deepest key folds it up
    assert_eq!(tree.search(&0), Some(&0));
    assert_eq!(root_key(&tree), Some(0));
    assert_eq!(tree.search(&1), Some(&1));
    assert_eq!(tree.level_order().nth(1).map(|(key, _)| *key), Some(0));
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn test_deep_tree_is_released() {
    let mut tree = SplayTree::new();
    for key in 0..100_000u32 {
        tree.insert(key, key);
    }
    assert_eq!(tree.len(), 100_000);
    assert_eq!(tree.check_invariants(), Ok(()));
    assert_eq!(tree.in_order().count(), 100_000);
    assert_eq!(tree.post_order().count(), 100_000);
    drop(tree);

    let mut tree = SplayTree::new();
    for key in 0..100_000u32 {
        tree.insert(key, key);
    }
    assert_eq!(tree.into_iter().take(3).collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_delete_every_key() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([9, 8, 7, 6]);
    let mut keys: Vec<u32> = (0..1_000).collect();
    let mut tree: SplayTree<u32, u32> = keys.iter().map(|key| (*key, key + 1)).collect();
    rng.shuffle(&mut keys);

    for (index, key) in keys.iter().enumerate() {
        assert_eq!(tree.delete(key, true), Some(key + 1));
        assert_eq!(tree.len(), keys.len() - index - 1);
        assert!(tree.get(key).is_none());
        if index % 100 == 0 {
            assert_eq!(tree.check_invariants(), Ok(()));
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}

#[test]
fn test_borrowed_keys() {
    let mut tree = SplayTree::new();
    tree.insert(String::from("pear"), 3);
    tree.insert(String::from("apple"), 1);
    tree.insert(String::from("fig"), 2);

    assert_eq!(tree.search("pear"), Some(&3));
    assert_eq!(tree.get("kiwi"), None);
    assert_eq!(tree.floor("grape").map(String::as_str), Some("fig"));
    assert_eq!(tree.remove("apple"), Some((String::from("apple"), 1)));
}

#[test]
fn test_bincode_round_trip() {
    let tree: SplayTree<u32, String> = (0..100u32).map(|key| (key, key.to_string())).collect();
    let bytes = bincode::serialize(&tree).unwrap();
    let decoded: SplayTree<u32, String> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(decoded, tree);
    assert_eq!(decoded.check_invariants(), Ok(()));
}
