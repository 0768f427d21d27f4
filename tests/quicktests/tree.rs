use leaderboard_bst::{Player, PlayerTree, Traversal};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{name, Op};

fn in_order_names(tree: &PlayerTree) -> Vec<String> {
    tree.to_vec(Traversal::InOrder)
        .into_iter()
        .map(|p| p.name)
        .collect()
}

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of players in both.
fn do_ops(ops: &[Op], tree: &mut PlayerTree, map: &mut BTreeMap<String, u32>) -> bool {
    for op in ops {
        let agrees = match op {
            Op::Insert(k, v) => {
                let fresh = !map.contains_key(&name(*k));
                if fresh {
                    map.insert(name(*k), *v);
                }
                tree.insert(Player::new(name(*k), *v)) == fresh
            }
            Op::Remove(k) => tree.remove(&name(*k)) == map.remove(&name(*k)).is_some(),
            Op::Export(order) => tree.to_vec(order.0).len() == map.len(),
        };
        if !agrees || tree.len() != map.len() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = PlayerTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map)
        && map
            .iter()
            .all(|(k, v)| tree.get(k) == Some(&Player::new(k.clone(), *v)))
        && in_order_names(&tree) == map.keys().cloned().collect::<Vec<_>>()
}

#[quickcheck]
fn size_counts_rejected_duplicates(xs: Vec<u8>) -> bool {
    let mut tree = PlayerTree::new();
    let rejected = xs
        .iter()
        .filter(|x| !tree.insert(Player::new(name(**x), 0)))
        .count();

    tree.len() == xs.len() - rejected
}

#[quickcheck]
fn contains(xs: Vec<u8>) -> bool {
    let tree: PlayerTree = xs.iter().map(|x| Player::new(name(*x), 0)).collect();

    xs.iter().all(|x| tree.contains(&name(*x)))
}

#[quickcheck]
fn contains_not(xs: Vec<u8>, nots: Vec<u8>) -> bool {
    let tree: PlayerTree = xs.iter().map(|x| Player::new(name(*x), 0)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(&name(*x)))
}

#[quickcheck]
fn with_removals(xs: Vec<u8>, removes: Vec<u8>) -> bool {
    let mut tree: PlayerTree = xs.iter().map(|x| Player::new(name(*x), 0)).collect();
    for remove in &removes {
        tree.remove(&name(*remove));
    }

    let removed: HashSet<_> = removes.iter().collect();
    let still_present: HashSet<_> = xs.iter().filter(|x| !removed.contains(x)).collect();

    removes.iter().all(|x| !tree.contains(&name(*x)))
        && still_present.iter().all(|x| tree.contains(&name(**x)))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<u8>) -> bool {
    let tree: PlayerTree = xs.iter().map(|x| Player::new(name(*x), 0)).collect();
    let names = in_order_names(&tree);

    names.len() == tree.len() && names.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn every_order_exports_every_player_once(xs: Vec<(u8, u32)>) -> bool {
    let tree: PlayerTree = xs.iter().map(|(k, w)| Player::new(name(*k), *w)).collect();
    let mut expected = tree.to_vec(Traversal::InOrder);
    expected.sort_by(|a, b| a.name.cmp(&b.name));

    Traversal::ALL.iter().all(|order| {
        let mut exported = tree.to_vec(*order);
        exported.sort_by(|a, b| a.name.cmp(&b.name));
        exported == expected
    })
}

#[quickcheck]
fn in_order_round_trip_is_idempotent(xs: Vec<(u8, u32)>) -> bool {
    let tree: PlayerTree = xs.iter().map(|(k, w)| Player::new(name(*k), *w)).collect();
    let exported = tree.to_vec(Traversal::InOrder);
    let rebuilt: PlayerTree = exported.iter().cloned().collect();

    rebuilt.to_vec(Traversal::InOrder) == exported
}

#[quickcheck]
fn pre_order_round_trip_preserves_shape(xs: Vec<u8>) -> bool {
    let tree: PlayerTree = xs.iter().map(|x| Player::new(name(*x), 0)).collect();
    let rebuilt: PlayerTree = tree.to_vec(Traversal::PreOrder).into_iter().collect();

    Traversal::ALL
        .iter()
        .all(|order| rebuilt.to_vec(*order) == tree.to_vec(*order))
}

#[quickcheck]
fn removing_absent_key_is_a_no_op(xs: Vec<u8>, missing: u8) -> bool {
    let mut tree: PlayerTree = xs
        .iter()
        .filter(|x| **x != missing)
        .map(|x| Player::new(name(*x), 0))
        .collect();
    let before = tree.to_vec(Traversal::PreOrder);

    !tree.remove(&name(missing)) && tree.to_vec(Traversal::PreOrder) == before
}

#[test]
fn leaderboard_scenarios() {
    let tree: PlayerTree = [("a", 1), ("b", 2), ("c", 2)]
        .into_iter()
        .map(|(n, w)| Player::new(n, w))
        .collect();
    assert_eq!(tree.average_wins(), 1.67);
    assert_eq!(PlayerTree::new().average_wins(), 0.0);

    let tree: PlayerTree = [("a", 1), ("b", 2), ("c", 3)]
        .into_iter()
        .map(|(n, w)| Player::new(n, w))
        .collect();
    assert_eq!(tree.count_at_least(2), 2);

    let mut tree: PlayerTree = ["b", "a", "d", "c", "e"]
        .into_iter()
        .map(|n| Player::new(n, 0))
        .collect();
    assert!(tree.remove("b"));
    assert_eq!(tree.len(), 4);
    assert_eq!(in_order_names(&tree), ["a", "c", "d", "e"]);
}
