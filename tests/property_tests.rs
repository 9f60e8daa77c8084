//! Property-based tests for root-path construction and chain connection.

use proptest::prelude::*;
use proptest::sample::Index;

use orgchain::domain::{connect_paths, find_path_to_root, ManagerMap};

/// Parent index for every node; node 0 is the single root.
fn arb_tree() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(any::<Index>(), 0..40).prop_map(|picks| {
        let mut parents = vec![None];
        for (i, pick) in picks.iter().enumerate() {
            parents.push(Some(pick.index(i + 1)));
        }
        parents
    })
}

fn managers(parents: &[Option<usize>]) -> ManagerMap {
    parents
        .iter()
        .enumerate()
        .map(|(id, parent)| (id.to_string(), parent.map(|p| p.to_string())))
        .collect()
}

fn depth(parents: &[Option<usize>], mut node: usize) -> usize {
    let mut depth = 0;
    while let Some(parent) = parents[node] {
        node = parent;
        depth += 1;
    }
    depth
}

proptest! {
    #[test]
    fn path_to_root_ends_at_root(parents in arb_tree(), pick in any::<Index>()) {
        let managers = managers(&parents);
        let node = pick.index(parents.len());

        let path = find_path_to_root(&node.to_string(), &managers).unwrap();

        prop_assert_eq!(path.len(), depth(&parents, node) + 1);
        let last = path.last().unwrap();
        prop_assert!(managers[last].is_none());
        prop_assert_eq!(&path[0], &node.to_string());
    }

    #[test]
    fn connected_paths_rebuild_both_root_paths(
        parents in arb_tree(),
        pick_1 in any::<Index>(),
        pick_2 in any::<Index>(),
    ) {
        let managers = managers(&parents);
        let id_1 = pick_1.index(parents.len()).to_string();
        let id_2 = pick_2.index(parents.len()).to_string();
        let path_1 = find_path_to_root(&id_1, &managers).unwrap();
        let path_2 = find_path_to_root(&id_2, &managers).unwrap();

        let chain = connect_paths(&path_1, &path_2).unwrap();

        // left + ancestor is a prefix of path 1
        prop_assert_eq!(&path_1[..chain.left.len()], chain.left.as_slice());
        prop_assert_eq!(&path_1[chain.left.len()], &chain.ancestor);

        // reversed right + ancestor is a prefix of path 2
        let down: Vec<String> = chain.right.iter().rev().cloned().collect();
        prop_assert_eq!(&path_2[..down.len()], down.as_slice());
        prop_assert_eq!(&path_2[down.len()], &chain.ancestor);

        // both continue identically from the ancestor to the root
        prop_assert_eq!(&path_1[chain.left.len()..], &path_2[down.len()..]);

        // the ancestor is the lowest shared one
        if let (Some(l), Some(r)) = (chain.left.last(), chain.right.first()) {
            prop_assert_ne!(l, r);
        }
        prop_assert!(!chain.left.iter().any(|id| chain.right.contains(id)));
    }

    #[test]
    fn identical_paths_connect_at_start(parents in arb_tree(), pick in any::<Index>()) {
        let managers = managers(&parents);
        let id = pick.index(parents.len()).to_string();
        let path = find_path_to_root(&id, &managers).unwrap();

        let chain = connect_paths(&path, &path).unwrap();

        prop_assert!(chain.left.is_empty());
        prop_assert!(chain.right.is_empty());
        prop_assert_eq!(chain.ancestor, id);
    }
}
