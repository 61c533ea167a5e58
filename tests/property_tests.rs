use btree::BTree;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Remove(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..200i32).prop_map(Op::Insert),
        (0..200i32).prop_map(Op::Remove),
    ]
}

proptest! {
    /// Every invariant holds after an arbitrary insert/remove interleaving,
    /// and the tree agrees with a model set throughout.
    #[test]
    fn prop_tree_matches_model_set(
        order in 4usize..12,
        ops in prop::collection::vec(op_strategy(), 1..400),
    ) {
        let mut tree = BTree::new(order).unwrap();
        let mut model = BTreeSet::new();

        for op in &ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(*key), model.insert(*key));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(key), model.remove(key));
                }
            }
        }

        let audit = tree.check_properties_detailed();
        prop_assert!(audit.is_ok(), "invariant violation: {:?}", audit);
        prop_assert_eq!(tree.size(), model.len());

        let keys: Vec<i32> = tree.items().into_iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    /// The rendered string is exactly the sorted unique inputs joined.
    #[test]
    fn prop_join_renders_sorted_unique(
        keys in prop::collection::vec(0..1_000i32, 0..200),
        order in 4usize..10,
    ) {
        let mut tree = BTree::new(order).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        let unique: BTreeSet<i32> = keys.iter().copied().collect();
        let expected = unique
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(tree.join(","), expected);
    }

    /// Range queries agree with the model set for arbitrary bounds.
    #[test]
    fn prop_range_search_matches_model(
        keys in prop::collection::vec(0..500i32, 0..150),
        begin in 0..500i32,
        end in 0..500i32,
        order in 4usize..10,
    ) {
        let mut tree = BTree::new(order).unwrap();
        let mut model = BTreeSet::new();
        for &key in &keys {
            tree.insert(key);
            model.insert(key);
        }

        let got: Vec<i32> = tree.range_search(&begin, &end).into_iter().copied().collect();
        let expected: Vec<i32> = if begin <= end {
            model.range(begin..=end).copied().collect()
        } else {
            Vec::new()
        };
        prop_assert_eq!(got, expected);
    }

    /// min/max track the model through arbitrary operation sequences.
    #[test]
    fn prop_min_max_track_model(
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let mut tree = BTree::new(5).unwrap();
        let mut model = BTreeSet::new();

        for op in &ops {
            match op {
                Op::Insert(key) => {
                    tree.insert(*key);
                    model.insert(*key);
                }
                Op::Remove(key) => {
                    tree.remove(key);
                    model.remove(key);
                }
            }
            prop_assert_eq!(tree.min_key().ok(), model.iter().next());
            prop_assert_eq!(tree.max_key().ok(), model.iter().next_back());
        }
    }

    /// Building from a sorted vector yields the same tree contents as
    /// inserting one by one.
    #[test]
    fn prop_from_ordered_vec_equals_inserts(
        keys in prop::collection::btree_set(0..1_000i32, 0..150),
        order in 4usize..10,
    ) {
        let sorted: Vec<i32> = keys.iter().copied().collect();
        let built = BTree::from_ordered_vec(sorted.clone(), order).unwrap();

        let mut inserted = BTree::new(order).unwrap();
        for &key in &sorted {
            inserted.insert(key);
        }

        prop_assert_eq!(built.size(), inserted.size());
        prop_assert_eq!(built.items(), inserted.items());
        prop_assert!(built.check_properties());
    }
}
