use std::collections::BTreeMap;

use arbor_collections::BstMultiset;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(u8),
    RemoveOne(u8),
    RemoveAll(u8),
    PopFirst,
    PopLast,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (0u8..16).prop_map(Op::Insert),
        4 => (0u8..16).prop_map(Op::RemoveOne),
        2 => (0u8..16).prop_map(Op::RemoveAll),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ]
}

/// Reference model: item -> occurrence count.
fn model_len(model: &BTreeMap<u8, usize>) -> usize {
    model.values().sum()
}

proptest! {
    /// Drives the multiset with random traffic over a small key space (so
    /// duplicate runs actually happen) and checks it against a counting
    /// model.
    #[test]
    fn multiset_matches_counting_model(ops in proptest::collection::vec(op_strategy(), 0..300)) {
        let mut bag: BstMultiset<u8> = BstMultiset::new();
        let mut model: BTreeMap<u8, usize> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(item) => {
                    bag.insert(item);
                    *model.entry(item).or_insert(0) += 1;
                }
                Op::RemoveOne(item) => {
                    let had = model.get(&item).is_some_and(|&n| n > 0);
                    prop_assert_eq!(bag.remove_one(&item), had);
                    if had {
                        let count = model.get_mut(&item).unwrap();
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&item);
                        }
                    }
                }
                Op::RemoveAll(item) => {
                    let count = model.remove(&item).unwrap_or(0);
                    prop_assert_eq!(bag.remove_all(&item), count);
                }
                Op::PopFirst => {
                    let expected = model.first_key_value().map(|(&k, _)| k);
                    prop_assert_eq!(bag.pop_first(), expected);
                    if let Some(k) = expected {
                        let count = model.get_mut(&k).unwrap();
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&k);
                        }
                    }
                }
                Op::PopLast => {
                    let expected = model.last_key_value().map(|(&k, _)| k);
                    prop_assert_eq!(bag.pop_last(), expected);
                    if let Some(k) = expected {
                        let count = model.get_mut(&k).unwrap();
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&k);
                        }
                    }
                }
            }

            prop_assert_eq!(bag.len(), model_len(&model));
            for (&item, &count) in &model {
                prop_assert_eq!(bag.count(&item), count);
            }
        }

        let expected: Vec<u8> = model
            .iter()
            .flat_map(|(&item, &count)| std::iter::repeat_n(item, count))
            .collect();
        let items: Vec<u8> = bag.iter().copied().collect();
        prop_assert_eq!(items, expected);
    }
}

#[test]
fn duplicates_iterate_adjacent_and_sorted() {
    let bag = BstMultiset::from([3, 1, 3, 2, 3, 1]);
    let items: Vec<_> = bag.iter().copied().collect();
    assert_eq!(items, [1, 1, 2, 3, 3, 3]);

    let backward: Vec<_> = bag.iter().rev().copied().collect();
    assert_eq!(backward, [3, 3, 3, 2, 1, 1]);
}

#[test]
fn count_and_equal_range_agree() {
    let bag = BstMultiset::from([1, 2, 2, 3, 3, 3]);
    for item in 0..5 {
        assert_eq!(bag.count(&item), bag.equal_range(&item).count());
    }
    let threes: Vec<_> = bag.equal_range(&3).copied().collect();
    assert_eq!(threes, [3, 3, 3]);
}

#[test]
fn remove_one_then_remove_all() {
    let mut bag = BstMultiset::from([5, 5, 5, 7]);
    assert!(bag.remove_one(&5));
    assert_eq!(bag.remove_all(&5), 2);
    assert!(!bag.remove_one(&5));
    assert_eq!(bag.len(), 1);
}

#[test]
fn merge_drains_the_source() {
    let mut a = BstMultiset::from([1, 1, 2]);
    let mut b = BstMultiset::from([2, 3]);
    a.merge(&mut b);

    assert!(b.is_empty());
    let items: Vec<_> = a.iter().copied().collect();
    assert_eq!(items, [1, 1, 2, 2, 3]);
}

#[test]
fn equality_counts_duplicates() {
    let a = BstMultiset::from([1, 2, 2]);
    let b = BstMultiset::from([2, 1, 2]);
    let c = BstMultiset::from([1, 2]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn into_iter_yields_every_occurrence() {
    let bag = BstMultiset::from([2, 1, 2]);
    let items: Vec<_> = bag.into_iter().collect();
    assert_eq!(items, [1, 2, 2]);
}
