//! Tests for the Semigroup, Monoid and Foldable instances of OrderedSet.

#![cfg(all(feature = "typeclass", feature = "set"))]

use rstest::rstest;
use seqset::ordered_set;
use seqset::set::OrderedSet;
use seqset::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// Semigroup / Monoid
// =============================================================================

#[rstest]
fn test_combine_is_union() {
    let combined = ordered_set![1, 2].combine(ordered_set![2, 3]);
    assert_eq!(combined.values(), vec![1, 2, 3]);
}

#[rstest]
fn test_combine_all_is_family_union() {
    let sets = vec![ordered_set![1, 2], ordered_set![3, 4], ordered_set![1, 5, 6]];
    let expected = OrderedSet::family_union(sets.clone());

    let combined = OrderedSet::combine_all(sets);

    assert_eq!(combined.values(), expected.values());
    assert_eq!(combined.size(), 6);
}

#[rstest]
fn test_combine_all_of_nothing_is_empty() {
    let sets: Vec<OrderedSet<char>> = Vec::new();
    assert!(OrderedSet::combine_all(sets).is_empty());
}

#[rstest]
fn test_empty_is_identity_value() {
    let empty: OrderedSet<i32> = OrderedSet::empty();
    assert!(empty.is_empty_value());
    assert!(!ordered_set![1].is_empty_value());
}

// =============================================================================
// Foldable
// =============================================================================

#[rstest]
fn test_fold_left_visits_insertion_order() {
    let set = ordered_set!["b", "a", "c"];
    let joined = set.fold_left(String::new(), |mut accumulator, element| {
        accumulator.push_str(element);
        accumulator
    });
    assert_eq!(joined, "bac");
}

#[rstest]
fn test_fold_right_visits_reverse_order() {
    let set = ordered_set![1, 2, 3];
    let visited = set.fold_right(Vec::new(), |element, mut accumulator| {
        accumulator.push(element);
        accumulator
    });
    assert_eq!(visited, vec![3, 2, 1]);
}

#[rstest]
#[case::empty(vec![], 0)]
#[case::with_duplicates(vec![4, 4, 5], 2)]
fn test_length_counts_unique_elements(#[case] values: Vec<i32>, #[case] expected: usize) {
    let set = OrderedSet::from(values);
    assert_eq!(set.length(), expected);
    assert_eq!(Foldable::is_empty(&set), expected == 0);
}

#[rstest]
fn test_to_list_matches_values() {
    let set = ordered_set![9, 7, 8];
    assert_eq!(set.clone().to_list(), set.values());
}

#[rstest]
fn test_find_exists_and_for_all() {
    let set = ordered_set![1, 4, 6, 7];

    assert_eq!(set.clone().find(|element| element % 2 == 0), Some(4));
    assert!(set.exists(|element| *element > 6));
    assert!(!set.for_all(|element| *element > 1));
    assert!(OrderedSet::<i32>::new().for_all(|_| false));
}

#[rstest]
fn test_fold_map_into_vec() {
    let set = ordered_set![1, 2];
    let doubled: Vec<i32> = set.fold_map(|element| vec![element, element * 10]);
    assert_eq!(doubled, vec![1, 10, 2, 20]);
}

// =============================================================================
// TypeConstructor
// =============================================================================

fn rewrap<F: TypeConstructor>(_: &F) -> F::WithType<String>
where
    F::WithType<String>: Default,
{
    Default::default()
}

#[rstest]
fn test_with_type_swaps_element_type() {
    let set = ordered_set![1, 2];
    let mut strings: OrderedSet<String> = rewrap(&set);
    strings.add("one".to_string());
    assert_eq!(strings.values(), vec!["one".to_string()]);
}
