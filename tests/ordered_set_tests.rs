//! Unit tests for OrderedSet.
//!
//! These tests cover construction, mutation, queries and traversal of
//! the OrderedSet implementation.

#![cfg(feature = "set")]

use rstest::rstest;
use seqset::ordered_set;
use seqset::set::OrderedSet;

/// A loosely typed value, to check that equality never crosses variants.
#[derive(Clone, Debug, PartialEq)]
enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(&'static str),
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.size(), 0);
    assert_eq!(set.values(), Vec::<i32>::new());
}

#[rstest]
fn test_macro_with_multiple_values() {
    let set = ordered_set![1, 2, 3, 4, 5];
    assert_eq!(set.values(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_construction_keeps_first_occurrence() {
    let set = ordered_set![2, 1, 2, 3, 1];
    assert_eq!(set.values(), vec![2, 1, 3]);
    assert_eq!(set.size(), 3);
}

#[rstest]
#[case::empty(vec![])]
#[case::distinct(vec![4, 5, 6])]
#[case::repeated(vec![6, 6, 5, 6, 4])]
fn test_macro_and_collect_agree(#[case] values: Vec<i32>) {
    let from_iter: OrderedSet<i32> = values.iter().copied().collect();
    let from_vec = OrderedSet::from(values.clone());

    let mut from_adds = OrderedSet::new();
    for value in values {
        from_adds.add(value);
    }

    assert_eq!(from_iter.values(), from_vec.values());
    assert_eq!(from_iter.values(), from_adds.values());
}

#[rstest]
fn test_round_trip_variadic_and_sequence() {
    let variadic = ordered_set!["x", "y", "x", "z"];
    let sequence = OrderedSet::from(["x", "y", "x", "z"]);
    assert_eq!(variadic.values(), sequence.values());
}

// =============================================================================
// add / try_add
// =============================================================================

#[rstest]
fn test_add_appends_value() {
    let mut set = OrderedSet::new();
    set.add("a");
    assert_eq!(set.values(), vec!["a"]);
}

#[rstest]
fn test_add_duplicate_is_noop() {
    let mut set = OrderedSet::new();
    set.add(1).add(2).add(1);
    assert_eq!(set.values(), vec![1, 2]);
    assert_eq!(set.size(), 2);
}

#[rstest]
fn test_try_add_reports_insertion() {
    let mut set = OrderedSet::new();
    assert!(set.try_add('q'));
    assert!(!set.try_add('q'));
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_add_compares_without_coercion() {
    let mut set = OrderedSet::new();
    set.add(Value::Integer(1))
        .add(Value::Float(1.0))
        .add(Value::Text("1"))
        .add(Value::Null)
        .add(Value::Integer(1))
        .add(Value::Null);

    assert_eq!(
        set.values(),
        vec![
            Value::Integer(1),
            Value::Float(1.0),
            Value::Text("1"),
            Value::Null
        ]
    );
}

#[rstest]
fn test_add_many_elements_beyond_inline_storage() {
    let mut set = OrderedSet::new();
    for value in (0..100).chain(0..100) {
        set.add(value);
    }
    assert_eq!(set.size(), 100);
    assert_eq!(set.values(), (0..100).collect::<Vec<_>>());
}

// =============================================================================
// delete / clear
// =============================================================================

#[rstest]
fn test_delete_existing_value() {
    let mut set = OrderedSet::new();
    set.add("a");
    assert!(set.delete("a"));
    assert!(set.is_empty());
}

#[rstest]
fn test_delete_on_missing_value() {
    let mut set: OrderedSet<&str> = OrderedSet::new();
    assert!(!set.delete("a"));
}

#[rstest]
fn test_delete_missing_leaves_set_unchanged() {
    let mut set = ordered_set![1, 2];
    assert!(!set.delete(&3));
    assert_eq!(set.values(), vec![1, 2]);
}

#[rstest]
fn test_delete_closes_gap() {
    let mut set = ordered_set![1, 2, 3, 4];
    assert!(set.delete(&2));

    assert_eq!(set.values(), vec![1, 3, 4]);
    assert_eq!(set.get(1), Some(&3));
    assert_eq!(set.position(&4), Some(2));
    assert_eq!(set.size(), 3);
}

#[rstest]
fn test_delete_then_add_moves_value_to_back() {
    let mut set = ordered_set![1, 2, 3];
    set.delete(&1);
    set.add(1);
    assert_eq!(set.values(), vec![2, 3, 1]);
}

#[rstest]
fn test_delete_with_borrowed_form() {
    let mut set = ordered_set!["apple".to_string(), "banana".to_string()];
    assert!(set.delete("apple"));
    assert!(!set.has("apple"));
    assert!(set.has("banana"));
}

#[rstest]
fn test_clear_empties_set() {
    let mut set = ordered_set![1, 2];
    set.clear();
    assert_eq!(set.values(), Vec::<i32>::new());
    assert_eq!(set.size(), 0);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
fn test_has() {
    let mut set = OrderedSet::new();
    assert!(!set.has(&2));

    set.add(2);
    assert!(set.has(&2));
}

#[rstest]
fn test_values_is_a_snapshot() {
    let mut set = ordered_set![1, 2];
    let mut snapshot = set.values();
    snapshot.push(99);
    snapshot[0] = 42;

    set.add(3);
    assert_eq!(set.values(), vec![1, 2, 3]);
    assert_eq!(snapshot, vec![42, 2, 99]);
}

#[rstest]
fn test_first_last_and_get() {
    let set = ordered_set!['m', 'a', 'z'];
    assert_eq!(set.first(), Some(&'m'));
    assert_eq!(set.last(), Some(&'z'));
    assert_eq!(set.get(1), Some(&'a'));
    assert_eq!(set.get(3), None);
    assert_eq!(set[2], 'z');
}

#[rstest]
fn test_size_and_len_agree() {
    let mut set = ordered_set![1, 2, 3];
    set.delete(&2);
    set.insert_at(Some(0), 7);
    set.remove_at(1);
    assert_eq!(set.size(), set.len());
    assert_eq!(set.size(), set.values().len());
}

// =============================================================================
// each / entries
// =============================================================================

#[rstest]
fn test_each_discards_callback_result() {
    let set = ordered_set![1, 2];
    let expected = set.values();

    let result = set.each_with(&10, |value, parameter| value * parameter);

    assert_eq!(result.values(), expected);
}

#[rstest]
fn test_each_visits_in_insertion_order() {
    let set = ordered_set!["c", "a", "b"];
    let mut visited = Vec::new();
    set.each(|value| visited.push(*value))
        .each(|value| visited.push(*value));
    assert_eq!(visited, vec!["c", "a", "b", "c", "a", "b"]);
}

#[rstest]
fn test_each_on_empty_never_calls() {
    let set: OrderedSet<i32> = OrderedSet::new();
    let mut calls = 0;
    set.each(|_| calls += 1);
    assert_eq!(calls, 0);
}

#[rstest]
fn test_entries_is_restartable() {
    let set = ordered_set![3, 1, 2];
    let entries = set.entries();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries.clone().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(entries.copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(set.entries().rev().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
}

#[rstest]
fn test_for_loop_over_reference_and_value() {
    let set = ordered_set![1, 2, 3];

    let mut total = 0;
    for value in &set {
        total += value;
    }
    assert_eq!(total, 6);

    let owned: Vec<i32> = set.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

// =============================================================================
// Positional insert / remove
// =============================================================================

#[rstest]
fn test_insert_at_none_on_null_value() {
    let mut set = OrderedSet::new();
    set.insert_at(Some(0), None::<i32>);
    assert_eq!(set.values(), vec![None]);
}

#[rstest]
#[case::front(Some(0), vec![9, 2, 3])]
#[case::middle(Some(1), vec![1, 9, 3])]
#[case::last_index(Some(2), vec![1, 2, 9])]
#[case::end(Some(3), vec![1, 2, 3, 9])]
#[case::past_end(Some(10), vec![1, 2, 3, 9])]
#[case::append(None, vec![1, 2, 3, 9])]
fn test_insert_at_places_new_value(#[case] position: Option<usize>, #[case] expected: Vec<i32>) {
    let mut set = ordered_set![1, 2, 3];
    assert!(set.insert_at(position, 9));
    assert_eq!(set.values(), expected);
    assert_eq!(set.size(), expected.len());
}

#[rstest]
fn test_insert_at_occupied_index_overwrites() {
    let mut set = ordered_set!["a", "b", "c"];
    assert!(set.insert_at(Some(1), "x"));

    assert_eq!(set.values(), vec!["a", "x", "c"]);
    assert!(!set.has("b"));
    assert_eq!(set.size(), 3);
}

#[rstest]
#[case::same_position(Some(1))]
#[case::other_position(Some(0))]
#[case::append(None)]
fn test_insert_at_existing_value_is_noop(#[case] position: Option<usize>) {
    let mut set = ordered_set![1, 2, 3];
    assert!(!set.insert_at(position, 2));
    assert_eq!(set.values(), vec![1, 2, 3]);
    assert_eq!(set.size(), 3);
}

#[rstest]
fn test_remove_at_repacks_indices() {
    let mut set = ordered_set!["a", "b", "c", "d"];
    assert_eq!(set.remove_at(1), Some("b"));

    assert_eq!(set.values(), vec!["a", "c", "d"]);
    for (index, value) in set.iter().enumerate() {
        assert_eq!(set.position(value), Some(index));
    }
}

#[rstest]
fn test_remove_at_missing_index_is_noop() {
    let mut set = ordered_set![1, 2];
    assert_eq!(set.remove_at(2), None);
    assert_eq!(set.values(), vec![1, 2]);
    assert_eq!(set.size(), 2);
}

#[rstest]
fn test_positional_and_named_mutation_agree() {
    let mut named = ordered_set![5, 6, 7];
    let mut positional = named.clone();

    named.delete(&6);
    named.add(8);

    let index = positional.position(&6).unwrap();
    positional.remove_at(index);
    positional.insert_at(None, 8);

    assert_eq!(named.values(), positional.values());
}

// =============================================================================
// Conversions and formatting
// =============================================================================

#[rstest]
fn test_into_vec_preserves_order() {
    let set = ordered_set![3, 2, 1];
    let values: Vec<i32> = set.into();
    assert_eq!(values, vec![3, 2, 1]);
}

#[rstest]
fn test_extend_deduplicates_against_existing() {
    let mut set = ordered_set![1, 2];
    set.extend(vec![2, 3, 3, 4]);
    assert_eq!(set.values(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_display() {
    let set = ordered_set!["x", "y"];
    assert_eq!(set.to_string(), "{x, y}");
}

#[rstest]
fn test_equality_is_membership_equality() {
    assert_eq!(ordered_set![1, 2, 3], ordered_set![3, 2, 1]);
    assert_ne!(ordered_set![1, 2], ordered_set![1, 2, 3]);
}
