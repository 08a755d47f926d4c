//! Unit tests for EqSet.
//!
//! Scenario coverage for the container: integer and string elements, a
//! custom comparator, construction from ranges, copy and assignment,
//! iteration, set algorithms and repeated reallocation.

use eqset::predicate::{is_even, is_long_string};
use eqset::{EqSet, FnEquality, Point, PointEquality, filter, intersection, union};
use rstest::rstest;

type IntSet = EqSet<i32>;

// =============================================================================
// Integer Basics
// =============================================================================

#[rstest]
fn test_remove_from_empty_set_is_noop() {
    let mut set = IntSet::new();
    assert!(!set.remove(&10));
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_int_scenario() {
    let mut set = IntSet::new();
    set.add(5);
    set.add(10);
    set.add(5);
    set.add(-5);

    assert_eq!(set.len(), 3);
    assert!(set.contains(&5));
    assert!(set.contains(&-5));
    assert!(!set.contains(&0));

    set.remove(&5);
    assert_eq!(set.len(), 2);
    assert!(!set.contains(&5));

    set.remove(&999);
    assert_eq!(set.len(), 2);

    set.remove(&10);
    set.remove(&-5);
    assert!(set.is_empty());
}

#[rstest]
fn test_add_reports_growth() {
    let mut set = IntSet::new();
    assert!(set.add(1));
    assert!(!set.add(1));
    assert!(set.add(2));
}

// =============================================================================
// Strings
// =============================================================================

#[rstest]
fn test_string_elements() {
    let mut set: EqSet<String> = EqSet::new();
    set.add("Hello".to_string());
    set.add("World".to_string());
    set.add("C++".to_string());
    set.add("Hello".to_string());

    assert_eq!(set.len(), 3);
    assert!(set.contains(&"World".to_string()));

    let probe = String::from("C++");
    assert!(set.contains(&probe));

    set.remove(&"Hello".to_string());
    assert_eq!(set.len(), 2);
}

// =============================================================================
// Custom Comparator
// =============================================================================

#[rstest]
fn test_equivalent_points_collapse() {
    let mut set: EqSet<Point, PointEquality> = EqSet::new();
    let origin = Point::new(0, 0);
    let other = Point::new(1, 2);
    let origin_again = Point::new(0, 0);

    set.add(origin);
    set.add(other);
    set.add(origin_again);

    assert_eq!(set.len(), 2);
    assert!(set.contains(&Point::new(1, 2)));

    let found_origin = (0..set.len()).any(|index| set[index].x == 0 && set[index].y == 0);
    let found_other = (0..set.len()).any(|index| set[index].x == 1 && set[index].y == 2);
    assert!(found_origin && found_other);
}

#[rstest]
fn test_comparator_overrides_intrinsic_equality() {
    let case_insensitive =
        FnEquality::new(|left: &String, right: &String| left.eq_ignore_ascii_case(right));
    let mut set = EqSet::with_equivalence(case_insensitive);
    set.add("Rust".to_string());
    set.add("RUST".to_string());
    set.add("rust".to_string());

    assert_eq!(set.len(), 1);
    assert_eq!(set[0], "Rust");
    assert!(set.contains(&"rUsT".to_string()));
}

// =============================================================================
// Construction From Sequences
// =============================================================================

#[rstest]
fn test_from_sequence_collapses_duplicates() {
    let values = [1, 2, 3, 2, 4, 1];
    let set: IntSet = values.iter().copied().collect();

    assert_eq!(set.len(), 4);
    assert!(set.contains(&1));
    assert!(set.contains(&4));
    assert!(!set.contains(&5));
}

#[rstest]
fn test_from_empty_sequence() {
    let values = [1, 2, 3];
    let set: IntSet = values[..0].iter().copied().collect();
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_extend_adds_only_new_elements() {
    let mut set: IntSet = [1, 2].into_iter().collect();
    set.extend([2, 3, 3, 4]);
    assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
}

// =============================================================================
// Copy and Assignment
// =============================================================================

#[rstest]
fn test_clone_is_independent() {
    let mut original = IntSet::new();
    original.add(10);
    original.add(20);

    let copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.len(), 2);

    original.remove(&10);
    assert_eq!(original.len(), 1);
    assert_eq!(copy.len(), 2);
    assert!(copy.contains(&10));
}

#[rstest]
fn test_assignment_replaces_contents() {
    let source: IntSet = [10, 20].into_iter().collect();
    let mut target = IntSet::new();
    target.add(99);

    target.clone_from(&source);

    assert_eq!(target, source);
    assert!(target.contains(&10));
    assert!(!target.contains(&99));
}

#[rstest]
fn test_assigning_an_equal_copy_changes_nothing() {
    let mut set: IntSet = [10, 20].into_iter().collect();
    let snapshot = set.clone();

    set.clone_from(&snapshot);
    assert_eq!(set.len(), 2);
    assert!(set.contains(&10));
    assert_eq!(set.as_slice(), snapshot.as_slice());

    set.try_assign_from(&snapshot).unwrap();
    assert_eq!(set.as_slice(), &[10, 20]);
}

#[rstest]
fn test_try_clone_matches_clone() {
    let set: EqSet<String> = ["a", "b"].into_iter().map(String::from).collect();
    assert_eq!(set.try_clone().unwrap(), set.clone());
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_manual_iteration_visits_every_element() {
    let set: IntSet = [1, 2, 3].into_iter().collect();

    let mut count = 0;
    let mut iter = set.iter();
    while let Some(value) = iter.next() {
        assert!((1..=3).contains(value));
        count += 1;
    }
    assert_eq!(count, 3);
}

#[rstest]
fn test_iteration_can_restart() {
    let set: IntSet = [1, 2, 3].into_iter().collect();
    let first: Vec<i32> = set.iter().copied().collect();
    let second: Vec<i32> = set.iter().copied().collect();
    assert_eq!(first, second);
}

#[rstest]
fn test_first_iterated_element_matches_index_zero() {
    let set: IntSet = [1, 2, 3].into_iter().collect();
    let frozen = set.clone();
    assert_eq!(frozen.iter().next(), Some(&set[0]));
}

#[rstest]
fn test_for_loop_over_reference() {
    let set: IntSet = [4, 5].into_iter().collect();
    let mut total = 0;
    for value in &set {
        total += value;
    }
    assert_eq!(total, 9);
}

// =============================================================================
// Set Algorithms
// =============================================================================

#[rstest]
fn test_union_and_intersection_edge_cases() {
    let a: IntSet = [1, 2].into_iter().collect();
    let b: IntSet = [3, 4].into_iter().collect();
    let empty = IntSet::new();

    assert_eq!(union(&a, &b).len(), 4);
    assert_eq!(intersection(&a, &b).len(), 0);

    let a_clone = a.clone();
    assert_eq!(union(&a, &a_clone).len(), 2);
    assert_eq!(union(&a, &a_clone), a);
    assert_eq!(intersection(&a, &a_clone).len(), 2);
    assert_eq!(intersection(&a, &a_clone), a);

    assert_eq!(union(&a, &empty), a);
    assert_eq!(intersection(&a, &empty).len(), 0);
    assert_eq!(intersection(&empty, &a).len(), 0);
}

#[rstest]
fn test_intersection_excludes_right_only_elements() {
    let left: IntSet = [1, 2, 3].into_iter().collect();
    let right: IntSet = [2, 3, 4, 5].into_iter().collect();
    let result = &left & &right;
    assert_eq!(result.as_slice(), &[2, 3]);
    assert!(!result.contains(&4));
}

#[rstest]
fn test_filter_long_strings() {
    let set: EqSet<String> = ["no", "yes", "maybe", "ok"]
        .into_iter()
        .map(String::from)
        .collect();

    let long = filter(&set, |word| is_long_string(word));

    assert_eq!(long.len(), 1);
    assert!(long.contains(&"maybe".to_string()));
    assert!(!long.contains(&"yes".to_string()));
}

#[rstest]
fn test_filter_even_numbers() {
    let set: IntSet = (1..=9).collect();
    let even = filter(&set, is_even);
    assert_eq!(even.as_slice(), &[2, 4, 6, 8]);
}

// =============================================================================
// Reallocation Stress
// =============================================================================

#[rstest]
fn test_stress_add_then_remove() {
    let mut set = IntSet::new();
    for value in 0..100 {
        set.add(value);
    }
    assert_eq!(set.len(), 100);

    for value in 0..100 {
        set.remove(&value);
    }
    assert_eq!(set.len(), 0);

    set.add(1);
    assert_eq!(set.len(), 1);
}

#[rstest]
#[case::ascending((0..50).collect::<Vec<_>>())]
#[case::descending((0..50).rev().collect::<Vec<_>>())]
fn test_stress_remove_order_does_not_matter(#[case] removal_order: Vec<i32>) {
    let mut set: IntSet = (0..50).collect();
    for value in removal_order {
        assert!(set.remove(&value));
        assert!(!set.contains(&value));
    }
    assert!(set.is_empty());
}
