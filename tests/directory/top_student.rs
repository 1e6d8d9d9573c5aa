//! Top-student scenarios

use crate::common::*;

#[test]
fn empty_store_has_no_top_student() {
    assert!(StudentStore::new().top_students().is_empty());
}

#[test]
fn students_without_marks_have_no_top_student() {
    let store = seeded_store(&[(1, &[]), (2, &[]), (3, &[])]);
    assert!(store.top_students().is_empty());
}

#[test]
fn best_average_wins() {
    let store = seeded_store(&[(101, &[3, 3, 3]), (102, &[4, 4, 4]), (103, &[2, 2, 2])]);
    assert_eq!(ids(&store.top_students()), vec![102]);
}

#[test]
fn equal_average_and_count_share_the_win() {
    let store = seeded_store(&[(101, &[4, 4, 4]), (102, &[4, 4, 4]), (103, &[2, 2, 2])]);
    assert_eq!(ids(&store.top_students()), vec![101, 102]);
}

#[test]
fn count_tie_break_applies_only_within_best_average() {
    let store = seeded_store(&[
        (1, &[5]),
        (2, &[5, 5]),
        (3, &[4, 4, 4, 4, 4, 4]),
        (4, &[5, 5]),
    ]);
    assert_eq!(ids(&store.top_students()), vec![2, 4]);
}

#[test]
fn fractional_averages_tie_exactly() {
    // 10/3 on both sides
    let store = seeded_store(&[(1, &[3, 3, 4]), (2, &[4, 3, 3]), (3, &[2, 4, 4])]);
    assert_eq!(ids(&store.top_students()), vec![1, 2, 3]);
}

#[test]
fn query_does_not_mutate_store() {
    let store = seeded_store(&[(1, &[5]), (2, &[])]);
    let before = store.snapshot();
    let _ = store.top_students();
    assert_eq!(store.snapshot(), before);
}

#[test]
fn free_function_matches_store_query() {
    let store = seeded_store(&[(1, &[3, 4]), (2, &[4, 3]), (3, &[1])]);
    assert_eq!(roster::top_students(&store.snapshot()), store.top_students());
}
