//! Store properties exercised through the re-exported API

use crate::common::*;
use roster::{Error, SubmitOutcome};

#[test]
fn null_id_submission_gets_unused_stable_id() {
    let store = seeded_store(&[(1, &[]), (2, &[]), (4, &[])]);

    let created = store.submit(Submission::new("Katya", vec![2, 3, 4])).unwrap();
    let id = created.student.id;
    assert!(![1, 2, 4].contains(&id.get()));

    for _ in 0..3 {
        assert_eq!(store.get(id).unwrap(), created.student);
    }
}

#[test]
fn deleted_and_unknown_ids_are_not_found() {
    let store = seeded_store(&[(10, &[5])]);
    store.delete(StudentId::new(10)).unwrap();

    for raw in [10, 11, -1, 0] {
        let id = StudentId::new(raw);
        assert!(matches!(store.get(id), Err(Error::StudentNotFound { .. })));
        assert!(matches!(store.delete(id), Err(Error::StudentNotFound { .. })));
    }
}

#[test]
fn resubmission_replaces_without_merging() {
    let store = StudentStore::new();
    store
        .submit(Submission::with_id(1, "Ivan", vec![2, 3, 4]))
        .unwrap();
    let second = store
        .submit(Submission::with_id(1, "Karl", vec![2, 5, 3]))
        .unwrap();
    assert_eq!(second.outcome, SubmitOutcome::Replaced);

    let stored = store.get(StudentId::new(1)).unwrap();
    assert_eq!(stored.name, "Karl");
    assert_eq!(stored.marks, vec![2, 5, 3]);
}

#[test]
fn whitespace_name_fails_regardless_of_other_fields() {
    let store = StudentStore::new();
    for sub in [
        Submission::with_id(1, " ", vec![5, 5]),
        Submission::new("\t", vec![]),
        Submission {
            id: Some(StudentId::new(2)),
            name: None,
            marks: vec![1],
        },
    ] {
        assert!(matches!(store.submit(sub), Err(Error::InvalidName { .. })));
    }
    assert!(store.is_empty());
}
