//! StudentStore: authoritative in-memory student directory
//!
//! ## Design
//!
//! The store owns an ordered map from `StudentId` to `Student` plus the
//! counter used for id assignment, both behind a single `parking_lot::RwLock`.
//! Submits and deletes take the write lock; gets, snapshots and the
//! top-student query take the read lock, so readers never observe a
//! half-applied write and two submits can never be handed the same id.
//!
//! ## Thread Safety
//!
//! StudentStore is `Send + Sync`. Share it across request handlers with `Arc`.
//!
//! ## API
//!
//! - `submit(submission)` - Create or fully replace a student
//! - `get(id)` - Fetch a student
//! - `delete(id)` - Remove a student
//! - `snapshot()` - All students, ordered by id
//! - `top_students()` - Winner set of the top-student query

use crate::config::RosterConfig;
use crate::top;
use parking_lot::RwLock;
use roster_core::{Error, Result, Student, StudentId, Submission};
use std::collections::BTreeMap;
use tracing::debug;

/// Whether a submit inserted a new record or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No record existed under the id
    Created,
    /// An existing record was replaced wholesale
    Replaced,
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    /// The record as stored, including an assigned id
    pub student: Student,
    /// Create or replace
    pub outcome: SubmitOutcome,
}

#[derive(Debug)]
struct Directory {
    students: BTreeMap<StudentId, Student>,
    /// Where assignment starts again after the counter passes `i64::MAX`.
    first_id: StudentId,
    /// Next candidate for an assigned id.
    next_id: StudentId,
}

impl Directory {
    /// Smallest unused id in `from..=to`.
    fn first_free(&self, from: i64, to: i64) -> Option<StudentId> {
        let mut candidate = from;
        while candidate <= to {
            let id = StudentId::new(candidate);
            if !self.students.contains_key(&id) {
                return Some(id);
            }
            candidate = candidate.checked_add(1)?;
        }
        None
    }

    /// Search from the counter up, then wrap to `first_id`, then to `i64::MIN`.
    fn assign_id(&mut self) -> Result<StudentId> {
        let next = self.next_id.get();
        let first = self.first_id.get();
        let id = self
            .first_free(next, i64::MAX)
            .or_else(|| {
                next.checked_sub(1)
                    .and_then(|end| self.first_free(first, end))
            })
            .or_else(|| {
                first
                    .min(next)
                    .checked_sub(1)
                    .and_then(|end| self.first_free(i64::MIN, end))
            })
            .ok_or(Error::IdSpaceExhausted)?;
        self.advance_past(id);
        Ok(id)
    }

    fn advance_past(&mut self, id: StudentId) {
        self.next_id = id.next().unwrap_or(self.first_id);
    }

    /// Explicit ids at or above the counter move it past them.
    fn observe_id(&mut self, id: StudentId) {
        if id >= self.next_id {
            self.advance_past(id);
        }
    }
}

/// In-memory student directory
///
/// # Example
///
/// ```ignore
/// let store = StudentStore::new();
///
/// let created = store.submit(Submission::new("Ivan", vec![2, 3, 4]))?;
/// let fetched = store.get(created.student.id)?;
/// store.delete(fetched.id)?;
/// ```
#[derive(Debug)]
pub struct StudentStore {
    inner: RwLock<Directory>,
}

impl StudentStore {
    /// Create an empty store assigning ids from 1
    pub fn new() -> Self {
        Self::with_first_id(StudentId::new(1))
    }

    /// Create an empty store assigning ids from `first_id`
    pub fn with_first_id(first_id: StudentId) -> Self {
        Self {
            inner: RwLock::new(Directory {
                students: BTreeMap::new(),
                first_id,
                next_id: first_id,
            }),
        }
    }

    /// Create an empty store configured from `config`
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::with_first_id(StudentId::new(config.first_id))
    }

    /// Create or replace a student
    ///
    /// With `id: None` a fresh, currently unused id is assigned. With an
    /// explicit id the record is inserted, or the existing one is replaced
    /// entirely by the submitted fields.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidName` if the name is missing or blank; the
    /// store is left untouched.
    pub fn submit(&self, submission: Submission) -> Result<Submitted> {
        submission.validated_name()?;

        let mut dir = self.inner.write();
        let id = match submission.id {
            Some(id) => {
                dir.observe_id(id);
                id
            }
            None => dir.assign_id()?,
        };
        let student = submission.into_student(id)?;
        let outcome = match dir.students.insert(id, student.clone()) {
            Some(_) => SubmitOutcome::Replaced,
            None => SubmitOutcome::Created,
        };
        drop(dir);

        debug!(
            target: "roster::store",
            id = %id,
            ?outcome,
            marks = student.mark_count(),
            "Submitted student"
        );
        Ok(Submitted { student, outcome })
    }

    /// Get a student by id
    ///
    /// # Errors
    ///
    /// Returns `Error::StudentNotFound` if no student has this id.
    pub fn get(&self, id: StudentId) -> Result<Student> {
        self.inner
            .read()
            .students
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Delete a student, returning the removed record
    ///
    /// Deletes are not idempotent: a second delete of the same id fails.
    ///
    /// # Errors
    ///
    /// Returns `Error::StudentNotFound` if no student has this id.
    pub fn delete(&self, id: StudentId) -> Result<Student> {
        let removed = self.inner.write().students.remove(&id);
        match removed {
            Some(student) => {
                debug!(target: "roster::store", id = %id, "Deleted student");
                Ok(student)
            }
            None => Err(Error::not_found(id)),
        }
    }

    /// Whether a student exists under `id`
    pub fn contains(&self, id: StudentId) -> bool {
        self.inner.read().students.contains_key(&id)
    }

    /// Number of stored students
    pub fn len(&self) -> usize {
        self.inner.read().students.len()
    }

    /// True when no students are stored
    pub fn is_empty(&self) -> bool {
        self.inner.read().students.is_empty()
    }

    /// All stored students, ordered by id
    pub fn snapshot(&self) -> Vec<Student> {
        self.inner.read().students.values().cloned().collect()
    }

    /// Students with the best average mark, ties broken by mark count
    ///
    /// Runs [`top::top_students`] over one consistent view of the store.
    pub fn top_students(&self) -> Vec<Student> {
        let dir = self.inner.read();
        top::top_students(dir.students.values())
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
