//! Core types for the roster directory
//!
//! This module defines the foundational types:
//! - StudentId: Identifier of a student record
//! - Submission: Inbound representation, id optional
//! - Student: Persisted representation

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a student record
///
/// A thin wrapper over the integer carried on the wire. Unique within a
/// store; either supplied by the caller or assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Wrap a raw integer id
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The id immediately after this one, or `None` at `i64::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<i64> for StudentId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<i32> for StudentId {
    fn from(raw: i32) -> Self {
        Self(i64::from(raw))
    }
}

impl FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student as submitted by a caller
///
/// `id: None` asks the store to assign a fresh identifier. `name` stays
/// optional here so a missing name surfaces as a validation error rather
/// than a decoding one. Absent or `null` marks decode to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Submission {
    /// Requested id, or `None` for store-assigned
    #[serde(default)]
    pub id: Option<StudentId>,
    /// Display name; must be non-blank after trimming
    #[serde(default)]
    pub name: Option<String>,
    /// Graded scores, in submission order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub marks: Vec<i32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<i32>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Submission {
    /// Create a submission with a store-assigned id
    pub fn new(name: impl Into<String>, marks: Vec<i32>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            marks,
        }
    }

    /// Create a submission targeting a specific id
    pub fn with_id(id: impl Into<StudentId>, name: impl Into<String>, marks: Vec<i32>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::new(name, marks)
        }
    }

    /// Check that the name is present and not blank.
    ///
    /// Blankness is judged on the trimmed form; the name itself is kept as
    /// submitted.
    ///
    /// # Errors
    /// Returns `Error::InvalidName` when the name is missing or whitespace only.
    pub fn validated_name(&self) -> Result<&str> {
        match self.name.as_deref() {
            None => Err(Error::invalid_name("name is required")),
            Some(name) if name.trim().is_empty() => Err(Error::invalid_name("name is blank")),
            Some(name) => Ok(name),
        }
    }

    /// Validate and build the persisted record under `id`.
    ///
    /// The submitted fields fully replace whatever was stored before.
    pub fn into_student(self, id: StudentId) -> Result<Student> {
        self.validated_name()?;
        Ok(Student {
            id,
            name: self.name.unwrap_or_default(),
            marks: self.marks,
        })
    }
}

/// A stored student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Identifier, unique within the store
    pub id: StudentId,
    /// Non-blank display name
    pub name: String,
    /// Graded scores; may be empty
    #[serde(default)]
    pub marks: Vec<i32>,
}

impl Student {
    /// Number of marks
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Sum of all marks, widened so that it cannot overflow
    pub fn mark_sum(&self) -> i64 {
        self.marks.iter().map(|&m| i64::from(m)).sum()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student({}, {:?}, {:?})", self.id, self.name, self.marks)
    }
}
