//! Error types for the roster directory
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::StudentId;
use std::io;
use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the roster directory
#[derive(Debug, Error)]
pub enum Error {
    /// Submitted student has no usable name
    #[error("invalid name: {reason}")]
    InvalidName {
        /// Why the name was rejected
        reason: String,
    },

    /// No student stored under the id
    #[error("student not found: {id}")]
    StudentNotFound {
        /// The id that was looked up
        id: StudentId,
    },

    /// Every id in the `i64` range is taken
    #[error("no unused student id left to assign")]
    IdSpaceExhausted,

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error (config files, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an `InvalidName` error
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        Error::InvalidName {
            reason: reason.into(),
        }
    }

    /// Build a `StudentNotFound` error
    pub fn not_found(id: StudentId) -> Self {
        Error::StudentNotFound { id }
    }

    /// Build a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True for lookups of ids that do not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::StudentNotFound { .. })
    }

    /// True for rejected submissions
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidName { .. })
    }
}
