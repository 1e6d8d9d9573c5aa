//! Core types for the roster student directory
//!
//! This crate defines the foundational types used throughout the system:
//! - StudentId: Identifier of a stored student
//! - Submission: Inbound student representation (id optional)
//! - Student: Persisted student record
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Student, StudentId, Submission};
