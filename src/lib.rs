//! Roster - in-memory student directory with a top-student query
//!
//! Roster stores students keyed by integer id, supports create-or-replace,
//! lookup and delete, and answers "who has the best average mark" with a
//! mark-count tie-break. The same API is served over HTTP by `roster-server`.
//!
//! # Quick Start
//!
//! ```ignore
//! use roster::{StudentStore, Submission};
//!
//! let store = StudentStore::new();
//! let created = store.submit(Submission::new("Ivan", vec![4, 5, 4]))?;
//! let fetched = store.get(created.student.id)?;
//! let winners = store.top_students();
//! ```
//!
//! # Architecture
//!
//! - `roster-core`: data model and errors
//! - `roster-engine`: the store, the top-student resolver and configuration
//! - `roster-server`: the axum HTTP surface

pub use roster_core::{Error, Result, Student, StudentId, Submission};
pub use roster_engine::{
    top_students, MeanMark, RosterConfig, StudentStore, SubmitOutcome, Submitted,
    CONFIG_FILE_NAME,
};
pub use roster_server::{router, serve, ApiError, AppState};
