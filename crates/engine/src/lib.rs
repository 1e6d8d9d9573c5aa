//! Student directory engine
//!
//! This crate holds the stateful and computational parts of the service:
//! - StudentStore: lock-guarded in-memory directory with id assignment
//! - top: top-student resolution over a consistent view of the store
//! - RosterConfig: `roster.toml` configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod store;
pub mod top;

pub use config::{RosterConfig, CONFIG_FILE_NAME};
pub use store::{StudentStore, SubmitOutcome, Submitted};
pub use top::{top_students, MeanMark};
