//! Directory Test Suite
//!
//! End-to-end coverage of the student directory through the public `roster`
//! API: the store directly, and the HTTP router over a shared store.
//!
//! ```bash
//! cargo test --test directory
//! cargo test --test directory http::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod http;
mod store;
mod top_student;
