//! Application state

use roster_engine::StudentStore;
use std::sync::Arc;

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// The student directory
    pub store: Arc<StudentStore>,
}

impl AppState {
    /// Wrap a store for use as axum state
    pub fn new(store: Arc<StudentStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StudentStore::new()))
    }
}
