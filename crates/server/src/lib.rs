//! Roster Server - HTTP surface for the student directory
//!
//! Routes:
//! ```text
//! POST   /student        create or replace a student       201 | 400
//! GET    /student/:id    fetch a student                   200 | 404
//! DELETE /student/:id    delete a student                  200 | 404
//! GET    /topStudent     best students, empty body if none 200
//! GET    /health         liveness probe                    200
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod error;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use roster_core::Result;
use roster_engine::{RosterConfig, StudentStore};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the application router over `state`
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health::health_check))
        .route("/student", post(api::students::submit_student))
        .route(
            "/student/:id",
            get(api::students::get_student).delete(api::students::delete_student),
        )
        .route("/topStudent", get(api::students::top_student))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.listen_addr()` and serve until Ctrl-C
pub async fn serve(config: &RosterConfig, store: Arc<StudentStore>) -> Result<()> {
    let app = router(Arc::new(AppState::new(store)));
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!(addr = %listener.local_addr()?, "Roster server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Roster server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
        return;
    }
    info!("Ctrl-C received, shutting down");
}
