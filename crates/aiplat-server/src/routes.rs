//! Route definitions for the gateway.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the gateway router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/ai/chat", post(handlers::chat))
        .route("/ai/audit-logs", get(handlers::audit_logs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
