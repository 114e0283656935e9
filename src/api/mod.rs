//! HTTP API module
//! 
//! Input surface (field edits and start/pause/stop commands) and a polling
//! display sink for the countdown controller.

pub mod context;
pub mod handlers;
pub mod responses;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::CountdownController;
pub use context::ApiContext;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(controller: CountdownController) -> Router {
    Router::new()
        .route("/minutes", post(minutes_handler))
        .route("/seconds", post(seconds_handler))
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/stop", post(stop_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ApiContext::new(controller))
}
