//! HTTP API module
//! 
//! The widget page, the JSON endpoints behind it and the snapshot stream.

pub mod error;
pub mod handlers;
pub mod page;
pub mod requests;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/timer/toggle", post(toggle_handler))
        .route("/timer/reset", post(reset_handler))
        .route("/interval", put(set_interval_handler))
        .route("/interval/increase", post(increase_interval_handler))
        .route("/interval/decrease", post(decrease_interval_handler))
        .route("/water", post(add_water_handler))
        .route("/water/custom", put(custom_amount_handler))
        .route("/notifications/permission", post(permission_handler))
        .route("/sound/test", post(sound_test_handler))
        .route("/toasts", get(toasts_handler))
        .route("/status", get(status_handler))
        .route("/events", get(events_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
