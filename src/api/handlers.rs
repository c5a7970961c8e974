//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{info, warn};

use crate::{
    services::Permission,
    state::AppState,
    tasks::{play_sound, request_notification_permission},
};
use super::{
    error::ApiError,
    page::render_index,
    requests::{AddWaterRequest, CustomAmountRequest, SetIntervalRequest},
    responses::{ApiResponse, HealthResponse, StatusResponse, ToastsResponse},
};

type ApiResult = Result<Json<ApiResponse>, ApiError>;

/// Handle GET / - Serve the widget page
pub async fn index_handler() -> Html<String> {
    Html(render_index())
}

/// Handle POST /timer/toggle - Start or pause the countdown
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    let running = state.toggle_running()?;
    let message = if running { "Countdown running" } else { "Countdown paused" };
    Ok(Json(ApiResponse::ok(message, state.snapshot()?)))
}

/// Handle POST /timer/reset - Put the full interval back on the clock
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    state.reset_countdown()?;
    Ok(Json(ApiResponse::ok("Countdown reset", state.snapshot()?)))
}

/// Handle POST /interval/increase - Add five minutes to the interval
pub async fn increase_interval_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    let minutes = state.increase_interval()?;
    Ok(Json(ApiResponse::ok(format!("Interval set to {}min", minutes), state.snapshot()?)))
}

/// Handle POST /interval/decrease - Remove five minutes, never below one
pub async fn decrease_interval_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    let minutes = state.decrease_interval()?;
    Ok(Json(ApiResponse::ok(format!("Interval set to {}min", minutes), state.snapshot()?)))
}

/// Handle PUT /interval - Set the interval directly
pub async fn set_interval_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetIntervalRequest>,
) -> ApiResult {
    let minutes = state.set_interval(request.minutes)?;
    Ok(Json(ApiResponse::ok(format!("Interval set to {}min", minutes), state.snapshot()?)))
}

/// Handle POST /water - Add water to the daily tally
pub async fn add_water_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddWaterRequest>,
) -> ApiResult {
    let consumed = state.add_water(request.amount)?;
    let snapshot = state.snapshot()?;
    Ok(Json(ApiResponse::ok(
        format!("{} / {}ml", consumed, snapshot.daily_goal_ml),
        snapshot,
    )))
}

/// Handle PUT /water/custom - Store the amount for the next add-water action
pub async fn custom_amount_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CustomAmountRequest>,
) -> ApiResult {
    let amount = request.amount.to_ml();
    state.set_custom_amount(amount)?;
    Ok(Json(ApiResponse::ok(format!("Custom amount set to {}ml", amount), state.snapshot()?)))
}

/// Handle POST /notifications/permission - Ask for notification permission
pub async fn permission_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    let permission = request_notification_permission(&state).await;
    info!("Permission endpoint called - permission {:?}", permission);

    let status = match permission {
        Permission::Granted => "granted",
        Permission::Denied | Permission::Default => "denied",
        Permission::Unsupported => "unsupported",
    };
    Ok(Json(ApiResponse::new(status, format!("Notification permission {}", status), state.snapshot()?)))
}

/// Handle POST /sound/test - Play the reminder sound once.
///
/// Playback failures are only logged.
pub async fn sound_test_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    info!("Sound test requested");
    if let Err(e) = play_sound(&state).await {
        warn!("Sound test failed: {}", e);
    }
    Ok(Json(ApiResponse::ok("Sound test attempted", state.snapshot()?)))
}

/// Handle GET /toasts - Toasts that are still on screen
pub async fn toasts_handler(State(state): State<Arc<AppState>>) -> Json<ToastsResponse> {
    Json(ToastsResponse {
        toasts: state.ports.toasts.active(),
    })
}

/// Handle GET /status - Return the current reminder state
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let reminder = state.snapshot()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        reminder,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /events - Stream snapshots as server-sent events
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();

    // The first item is the current snapshot, later items follow changes.
    let stream = stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let snapshot = rx.borrow_and_update().clone();
        let event = Event::default()
            .event("snapshot")
            .json_data(&snapshot)
            .unwrap_or_else(|e| {
                warn!("Failed to encode snapshot event: {}", e);
                Event::default().comment("encode error")
            });
        Some((Ok(event), (rx, false)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
