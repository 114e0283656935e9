//! HTTP endpoint handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{info, warn};

use super::{
    context::ApiContext,
    responses::{ApiResponse, HealthResponse, StatusResponse, TextEdit},
};
use crate::state::TimerPhase;

/// Shown when a start is requested with both fields at zero
pub const ZERO_DURATION_MESSAGE: &str = "Minute and second must Greater than 0";

/// Handle POST /minutes - Edit the minutes field
pub async fn minutes_handler(State(ctx): State<ApiContext>, Json(edit): Json<TextEdit>) -> Json<ApiResponse> {
    ctx.controller.set_minutes_text(&edit.text);
    Json(ApiResponse::ok(
        "Minutes updated".to_string(),
        ctx.controller.display_state(),
    ))
}

/// Handle POST /seconds - Edit the seconds field
pub async fn seconds_handler(State(ctx): State<ApiContext>, Json(edit): Json<TextEdit>) -> Json<ApiResponse> {
    ctx.controller.set_seconds_text(&edit.text);
    Json(ApiResponse::ok(
        "Seconds updated".to_string(),
        ctx.controller.display_state(),
    ))
}

/// Handle POST /start - Start the countdown unless both fields are zero
pub async fn start_handler(State(ctx): State<ApiContext>) -> (StatusCode, Json<ApiResponse>) {
    let controller = &ctx.controller;

    if controller.minutes() == 0 && controller.seconds() == 0 {
        warn!("Start rejected: both minutes and seconds are zero");
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                ZERO_DURATION_MESSAGE.to_string(),
                controller.display_state(),
            )),
        );
    }

    controller.start();
    info!("Start endpoint called - countdown running");
    (
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Countdown started".to_string(),
            controller.display_state(),
        )),
    )
}

/// Handle POST /pause - Toggle pause/resume
pub async fn pause_handler(State(ctx): State<ApiContext>) -> Json<ApiResponse> {
    ctx.controller.pause();

    let message = match ctx.controller.timer_state().phase {
        TimerPhase::Paused => "Countdown paused",
        TimerPhase::Running => "Countdown resumed",
        _ => "No countdown to pause",
    };
    Json(ApiResponse::ok(message.to_string(), ctx.controller.display_state()))
}

/// Handle POST /stop - Cancel the countdown and reset the input
pub async fn stop_handler(State(ctx): State<ApiContext>) -> Json<ApiResponse> {
    ctx.controller.stop();
    Json(ApiResponse::ok(
        "Countdown stopped".to_string(),
        ctx.controller.display_state(),
    ))
}

/// Handle GET /status - Return the observed values and timer state
pub async fn status_handler(State(ctx): State<ApiContext>) -> Json<StatusResponse> {
    let timer = ctx.controller.timer_state();

    Json(StatusResponse {
        display: ctx.controller.display_state(),
        phase: timer.phase,
        remaining_seconds: timer.remaining_seconds,
        total_seconds: timer.total_seconds,
        uptime: ctx.get_uptime(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
