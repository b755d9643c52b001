//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::state::{AppState, DisplayState};
use super::responses::{HealthResponse, StatusResponse};

/// Handle GET /display - Both regions plus phase and score
pub async fn display_handler(State(state): State<Arc<AppState>>) -> Json<DisplayState> {
    Json(state.get_display_state())
}

/// Handle GET /clock - Clock region as plain text
pub async fn clock_handler(State(state): State<Arc<AppState>>) -> String {
    state.get_display_state().clock
}

/// Handle GET /hints - Hints region as plain text
pub async fn hints_handler(State(state): State<Arc<AppState>>) -> String {
    state.get_display_state().hints
}

/// Handle GET /status - Snapshot, rendered display and poll health
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let poll = match state.get_poll_stats() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to get poll stats: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(StatusResponse {
        timer,
        phase: timer.phase(),
        display: state.get_display_state(),
        poll,
        endpoint: state.endpoint.clone(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
