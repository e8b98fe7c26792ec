//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

use crate::state::AppState;
use super::responses::{
    ErrorResponse, HealthResponse, KeypadResponse, StatusResponse, TimerResponse,
};

/// Handle POST /digit/:digit - Shift a keypad digit into the timer
pub async fn digit_handler(
    State(state): State<Arc<AppState>>,
    Path(digit): Path<u8>,
) -> Result<Json<TimerResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.enter_digit(digit) {
        Ok(snapshot) => {
            info!("Digit endpoint called - timer shows {}", snapshot.display());
            Ok(Json(TimerResponse::new(
                format!("Digit {} entered", digit),
                snapshot,
            )))
        }
        Err(e) => {
            warn!("Rejected keypad input: {}", e);
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))))
        }
    }
}

/// Handle POST /start - Start the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let snapshot = state.start();
    info!("Start endpoint called - timer is {}", snapshot.state);
    Json(TimerResponse::new(
        format!("Timer is {}", snapshot.state),
        snapshot,
    ))
}

/// Handle POST /stop - Reset a set timer or pause a running one
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let snapshot = state.stop();
    info!("Stop endpoint called - timer is {}", snapshot.state);
    Json(TimerResponse::new(
        format!("Timer is {}", snapshot.state),
        snapshot,
    ))
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.snapshot().into(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /keypad - Keypad layout for rendering
pub async fn keypad_handler() -> Json<KeypadResponse> {
    Json(KeypadResponse::layout())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
