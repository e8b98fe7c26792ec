//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{LifecycleState, TimerSnapshot};

/// Keypad layout as shown on screen, top row first
pub const KEYPAD_ROWS: [&[u8]; 4] = [&[1, 2, 3], &[4, 5, 6], &[7, 8, 9], &[0]];

/// Timer value as a UI renders it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub minutes: u32,
    pub seconds: u32,
    pub state: LifecycleState,
    pub display: String,
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

impl From<TimerSnapshot> for TimerView {
    fn from(snapshot: TimerSnapshot) -> Self {
        Self {
            minutes: snapshot.minutes,
            seconds: snapshot.seconds,
            state: snapshot.state,
            display: snapshot.display(),
            start_enabled: snapshot.start_enabled(),
            stop_enabled: snapshot.stop_enabled(),
        }
    }
}

/// API response structure for the digit, start and stop endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl TimerResponse {
    pub fn new(message: String, snapshot: TimerSnapshot) -> Self {
        Self {
            message,
            timestamp: Utc::now(),
            timer: snapshot.into(),
        }
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypadResponse {
    pub rows: Vec<Vec<u8>>,
}

impl KeypadResponse {
    pub fn layout() -> Self {
        Self {
            rows: KEYPAD_ROWS.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Body returned with 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
