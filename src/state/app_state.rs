//! Main application state management

use std::{
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{TimerController, TimerSnapshot};
use crate::error::TimerError;

/// Main application state: the timer plus server metadata
#[derive(Debug)]
pub struct AppState {
    /// The single timer this server drives
    pub timer: TimerController,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create a new AppState with a fresh timer ticking every `tick`
    pub fn new(port: u16, host: String, tick: Duration) -> Self {
        Self {
            timer: TimerController::new(tick),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    /// Forward a keypad digit to the timer
    pub fn enter_digit(&self, digit: u8) -> Result<TimerSnapshot, TimerError> {
        let snapshot = self.timer.enter_digit(digit)?;
        self.record_action(format!("digit:{}", digit));
        Ok(snapshot)
    }

    /// Start the countdown
    pub fn start(&self) -> TimerSnapshot {
        let snapshot = self.timer.start();
        self.record_action("start".to_string());
        snapshot
    }

    /// Reset or pause the timer
    pub fn stop(&self) -> TimerSnapshot {
        let snapshot = self.timer.stop();
        self.record_action("stop".to_string());
        snapshot
    }

    /// Current timer value
    pub fn snapshot(&self) -> TimerSnapshot {
        self.timer.snapshot()
    }

    fn record_action(&self, action: String) {
        info!("Action: {}", action);
        let mut last = self.last_action.lock().unwrap_or_else(PoisonError::into_inner);
        *last = Some((action, Utc::now()));
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().unwrap_or_else(PoisonError::into_inner).clone() {
            Some((action, at)) => (Some(action), Some(at)),
            None => (None, None),
        }
    }
}

fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LifecycleState, DEFAULT_TICK};

    #[test]
    fn uptime_drops_empty_units() {
        assert_eq!(format_uptime(Duration::from_secs(7)), "7s");
        assert_eq!(format_uptime(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3723)), "1h 2m 3s");
    }

    #[tokio::test]
    async fn records_last_action() {
        let state = AppState::new(0, "127.0.0.1".to_string(), DEFAULT_TICK);
        assert_eq!(state.get_last_action(), (None, None));

        state.enter_digit(5).unwrap();
        assert_eq!(state.get_last_action().0.as_deref(), Some("digit:5"));

        let snapshot = state.stop();
        assert_eq!(snapshot.state, LifecycleState::Prepare);
        assert_eq!(state.get_last_action().0.as_deref(), Some("stop"));
    }

    #[tokio::test]
    async fn invalid_digit_is_not_recorded() {
        let state = AppState::new(0, "127.0.0.1".to_string(), DEFAULT_TICK);
        assert!(state.enter_digit(42).is_err());
        assert_eq!(state.get_last_action(), (None, None));
    }
}
