//! Countdown Pad - a keypad-driven countdown timer
//! 
//! This library provides the timer state machine (digit entry, start,
//! reset/stop and the per-second countdown) and an HTTP front end that
//! drives it.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use state::{AppState, LifecycleState, TimerController, TimerSnapshot};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
