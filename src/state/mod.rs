//! State management module
//! 
//! This module contains the timer state machine and the application state
//! that hosts it.

pub mod app_state;
pub mod clock;
pub mod controller;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use clock::Clock;
pub use controller::{TimerController, DEFAULT_TICK};
pub use timer_state::{LifecycleState, TimerSnapshot};
