//! Error types for the timer controller

use thiserror::Error;

/// Errors returned by [`crate::state::TimerController`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A keypad digit outside `0..=9` was entered
    #[error("invalid keypad digit {0}, expected 0-9")]
    InvalidDigit(u8),
}
