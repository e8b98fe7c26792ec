//! Lifecycle state and the observable timer snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Clock;

/// Where the timer is in its prepare/ready/started cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// Nothing usable entered, or the clock was reset or ran out
    #[default]
    Prepare,
    /// A nonzero duration is set and no countdown is running
    Ready,
    /// The countdown task is decrementing the clock
    Started,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Prepare => "PREPARE",
            LifecycleState::Ready => "READY",
            LifecycleState::Started => "STARTED",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of the timer, published on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub minutes: u32,
    pub seconds: u32,
    pub state: LifecycleState,
}

impl TimerSnapshot {
    pub fn new(clock: Clock, state: LifecycleState) -> Self {
        Self {
            minutes: clock.minutes(),
            seconds: clock.seconds(),
            state,
        }
    }

    pub fn clock(&self) -> Clock {
        Clock::new(self.minutes, self.seconds)
    }

    pub fn total_seconds(&self) -> u64 {
        self.clock().total_seconds()
    }

    /// Start is only offered for a set, idle timer
    pub fn start_enabled(&self) -> bool {
        self.state == LifecycleState::Ready
    }

    /// Reset/stop is offered whenever there is something to clear or pause
    pub fn stop_enabled(&self) -> bool {
        self.state != LifecycleState::Prepare
    }

    /// Render the clock the way the keypad screen shows it, e.g. `12m30s`
    pub fn display(&self) -> String {
        format!("{:02}m{:02}s", self.minutes, self.seconds)
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::new(Clock::ZERO, LifecycleState::Prepare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_both_fields() {
        let snapshot = TimerSnapshot::new(Clock::new(1, 5), LifecycleState::Ready);
        assert_eq!(snapshot.display(), "01m05s");
        assert_eq!(TimerSnapshot::default().display(), "00m00s");
    }

    #[test]
    fn control_flags_follow_lifecycle() {
        let clock = Clock::new(0, 30);
        let prepare = TimerSnapshot::new(Clock::ZERO, LifecycleState::Prepare);
        let ready = TimerSnapshot::new(clock, LifecycleState::Ready);
        let started = TimerSnapshot::new(clock, LifecycleState::Started);

        assert!(!prepare.start_enabled() && !prepare.stop_enabled());
        assert!(ready.start_enabled() && ready.stop_enabled());
        assert!(!started.start_enabled() && started.stop_enabled());
    }

    #[test]
    fn lifecycle_serializes_in_upper_case() {
        let json = serde_json::to_string(&LifecycleState::Started).unwrap();
        assert_eq!(json, "\"STARTED\"");
    }
}
