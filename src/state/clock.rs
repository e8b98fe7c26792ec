//! Remaining-time value and the MMSS keypad shift register

use serde::{Deserialize, Serialize};

/// Time left on the countdown, as whole minutes and seconds
///
/// Keypad entry writes the four displayed digits straight into the two
/// fields, so a freshly entered value can hold up to 99 seconds (e.g. `00:90`).
/// Ticking borrows a full 60 seconds from the minutes once seconds hit zero,
/// so everything produced by the countdown itself stays within `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Clock {
    minutes: u32,
    seconds: u32,
}

impl Clock {
    /// The empty clock, `00:00`
    pub const ZERO: Clock = Clock { minutes: 0, seconds: 0 };

    /// Create a clock from raw minute and second fields
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Whether the clock reads `00:00`
    pub fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Number of one-second ticks until the clock reaches zero
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// The displayed digits as `[m1, m0, s1, s0]`
    pub fn digits(&self) -> [u32; 4] {
        [
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
        ]
    }

    /// Shift a keypad digit into the right end of the MMSS register.
    ///
    /// The leftmost digit falls off. Returns `false` and leaves the clock
    /// untouched when the tens-of-minutes slot is already occupied.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        let [m1, m0, s1, s0] = self.digits();
        if m1 != 0 {
            return false;
        }

        self.minutes = m0 * 10 + s1;
        self.seconds = s0 * 10 + u32::from(digit);
        true
    }

    /// Take one second off the clock. Does nothing at zero.
    pub fn tick(&mut self) {
        if self.seconds == 0 {
            if self.minutes == 0 {
                return;
            }
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            self.seconds -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered(digits: &[u8]) -> Clock {
        let mut clock = Clock::ZERO;
        for &d in digits {
            clock.push_digit(d);
        }
        clock
    }

    #[test]
    fn digits_shift_in_from_the_right() {
        assert_eq!(entered(&[1]), Clock::new(0, 1));
        assert_eq!(entered(&[1, 2]), Clock::new(0, 12));
        assert_eq!(entered(&[1, 2, 3]), Clock::new(1, 23));
        assert_eq!(entered(&[1, 2, 3, 0]), Clock::new(12, 30));
    }

    #[test]
    fn leading_zeros_keep_register_open() {
        assert_eq!(entered(&[0, 0, 0, 4, 5]), Clock::new(0, 45));
        assert_eq!(entered(&[0, 9, 5, 9]), Clock::new(9, 59));
    }

    #[test]
    fn occupied_tens_of_minutes_rejects_entry() {
        let mut clock = entered(&[1, 2, 3, 0]);
        assert!(!clock.push_digit(7));
        assert_eq!(clock, Clock::new(12, 30));
    }

    #[test]
    fn keypad_can_stage_more_than_59_seconds() {
        let clock = entered(&[9, 9]);
        assert_eq!(clock, Clock::new(0, 99));
        assert_eq!(clock.total_seconds(), 99);
    }

    #[test]
    fn tick_borrows_a_minute() {
        let mut clock = Clock::new(2, 0);
        clock.tick();
        assert_eq!(clock, Clock::new(1, 59));
        clock.tick();
        assert_eq!(clock, Clock::new(1, 58));
    }

    #[test]
    fn tick_stops_at_zero() {
        let mut clock = Clock::new(0, 1);
        clock.tick();
        assert!(clock.is_zero());
        clock.tick();
        assert_eq!(clock, Clock::ZERO);
    }

    #[test]
    fn reaches_zero_after_total_seconds_ticks() {
        let mut clock = Clock::new(1, 90);
        let ticks = clock.total_seconds();
        for _ in 0..ticks - 1 {
            clock.tick();
            assert!(!clock.is_zero());
            assert!(clock.seconds() < 90);
        }
        clock.tick();
        assert!(clock.is_zero());
    }
}
