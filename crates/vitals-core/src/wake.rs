//! Post-wake caffeine gate.
//!
//! Tracks a single wake-up instant and derives the adenosine-clearance
//! countdown. Wall-clock based with no internal thread -- the owner passes
//! the current instant into `lock_state()` on every recomputation.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Fixed adenosine-clearance window: 90 minutes, in seconds.
pub const CLEARANCE_WINDOW_SECS: i64 = 90 * 60;

/// Derived caffeine lock state at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaffeineLock {
    pub locked: bool,
    pub remaining_minutes: u32,
    pub remaining_seconds: u32,
}

impl CaffeineLock {
    /// Formatted countdown (MM:SS).
    pub fn countdown(&self) -> String {
        format!("{:02}:{:02}", self.remaining_minutes, self.remaining_seconds)
    }

    pub fn message(&self) -> &'static str {
        if self.locked {
            "ADENOSINE CLEARING"
        } else {
            "READY FOR CAFFEINE"
        }
    }
}

/// Wake-instant tracker.
///
/// A missing wake instant is not an error: the clock reports the fully
/// locked state with the whole window remaining.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WakeClock {
    wake_instant: Option<DateTime<Local>>,
}

impl WakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored wake instant wholesale. The sensor collaborator
    /// pushes a fresh value per completed fetch; there is no merging.
    pub fn set_wake_time(&mut self, instant: Option<DateTime<Local>>) {
        self.wake_instant = instant;
    }

    pub fn wake_instant(&self) -> Option<DateTime<Local>> {
        self.wake_instant
    }

    /// Lock state at `now`.
    ///
    /// Exactly 90:00 elapsed is already unlocked (strict `>` for "still
    /// locked"). A wake instant in the future counts as zero elapsed, so the
    /// reported remainder never exceeds the full window.
    pub fn lock_state(&self, now: DateTime<Local>) -> CaffeineLock {
        let Some(wake) = self.wake_instant else {
            return CaffeineLock {
                locked: true,
                remaining_minutes: 90,
                remaining_seconds: 0,
            };
        };

        let elapsed = (now - wake).num_seconds().max(0);
        let remaining = CLEARANCE_WINDOW_SECS - elapsed;

        if remaining > 0 {
            CaffeineLock {
                locked: true,
                remaining_minutes: (remaining / 60) as u32,
                remaining_seconds: (remaining % 60) as u32,
            }
        } else {
            CaffeineLock {
                locked: false,
                remaining_minutes: 0,
                remaining_seconds: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 9, h, m, s).unwrap()
    }

    #[test]
    fn missing_wake_time_is_fully_locked() {
        let clock = WakeClock::new();
        let state = clock.lock_state(at(8, 0, 0));
        assert!(state.locked);
        assert_eq!(state.remaining_minutes, 90);
        assert_eq!(state.remaining_seconds, 0);
    }

    #[test]
    fn counts_down_while_locked() {
        let mut clock = WakeClock::new();
        clock.set_wake_time(Some(at(7, 0, 0)));
        let state = clock.lock_state(at(8, 0, 0));
        assert!(state.locked);
        assert_eq!(state.remaining_minutes, 30);
        assert_eq!(state.remaining_seconds, 0);
    }

    #[test]
    fn unlocks_exactly_at_window_boundary() {
        let mut clock = WakeClock::new();
        clock.set_wake_time(Some(at(7, 0, 0)));

        let just_before = clock.lock_state(at(8, 29, 59));
        assert!(just_before.locked);
        assert_eq!(just_before.remaining_minutes, 0);
        assert_eq!(just_before.remaining_seconds, 1);

        let boundary = clock.lock_state(at(8, 30, 0));
        assert!(!boundary.locked);
        assert_eq!(boundary.remaining_minutes, 0);
        assert_eq!(boundary.remaining_seconds, 0);
    }

    #[test]
    fn unlocks_after_window() {
        let mut clock = WakeClock::new();
        clock.set_wake_time(Some(at(7, 0, 0)));
        let state = clock.lock_state(at(8, 31, 0));
        assert!(!state.locked);
    }

    #[test]
    fn future_wake_instant_clamps_to_full_window() {
        let mut clock = WakeClock::new();
        clock.set_wake_time(Some(at(9, 0, 0)));
        let state = clock.lock_state(at(8, 0, 0));
        assert!(state.locked);
        assert_eq!(state.remaining_minutes, 90);
        assert_eq!(state.remaining_seconds, 0);
    }

    #[test]
    fn replacement_overrides_previous_instant() {
        let mut clock = WakeClock::new();
        clock.set_wake_time(Some(at(5, 0, 0)));
        assert!(!clock.lock_state(at(8, 0, 0)).locked);
        clock.set_wake_time(Some(at(7, 30, 0)));
        assert!(clock.lock_state(at(8, 0, 0)).locked);
    }

    #[test]
    fn countdown_formats_as_mm_ss() {
        let mut clock = WakeClock::new();
        clock.set_wake_time(Some(at(7, 0, 0)));
        let state = clock.lock_state(at(7, 55, 30));
        assert_eq!(state.countdown(), "34:30");
    }
}
