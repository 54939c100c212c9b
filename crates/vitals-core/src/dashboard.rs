//! Aggregate dashboard engine.
//!
//! Owns the three sub-engines and recomputes one immutable snapshot on
//! every tick or input push. No internal thread: a driver loop calls
//! `tick()` at 1 Hz, and every mutating method refreshes the latest
//! snapshot before returning so observers never see a stale view between
//! a mutation and the next tick.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::hydration::{HydrationLedger, HydrationStatus};
use crate::solar::{SolarRequirement, SolarStatus};
use crate::storage::KvStore;
use crate::wake::{CaffeineLock, WakeClock};

/// Time-of-day band for the greeting banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Greeting {
    /// Band by local hour-of-day: [5,12) morning, [12,17) afternoon,
    /// [17,21) evening, else night.
    pub fn at_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Greeting::Morning,
            12..=16 => Greeting::Afternoon,
            17..=20 => Greeting::Evening,
            _ => Greeting::Night,
        }
    }

    pub fn line(&self) -> &'static str {
        match self {
            Greeting::Morning => "GOOD MORNING",
            Greeting::Afternoon => "GOOD AFTERNOON",
            Greeting::Evening => "GOOD EVENING",
            Greeting::Night => "GOOD NIGHT",
        }
    }
}

/// Weekday + month name + day, upper-cased, English month/weekday names
/// regardless of locale (e.g. "MONDAY, JANUARY 9").
pub fn date_label(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d").to_string().to_uppercase()
}

/// The immutable, fully-derived view of all three sub-engines plus
/// time-of-day text. Recomputed, never stored incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub greeting: Greeting,
    pub date_label: String,
    pub caffeine: CaffeineLock,
    pub solar: SolarStatus,
    pub hydration: HydrationStatus,
    pub at: DateTime<Local>,
}

/// Aggregator over the three sub-engines.
///
/// Composition happens only here; no sub-engine reads another's state.
pub struct DashboardEngine<S: KvStore> {
    wake: WakeClock,
    solar: SolarRequirement,
    water: HydrationLedger<S>,
    latest: Snapshot,
}

impl<S: KvStore> DashboardEngine<S> {
    pub fn new(
        wake: WakeClock,
        solar: SolarRequirement,
        water: HydrationLedger<S>,
        now: DateTime<Local>,
    ) -> Self {
        let latest = compute(&wake, &solar, &water, now);
        Self {
            wake,
            solar,
            water,
            latest,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The most recently computed snapshot. Refreshed by every input push
    /// and every `tick()`.
    pub fn latest(&self) -> &Snapshot {
        &self.latest
    }

    /// Pure recomputation at `now`; does not touch stored state.
    pub fn snapshot(&self, now: DateTime<Local>) -> Snapshot {
        compute(&self.wake, &self.solar, &self.water, now)
    }

    pub fn wake_clock(&self) -> &WakeClock {
        &self.wake
    }

    pub fn solar_state(&self) -> &SolarRequirement {
        &self.solar
    }

    pub fn hydration(&self) -> &HydrationLedger<S> {
        &self.water
    }

    /// Shared kv handle for collaborators persisting their own state.
    pub fn store_mut(&mut self) -> &mut S {
        self.water.store_mut()
    }

    // ── Input pushes ─────────────────────────────────────────────────
    //
    // Each push mutates one sub-engine and refreshes the snapshot before
    // returning (callers must not rely on the next tick).

    pub fn set_wake_time(&mut self, instant: Option<DateTime<Local>>) {
        self.wake.set_wake_time(instant);
        self.refresh(Local::now());
    }

    pub fn update_reading(&mut self, uv_index: u32, cloud_cover: f64) {
        self.solar.update_reading(uv_index, cloud_cover);
        self.refresh(Local::now());
    }

    pub fn update_exposure(&mut self, minutes: u32) {
        self.solar.update_exposure(minutes);
        self.refresh(Local::now());
    }

    pub fn add_intake(&mut self) -> Result<(), StorageError> {
        self.water.add_intake()?;
        self.refresh(Local::now());
        Ok(())
    }

    pub fn remove_intake(&mut self) -> Result<(), StorageError> {
        self.water.remove_intake()?;
        self.refresh(Local::now());
        Ok(())
    }

    pub fn set_pending_amount(&mut self, text: &str) {
        self.water.set_pending_amount(text);
        self.refresh(Local::now());
    }

    pub fn reset_water(&mut self) -> Result<(), StorageError> {
        let now = Local::now();
        self.water.reset_daily(now.date_naive())?;
        self.refresh(now);
        Ok(())
    }

    pub fn set_water_goal(&mut self, goal_ml: u32) -> Result<(), StorageError> {
        self.water.set_goal(goal_ml)?;
        self.refresh(Local::now());
        Ok(())
    }

    // ── Tick ─────────────────────────────────────────────────────────

    /// Periodic recomputation. Checks the hydration day rollover, then
    /// rebuilds the snapshot. Idempotent for a fixed `now`.
    pub fn tick(&mut self, now: DateTime<Local>) -> Result<&Snapshot, StorageError> {
        self.water.check_rollover(now.date_naive())?;
        self.refresh(now);
        Ok(&self.latest)
    }

    fn refresh(&mut self, now: DateTime<Local>) {
        self.latest = compute(&self.wake, &self.solar, &self.water, now);
    }
}

fn compute<S: KvStore>(
    wake: &WakeClock,
    solar: &SolarRequirement,
    water: &HydrationLedger<S>,
    now: DateTime<Local>,
) -> Snapshot {
    Snapshot {
        greeting: Greeting::at_hour(now.hour()),
        date_label: date_label(now),
        caffeine: wake.lock_state(now),
        solar: solar.snapshot(),
        hydration: water.status(),
        at: now,
    }
}
