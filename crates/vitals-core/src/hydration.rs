//! Daily hydration ledger.
//!
//! Accumulates discrete intake events against a daily goal, persists both
//! fields through the injected key-value store on every mutation, and
//! resets at local-day boundaries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::KvStore;

/// KV key for today's accumulated intake in milliliters.
pub const INTAKE_KEY: &str = "water_intake_ml";
/// KV key for the local calendar date the intake belongs to.
pub const SAVED_DATE_KEY: &str = "water_last_saved_date";

const DATE_FMT: &str = "%Y-%m-%d";

pub const DEFAULT_GOAL_ML: u32 = 4000;
/// Fallback increment when the pending-amount text is not a valid
/// positive integer.
pub const DEFAULT_PENDING_ML: u32 = 250;

/// Derived hydration status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrationStatus {
    /// Completion ratio, clamped to [0, 1].
    pub progress: f64,
    pub current_ml: u32,
    pub goal_ml: u32,
}

/// Intake accumulator backed by a key-value store.
///
/// Intake is always within [0, goal]; every mutation persists synchronously
/// before returning, so a crash right after a call never loses that call's
/// effect.
pub struct HydrationLedger<S: KvStore> {
    store: S,
    current_ml: u32,
    goal_ml: u32,
    pending_text: String,
    last_saved: NaiveDate,
}

impl<S: KvStore> HydrationLedger<S> {
    /// Load persisted state from `store` and roll over if the saved date is
    /// not `today`. Missing or unparsable persisted values start the day at
    /// zero. A zero goal falls back to the default.
    pub fn open(store: S, goal_ml: u32, today: NaiveDate) -> Result<Self, StorageError> {
        let goal_ml = if goal_ml == 0 { DEFAULT_GOAL_ML } else { goal_ml };

        let current_ml = store
            .get(INTAKE_KEY)?
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0)
            .min(goal_ml);
        let last_saved = store
            .get(SAVED_DATE_KEY)?
            .and_then(|v| NaiveDate::parse_from_str(&v, DATE_FMT).ok())
            .unwrap_or(today);

        let mut ledger = Self {
            store,
            current_ml,
            goal_ml,
            pending_text: DEFAULT_PENDING_ML.to_string(),
            last_saved,
        };
        ledger.check_rollover(today)?;
        Ok(ledger)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current_ml(&self) -> u32 {
        self.current_ml
    }

    pub fn goal_ml(&self) -> u32 {
        self.goal_ml
    }

    pub fn last_saved(&self) -> NaiveDate {
        self.last_saved
    }

    /// The increment used by `add_intake`/`remove_intake`. Parse-or-default
    /// is evaluated here, at use time, not when the text was set.
    pub fn pending_amount(&self) -> u32 {
        match self.pending_text.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => DEFAULT_PENDING_ML,
        }
    }

    pub fn status(&self) -> HydrationStatus {
        HydrationStatus {
            progress: (self.current_ml as f64 / self.goal_ml as f64).min(1.0),
            current_ml: self.current_ml,
            goal_ml: self.goal_ml,
        }
    }

    /// Shared handle to the underlying store, for collaborators that keep
    /// their own state next to the ledger's keys.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the user-editable increment text. Validation happens at use
    /// time; any text is accepted here.
    pub fn set_pending_amount(&mut self, text: &str) {
        self.pending_text = text.to_string();
    }

    /// Add one increment, clamped at the daily goal. Persists.
    pub fn add_intake(&mut self) -> Result<(), StorageError> {
        self.current_ml = self
            .current_ml
            .saturating_add(self.pending_amount())
            .min(self.goal_ml);
        self.persist()
    }

    /// Remove one increment, clamped at zero. Persists.
    pub fn remove_intake(&mut self) -> Result<(), StorageError> {
        self.current_ml = self.current_ml.saturating_sub(self.pending_amount());
        self.persist()
    }

    /// Force intake back to zero and advance the saved date. Persists.
    pub fn reset_daily(&mut self, today: NaiveDate) -> Result<(), StorageError> {
        self.current_ml = 0;
        self.last_saved = today;
        self.persist()
    }

    /// Reset if the saved date is not `today`. Safe to call on every tick.
    /// Returns whether a rollover happened.
    pub fn check_rollover(&mut self, today: NaiveDate) -> Result<bool, StorageError> {
        if self.last_saved != today {
            self.reset_daily(today)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Change the daily goal. Intake above the new goal is clamped down and
    /// re-persisted.
    pub fn set_goal(&mut self, goal_ml: u32) -> Result<(), StorageError> {
        self.goal_ml = if goal_ml == 0 { DEFAULT_GOAL_ML } else { goal_ml };
        if self.current_ml > self.goal_ml {
            self.current_ml = self.goal_ml;
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.store.set(INTAKE_KEY, &self.current_ml.to_string())?;
        self.store
            .set(SAVED_DATE_KEY, &self.last_saved.format(DATE_FMT).to_string())?;
        Ok(())
    }
}
