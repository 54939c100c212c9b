//! # Vitals Core Library
//!
//! Derived wellness state engine for a single-user daily dashboard. Three
//! independently timed signals -- post-wake caffeine eligibility, required
//! solar exposure, and hydration intake -- compose into one aggregate
//! snapshot per tick.
//!
//! ## Architecture
//!
//! - **Sub-engines**: [`WakeClock`], [`SolarRequirement`], and
//!   [`HydrationLedger`] each own one signal; none reads another's state
//! - **Aggregator**: [`DashboardEngine`] recomputes a full [`Snapshot`] on
//!   every 1 Hz `tick()` and on every input push, so observers never see a
//!   stale view
//! - **Storage**: SQLite key-value persistence behind the [`KvStore`] seam
//!   plus TOML configuration
//! - **Weather**: [`OpenWeatherClient`] collaborator that turns a One Call
//!   response into a plain reading to push into the engine
//!
//! The engine is passive: it holds no timer and does no I/O beyond the
//! synchronous ledger writes. A driver loop (the CLI's `watch` command)
//! owns the clock.

pub mod dashboard;
pub mod error;
pub mod hydration;
pub mod solar;
pub mod storage;
pub mod wake;
pub mod weather;

pub use dashboard::{date_label, DashboardEngine, Greeting, Snapshot};
pub use error::{ConfigError, CoreError, StorageError, WeatherError};
pub use hydration::{HydrationLedger, HydrationStatus};
pub use solar::{SolarRequirement, SolarStatus};
pub use storage::{Config, Database, KvStore};
pub use wake::{CaffeineLock, WakeClock};
pub use weather::{OpenWeatherClient, WeatherReading};
