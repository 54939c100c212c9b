pub mod config;
pub mod status;
pub mod sun;
pub mod wake;
pub mod watch;
pub mod water;
pub mod weather;

use chrono::Local;
use serde::{Deserialize, Serialize};

use vitals_core::storage::KvStore;
use vitals_core::{
    Config, DashboardEngine, Database, HydrationLedger, Snapshot, SolarRequirement, WakeClock,
};

/// KV key holding the serialized sensor inputs between invocations.
const SENSORS_KEY: &str = "dashboard_state";

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Sensor inputs the CLI carries across invocations. Hydration state lives
/// in its own kv keys owned by the ledger.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SensorState {
    #[serde(default)]
    wake: WakeClock,
    #[serde(default)]
    solar: SolarRequirement,
}

/// Load config + database, restore sensor state, and build the engine.
pub fn open_engine() -> Result<(DashboardEngine<Database>, Config), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let db = Database::open()?;

    let sensors: SensorState = match db.get(SENSORS_KEY)? {
        Some(json) => serde_json::from_str(&json).unwrap_or_default(),
        None => SensorState::default(),
    };

    let now = Local::now();
    let ledger = HydrationLedger::open(db, cfg.daily_goal_ml, now.date_naive())?;
    let mut engine = DashboardEngine::new(sensors.wake, sensors.solar, ledger, now);
    if cfg.default_amount_ml != 0 {
        engine.set_pending_amount(&cfg.default_amount_ml.to_string());
    }
    Ok((engine, cfg))
}

/// Persist the sensor inputs back to the kv store.
pub fn save_sensors(engine: &mut DashboardEngine<Database>) -> CliResult {
    let state = SensorState {
        wake: engine.wake_clock().clone(),
        solar: engine.solar_state().clone(),
    };
    let json = serde_json::to_string(&state)?;
    engine.store_mut().set(SENSORS_KEY, &json)?;
    Ok(())
}

pub fn render(snap: &Snapshot, user_name: &str) {
    if user_name.is_empty() {
        println!("{}", snap.greeting.line());
    } else {
        println!("{}, {}", snap.greeting.line(), user_name);
    }
    println!("{}", snap.date_label);
    println!(
        "caffeine  {:<18} {}",
        snap.caffeine.message(),
        snap.caffeine.countdown()
    );
    println!(
        "solar     UV {:<2}  {}/{} min  {:>3.0}%  {}",
        snap.solar.uv_index,
        snap.solar.current_minutes,
        snap.solar.required_minutes,
        snap.solar.progress * 100.0,
        snap.solar.status_line()
    );
    println!(
        "water     {} / {} ml  {:>3.0}%",
        snap.hydration.current_ml,
        snap.hydration.goal_ml,
        snap.hydration.progress * 100.0
    );
}
