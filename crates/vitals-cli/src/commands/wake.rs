use chrono::{DateTime, Local, NaiveTime, TimeZone};
use clap::Subcommand;

use super::CliResult;

#[derive(Subcommand)]
pub enum WakeAction {
    /// Record today's wake-up time (HH:MM, local)
    Set { time: String },
    /// Record an exact wake-up instant (RFC 3339)
    At { instant: String },
    /// Apply the 07:00 fallback used when no sleep data is available
    Default,
    /// Print the current caffeine lock state
    Status,
}

fn today_at(time: &str) -> Result<DateTime<Local>, Box<dyn std::error::Error>> {
    let t = NaiveTime::parse_from_str(time, "%H:%M")?;
    Local::now()
        .date_naive()
        .and_time(t)
        .and_local_timezone(Local)
        .single()
        .ok_or_else(|| format!("ambiguous local time: {time}").into())
}

pub fn run(action: WakeAction) -> CliResult {
    let (mut engine, _cfg) = super::open_engine()?;
    match action {
        WakeAction::Set { time } => {
            engine.set_wake_time(Some(today_at(&time)?));
            super::save_sensors(&mut engine)?;
        }
        WakeAction::At { instant } => {
            let parsed = DateTime::parse_from_rfc3339(&instant)?;
            engine.set_wake_time(Some(parsed.with_timezone(&Local)));
            super::save_sensors(&mut engine)?;
        }
        WakeAction::Default => {
            engine.set_wake_time(Some(today_at("07:00")?));
            super::save_sensors(&mut engine)?;
        }
        WakeAction::Status => {}
    }

    let lock = &engine.latest().caffeine;
    println!("{}  {}", lock.message(), lock.countdown());
    Ok(())
}
