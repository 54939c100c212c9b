use clap::Subcommand;

use vitals_core::Config;

use super::CliResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Set the display name for the greeting banner
    SetName { name: String },
    /// Set the daily hydration goal in ml
    SetGoal { ml: u32 },
    /// Set the default intake increment in ml
    SetAmount { ml: u32 },
    /// Set the OpenWeather API key
    SetApiKey { key: String },
    /// Set the coordinates used for weather fetches
    SetLocation { latitude: f64, longitude: f64 },
}

pub fn run(action: ConfigAction) -> CliResult {
    let mut cfg = Config::load_or_default();
    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&cfg)?);
            return Ok(());
        }
        ConfigAction::SetName { name } => cfg.user_name = name,
        ConfigAction::SetGoal { ml } => cfg.daily_goal_ml = ml,
        ConfigAction::SetAmount { ml } => cfg.default_amount_ml = ml,
        ConfigAction::SetApiKey { key } => cfg.weather.api_key = key,
        ConfigAction::SetLocation {
            latitude,
            longitude,
        } => {
            cfg.weather.latitude = latitude;
            cfg.weather.longitude = longitude;
        }
    }
    cfg.save()?;
    Ok(())
}
