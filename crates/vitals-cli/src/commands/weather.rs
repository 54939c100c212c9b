use clap::Subcommand;

use vitals_core::OpenWeatherClient;

use super::CliResult;

#[derive(Subcommand)]
pub enum WeatherAction {
    /// Fetch the current UV index and cloud cover and push it to the engine
    Fetch {
        /// Override the configured latitude
        #[arg(long)]
        lat: Option<f64>,
        /// Override the configured longitude
        #[arg(long)]
        lon: Option<f64>,
    },
}

pub fn run(action: WeatherAction) -> CliResult {
    let WeatherAction::Fetch { lat, lon } = action;
    let (mut engine, cfg) = super::open_engine()?;

    let client = OpenWeatherClient::new(cfg.weather.api_key.clone())?;
    let lat = lat.unwrap_or(cfg.weather.latitude);
    let lon = lon.unwrap_or(cfg.weather.longitude);

    let rt = tokio::runtime::Runtime::new()?;
    let reading = rt.block_on(client.fetch(lat, lon))?;

    engine.update_reading(reading.uv_index, reading.cloud_cover);
    super::save_sensors(&mut engine)?;

    let solar = &engine.latest().solar;
    println!(
        "UV {}  cloud cover {:.0}%  required {} min",
        reading.uv_index,
        reading.cloud_cover * 100.0,
        solar.required_minutes
    );
    Ok(())
}
