use clap::Subcommand;

use super::CliResult;

#[derive(Subcommand)]
pub enum SunAction {
    /// Replace today's accumulated sun exposure in minutes
    Exposure { minutes: u32 },
    /// Print the current solar requirement
    Status,
}

pub fn run(action: SunAction) -> CliResult {
    let (mut engine, _cfg) = super::open_engine()?;
    match action {
        SunAction::Exposure { minutes } => {
            engine.update_exposure(minutes);
            super::save_sensors(&mut engine)?;
        }
        SunAction::Status => {}
    }

    let solar = &engine.latest().solar;
    println!(
        "UV {}  {}/{} min  {}",
        solar.uv_index,
        solar.current_minutes,
        solar.required_minutes,
        solar.status_line()
    );
    Ok(())
}
