use std::time::Duration;

use chrono::Local;

use super::CliResult;

/// The owning driver loop: a 1 Hz interval that ticks the passive engine
/// and re-renders the snapshot. Runs until interrupted.
pub fn run() -> CliResult {
    let (mut engine, cfg) = super::open_engine()?;

    let rt = tokio::runtime::Runtime::new()?;
    let res: Result<(), vitals_core::StorageError> = rt.block_on(async {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            let snap = engine.tick(Local::now())?.clone();
            // Clear and redraw in place.
            print!("\x1b[2J\x1b[H");
            super::render(&snap, &cfg.user_name);
        }
    });
    res?;
    Ok(())
}
