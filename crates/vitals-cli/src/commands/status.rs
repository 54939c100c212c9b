use chrono::Local;

use super::CliResult;

pub fn run(json: bool) -> CliResult {
    let (mut engine, cfg) = super::open_engine()?;
    let snap = engine.tick(Local::now())?.clone();
    if json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        super::render(&snap, &cfg.user_name);
    }
    Ok(())
}
