use clap::Subcommand;

use super::CliResult;

#[derive(Subcommand)]
pub enum WaterAction {
    /// Add one increment (defaults to the configured amount; invalid text
    /// falls back to 250 ml)
    Add {
        /// Amount in ml for this call
        amount: Option<String>,
    },
    /// Remove one increment
    Remove {
        /// Amount in ml for this call
        amount: Option<String>,
    },
    /// Reset today's intake to zero
    Reset,
    /// Print today's intake
    Status,
}

pub fn run(action: WaterAction) -> CliResult {
    let (mut engine, _cfg) = super::open_engine()?;
    match action {
        WaterAction::Add { amount } => {
            if let Some(text) = amount {
                engine.set_pending_amount(&text);
            }
            engine.add_intake()?;
        }
        WaterAction::Remove { amount } => {
            if let Some(text) = amount {
                engine.set_pending_amount(&text);
            }
            engine.remove_intake()?;
        }
        WaterAction::Reset => engine.reset_water()?,
        WaterAction::Status => {}
    }

    let water = &engine.latest().hydration;
    println!(
        "{} / {} ml  {:.0}%",
        water.current_ml,
        water.goal_ml,
        water.progress * 100.0
    );
    Ok(())
}
