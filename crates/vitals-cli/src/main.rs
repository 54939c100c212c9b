use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vitals", version, about = "Vitals daily-wellness dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's dashboard snapshot
    Status {
        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Wake-up time
    Wake {
        #[command(subcommand)]
        action: commands::wake::WakeAction,
    },
    /// Hydration tracking
    Water {
        #[command(subcommand)]
        action: commands::water::WaterAction,
    },
    /// Sun exposure tracking
    Sun {
        #[command(subcommand)]
        action: commands::sun::SunAction,
    },
    /// Weather readings
    Weather {
        #[command(subcommand)]
        action: commands::weather::WeatherAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Re-render the dashboard once per second
    Watch,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status { json } => commands::status::run(json),
        Commands::Wake { action } => commands::wake::run(action),
        Commands::Water { action } => commands::water::run(action),
        Commands::Sun { action } => commands::sun::run(action),
        Commands::Weather { action } => commands::weather::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Watch => commands::watch::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
