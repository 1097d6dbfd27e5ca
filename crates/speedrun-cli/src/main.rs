use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "speedrun-cli", version, about = "Speedrun multi-track timer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Time breakdown and totals
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Share token export/import
    Share {
        #[command(subcommand)]
        action: commands::share::ShareAction,
    },
    /// Preference management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Share { action } => commands::share::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
