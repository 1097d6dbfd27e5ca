use clap::Subcommand;
use speedrun_core::storage::Database;
use speedrun_core::timer::{now_ms, TimerEngine};
use speedrun_core::{format_hms, share, Config};

#[derive(Subcommand)]
pub enum ShareAction {
    /// Encode the current collection into a share token
    Export {
        /// Emit a full URL instead of the bare token
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Decode a token into a read-only snapshot view
    Import {
        token: String,
        /// Print snapshots as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ShareAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ShareAction::Export { base_url } => {
            let db = Database::open()?;
            let config = Config::load_or_default();
            let mut engine = TimerEngine::with_store(db.load_timers()?);
            // Flush running timers to now so the token carries current values.
            let report = engine.advance(now_ms());
            super::handle_side_effects(&config, &report.events);
            db.save_timers(engine.store())?;
            let token = share::encode(engine.store().list());
            match base_url {
                Some(base) => println!("{}", share::share_url(&base, &token)),
                None => println!("{token}"),
            }
        }
        ShareAction::Import { token, json } => {
            // Decoding never touches the stored collection.
            let snapshots = share::decode(&token)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshots)?);
            } else if snapshots.is_empty() {
                println!("token holds no timers");
            } else {
                for snap in &snapshots {
                    println!(
                        "{}  {:<45}  {}",
                        snap.tag.symbol(),
                        snap.name,
                        format_hms(snap.duration_ms),
                    );
                }
            }
        }
    }
    Ok(())
}
