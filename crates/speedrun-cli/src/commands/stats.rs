use clap::Subcommand;
use speedrun_core::storage::Database;
use speedrun_core::timer::{now_ms, TimerEngine};
use speedrun_core::{format_hms, stats, Config};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Print the proportional breakdown
    Show {
        /// Print segments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the grand total only
    Total,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let mut engine = TimerEngine::with_store(db.load_timers()?);
    // Flush running timers to now so the breakdown is current.
    let report = engine.advance(now_ms());
    super::handle_side_effects(&config, &report.events);
    db.save_timers(engine.store())?;
    let breakdown = stats::breakdown(engine.store().list());

    match action {
        StatsAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else if breakdown.segments.is_empty() {
                println!("no data yet");
            } else {
                for seg in &breakdown.segments {
                    println!(
                        "{}  {:<45}  {}  {:6.2}°",
                        seg.tag.symbol(),
                        seg.name,
                        format_hms(seg.ms),
                        seg.span_deg,
                    );
                }
                println!("total {}", format_hms(breakdown.total_ms));
            }
        }
        StatsAction::Total => {
            println!("{}", format_hms(breakdown.total_ms));
        }
    }
    Ok(())
}
