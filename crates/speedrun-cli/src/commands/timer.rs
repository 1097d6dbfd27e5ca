use clap::Subcommand;
use speedrun_core::storage::Database;
use speedrun_core::timer::{check_name, now_ms, Intent, Tag, TimerEngine, TimerKind, TimerSettings};
use speedrun_core::{format_hms, Config};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Create a new timer
    Add {
        /// Display name (default "New Activity")
        name: Option<String>,
    },
    /// List all timers in display order
    List {
        /// Print raw records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start a timer
    Start {
        id: u64,
        /// Start even while another timer is running
        #[arg(long)]
        force: bool,
    },
    /// Pause a timer
    Pause { id: u64 },
    /// Start when idle, pause when running
    Toggle {
        id: u64,
        #[arg(long)]
        force: bool,
    },
    /// Reset a timer to its baseline
    Reset { id: u64 },
    /// Delete a timer
    Remove { id: u64 },
    /// Rename a timer
    Rename { id: u64, name: String },
    /// Change a timer's tag (palette symbol or index 0-9)
    Retag { id: u64, tag: String },
    /// Save timer settings
    Set {
        id: u64,
        /// stopwatch or countdown
        #[arg(long)]
        kind: Option<String>,
        /// Countdown target / baseline, in minutes
        #[arg(long)]
        minutes: Option<u64>,
        /// Drive the title display from this timer
        #[arg(long)]
        show_in_title: Option<bool>,
        /// Arm the notify threshold
        #[arg(long)]
        notify: Option<bool>,
        /// Notify threshold, in minutes
        #[arg(long)]
        notify_minutes: Option<u64>,
    },
    /// Tick once and print the full state as JSON
    Status,
    /// Drive the tick loop, printing totals until interrupted
    Watch {
        /// Tick interval in milliseconds
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
        /// Stop after this many ticks (runs forever when omitted)
        #[arg(long)]
        count: Option<u64>,
    },
}

fn load_engine(db: &Database) -> Result<TimerEngine, Box<dyn std::error::Error>> {
    Ok(TimerEngine::with_store(db.load_timers()?))
}

fn save_engine(db: &Database, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    db.save_timers(engine.store())?;
    Ok(())
}

fn parse_kind(s: &str) -> Result<TimerKind, String> {
    match s {
        "stopwatch" => Ok(TimerKind::Stopwatch),
        "countdown" => Ok(TimerKind::Countdown),
        other => Err(format!("expected 'stopwatch' or 'countdown', got '{other}'")),
    }
}

fn print_events(
    config: &Config,
    events: &[speedrun_core::Event],
) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    super::handle_side_effects(config, events);
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let mut engine = load_engine(&db)?;

    match action {
        TimerAction::Add { name } => {
            let event = engine.create()?;
            if let speedrun_core::Event::TimerCreated { id, .. } = event {
                if let Some(name) = name {
                    if let Some(warn) = check_name(&name) {
                        eprintln!("warning: {warn}");
                    }
                    engine.rename(id, name)?;
                }
            }
            print_events(&config, &[event])?;
        }
        TimerAction::List { json } => {
            // Flush running timers to now so the listing is current.
            let report = engine.advance(now_ms());
            super::handle_side_effects(&config, &report.events);
            if json {
                println!("{}", engine.store().to_json()?);
            } else {
                for rec in engine.store().list() {
                    let state = if rec.is_running {
                        "running"
                    } else if rec.is_completed() {
                        "done"
                    } else {
                        "idle"
                    };
                    println!(
                        "{:>3}  {}  {:<45}  {}  [{state}]",
                        rec.id,
                        rec.tag.symbol(),
                        rec.name,
                        format_hms(rec.elapsed_for_display()),
                    );
                }
            }
        }
        TimerAction::Start { id, force } => {
            let starting = !engine.find(id)?.is_running;
            if starting && engine.any_other_running(id) && !force {
                eprintln!("another timer is already running; pass --force to run both");
                std::process::exit(1);
            }
            let events = engine.dispatch(Intent::Start { id }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Toggle { id, force } => {
            let starting = !engine.find(id)?.is_running;
            if starting && engine.any_other_running(id) && !force {
                eprintln!("another timer is already running; pass --force to run both");
                std::process::exit(1);
            }
            let events = engine.dispatch(Intent::Toggle { id }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Pause { id } => {
            let events = engine.dispatch(Intent::Pause { id }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Reset { id } => {
            let events = engine.dispatch(Intent::Reset { id }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Remove { id } => {
            let events = engine.dispatch(Intent::Delete { id }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Rename { id, name } => {
            if let Some(warn) = check_name(&name) {
                eprintln!("warning: {warn}");
            }
            let events = engine.dispatch(Intent::Rename { id, name }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Retag { id, tag } => {
            let tag = Tag::parse(&tag).ok_or_else(|| format!("unknown tag '{tag}'"))?;
            let offered = engine.store().available_tags_for(id);
            if !offered.contains(&tag) {
                eprintln!("note: {} is already used by another timer", tag.symbol());
            }
            let events = engine.dispatch(Intent::Retag { id, tag }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Set {
            id,
            kind,
            minutes,
            show_in_title,
            notify,
            notify_minutes,
        } => {
            let rec = engine.find(id)?;
            let settings = TimerSettings {
                kind: match kind {
                    Some(s) => parse_kind(&s)?,
                    None => rec.kind,
                },
                initial_duration_ms: minutes
                    .map(|m| m * 60 * 1000)
                    .unwrap_or(rec.initial_duration_ms),
                show_in_title: show_in_title.unwrap_or(rec.show_in_title),
                notify_enabled: notify.unwrap_or(rec.notify_enabled),
                notify_time_ms: notify_minutes
                    .map(|m| m * 60 * 1000)
                    .unwrap_or(rec.notify_time_ms),
            };
            let events = engine.dispatch(Intent::SaveSettings { id, settings }, now_ms())?;
            print_events(&config, &events)?;
        }
        TimerAction::Status => {
            let report = engine.advance(now_ms());
            print_events(&config, &report.events)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Watch { interval_ms, count } => {
            let mut ticks = 0u64;
            loop {
                let report = engine.advance(now_ms());
                super::handle_side_effects(&config, &report.events);
                save_engine(&db, &engine)?;

                let title = report.title.unwrap_or_else(|| "Speedrun".to_string());
                println!("total {}  |  {title}", format_hms(report.total_ms));

                ticks += 1;
                if count.is_some_and(|c| ticks >= c) {
                    break;
                }
                std::thread::sleep(std::time::Duration::from_millis(interval_ms));
            }
        }
    }

    save_engine(&db, &engine)?;
    Ok(())
}
