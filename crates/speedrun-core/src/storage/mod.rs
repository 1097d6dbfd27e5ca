pub mod config;
pub mod database;

pub use config::{Config, Theme};
pub use database::{Database, TIMERS_KEY};

use std::path::PathBuf;

/// Returns `~/.config/speedrun[-dev]/` based on SPEEDRUN_ENV.
///
/// Set SPEEDRUN_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SPEEDRUN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("speedrun-dev")
    } else {
        base_dir.join("speedrun")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
