use clap::Subcommand;
use speedrun_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print all preferences
    Show,
    /// Print one preference (theme, sound_enabled)
    Get { key: String },
    /// Set one preference
    Set { key: String, value: String },
    /// Flip between dark and light
    ToggleTheme,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("theme = {}", config.theme.as_str());
            println!("sound_enabled = {}", config.sound_enabled);
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            config.save()?;
        }
        ConfigAction::ToggleTheme => {
            let mut config = Config::load_or_default();
            config.theme = config.theme.toggled();
            config.save()?;
            println!("{}", config.theme.as_str());
        }
    }
    Ok(())
}
