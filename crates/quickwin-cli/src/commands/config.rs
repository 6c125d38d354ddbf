use clap::Subcommand;
use quickwin_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "durations.default_minutes", "timer.break_minutes")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(config: &mut Config, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => println!("{value}"),
            None => eprintln!("unknown key: {key}"),
        },
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            *config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
