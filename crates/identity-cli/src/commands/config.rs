use clap::Subcommand;
use identity_core::EngineConfig;

use super::common::{config_path, load_config, CliResult};
use crate::GlobalArgs;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "effort.high_threshold", "calendar.reference_date")
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
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(global: &GlobalArgs, action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config(global)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = load_config(global)?;
            config.set(&key, &value)?;
            config.save_to(&config_path(global)?)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = load_config(global)?;
            if global.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
        ConfigAction::Path => {
            println!("{}", config_path(global)?.display());
        }
        ConfigAction::Reset => {
            EngineConfig::default().save_to(&config_path(global)?)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
