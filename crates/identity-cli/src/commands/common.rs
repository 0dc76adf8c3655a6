//! Profile and config loading shared by the subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use identity_core::profile::fixture;
use identity_core::{load_profile, EngineConfig, UserProfile};

use crate::GlobalArgs;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a subcommand needs: a validated profile and the engine config.
pub struct Context {
    pub profile: UserProfile,
    pub config: EngineConfig,
    pub json: bool,
}

impl Context {
    pub fn load(global: &GlobalArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = load_config(global)?;
        if let Some(today) = &global.today {
            config.calendar.reference_date = NaiveDate::parse_from_str(today, "%Y-%m-%d")
                .map_err(|e| format!("invalid --today '{today}': {e}"))?;
        }

        let profile = match &global.profile {
            Some(path) => load_profile(path)?,
            None => fixture(&global.fixture)?,
        };
        tracing::debug!(
            profile = %profile.id,
            reference = %config.calendar.reference_date,
            "context loaded"
        );

        Ok(Self {
            profile,
            config,
            json: global.json,
        })
    }

    /// Print `value` as pretty JSON, or run `text` for the human-readable form.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T)) -> CliResult {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text(value);
        }
        Ok(())
    }
}

pub fn config_path(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => Ok(EngineConfig::path()?),
    }
}

pub fn load_config(global: &GlobalArgs) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    Ok(EngineConfig::load_from(&config_path(global)?)?)
}

/// Horizontal bar of `width` cells filled to `pct` percent.
pub fn bar(pct: f64, width: usize) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn rule() -> String {
    "=".repeat(40)
}
