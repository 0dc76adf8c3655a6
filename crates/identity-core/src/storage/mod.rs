//! On-disk configuration for the derivation engine.
//!
//! Profiles are never persisted; the only file the engine owns is its TOML
//! config.

mod config;

pub use config::{CalendarConfig, EffortConfig, EngineConfig, HighlightsConfig, MembershipConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/identity-dashboard[-dev]/` based on IDENTITY_DASHBOARD_ENV.
///
/// Set IDENTITY_DASHBOARD_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("IDENTITY_DASHBOARD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("identity-dashboard-dev")
    } else {
        base_dir.join("identity-dashboard")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirectoryUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
