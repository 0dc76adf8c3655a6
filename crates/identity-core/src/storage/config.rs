//! TOML-based engine configuration.
//!
//! Holds the fixed constants the derivations read:
//! - Effort scale, zone thresholds and the ideal band height
//! - Highlight inventory size
//! - Reference "today" for the activity calendar
//! - Membership entry tier
//!
//! Configuration is stored at `~/.config/identity-dashboard/config.toml`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::profile::Tier;

/// Effort chart and zone settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortConfig {
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,
    #[serde(default = "default_optimal_threshold")]
    pub optimal_threshold: f64,
    /// Height of the shaded target band, percent of the chart
    #[serde(default = "default_ideal_zone_pct")]
    pub ideal_zone_pct: f64,
}

/// Highlight inventory settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightsConfig {
    #[serde(default = "default_total_slots")]
    pub total_slots: usize,
}

/// Activity calendar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,
}

/// Membership settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipConfig {
    #[serde(default = "default_entry_tier")]
    pub entry_tier: Tier,
}

/// Engine configuration.
///
/// Serialized to/from TOML at `~/.config/identity-dashboard/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub effort: EffortConfig,
    #[serde(default)]
    pub highlights: HighlightsConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub membership: MembershipConfig,
}

// Default functions
fn default_scale() -> f64 {
    100.0
}
fn default_high_threshold() -> f64 {
    76.0
}
fn default_optimal_threshold() -> f64 {
    41.0
}
fn default_ideal_zone_pct() -> f64 {
    60.0
}
fn default_total_slots() -> usize {
    9
}
fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 7).unwrap_or_default()
}
fn default_entry_tier() -> Tier {
    Tier::Honor
}

impl Default for EffortConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            high_threshold: default_high_threshold(),
            optimal_threshold: default_optimal_threshold(),
            ideal_zone_pct: default_ideal_zone_pct(),
        }
    }
}

impl Default for HighlightsConfig {
    fn default() -> Self {
        Self {
            total_slots: default_total_slots(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
        }
    }
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            entry_tier: default_entry_tier(),
        }
    }
}

impl EngineConfig {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            let not_number =
                                || invalid(format!("cannot parse '{value}' as number"));
                            let n = value.parse::<f64>().map_err(|_| not_number())?;
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(not_number)?
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from an explicit path, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read, cannot be parsed
    /// or fails validation. An unreadable file is left untouched.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: EngineConfig = toml::from_str(&content)
                    .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                cfg.validate()?;
                tracing::debug!(path = %path.display(), "engine config loaded");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default engine config");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting config fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: EngineConfig = serde_json::from_value(json).map_err(|e| {
            ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject settings the derivations cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        };
        let effort = &self.effort;
        if effort.scale.is_nan() || effort.scale <= 0.0 {
            return Err(invalid("effort.scale", "must be positive"));
        }
        if !(0.0..=100.0).contains(&effort.optimal_threshold)
            || !(0.0..=100.0).contains(&effort.high_threshold)
        {
            return Err(invalid("effort", "thresholds must lie within 0-100"));
        }
        if effort.optimal_threshold >= effort.high_threshold {
            return Err(invalid(
                "effort.optimal_threshold",
                "must be below effort.high_threshold",
            ));
        }
        if !(0.0..=100.0).contains(&effort.ideal_zone_pct) {
            return Err(invalid("effort.ideal_zone_pct", "must lie within 0-100"));
        }
        if self.highlights.total_slots == 0 {
            return Err(invalid("highlights.total_slots", "must be at least 1"));
        }
        Ok(())
    }
}
