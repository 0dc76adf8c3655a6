//! Core error types for identity-core.
//!
//! The derivations themselves never fail: out-of-range inputs are clamped and
//! unknown tags fall back to a default. Errors only come from the fallible
//! edges of the library, namely profile loading, profile validation and
//! configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for identity-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Profile loading errors
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Profile invariant violations
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while obtaining a profile snapshot.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Failed to read or parse a profile file
    #[error("Failed to load profile from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// No built-in fixture with that name
    #[error("Unknown profile fixture '{0}' (expected 'paid' or 'free')")]
    UnknownFixture(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dotted configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home/config directory could not be prepared
    #[error("Configuration directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

/// Violations of the profile data model invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Daily effort must hold exactly one week of samples
    #[error("Daily effort must have exactly 7 entries, got {len}")]
    EffortLength { len: usize },

    /// Activity dates must be unique
    #[error("Duplicate activity date: {0}")]
    DuplicateActivityDate(String),

    /// Activity dates must be YYYY-MM-DD
    #[error("Invalid activity date '{0}': expected YYYY-MM-DD")]
    InvalidActivityDate(String),

    /// Journey and membership are present iff the profile is paid
    #[error("Paid-only fields are inconsistent with is_paid={is_paid}")]
    PaidFieldsMismatch { is_paid: bool },

    /// Milestones must be ordered by ascending percentage
    #[error("Milestones must be in ascending percentage order (found {pct} after {previous})")]
    MilestoneOrder { previous: f64, pct: f64 },

    /// A journey has exactly one upcoming milestone
    #[error("Journey must have exactly one 'next' milestone, found {count}")]
    NextMilestoneCount { count: usize },

    /// Numeric field outside its documented range
    #[error("Value {value} out of range for '{field}'")]
    OutOfRange { field: String, value: f64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
