//! # Identity Dashboard Core Library
//!
//! Derivation engine behind the learner identity dashboard. Given a
//! [`UserProfile`] snapshot it computes every value the dashboard shows:
//! effort zones and the weekly chart, the week strip and month grid with
//! streak bands, highlight counts, journey milestones and membership tiers.
//! The `identity-cli` binary is a thin terminal layer over this crate.
//!
//! ## Architecture
//!
//! - **Profile**: snapshot types, sample fixtures and JSON loading
//! - **Effort**: zone classification, weekly average, chart model and the
//!   per-feature breakdown
//! - **Activity**: per-day resolution against a reference date and the
//!   calendar views built on it
//! - **Progression**: journey milestones and tier unlock rules
//! - **Storage**: TOML configuration for the engine constants
//!
//! All derivations are pure functions of their inputs. The only mutable
//! state is [`DashboardSession`], which is passed by value.
//!
//! ## Key Components
//!
//! - [`DashboardView`]: every card composed from one profile
//! - [`EffortChart`]: the seven-day effort card
//! - [`ActivityResolver`]: active/today/future lookup for calendar cells
//! - [`EngineConfig`]: engine configuration

pub mod activity;
pub mod calendar;
pub mod dashboard;
pub mod effort;
pub mod error;
pub mod highlights;
pub mod profile;
pub mod progression;
pub mod session;
pub mod storage;

pub use activity::{ActivityResolver, DayState, MonthView, WeekView};
pub use dashboard::{DashboardView, SheetContent};
pub use effort::{classify_effort, weekly_average, EffortBreakdown, EffortChart, EffortZone};
pub use error::{ConfigError, CoreError, ProfileError, ValidationError};
pub use highlights::{unlocked_count, HighlightsPanel, TOTAL_HIGHLIGHT_SLOTS};
pub use profile::{load_profile, parse_profile, Tier, UserProfile};
pub use progression::{is_tier_unlocked, JourneyCard, MembershipView};
pub use session::{DashboardSession, Screen, SessionAction, Sheet};
pub use storage::EngineConfig;
