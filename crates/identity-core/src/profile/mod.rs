//! Learner profile snapshots: data model, sample fixtures and JSON loading.

pub mod fixtures;
mod loader;
mod types;

pub use fixtures::{common_highlights, fixture, mock_user_free, mock_user_paid};
pub use loader::{load_profile, parse_profile};
pub use types::{
    Highlight, HighlightIcon, HighlightStatus, MembershipStatus, Milestone, MilestoneStatus,
    PaidJourney, Reward, Tier, UserProfile, CONSISTENCY_WINDOW_DAYS, EFFORT_WINDOW_DAYS,
};
