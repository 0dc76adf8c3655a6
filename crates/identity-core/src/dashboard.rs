//! Full dashboard composition.
//!
//! [`DashboardView::build`] runs every derivation against one profile and one
//! config. It holds no state, so building twice from the same inputs yields
//! equal views.

use serde::Serialize;

use crate::activity::{ActivityResolver, MonthView, WeekView};
use crate::effort::EffortChart;
use crate::highlights::{highlight_sheet_title, HighlightDetail, HighlightsPanel};
use crate::profile::{UserProfile, CONSISTENCY_WINDOW_DAYS};
use crate::progression::{JourneyCard, MembershipRules, MembershipView};
use crate::session::{DashboardSession, Sheet};
use crate::storage::EngineConfig;

/// Default text of the prompt bar.
pub const TODAY_PROMPT: &str = "10 minutes today keeps your streak alive";

/// Avatar content: a photo when available, initials otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Avatar {
    Photo(String),
    Initials(String),
}

/// Name, labels and level progress at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityHeader {
    pub avatar: Avatar,
    pub name: String,
    pub class_label: String,
    pub board_label: String,
    /// Omitted when empty
    pub age_text: Option<String>,
    /// "Level 4"
    pub level_label: String,
    /// "65% to Level 5"
    pub level_progress_label: String,
    pub level_progress_pct: f64,
}

impl IdentityHeader {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let pct = profile.level_progress_pct.clamp(0.0, 100.0);
        Self {
            avatar: match &profile.photo_url {
                Some(url) if !url.is_empty() => Avatar::Photo(url.clone()),
                _ => Avatar::Initials(profile.initials.clone()),
            },
            name: profile.name.clone(),
            class_label: profile.class_label.clone(),
            board_label: profile.board_label.clone(),
            age_text: (!profile.age_text.is_empty()).then(|| profile.age_text.clone()),
            level_label: format!("Level {}", profile.level),
            level_progress_label: format!(
                "{pct}% to Level {}",
                profile.level.saturating_add(1)
            ),
            level_progress_pct: pct,
        }
    }
}

/// Streak and consistency chips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakChips {
    /// "12 days streak"
    pub streak: String,
    /// "24 / 30 days"
    pub consistency: String,
}

impl StreakChips {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            streak: format!("{} days streak", profile.streak_days),
            consistency: format!(
                "{} / {CONSISTENCY_WINDOW_DAYS} days",
                profile.monthly_consistency_days.min(CONSISTENCY_WINDOW_DAYS)
            ),
        }
    }
}

/// Links at the bottom that open the explainer sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransparencyLink {
    pub label: &'static str,
    pub sheet: Sheet,
}

pub const TRANSPARENCY_LINKS: [TransparencyLink; 3] = [
    TransparencyLink {
        label: "How Level works",
        sheet: Sheet::Level,
    },
    TransparencyLink {
        label: "How Effort Score works",
        sheet: Sheet::Effort,
    },
    TransparencyLink {
        label: "Why this highlight appeared",
        sheet: Sheet::Highlight,
    },
];

/// Content of the open bottom sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetContent {
    pub title: &'static str,
    pub body: Vec<String>,
    /// Set when a highlight is selected
    pub highlight: Option<HighlightDetail>,
}

impl SheetContent {
    /// Resolve the sheet for the session's overlay, if one is open.
    pub fn for_session(session: &DashboardSession, profile: &UserProfile) -> Option<Self> {
        let content = match session.sheet? {
            Sheet::Effort => Self {
                title: "Effort Score",
                body: vec![
                    "Effort Score reflects your active learning. It's calculated daily based on:".into(),
                    "Time spent watching lessons".into(),
                    "Quizzes completed and accuracy".into(),
                    "Practice tasks and notes read".into(),
                ],
                highlight: None,
            },
            Sheet::Level => Self {
                title: "Learner Level",
                body: vec![
                    "Level up by earning XP from daily activities. Higher levels unlock fresher profile borders and bragging rights!".into(),
                ],
                highlight: None,
            },
            Sheet::Highlight => {
                let selected = session.selected_in(profile);
                Self {
                    title: highlight_sheet_title(selected),
                    body: match selected {
                        Some(_) => Vec::new(),
                        None => vec![
                            "We curate your best moments, like high scores, streaks and early bird sessions, to celebrate your progress.".into(),
                        ],
                    },
                    highlight: selected.map(HighlightDetail::of),
                }
            }
        };
        Some(content)
    }
}

/// Every card on the dashboard, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub header: IdentityHeader,
    pub chips: StreakChips,
    pub week: WeekView,
    pub month: MonthView,
    pub effort: EffortChart,
    pub highlights: HighlightsPanel,
    pub journey: Option<JourneyCard>,
    pub membership: Option<MembershipView>,
    pub prompt: &'static str,
    pub transparency: [TransparencyLink; 3],
}

impl DashboardView {
    pub fn build(profile: &UserProfile, config: &EngineConfig) -> Self {
        Self::build_with_tier(profile, config, 0)
    }

    /// Build with the membership carousel centred on `tier_index`.
    pub fn build_with_tier(
        profile: &UserProfile,
        config: &EngineConfig,
        tier_index: usize,
    ) -> Self {
        let reference = config.calendar.reference_date;
        tracing::debug!(profile = %profile.id, %reference, "building dashboard");

        let resolver = ActivityResolver::for_profile(profile, reference);
        Self {
            header: IdentityHeader::for_profile(profile),
            chips: StreakChips::for_profile(profile),
            week: WeekView::build(&resolver, profile.streak_days),
            month: MonthView::build(&resolver, profile.daily_activity.len()),
            effort: EffortChart::for_profile(profile, &config.effort),
            highlights: HighlightsPanel::build(&profile.highlights, config.highlights.total_slots),
            journey: JourneyCard::for_profile(profile),
            membership: MembershipView::for_profile(
                profile,
                MembershipRules::from(&config.membership),
                tier_index,
            ),
            prompt: TODAY_PROMPT,
            transparency: TRANSPARENCY_LINKS,
        }
    }

    /// Build for the session's active profile.
    pub fn for_session(session: &DashboardSession, config: &EngineConfig) -> Self {
        Self::build_with_tier(&session.active_profile(), config, session.tier_index)
    }
}
