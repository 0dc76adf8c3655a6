//! Per-feature effort breakdown.
//!
//! There is no per-feature telemetry yet, so the default source derives a
//! stable level from the feature identifier alone. Callers that do have real
//! numbers plug them in through [`EffortBreakdownSource`].

use std::collections::HashMap;

use serde::Serialize;

use super::chart::display_score;
use crate::profile::UserProfile;

/// Highest contribution level.
pub const MAX_EFFORT_LEVEL: u8 = 3;

/// Bar width used for a level-0 feature so it never renders empty.
pub const MIN_BAR_WIDTH_PCT: f64 = 5.0;

/// Contribution of one learning feature to today's effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureEffort {
    /// 0 (unused) to 3 (high)
    pub level: u8,
    pub label: &'static str,
}

impl FeatureEffort {
    /// Build from a raw level; anything above 3 is treated as 3.
    pub fn from_level(level: u8) -> Self {
        let level = level.min(MAX_EFFORT_LEVEL);
        let label = match level {
            3 => "High contribution",
            2 => "Moderate activity",
            1 => "Light usage",
            _ => "Not used today",
        };
        Self { level, label }
    }

    pub fn is_zero(&self) -> bool {
        self.level == 0
    }

    /// Relative bar width in percent.
    pub fn bar_width_pct(&self) -> f64 {
        if self.is_zero() {
            MIN_BAR_WIDTH_PCT
        } else {
            f64::from(self.level) / f64::from(MAX_EFFORT_LEVEL) * 100.0
        }
    }
}

/// Placeholder level: identifier length modulo 4.
pub fn effort_level(feature_id: &str) -> FeatureEffort {
    FeatureEffort::from_level((feature_id.chars().count() % 4) as u8)
}

/// Where per-feature contribution levels come from.
pub trait EffortBreakdownSource {
    fn effort_level(&self, feature_id: &str) -> FeatureEffort;
}

/// Deterministic stand-in keyed on the identifier length.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdLengthBreakdown;

impl EffortBreakdownSource for IdLengthBreakdown {
    fn effort_level(&self, feature_id: &str) -> FeatureEffort {
        effort_level(feature_id)
    }
}

/// Levels supplied by the caller; unknown features read as unused.
#[derive(Debug, Clone, Default)]
pub struct MeasuredBreakdown {
    levels: HashMap<String, u8>,
}

impl MeasuredBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, feature_id: impl Into<String>, level: u8) -> Self {
        self.levels.insert(feature_id.into(), level);
        self
    }
}

impl EffortBreakdownSource for MeasuredBreakdown {
    fn effort_level(&self, feature_id: &str) -> FeatureEffort {
        FeatureEffort::from_level(self.levels.get(feature_id).copied().unwrap_or(0))
    }
}

/// A learning activity that contributes to effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningFeature {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name in the dashboard's icon set
    pub icon: &'static str,
}

/// Features listed on the breakdown screen, in display order.
pub const LEARNING_FEATURES: [LearningFeature; 6] = [
    LearningFeature {
        id: "live_class",
        label: "Live Class",
        icon: "tv",
    },
    LearningFeature {
        id: "recorded_class",
        label: "Recorded Class",
        icon: "play",
    },
    LearningFeature {
        id: "animated_lesson",
        label: "Animated Lesson",
        icon: "zap",
    },
    LearningFeature {
        id: "live_exam",
        label: "Live Exam",
        icon: "clock",
    },
    LearningFeature {
        id: "practice_mcq",
        label: "Practice MCQ",
        icon: "book-open",
    },
    LearningFeature {
        id: "shikho_ai",
        label: "Shikho AI",
        icon: "message-square",
    },
];

/// One row of the breakdown screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub feature: LearningFeature,
    pub effort: FeatureEffort,
    pub bar_width_pct: f64,
    /// Greyed-out row for unused features
    pub muted: bool,
}

/// The effort breakdown screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffortBreakdown {
    pub today_score: f64,
    /// e.g. "85 / 100"
    pub today_display: String,
    pub rows: Vec<BreakdownRow>,
}

impl EffortBreakdown {
    pub fn build(profile: &UserProfile, source: &dyn EffortBreakdownSource) -> Self {
        let today_score = profile.today_effort();
        let rows = LEARNING_FEATURES
            .iter()
            .map(|feature| {
                let effort = source.effort_level(feature.id);
                BreakdownRow {
                    feature: *feature,
                    effort,
                    bar_width_pct: effort.bar_width_pct(),
                    muted: effort.is_zero(),
                }
            })
            .collect();

        Self {
            today_score,
            today_display: format!("{} / 100", display_score(today_score)),
            rows,
        }
    }
}
