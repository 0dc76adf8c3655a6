//! Profile snapshot types.
//!
//! These mirror the JSON shape the dashboard receives from its data source
//! (camelCase keys). A profile is immutable once built; every view is derived
//! from it fresh.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::ValidationError;

/// Number of daily effort samples in a week, the last being today.
pub const EFFORT_WINDOW_DAYS: usize = 7;

/// Upper bound for the monthly consistency counter.
pub const CONSISTENCY_WINDOW_DAYS: u32 = 30;

/// Membership tier, ordered Honor < Elite < Legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Honor,
    Elite,
    Legend,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 3] = [Tier::Honor, Tier::Elite, Tier::Legend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Honor => "Honor",
            Tier::Elite => "Elite",
            Tier::Legend => "Legend",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "honor" => Ok(Tier::Honor),
            "elite" => Ok(Tier::Elite),
            "legend" => Ok(Tier::Legend),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

/// Badge artwork tag. Unknown tags decode as [`HighlightIcon::Star`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HighlightIcon {
    Crown,
    TrendingUp,
    Star,
    Trophy,
    Zap,
    Target,
    Award,
}

/// Whether a highlight has been earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStatus {
    Locked,
    Unlocked,
}

/// An achievement badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display label such as "Last week" or "Locked"
    pub date_label: String,
    pub icon: HighlightIcon,
    pub status: HighlightStatus,
}

impl Highlight {
    pub fn is_unlocked(&self) -> bool {
        self.status == HighlightStatus::Unlocked
    }
}

/// Stored state of a journey milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Locked,
    Unlocked,
    Next,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub pct: f64,
    pub label: String,
    pub status: MilestoneStatus,
}

/// Reward granted at 100% journey completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub title: String,
    pub short_description: String,
}

/// Yearly progression track, paid profiles only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidJourney {
    pub year_progress_pct: f64,
    pub milestones: Vec<Milestone>,
    #[serde(rename = "rewardAt100")]
    pub reward_at_100: Reward,
}

/// Membership state, paid profiles only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStatus {
    /// `None` encodes the "none" tier.
    #[serde(with = "current_tier")]
    pub current_tier: Option<Tier>,
    #[serde(default)]
    pub next_tiers_preview: Vec<Tier>,
    pub hint_text: String,
}

mod current_tier {
    use super::Tier;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(tier: &Option<Tier>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(tier.map(|t| t.as_str()).unwrap_or("none"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Tier>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        match raw.parse::<Tier>() {
            Ok(tier) => Ok(Some(tier)),
            Err(_) => {
                tracing::warn!(tier = %raw, "unknown membership tier, treating as none");
                Ok(None)
            }
        }
    }
}

/// Learner profile snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub initials: String,
    pub class_label: String,
    pub board_label: String,
    /// Tenure line, e.g. "Learning with Shikho for 1 yr 3 mos"
    #[serde(rename = "shikhoAgeText", default)]
    pub age_text: String,

    pub level: u32,
    pub level_progress_pct: f64,

    pub streak_days: u32,
    pub monthly_consistency_days: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_today: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_weekly_peak: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_monthly_avg: Option<f64>,
    /// Last seven days, ending with today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_effort: Option<Vec<f64>>,

    #[serde(default)]
    pub highlights: Vec<Highlight>,

    /// ISO `YYYY-MM-DD` dates with any learning activity
    #[serde(default)]
    pub daily_activity: Vec<String>,

    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_journey: Option<PaidJourney>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership: Option<MembershipStatus>,
}

impl UserProfile {
    /// The seven effort samples ending today.
    ///
    /// A missing series becomes an all-zero week. A short series is left-padded
    /// with zeros and a long one keeps its last seven entries, so the final
    /// element is always today.
    pub fn effort_week(&self) -> [f64; EFFORT_WINDOW_DAYS] {
        let mut week = [0.0; EFFORT_WINDOW_DAYS];
        let Some(samples) = self.daily_effort.as_deref() else {
            tracing::warn!(profile = %self.id, "daily effort missing, using an all-zero week");
            return week;
        };
        let tail = &samples[samples.len().saturating_sub(EFFORT_WINDOW_DAYS)..];
        let start = EFFORT_WINDOW_DAYS - tail.len();
        week[start..].copy_from_slice(tail);
        week
    }

    /// Today's effort score, the last daily sample.
    pub fn today_effort(&self) -> f64 {
        self.effort_week()[EFFORT_WINDOW_DAYS - 1]
    }

    /// Check the data model invariants.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level < 1 {
            return Err(out_of_range("level", f64::from(self.level)));
        }
        check_pct("levelProgressPct", self.level_progress_pct)?;
        if self.monthly_consistency_days > CONSISTENCY_WINDOW_DAYS {
            return Err(out_of_range(
                "monthlyConsistencyDays",
                f64::from(self.monthly_consistency_days),
            ));
        }

        if let Some(samples) = &self.daily_effort {
            if samples.len() != EFFORT_WINDOW_DAYS {
                return Err(ValidationError::EffortLength { len: samples.len() });
            }
            for &value in samples {
                check_pct("dailyEffort", value)?;
            }
        }

        let mut seen = HashSet::new();
        for date in &self.daily_activity {
            if calendar::parse_iso_key(date).is_none() {
                return Err(ValidationError::InvalidActivityDate(date.clone()));
            }
            if !seen.insert(date.as_str()) {
                return Err(ValidationError::DuplicateActivityDate(date.clone()));
            }
        }

        let paid_fields = (self.paid_journey.is_some(), self.membership.is_some());
        let consistent = if self.is_paid {
            paid_fields == (true, true)
        } else {
            paid_fields == (false, false)
        };
        if !consistent {
            return Err(ValidationError::PaidFieldsMismatch { is_paid: self.is_paid });
        }

        if let Some(journey) = &self.paid_journey {
            check_pct("yearProgressPct", journey.year_progress_pct)?;
            for pair in journey.milestones.windows(2) {
                if pair[1].pct < pair[0].pct {
                    return Err(ValidationError::MilestoneOrder {
                        previous: pair[0].pct,
                        pct: pair[1].pct,
                    });
                }
            }
            for m in &journey.milestones {
                check_pct("milestone.pct", m.pct)?;
            }
            let next = journey
                .milestones
                .iter()
                .filter(|m| m.status == MilestoneStatus::Next)
                .count();
            if next != 1 {
                return Err(ValidationError::NextMilestoneCount { count: next });
            }
        }

        Ok(())
    }
}

fn out_of_range(field: &str, value: f64) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        value,
    }
}

fn check_pct(field: &str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(field, value))
    }
}
