//! Built-in sample profiles.
//!
//! The dashboard runs against these two snapshots until a profile service
//! supplies real data. Both are anchored to the reference date 2026-01-07.

use crate::error::ProfileError;

use super::types::{
    Highlight, HighlightIcon, HighlightStatus, MembershipStatus, Milestone, MilestoneStatus,
    PaidJourney, Reward, Tier, UserProfile,
};

fn highlight(
    id: &str,
    title: &str,
    description: &str,
    date_label: &str,
    icon: HighlightIcon,
    status: HighlightStatus,
) -> Highlight {
    Highlight {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        date_label: date_label.into(),
        icon,
        status,
    }
}

/// The six highlights shared by both sample profiles: three earned, three pending.
pub fn common_highlights() -> Vec<Highlight> {
    use HighlightIcon::*;
    use HighlightStatus::*;
    vec![
        highlight(
            "1",
            "Consistency King",
            "7-day learning streak achieved",
            "Last week",
            Crown,
            Unlocked,
        ),
        highlight(
            "2",
            "Fast Improver",
            "Your effort jumped quickly",
            "Today",
            TrendingUp,
            Unlocked,
        ),
        highlight(
            "3",
            "Start Strong",
            "Completed first lesson",
            "2 days ago",
            Star,
            Unlocked,
        ),
        highlight(
            "4",
            "Subject Master",
            "Stay consistent in one subject",
            "Locked",
            Trophy,
            Locked,
        ),
        highlight(
            "5",
            "Deep Focus",
            "Longer learning sessions unlock this",
            "Locked",
            Star,
            Locked,
        ),
        highlight(
            "6",
            "Quiz Whiz",
            "Get 100% on 3 quizzes",
            "Locked",
            Star,
            Locked,
        ),
    ]
}

fn milestone(pct: f64, label: &str, status: MilestoneStatus) -> Milestone {
    Milestone {
        pct,
        label: label.into(),
        status,
    }
}

/// Paid learner on the Honor tier, 45% through the year.
pub fn mock_user_paid() -> UserProfile {
    let daily_activity = [
        "2026-01-01",
        "2026-01-02",
        "2026-01-03",
        "2026-01-05",
        "2026-01-06",
        "2026-01-07",
        "2026-01-09",
        "2025-12-30",
        "2025-12-31",
    ];

    UserProfile {
        id: "u1".into(),
        name: "Rahim Ahmed".into(),
        photo_url: None,
        initials: "RA".into(),
        class_label: "Class 10".into(),
        board_label: "BV Board".into(),
        age_text: "Learning with Shikho for 1 yr 3 mos".into(),
        level: 4,
        level_progress_pct: 65.0,
        streak_days: 12,
        monthly_consistency_days: 24,
        effort_today: Some(85.0),
        effort_weekly_peak: Some(92.0),
        effort_monthly_avg: Some(78.0),
        daily_effort: Some(vec![45.0, 60.0, 75.0, 40.0, 92.0, 65.0, 85.0]),
        highlights: common_highlights(),
        daily_activity: daily_activity.iter().map(|d| d.to_string()).collect(),
        is_paid: true,
        paid_journey: Some(PaidJourney {
            year_progress_pct: 45.0,
            milestones: vec![
                milestone(25.0, "Q1 (25%)", MilestoneStatus::Unlocked),
                milestone(50.0, "Q2 (50%)", MilestoneStatus::Next),
                milestone(75.0, "Q3 (75%)", MilestoneStatus::Locked),
                milestone(100.0, "Q4 (100%)", MilestoneStatus::Locked),
            ],
            reward_at_100: Reward {
                title: "Exclusive Shikho Swag".into(),
                short_description: "Get a limited edition t-shirt!".into(),
            },
        }),
        membership: Some(MembershipStatus {
            current_tier: Some(Tier::Honor),
            next_tiers_preview: vec![Tier::Elite, Tier::Legend],
            hint_text: "You are on the Honor tier. Keep going to reach Elite!".into(),
        }),
    }
}

/// Free learner with no activity yet today.
pub fn mock_user_free() -> UserProfile {
    UserProfile {
        id: "u2".into(),
        name: "Karim Islam".into(),
        initials: "KI".into(),
        level: 2,
        level_progress_pct: 30.0,
        streak_days: 3,
        monthly_consistency_days: 10,
        daily_activity: vec!["2026-01-02".into(), "2026-01-05".into(), "2026-01-07".into()],
        effort_today: Some(0.0),
        daily_effort: Some(vec![10.0, 20.0, 0.0, 15.0, 30.0, 0.0, 0.0]),
        is_paid: false,
        paid_journey: None,
        membership: None,
        ..mock_user_paid()
    }
}

/// Look up a sample profile by name (`paid` or `free`).
///
/// # Errors
///
/// Returns [`ProfileError::UnknownFixture`] for any other name.
pub fn fixture(name: &str) -> Result<UserProfile, ProfileError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "paid" => Ok(mock_user_paid()),
        "free" => Ok(mock_user_free()),
        other => Err(ProfileError::UnknownFixture(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_lookup() {
        assert_eq!(fixture("paid").unwrap().id, "u1");
        assert_eq!(fixture(" FREE ").unwrap().id, "u2");
        assert!(matches!(fixture("gold"), Err(ProfileError::UnknownFixture(_))));
    }

    #[test]
    fn test_free_profile_inherits_identity_copy() {
        let free = mock_user_free();
        assert_eq!(free.class_label, "Class 10");
        assert_eq!(free.highlights.len(), 6);
        assert!(free.paid_journey.is_none());
    }
}
