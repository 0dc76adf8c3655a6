//! Yearly journey card.
//!
//! Milestone state is read from the stored status, never recomputed from the
//! year progress; profile validation keeps exactly one milestone marked next.

use serde::Serialize;

use crate::profile::{Milestone, MilestoneStatus, PaidJourney, Reward, UserProfile};

/// Marker drawn beside a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MilestoneIcon {
    Check,
    Dot,
    Lock,
}

pub fn milestone_state(milestone: &Milestone) -> MilestoneStatus {
    milestone.status
}

/// The milestone marked as the next goal.
pub fn next_milestone(journey: &PaidJourney) -> Option<&Milestone> {
    journey
        .milestones
        .iter()
        .find(|m| m.status == MilestoneStatus::Next)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneRow {
    pub pct: f64,
    pub label: String,
    pub status: MilestoneStatus,
    pub icon: MilestoneIcon,
    /// Shows the "Next Goal" tag and highlight
    pub is_next_goal: bool,
    /// Greyed-out label for locked milestones
    pub muted: bool,
}

impl MilestoneRow {
    fn from_milestone(m: &Milestone) -> Self {
        let status = milestone_state(m);
        let icon = match status {
            MilestoneStatus::Unlocked => MilestoneIcon::Check,
            MilestoneStatus::Next => MilestoneIcon::Dot,
            MilestoneStatus::Locked => MilestoneIcon::Lock,
        };
        Self {
            pct: m.pct,
            label: m.label.clone(),
            status,
            icon,
            is_next_goal: status == MilestoneStatus::Next,
            muted: status == MilestoneStatus::Locked,
        }
    }
}

/// The "Your Journey" card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyCard {
    pub year_progress_pct: f64,
    /// e.g. "45%"
    pub progress_display: String,
    pub badge: &'static str,
    pub rows: Vec<MilestoneRow>,
    pub reward: Reward,
}

impl JourneyCard {
    /// `None` for free profiles or paid ones without a journey.
    pub fn for_profile(profile: &UserProfile) -> Option<Self> {
        if !profile.is_paid {
            return None;
        }
        let journey = profile.paid_journey.as_ref()?;
        let pct = journey.year_progress_pct.clamp(0.0, 100.0);
        Some(Self {
            year_progress_pct: pct,
            progress_display: format!("{pct}%"),
            badge: "On Track",
            rows: journey.milestones.iter().map(MilestoneRow::from_milestone).collect(),
            reward: journey.reward_at_100.clone(),
        })
    }

    pub fn next_goal(&self) -> Option<&MilestoneRow> {
        self.rows.iter().find(|r| r.is_next_goal)
    }

    pub fn unlocked_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status == MilestoneStatus::Unlocked)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{mock_user_free, mock_user_paid};

    #[test]
    fn test_journey_card_for_paid_profile() {
        let card = JourneyCard::for_profile(&mock_user_paid()).unwrap();
        assert_eq!(card.progress_display, "45%");
        assert_eq!(card.badge, "On Track");
        assert_eq!(card.rows.len(), 4);
        assert_eq!(card.rows[0].icon, MilestoneIcon::Check);
        assert_eq!(card.rows[1].icon, MilestoneIcon::Dot);
        assert!(card.rows[2].muted && card.rows[3].muted);
        assert_eq!(card.next_goal().unwrap().label, "Q2 (50%)");
        assert_eq!(card.unlocked_count(), 1);
        assert_eq!(card.reward.title, "Exclusive Shikho Swag");
    }

    #[test]
    fn test_journey_hidden_for_free_profile() {
        assert!(JourneyCard::for_profile(&mock_user_free()).is_none());
    }

    #[test]
    fn test_stored_status_wins_over_progress() {
        let mut user = mock_user_paid();
        if let Some(j) = user.paid_journey.as_mut() {
            // progress past Q3 without updating statuses
            j.year_progress_pct = 80.0;
        }
        let card = JourneyCard::for_profile(&user).unwrap();
        assert_eq!(card.rows[2].status, MilestoneStatus::Locked);
        assert_eq!(card.progress_display, "80%");
    }

    #[test]
    fn test_next_milestone() {
        let user = mock_user_paid();
        let journey = user.paid_journey.as_ref().unwrap();
        assert_eq!(next_milestone(journey).map(|m| m.pct), Some(50.0));
    }
}
