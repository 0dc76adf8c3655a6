//! Integration tests for highlights, journey milestones and membership tiers.

use identity_core::highlights::{history, unlocked_count, HighlightsPanel};
use identity_core::profile::{
    common_highlights, mock_user_free, mock_user_paid, MilestoneStatus, Tier,
};
use identity_core::progression::{
    is_current_tier, is_tier_id_unlocked, is_tier_unlocked, JourneyCard, MembershipRules,
    MembershipView,
};

#[test]
fn test_tier_unlock_table() {
    assert!(!is_tier_id_unlocked("Elite", "Honor"));
    assert!(is_tier_id_unlocked("Honor", "Elite"));
    assert!(is_tier_id_unlocked("Elite", "Elite"));

    // every tier paired with every current tier
    for tier in Tier::ALL {
        for current in Tier::ALL {
            let expected = tier == Tier::Honor || tier == current;
            assert_eq!(is_tier_unlocked(tier, Some(current)), expected);
            assert_eq!(is_current_tier(tier, Some(current)), tier == current);
        }
    }
}

#[test]
fn test_legend_member_sees_elite_locked() {
    let mut user = mock_user_paid();
    if let Some(m) = user.membership.as_mut() {
        m.current_tier = Some(Tier::Legend);
    }
    let view = MembershipView::for_profile(&user, MembershipRules::default(), 0).unwrap();
    assert_eq!(view.unlocked_tiers(), vec![Tier::Honor, Tier::Legend]);
    assert!(view.cards[1].locked);
    assert_eq!(view.cards[2].badge, Some("Current Tier"));
}

#[test]
fn test_unlocked_count_ignores_slot_count() {
    let highlights = common_highlights();
    assert_eq!(highlights.len(), 6);
    assert_eq!(unlocked_count(&highlights), 3);
    assert_eq!(HighlightsPanel::build(&highlights, 12).summary, "3 / 12 unlocked");
}

#[test]
fn test_history_for_free_profile() {
    let entries = history(&mock_user_free());
    assert_eq!(entries[0].title, "Consistency King");
}

#[test]
fn test_journey_statuses_come_from_profile() {
    let card = JourneyCard::for_profile(&mock_user_paid()).unwrap();
    let statuses: Vec<MilestoneStatus> = card.rows.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            MilestoneStatus::Unlocked,
            MilestoneStatus::Next,
            MilestoneStatus::Locked,
            MilestoneStatus::Locked,
        ]
    );
    assert_eq!(card.reward.short_description, "Get a limited edition t-shirt!");
}

#[test]
fn test_progression_is_idempotent() {
    let user = mock_user_paid();
    assert_eq!(JourneyCard::for_profile(&user), JourneyCard::for_profile(&user));
    assert_eq!(
        MembershipView::for_profile(&user, MembershipRules::default(), 1),
        MembershipView::for_profile(&user, MembershipRules::default(), 1)
    );
}
