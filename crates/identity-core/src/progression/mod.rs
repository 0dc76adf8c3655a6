//! Journey milestones and membership tiers.

mod journey;
mod membership;

pub use journey::{milestone_state, next_milestone, JourneyCard, MilestoneIcon, MilestoneRow};
pub use membership::{
    carousel_index, is_current_tier, is_tier_id_unlocked, is_tier_unlocked, BenefitItem,
    BenefitsPanel, MembershipRules, MembershipView, TierCard, TierInfo, CAROUSEL_CARD_WIDTH,
    ENTRY_TIER,
};
