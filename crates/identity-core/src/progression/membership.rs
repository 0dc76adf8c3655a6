//! Membership tiers and the tier carousel.
//!
//! A tier counts as unlocked when it is the entry tier or the member's exact
//! current tier. Tiers between the two stay locked: a Legend member sees
//! Elite as locked.

use serde::Serialize;

use crate::profile::{Tier, UserProfile};
use crate::storage::MembershipConfig;

/// Tier every paid member starts on.
pub const ENTRY_TIER: Tier = Tier::Honor;

/// Approximate card width plus gap in the carousel, in pixels.
pub const CAROUSEL_CARD_WIDTH: f64 = 280.0;

pub fn is_tier_unlocked(tier: Tier, current: Option<Tier>) -> bool {
    MembershipRules::default().is_unlocked(tier, current)
}

pub fn is_current_tier(tier: Tier, current: Option<Tier>) -> bool {
    current == Some(tier)
}

/// String form of [`is_tier_unlocked`]. An unrecognised tier id is locked;
/// an unrecognised current tier reads as "none".
pub fn is_tier_id_unlocked(tier_id: &str, current_id: &str) -> bool {
    match tier_id.parse::<Tier>() {
        Ok(tier) => is_tier_unlocked(tier, current_id.parse().ok()),
        Err(_) => {
            tracing::warn!(tier = tier_id, "unknown tier id, rendering as locked");
            false
        }
    }
}

/// Unlock rule with a configurable entry tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipRules {
    pub entry_tier: Tier,
}

impl Default for MembershipRules {
    fn default() -> Self {
        Self {
            entry_tier: ENTRY_TIER,
        }
    }
}

impl From<&MembershipConfig> for MembershipRules {
    fn from(config: &MembershipConfig) -> Self {
        Self {
            entry_tier: config.entry_tier,
        }
    }
}

impl MembershipRules {
    pub fn is_unlocked(&self, tier: Tier, current: Option<Tier>) -> bool {
        tier == self.entry_tier || is_current_tier(tier, current)
    }
}

/// Static presentation data for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub icon: &'static str,
    pub benefits: [&'static str; 3],
}

impl TierInfo {
    pub fn of(tier: Tier) -> Self {
        match tier {
            Tier::Honor => Self {
                tier,
                icon: "star",
                benefits: [
                    "Renewal discounts (5%)",
                    "Early access to features",
                    "Priority learning benefits",
                ],
            },
            Tier::Elite => Self {
                tier,
                icon: "crown",
                benefits: [
                    "Renewal discounts (15%)",
                    "Earlier access to features",
                    "Exclusive mock tests",
                ],
            },
            Tier::Legend => Self {
                tier,
                icon: "crown",
                benefits: [
                    "Renewal discounts (25%)",
                    "First access to features",
                    "Exclusive exams & national mocks",
                ],
            },
        }
    }

    /// Caption under a locked card.
    pub fn locked_hint(&self) -> &'static str {
        match self.tier {
            Tier::Elite => "Unlock with continued membership",
            _ => "Unlock after long-term commitment",
        }
    }
}

/// One card in the carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCard {
    pub tier: Tier,
    pub name: &'static str,
    pub icon: &'static str,
    pub locked: bool,
    pub current: bool,
    /// "Current Tier" badge
    pub badge: Option<&'static str>,
    pub locked_hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitItem {
    pub text: &'static str,
    pub locked: bool,
}

/// Benefits of the card currently centred in the carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitsPanel {
    /// e.g. "Honor Benefits"
    pub title: String,
    pub locked: bool,
    pub items: Vec<BenefitItem>,
}

/// The membership section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipView {
    pub current_tier: Option<Tier>,
    pub cards: Vec<TierCard>,
    pub active_index: usize,
    pub benefits: BenefitsPanel,
    pub hint_text: String,
}

/// Carousel index for a horizontal scroll offset, clamped to the tier range.
pub fn carousel_index(scroll_left: f64) -> usize {
    if !scroll_left.is_finite() || scroll_left <= 0.0 {
        return 0;
    }
    let max = Tier::ALL.len() - 1;
    ((scroll_left / CAROUSEL_CARD_WIDTH).round() as usize).min(max)
}

impl MembershipView {
    /// `None` when the profile has no membership.
    pub fn for_profile(
        profile: &UserProfile,
        rules: MembershipRules,
        active_index: usize,
    ) -> Option<Self> {
        let status = profile.membership.as_ref()?;
        let current = status.current_tier;

        let cards: Vec<TierCard> = Tier::ALL
            .iter()
            .map(|&tier| {
                let info = TierInfo::of(tier);
                let locked = !rules.is_unlocked(tier, current);
                let is_current = is_current_tier(tier, current);
                TierCard {
                    tier,
                    name: tier.as_str(),
                    icon: info.icon,
                    locked,
                    current: is_current,
                    badge: is_current.then_some("Current Tier"),
                    locked_hint: locked.then(|| info.locked_hint()),
                }
            })
            .collect();

        let active_index = active_index.min(cards.len() - 1);
        let active = TierInfo::of(Tier::ALL[active_index]);
        let active_locked = cards[active_index].locked;
        let benefits = BenefitsPanel {
            title: format!("{} Benefits", active.tier),
            locked: active_locked,
            items: active
                .benefits
                .iter()
                .map(|&text| BenefitItem {
                    text,
                    locked: active_locked,
                })
                .collect(),
        };

        Some(Self {
            current_tier: current,
            cards,
            active_index,
            benefits,
            hint_text: status.hint_text.clone(),
        })
    }

    pub fn unlocked_tiers(&self) -> Vec<Tier> {
        self.cards.iter().filter(|c| !c.locked).map(|c| c.tier).collect()
    }
}
