//! Journey and membership commands.

use identity_core::progression::{
    carousel_index, JourneyCard, MembershipRules, MembershipView, MilestoneIcon,
};

use super::common::{bar, CliResult, Context};
use crate::GlobalArgs;

pub fn run_journey(global: &GlobalArgs) -> CliResult {
    let ctx = Context::load(global)?;
    let card = JourneyCard::for_profile(&ctx.profile);
    ctx.emit(&card, |card| match card {
        Some(card) => print_journey(card),
        None => println!("Journey is available to paid members."),
    })
}

pub fn print_journey(card: &JourneyCard) {
    println!("Your Journey  {}  [{}]", card.progress_display, card.badge);
    println!("  {}", bar(card.year_progress_pct, 30));
    for row in &card.rows {
        let icon = match row.icon {
            MilestoneIcon::Check => "[x]",
            MilestoneIcon::Dot => "[>]",
            MilestoneIcon::Lock => "[ ]",
        };
        let tag = if row.is_next_goal { "  Next Goal" } else { "" };
        println!("  {icon} {}{tag}", row.label);
    }
    println!("  Reward: {} - {}", card.reward.title, card.reward.short_description);
}

pub fn run_membership(global: &GlobalArgs, index: usize, scroll: Option<f64>) -> CliResult {
    let ctx = Context::load(global)?;
    let index = scroll.map(carousel_index).unwrap_or(index);
    let view = MembershipView::for_profile(
        &ctx.profile,
        MembershipRules::from(&ctx.config.membership),
        index,
    );
    ctx.emit(&view, |view| match view {
        Some(view) => print_membership(view),
        None => println!("No membership on this profile."),
    })
}

pub fn print_membership(view: &MembershipView) {
    println!("Membership");
    for card in &view.cards {
        let state = if card.locked { "locked" } else { "unlocked" };
        let badge = card.badge.map(|b| format!(" ({b})")).unwrap_or_default();
        println!("  {:<7} {state}{badge}", card.name);
        if let Some(hint) = card.locked_hint {
            println!("          {hint}");
        }
    }
    println!("{}", view.benefits.title);
    for item in &view.benefits.items {
        println!("  - {}", item.text);
    }
    println!("{}", view.hint_text);
}
