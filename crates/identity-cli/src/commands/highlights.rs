//! Highlight collection commands.

use clap::Subcommand;

use identity_core::highlights::{history, HighlightDetail, HighlightsPanel};

use super::common::{CliResult, Context};
use crate::GlobalArgs;

#[derive(Subcommand)]
pub enum HighlightsAction {
    /// Collection grid with unlock counts
    List,
    /// Detail sheet for one highlight
    Show {
        /// Highlight id
        id: String,
    },
    /// Every highlight, newest first as stored
    History,
}

pub fn run(global: &GlobalArgs, action: HighlightsAction) -> CliResult {
    let ctx = Context::load(global)?;
    match action {
        HighlightsAction::List => {
            let panel =
                HighlightsPanel::build(&ctx.profile.highlights, ctx.config.highlights.total_slots);
            ctx.emit(&panel, print_panel)
        }
        HighlightsAction::Show { id } => {
            let highlight = ctx
                .profile
                .highlights
                .iter()
                .find(|h| h.id == id)
                .ok_or_else(|| format!("no highlight with id '{id}'"))?;
            ctx.emit(&HighlightDetail::of(highlight), |d| {
                println!("{}", d.sheet_title);
                println!("  {}  {}", d.glyph, d.title);
                println!("  {}", d.description);
                if let Some(line) = &d.earned_line {
                    println!("  {line}");
                }
                if let Some(hint) = d.locked_hint {
                    println!("  {hint}");
                }
            })
        }
        HighlightsAction::History => {
            let entries = history(&ctx.profile);
            ctx.emit(&entries, |entries| {
                println!("All Highlights");
                for e in entries {
                    println!("  [{}] {}: {}", e.date_label, e.title, e.description);
                }
            })
        }
    }
}

pub fn print_panel(panel: &HighlightsPanel) {
    println!("{} ({})", panel.title, panel.summary);
    for b in &panel.badges {
        let lock = if b.locked { "locked" } else { "earned" };
        println!("  {:<18} {:<7} {}", b.title, lock, b.caption);
    }
}
