//! Explainer sheets, driven through a dashboard session.

use clap::Subcommand;

use identity_core::{DashboardSession, SessionAction, Sheet, SheetContent};

use super::common::{CliResult, Context};
use crate::GlobalArgs;

#[derive(Subcommand)]
pub enum SheetArg {
    /// How Effort Score works
    Effort,
    /// How Level works
    Level,
    /// Highlight sheet, optionally for one highlight
    Highlight {
        /// Highlight id to select
        #[arg(long)]
        id: Option<String>,
    },
}

pub fn run(global: &GlobalArgs, arg: SheetArg) -> CliResult {
    let ctx = Context::load(global)?;
    let action = match arg {
        SheetArg::Effort => SessionAction::OpenSheet(Sheet::Effort),
        SheetArg::Level => SessionAction::OpenSheet(Sheet::Level),
        SheetArg::Highlight { id: Some(id) } => SessionAction::SelectHighlight(id),
        SheetArg::Highlight { id: None } => SessionAction::OpenSheet(Sheet::Highlight),
    };
    let session = DashboardSession::new(ctx.profile.is_paid).apply(action);
    let content = SheetContent::for_session(&session, &ctx.profile)
        .ok_or("no sheet is open")?;

    ctx.emit(&content, |c| {
        println!("{}", c.title);
        for line in &c.body {
            println!("  {line}");
        }
        if let Some(d) = &c.highlight {
            println!("  {}  {}", d.glyph, d.title);
            println!("  {}", d.description);
            if let Some(line) = &d.earned_line {
                println!("  {line}");
            }
            if let Some(hint) = d.locked_hint {
                println!("  {hint}");
            }
        }
    })
}
