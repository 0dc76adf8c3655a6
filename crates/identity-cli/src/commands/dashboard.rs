//! Full dashboard rendering.

use identity_core::dashboard::Avatar;
use identity_core::DashboardView;

use super::calendar::{print_month, print_week};
use super::common::{bar, rule, CliResult, Context};
use super::effort::print_chart;
use super::highlights::print_panel;
use super::progression::{print_journey, print_membership};
use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> CliResult {
    let ctx = Context::load(global)?;
    let view = DashboardView::build(&ctx.profile, &ctx.config);
    ctx.emit(&view, print_dashboard)
}

fn print_dashboard(view: &DashboardView) {
    let header = &view.header;
    let avatar = match &header.avatar {
        Avatar::Photo(url) => url.clone(),
        Avatar::Initials(initials) => format!("({initials})"),
    };
    println!("{avatar} {}", header.name);
    println!("{} | {}", header.class_label, header.board_label);
    if let Some(age) = &header.age_text {
        println!("{age}");
    }
    println!("{}  {}", header.level_label, header.level_progress_label);
    println!("{}", bar(header.level_progress_pct, 30));
    println!("[{}] [{}]", view.chips.streak, view.chips.consistency);

    println!("{}", rule());
    print_week(&view.week);
    println!("{}", rule());
    print_month(&view.month);
    println!("{}", rule());
    print_chart(&view.effort);
    println!("{}", rule());
    print_panel(&view.highlights);
    if let Some(journey) = &view.journey {
        println!("{}", rule());
        print_journey(journey);
    }
    if let Some(membership) = &view.membership {
        println!("{}", rule());
        print_membership(membership);
    }

    println!("{}", rule());
    println!("> {}  [Start Now]", view.prompt);
    println!();
    println!("How it works");
    for link in &view.transparency {
        println!("  ? {}", link.label);
    }
}
