//! Effort score and breakdown commands.

use identity_core::effort::{EffortBreakdown, EffortChart, IdLengthBreakdown};

use super::common::{bar, rule, CliResult, Context};
use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> CliResult {
    let ctx = Context::load(global)?;
    let chart = EffortChart::for_profile(&ctx.profile, &ctx.config.effort);
    ctx.emit(&chart, print_chart)
}

pub fn print_chart(chart: &EffortChart) {
    println!("Effort Score: {}", chart.today_display);
    if chart.zero_state {
        println!("No effort yet this week. Start Learning Now");
    } else {
        println!("{} - {}", chart.zone_label, chart.zone_copy);
    }
    println!();
    for b in &chart.bars {
        let marker = if b.is_today { " <- today" } else { "" };
        println!("  {} {} {:>3}{marker}", b.day_label, bar(b.height_pct, 20), b.value.round());
    }
    println!("  avg {} (ideal band {}%)", chart.average_display, chart.ideal_zone_pct);
}

pub fn run_breakdown(global: &GlobalArgs) -> CliResult {
    let ctx = Context::load(global)?;
    let breakdown = EffortBreakdown::build(&ctx.profile, &IdLengthBreakdown);
    ctx.emit(&breakdown, |b| {
        println!("Today's Effort: {}", b.today_display);
        println!("{}", rule());
        for row in &b.rows {
            println!(
                "  {:<16} {} {}",
                row.feature.label,
                bar(row.bar_width_pct, 12),
                row.effort.label
            );
        }
    })
}
