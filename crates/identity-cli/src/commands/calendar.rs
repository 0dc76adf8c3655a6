//! Week strip and month grid.

use clap::Subcommand;

use identity_core::activity::{ActivityResolver, DayState, MonthCell, MonthView, WeekView};

use super::common::{CliResult, Context};
use crate::GlobalArgs;

#[derive(Subcommand)]
pub enum CalendarView {
    /// Monday-to-Sunday strip for the reference week
    Week,
    /// Month grid with streak bands
    Month,
}

pub fn run(global: &GlobalArgs, view: CalendarView) -> CliResult {
    let ctx = Context::load(global)?;
    let resolver = ActivityResolver::for_profile(&ctx.profile, ctx.config.calendar.reference_date);
    match view {
        CalendarView::Week => {
            let week = WeekView::build(&resolver, ctx.profile.streak_days);
            ctx.emit(&week, print_week)
        }
        CalendarView::Month => {
            let month = MonthView::build(&resolver, ctx.profile.daily_activity.len());
            ctx.emit(&month, print_month)
        }
    }
}

fn glyph(active: bool, state: DayState) -> char {
    match (active, state) {
        (true, DayState::Today) => '@',
        (false, DayState::Today) => 'o',
        (true, _) => '*',
        (false, DayState::Future) => ' ',
        (false, _) => '.',
    }
}

pub fn print_week(week: &WeekView) {
    print!("{} ({})", week.title, week.subtitle);
    match &week.streak_badge {
        Some(badge) => println!("  [{badge}]"),
        None => println!(),
    }
    let labels: Vec<&str> = week.cells.iter().map(|c| c.label).collect();
    let days: Vec<String> = week.cells.iter().map(|c| format!("{:>2}", c.day)).collect();
    let marks: Vec<String> = week
        .cells
        .iter()
        .map(|c| format!(" {}", glyph(c.active, c.state)))
        .collect();
    println!("  {}", labels.iter().map(|l| format!(" {l}")).collect::<Vec<_>>().join(" "));
    println!("  {}", days.join(" "));
    println!("  {}", marks.join(" "));
    println!("{}", week.footer);
}

fn month_slot(cell: Option<&MonthCell>) -> String {
    match cell {
        None => "   ".to_string(),
        Some(c) => {
            let left = if c.left_band { '=' } else { ' ' };
            let mark = if c.active && !c.state.is_future() {
                format!("{:>2}", c.day)
            } else if c.state == DayState::Today {
                "()".to_string()
            } else {
                " .".to_string()
            };
            format!("{left}{mark}")
        }
    }
}

pub fn print_month(month: &MonthView) {
    println!("{} - {}", month.title, month.subtitle);
    println!(
        "{}",
        month
            .weekday_labels
            .iter()
            .map(|l| format!("  {l}"))
            .collect::<String>()
    );
    for row in month.rows() {
        println!("{}", row.into_iter().map(month_slot).collect::<String>());
    }
    println!("{}", month.footer);
}
