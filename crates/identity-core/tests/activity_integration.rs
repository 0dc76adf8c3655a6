//! Integration tests for activity resolution and the calendar views.

use chrono::NaiveDate;
use identity_core::activity::{day_state, ActivityResolver, DayState, MonthView, WeekView};
use identity_core::calendar::{days_in_month, iso_key, monday_grid_offset, weekday_of};
use identity_core::profile::{mock_user_free, mock_user_paid};
use proptest::prelude::*;

fn jan7() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
}

#[test]
fn test_calendar_basics() {
    assert_eq!(iso_key(2026, 0, 7), "2026-01-07");
    assert_eq!(days_in_month(2026, 0), 31);
    assert_eq!(days_in_month(2024, 1), 29);
    assert_eq!(days_in_month(2026, 1), 28);
    // Jan 7 2026 is a Wednesday
    assert_eq!(weekday_of(2026, 0, 7), 3);
    assert_eq!(monday_grid_offset(weekday_of(2026, 0, 7)), 2);
}

#[test]
fn test_active_set_membership() {
    let resolver = ActivityResolver::new(["2026-01-05", "2026-01-06", "2026-01-07"], jan7());
    for day in [5, 6, 7] {
        assert!(resolver.is_active(day, 0, 2026), "day {day} should be active");
    }
    assert!(!resolver.is_active(8, 0, 2026));
    assert!(!resolver.is_active(5, 1, 2026));
    assert_eq!(resolver.active_days_in_month(), 3);
}

#[test]
fn test_day_states() {
    assert_eq!(day_state(6, 7), DayState::Past);
    assert_eq!(day_state(7, 7), DayState::Today);
    assert_eq!(day_state(8, 7), DayState::Future);
}

#[test]
fn test_adjacency_stops_at_month_edges() {
    let resolver = ActivityResolver::new(
        ["2025-12-31", "2026-01-01", "2026-01-31", "2026-02-01"],
        jan7(),
    );
    let first = resolver.streak_adjacency(1);
    assert!(!first.prev_active);
    let last = resolver.streak_adjacency(31);
    assert!(!last.next_active);
}

#[test]
fn test_week_and_month_for_free_profile() {
    let user = mock_user_free();
    let week = WeekView::for_profile(&user, jan7());
    let active: Vec<u32> = week.cells.iter().filter(|c| c.active).map(|c| c.day).collect();
    assert_eq!(active, vec![5, 7]);
    assert_eq!(week.streak_badge.as_deref(), Some("3 day streak"));

    let month = MonthView::for_profile(&user, jan7());
    assert_eq!(month.footer, "You've been active on 3 days this month");
    assert!(month.cell(2).is_some_and(|c| c.active && !c.left_band && !c.right_band));
}

#[test]
fn test_month_grid_places_wednesday() {
    let month = MonthView::for_profile(&mock_user_paid(), jan7());
    let rows = month.rows();
    let jan7_row = rows
        .iter()
        .find(|row| row.iter().any(|c| c.is_some_and(|c| c.day == 7)))
        .unwrap();
    assert_eq!(jan7_row[2].map(|c| c.day), Some(7));
    assert_eq!(month.weekday_labels[2], "W");
}

#[test]
fn test_views_are_idempotent() {
    let user = mock_user_paid();
    assert_eq!(WeekView::for_profile(&user, jan7()), WeekView::for_profile(&user, jan7()));
    assert_eq!(MonthView::for_profile(&user, jan7()), MonthView::for_profile(&user, jan7()));
}

proptest! {
    #[test]
    fn prop_month_has_every_day(year in 1990i32..2100, month0 in 0u32..12) {
        let reference = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        let month = MonthView::build(&ActivityResolver::new(Vec::<String>::new(), reference), 0);
        prop_assert_eq!(month.cells.len() as u32, days_in_month(year, month0));
        prop_assert!(month.leading_blanks < 7);
        prop_assert!(month.rows().iter().all(|r| r.len() == 7));
    }

    #[test]
    fn prop_week_is_monday_to_sunday(offset in 0u64..3650) {
        let reference = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(offset))
            .unwrap();
        let week = WeekView::build(&ActivityResolver::new(Vec::<String>::new(), reference), 0);
        prop_assert_eq!(week.cells.len(), 7);
        prop_assert_eq!(week.cells[0].date.format("%a").to_string(), "Mon");
        prop_assert_eq!(week.cells.iter().filter(|c| c.is_today()).count(), 1);
    }
}
