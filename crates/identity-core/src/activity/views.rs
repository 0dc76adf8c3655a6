//! Week strip and month grid models for the habit rhythm card.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use super::resolver::{ActivityResolver, DayState, StreakAdjacency};
use crate::calendar::{
    monday_grid_offset, monday_of_week, month_heading, weekday_of, MONDAY_FIRST_LABELS,
};
use crate::profile::UserProfile;

/// A day in the Monday-to-Sunday strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekCell {
    pub label: &'static str,
    pub date: NaiveDate,
    pub day: u32,
    pub active: bool,
    pub state: DayState,
}

impl WeekCell {
    pub fn is_today(&self) -> bool {
        self.state == DayState::Today
    }
}

/// The "Weekly Activity" view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cells: Vec<WeekCell>,
    pub footer: &'static str,
    /// e.g. "12 day streak", only for streaks longer than one day
    pub streak_badge: Option<String>,
}

impl WeekView {
    /// Build the strip for the week containing the reference date.
    pub fn build(resolver: &ActivityResolver, streak_days: u32) -> Self {
        let reference = resolver.reference();
        let monday = monday_of_week(reference);
        let cells = MONDAY_FIRST_LABELS
            .iter()
            .enumerate()
            .filter_map(|(offset, &label)| {
                let date = monday.checked_add_days(Days::new(offset as u64))?;
                Some(WeekCell {
                    label,
                    date,
                    day: date.day(),
                    active: resolver.is_active_on(date),
                    state: DayState::of(date, reference),
                })
            })
            .collect();

        Self {
            title: "Weekly Activity",
            subtitle: "This week so far",
            cells,
            footer: "You're building momentum!",
            streak_badge: (streak_days > 1).then(|| format!("{streak_days} day streak")),
        }
    }

    pub fn for_profile(profile: &UserProfile, reference: NaiveDate) -> Self {
        Self::build(
            &ActivityResolver::for_profile(profile, reference),
            profile.streak_days,
        )
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| c.active).count()
    }
}

/// A day in the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCell {
    pub day: u32,
    pub active: bool,
    pub state: DayState,
    pub adjacency: StreakAdjacency,
    /// Band joining this dot to the previous active day
    pub left_band: bool,
    /// Band joining this dot to the next active day
    pub right_band: bool,
}

/// The "Monthly Consistency" view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    pub title: &'static str,
    /// e.g. "January 2026"
    pub subtitle: String,
    pub weekday_labels: [&'static str; 7],
    /// Empty cells before the 1st in the Monday-first grid
    pub leading_blanks: u32,
    pub cells: Vec<MonthCell>,
    pub footer: String,
}

impl MonthView {
    /// Build the grid for the reference month.
    ///
    /// `active_day_count` feeds the footer line; the dashboard passes the
    /// length of the profile's whole activity list.
    pub fn build(resolver: &ActivityResolver, active_day_count: usize) -> Self {
        let (year, month0) = (resolver.year(), resolver.month0());
        let cells = (1..=resolver.days_in_month())
            .map(|day| {
                let active = resolver.is_active_day(day);
                let state = resolver.day_state(day);
                let adjacency = resolver.streak_adjacency(day);
                let banded = active && !state.is_future();
                MonthCell {
                    day,
                    active,
                    state,
                    adjacency,
                    left_band: banded && adjacency.prev_active,
                    right_band: banded && adjacency.next_active,
                }
            })
            .collect();

        Self {
            title: "Monthly Consistency",
            subtitle: month_heading(year, month0),
            weekday_labels: MONDAY_FIRST_LABELS,
            leading_blanks: monday_grid_offset(weekday_of(year, month0, 1)),
            cells,
            footer: format!("You've been active on {active_day_count} days this month"),
        }
    }

    pub fn for_profile(profile: &UserProfile, reference: NaiveDate) -> Self {
        Self::build(
            &ActivityResolver::for_profile(profile, reference),
            profile.daily_activity.len(),
        )
    }

    pub fn cell(&self, day: u32) -> Option<&MonthCell> {
        self.cells.get(day.checked_sub(1)? as usize)
    }

    /// Grid column (0 = Monday) where `day` is drawn.
    pub fn column_of(&self, day: u32) -> u32 {
        (self.leading_blanks + day.saturating_sub(1)) % 7
    }

    /// Rows of seven slots, `None` for padding.
    pub fn rows(&self) -> Vec<Vec<Option<&MonthCell>>> {
        let mut slots: Vec<Option<&MonthCell>> = (0..self.leading_blanks).map(|_| None).collect();
        slots.extend(self.cells.iter().map(Some));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }
        slots.chunks(7).map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{mock_user_free, mock_user_paid};

    fn jan7() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
    }

    #[test]
    fn test_week_view_spans_monday_to_sunday() {
        let week = WeekView::for_profile(&mock_user_paid(), jan7());
        let days: Vec<u32> = week.cells.iter().map(|c| c.day).collect();
        assert_eq!(days, vec![5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(week.cells[0].label, "M");
        assert_eq!(week.cells[6].label, "S");
    }

    #[test]
    fn test_week_view_states() {
        let week = WeekView::for_profile(&mock_user_paid(), jan7());
        let active: Vec<bool> = week.cells.iter().map(|c| c.active).collect();
        assert_eq!(active, vec![true, true, true, false, true, false, false]);
        assert!(week.cells[2].is_today());
        assert_eq!(week.cells[1].state, DayState::Past);
        assert_eq!(week.cells[3].state, DayState::Future);
        assert_eq!(week.active_count(), 4);
    }

    #[test]
    fn test_streak_badge_needs_more_than_one_day() {
        let week = WeekView::for_profile(&mock_user_paid(), jan7());
        assert_eq!(week.streak_badge.as_deref(), Some("12 day streak"));

        let mut user = mock_user_free();
        user.streak_days = 1;
        assert!(WeekView::for_profile(&user, jan7()).streak_badge.is_none());
    }

    #[test]
    fn test_week_view_across_month_boundary() {
        let reference = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let week = WeekView::for_profile(&mock_user_paid(), reference);
        assert_eq!(week.cells[0].date, NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
        // Dec 30 and 31 are active in the paid fixture
        assert!(week.cells[1].active && week.cells[2].active);
        assert!(week.cells[3].is_today());
    }

    #[test]
    fn test_month_view_layout() {
        let month = MonthView::for_profile(&mock_user_paid(), jan7());
        assert_eq!(month.subtitle, "January 2026");
        assert_eq!(month.cells.len(), 31);
        assert_eq!(month.leading_blanks, 3);
        // Jan 7 2026 is a Wednesday
        assert_eq!(month.column_of(7), 2);
        assert_eq!(month.column_of(5), 0);
    }

    #[test]
    fn test_month_view_rows() {
        let month = MonthView::for_profile(&mock_user_paid(), jan7());
        let rows = month.rows();
        assert_eq!(rows.len(), 5);
        assert!(rows[0][..3].iter().all(Option::is_none));
        assert_eq!(rows[0][3].map(|c| c.day), Some(1));
        assert!(rows.iter().all(|r| r.len() == 7));
    }

    #[test]
    fn test_month_view_bands() {
        let month = MonthView::for_profile(&mock_user_paid(), jan7());
        let day = |d| month.cell(d).unwrap();

        assert!(!day(1).left_band && day(1).right_band);
        assert!(day(2).left_band && day(2).right_band);
        assert!(day(3).left_band && !day(3).right_band);
        assert!(!day(4).active);
        assert!(day(6).left_band && day(6).right_band);
        // Jan 9 is active but in the future: no bands
        assert!(day(9).active && day(9).state.is_future());
        assert!(!day(9).left_band && !day(9).right_band);
    }

    #[test]
    fn test_month_footer_counts_every_activity_entry() {
        let month = MonthView::for_profile(&mock_user_paid(), jan7());
        assert_eq!(month.footer, "You've been active on 9 days this month");
        assert!(month.cell(0).is_none());
    }
}
