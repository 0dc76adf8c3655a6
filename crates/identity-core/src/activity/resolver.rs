//! Active-day lookup and per-day state relative to a reference "today".

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{days_in_month, iso_key, iso_key_of};
use crate::profile::UserProfile;

/// Where a day sits relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayState {
    Past,
    Today,
    Future,
}

impl DayState {
    /// Compare full dates.
    pub fn of(date: NaiveDate, reference: NaiveDate) -> Self {
        match date.cmp(&reference) {
            std::cmp::Ordering::Less => DayState::Past,
            std::cmp::Ordering::Equal => DayState::Today,
            std::cmp::Ordering::Greater => DayState::Future,
        }
    }

    pub fn is_future(&self) -> bool {
        *self == DayState::Future
    }
}

/// State of a day-of-month against the reference day-of-month.
///
/// Only meaningful inside the reference month.
pub fn day_state(day: u32, reference_day: u32) -> DayState {
    match day.cmp(&reference_day) {
        std::cmp::Ordering::Less => DayState::Past,
        std::cmp::Ordering::Equal => DayState::Today,
        std::cmp::Ordering::Greater => DayState::Future,
    }
}

/// Whether the neighbouring days are active, for drawing streak bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakAdjacency {
    pub prev_active: bool,
    pub next_active: bool,
}

/// Resolves activity for the month containing the reference date.
#[derive(Debug, Clone)]
pub struct ActivityResolver {
    active: HashSet<String>,
    reference: NaiveDate,
}

impl ActivityResolver {
    pub fn new<I, S>(active_dates: I, reference: NaiveDate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: active_dates.into_iter().map(Into::into).collect(),
            reference,
        }
    }

    pub fn for_profile(profile: &UserProfile, reference: NaiveDate) -> Self {
        Self::new(profile.daily_activity.iter().cloned(), reference)
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Year of the reference month.
    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    /// Zero-based reference month.
    pub fn month0(&self) -> u32 {
        self.reference.month0()
    }

    /// Days in the reference month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month0())
    }

    /// Membership test by ISO key; `month0` is zero-based.
    pub fn is_active(&self, day: u32, month0: u32, year: i32) -> bool {
        self.active.contains(&iso_key(year, month0, day))
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.active.contains(&iso_key_of(date))
    }

    /// Active check for a day of the reference month.
    pub fn is_active_day(&self, day: u32) -> bool {
        self.is_active(day, self.month0(), self.year())
    }

    /// State of a day of the reference month.
    pub fn day_state(&self, day: u32) -> DayState {
        day_state(day, self.reference.day())
    }

    /// Neighbour activity within the reference month only: day 1 never looks
    /// back and the last day never looks ahead.
    pub fn streak_adjacency(&self, day: u32) -> StreakAdjacency {
        StreakAdjacency {
            prev_active: day > 1 && self.is_active_day(day - 1),
            next_active: day < self.days_in_month() && self.is_active_day(day + 1),
        }
    }

    /// Number of active dates inside the reference month.
    pub fn active_days_in_month(&self) -> usize {
        (1..=self.days_in_month())
            .filter(|&d| self.is_active_day(d))
            .count()
    }
}
