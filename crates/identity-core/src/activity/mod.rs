//! Activity and streak resolution for the week and month calendars.

mod resolver;
mod views;

pub use resolver::{day_state, ActivityResolver, DayState, StreakAdjacency};
pub use views::{MonthCell, MonthView, WeekCell, WeekView};
