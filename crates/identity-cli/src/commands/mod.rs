pub mod calendar;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod effort;
pub mod highlights;
pub mod progression;
pub mod sheet;
pub mod validate;
