//! Integration tests for effort scoring.

use identity_core::effort::{
    effort_level, is_zero_state, normalized_pct, EffortBreakdown, EffortChart, IdLengthBreakdown,
    MeasuredBreakdown,
};
use identity_core::profile::{mock_user_free, mock_user_paid};
use identity_core::storage::EffortConfig;
use identity_core::{classify_effort, weekly_average, EffortZone};
use proptest::prelude::*;

#[test]
fn test_paid_week_average() {
    let week = mock_user_paid().effort_week();
    assert_eq!(weekly_average(&week), 66.0);
    assert!(!is_zero_state(&week));
}

#[test]
fn test_zero_week_triggers_zero_state() {
    let zeros = [0.0; 7];
    assert_eq!(weekly_average(&zeros), 0.0);
    assert!(is_zero_state(&zeros));

    let chart = EffortChart::from_samples(&zeros, &EffortConfig::default());
    assert!(chart.zero_state);
    assert_eq!(chart.zone, EffortZone::Light);
}

#[test]
fn test_missing_effort_uses_neutral_week() {
    let mut user = mock_user_free();
    user.daily_effort = None;
    let chart = EffortChart::for_profile(&user, &EffortConfig::default());
    assert!(chart.zero_state);
    assert_eq!(chart.bars.len(), 7);
}

#[test]
fn test_paid_chart() {
    let chart = EffortChart::for_profile(&mock_user_paid(), &EffortConfig::default());
    assert_eq!(chart.today_display, "85");
    assert_eq!(chart.zone, EffortZone::High);
    assert_eq!(classify_effort(chart.today_score), chart.zone);
    assert_eq!(chart.average_line_pct, 66.0);
    assert!(chart.today_bar().is_some_and(|b| b.value == 85.0));
}

#[test]
fn test_normalized_pct_clamps() {
    assert_eq!(normalized_pct(150.0, 100.0), 100.0);
    assert_eq!(normalized_pct(-3.0, 100.0), 0.0);
    assert_eq!(normalized_pct(50.0, 200.0), 25.0);
}

#[test]
fn test_breakdown_seam() {
    let placeholder = EffortBreakdown::build(&mock_user_paid(), &IdLengthBreakdown);
    assert_eq!(placeholder.today_display, "85 / 100");
    assert_eq!(placeholder.rows.len(), 6);

    let measured = MeasuredBreakdown::new().with_level("live_class", 3);
    let breakdown = EffortBreakdown::build(&mock_user_paid(), &measured);
    assert_eq!(breakdown.rows[0].effort.level, 3);
    assert_eq!(breakdown.rows[0].effort.label, "High contribution");
    // unmeasured features read as unused
    assert!(breakdown.rows[1].muted);
}

#[test]
fn test_effort_level_stable() {
    assert_eq!(effort_level("live_class"), effort_level("live_class"));
    assert_eq!(effort_level("live_class").label, "Moderate activity");
}

proptest! {
    #[test]
    fn prop_chart_is_idempotent(samples in prop::array::uniform7(0.0f64..=100.0)) {
        let config = EffortConfig::default();
        prop_assert_eq!(
            EffortChart::from_samples(&samples, &config),
            EffortChart::from_samples(&samples, &config)
        );
    }
}
