//! Display model for the seven-day effort chart.

use serde::Serialize;

use super::zone::{clamp_score, normalized_pct, weekly_average, EffortZone, EffortZones};
use crate::profile::{UserProfile, EFFORT_WINDOW_DAYS};
use crate::storage::EffortConfig;

/// Bar captions. The chart always labels Sunday first, whatever today is.
pub const CHART_DAY_LABELS: [&str; EFFORT_WINDOW_DAYS] = ["S", "M", "T", "W", "T", "F", "S"];

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffortBar {
    pub day_label: &'static str,
    pub value: f64,
    /// Bar height as a percent of the chart, capped at 100
    pub height_pct: f64,
    pub is_today: bool,
}

/// Everything the effort card needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffortChart {
    pub bars: Vec<EffortBar>,
    pub today_score: f64,
    pub today_display: String,
    pub average: f64,
    pub average_display: String,
    /// Vertical position of the dotted average line
    pub average_line_pct: f64,
    /// Height of the shaded target band
    pub ideal_zone_pct: f64,
    pub zone: EffortZone,
    pub zone_label: &'static str,
    pub zone_copy: &'static str,
    /// Whole week at zero: show the "Start Learning Now" call-to-action
    pub zero_state: bool,
}

/// Round half away from zero, the way the dashboard prints scores.
pub fn display_score(value: f64) -> String {
    format!("{}", value.round() as i64)
}

impl EffortChart {
    /// Build the chart from a week of samples, today last.
    pub fn from_samples(samples: &[f64; EFFORT_WINDOW_DAYS], config: &EffortConfig) -> Self {
        let zones = EffortZones::from(config);
        let bars = samples
            .iter()
            .enumerate()
            .map(|(i, &raw)| {
                let value = clamp_score(raw);
                EffortBar {
                    day_label: CHART_DAY_LABELS[i],
                    value,
                    height_pct: normalized_pct(value, config.scale),
                    is_today: i == EFFORT_WINDOW_DAYS - 1,
                }
            })
            .collect();

        let today_score = clamp_score(samples[EFFORT_WINDOW_DAYS - 1]);
        let average = weekly_average(samples);
        let zone = zones.classify(today_score);

        Self {
            bars,
            today_score,
            today_display: display_score(today_score),
            average,
            average_display: display_score(average),
            average_line_pct: normalized_pct(average, config.scale),
            ideal_zone_pct: config.ideal_zone_pct,
            zone,
            zone_label: zone.label(),
            zone_copy: zone.copy(),
            zero_state: average == 0.0,
        }
    }

    pub fn for_profile(profile: &UserProfile, config: &EffortConfig) -> Self {
        Self::from_samples(&profile.effort_week(), config)
    }

    pub fn today_bar(&self) -> Option<&EffortBar> {
        self.bars.iter().find(|b| b.is_today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{mock_user_free, mock_user_paid};

    #[test]
    fn test_paid_profile_chart() {
        let chart = EffortChart::for_profile(&mock_user_paid(), &EffortConfig::default());
        assert_eq!(chart.bars.len(), 7);
        assert_eq!(chart.today_score, 85.0);
        assert_eq!(chart.today_display, "85");
        assert_eq!(chart.average, 66.0);
        assert_eq!(chart.average_display, "66");
        assert_eq!(chart.average_line_pct, 66.0);
        assert_eq!(chart.ideal_zone_pct, 60.0);
        assert_eq!(chart.zone, EffortZone::High);
        assert_eq!(chart.zone_label, "High");
        assert!(!chart.zero_state);
    }

    #[test]
    fn test_today_is_last_bar() {
        let chart = EffortChart::for_profile(&mock_user_paid(), &EffortConfig::default());
        let today = chart.today_bar().unwrap();
        assert_eq!(today.value, 85.0);
        assert_eq!(today.day_label, "S");
        assert_eq!(chart.bars.iter().filter(|b| b.is_today).count(), 1);
    }

    #[test]
    fn test_free_profile_is_light_but_not_zero_state() {
        let chart = EffortChart::for_profile(&mock_user_free(), &EffortConfig::default());
        assert_eq!(chart.today_score, 0.0);
        assert_eq!(chart.zone, EffortZone::Light);
        assert!(!chart.zero_state);
        // 75 / 7 = 10.71...
        assert_eq!(chart.average_display, "11");
    }

    #[test]
    fn test_zero_week_triggers_zero_state() {
        let chart = EffortChart::from_samples(&[0.0; 7], &EffortConfig::default());
        assert!(chart.zero_state);
        assert_eq!(chart.average_line_pct, 0.0);
        assert_eq!(chart.zone, EffortZone::Light);
    }

    #[test]
    fn test_bar_heights_cap_at_full_scale() {
        let samples = [120.0, 50.0, 0.0, 0.0, 0.0, 0.0, 100.0];
        let chart = EffortChart::from_samples(&samples, &EffortConfig::default());
        assert_eq!(chart.bars[0].height_pct, 100.0);
        assert_eq!(chart.bars[1].height_pct, 50.0);
    }

    #[test]
    fn test_display_score_rounds_half_up() {
        assert_eq!(display_score(65.5), "66");
        assert_eq!(display_score(65.4), "65");
        assert_eq!(display_score(0.0), "0");
    }
}
