//! Effort zone classification and weekly averages.
//!
//! Zones partition the 0-100 score range with closed lower bounds:
//! `[0, 41)` Light, `[41, 76)` Optimal, `[76, 100]` High.

use serde::{Deserialize, Serialize};

use crate::storage::EffortConfig;

/// Full scale of an effort score.
pub const EFFORT_SCALE: f64 = 100.0;

/// Lowest score classified as High.
pub const HIGH_THRESHOLD: f64 = 76.0;

/// Lowest score classified as Optimal.
pub const OPTIMAL_THRESHOLD: f64 = 41.0;

/// Qualitative bucket for a daily effort score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffortZone {
    Light,
    Optimal,
    High,
}

impl EffortZone {
    pub fn label(&self) -> &'static str {
        match self {
            EffortZone::Light => "Light",
            EffortZone::Optimal => "Optimal",
            EffortZone::High => "High",
        }
    }

    /// Feedback line shown under the chart.
    pub fn copy(&self) -> &'static str {
        match self {
            EffortZone::Light => "You're in a lighter effort range today.",
            EffortZone::Optimal => "You're in an optimal effort range today.",
            EffortZone::High => "High effort day — balance tomorrow.",
        }
    }
}

/// Clamp a score into `[0, 100]`. NaN reads as zero.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        tracing::warn!("effort score is NaN, treating as 0");
        return 0.0;
    }
    if !(0.0..=EFFORT_SCALE).contains(&score) {
        tracing::warn!(score, "effort score out of range, clamping");
    }
    score.clamp(0.0, EFFORT_SCALE)
}

/// Classify a score with the default thresholds.
pub fn classify_effort(score: f64) -> EffortZone {
    EffortZones::default().classify(score)
}

/// Arithmetic mean of every sample, zero days included.
///
/// Samples are clamped first; an empty slice averages to zero.
pub fn weekly_average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| clamp_score(s)).sum();
    sum / samples.len() as f64
}

/// Express `avg` as a percentage of `scale`, clamped to `[0, 100]`.
pub fn normalized_pct(avg: f64, scale: f64) -> f64 {
    if scale.is_nan() || scale <= 0.0 || avg.is_nan() {
        return 0.0;
    }
    (avg / scale * 100.0).clamp(0.0, 100.0)
}

/// True when the whole week averages to zero, which asks the caller for a
/// call-to-action instead of a zone message.
pub fn is_zero_state(samples: &[f64]) -> bool {
    weekly_average(samples) == 0.0
}

/// Zone thresholds, configurable through [`EffortConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortZones {
    pub high_threshold: f64,
    pub optimal_threshold: f64,
}

impl Default for EffortZones {
    fn default() -> Self {
        Self {
            high_threshold: HIGH_THRESHOLD,
            optimal_threshold: OPTIMAL_THRESHOLD,
        }
    }
}

impl From<&EffortConfig> for EffortZones {
    fn from(config: &EffortConfig) -> Self {
        Self {
            high_threshold: config.high_threshold,
            optimal_threshold: config.optimal_threshold,
        }
    }
}

impl EffortZones {
    pub fn classify(&self, score: f64) -> EffortZone {
        let score = clamp_score(score);
        if score >= self.high_threshold {
            EffortZone::High
        } else if score >= self.optimal_threshold {
            EffortZone::Optimal
        } else {
            EffortZone::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(classify_effort(100.0), EffortZone::High);
        assert_eq!(classify_effort(76.0), EffortZone::High);
        assert_eq!(classify_effort(75.0), EffortZone::Optimal);
        assert_eq!(classify_effort(41.0), EffortZone::Optimal);
        assert_eq!(classify_effort(40.0), EffortZone::Light);
        assert_eq!(classify_effort(0.0), EffortZone::Light);
    }

    #[test]
    fn test_zone_copy() {
        assert_eq!(classify_effort(85.0).copy(), "High effort day — balance tomorrow.");
        assert_eq!(
            classify_effort(50.0).copy(),
            "You're in an optimal effort range today."
        );
        assert_eq!(
            classify_effort(0.0).copy(),
            "You're in a lighter effort range today."
        );
        assert_eq!(classify_effort(85.0).label(), "High");
    }

    #[test]
    fn test_out_of_range_scores_clamp() {
        assert_eq!(classify_effort(150.0), EffortZone::High);
        assert_eq!(classify_effort(-5.0), EffortZone::Light);
        assert_eq!(classify_effort(f64::NAN), EffortZone::Light);
    }

    #[test]
    fn test_weekly_average() {
        assert_eq!(weekly_average(&[45.0, 60.0, 75.0, 40.0, 92.0, 65.0, 85.0]), 66.0);
        assert_eq!(weekly_average(&[0.0; 7]), 0.0);
        assert_eq!(weekly_average(&[]), 0.0);
        // zeros count toward the mean
        assert_eq!(weekly_average(&[70.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]), 10.0);
    }

    #[test]
    fn test_zero_state() {
        assert!(is_zero_state(&[0.0; 7]));
        assert!(!is_zero_state(&[10.0, 20.0, 0.0, 15.0, 30.0, 0.0, 0.0]));
    }

    #[test]
    fn test_normalized_pct() {
        assert_eq!(normalized_pct(66.0, EFFORT_SCALE), 66.0);
        assert_eq!(normalized_pct(30.0, 60.0), 50.0);
        assert_eq!(normalized_pct(120.0, EFFORT_SCALE), 100.0);
        assert_eq!(normalized_pct(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_configured_thresholds() {
        let zones = EffortZones {
            high_threshold: 90.0,
            optimal_threshold: 50.0,
        };
        assert_eq!(zones.classify(85.0), EffortZone::Optimal);
        assert_eq!(zones.classify(45.0), EffortZone::Light);
        assert_eq!(EffortZones::from(&EffortConfig::default()), EffortZones::default());
    }

    proptest! {
        #[test]
        fn prop_zones_partition_score_range(score in 0.0f64..=100.0) {
            let zone = classify_effort(score);
            let expected = if score >= 76.0 {
                EffortZone::High
            } else if score >= 41.0 {
                EffortZone::Optimal
            } else {
                EffortZone::Light
            };
            prop_assert_eq!(zone, expected);
        }

        #[test]
        fn prop_average_stays_within_sample_bounds(
            samples in prop::collection::vec(0.0f64..=100.0, 7)
        ) {
            let avg = weekly_average(&samples);
            let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
            prop_assert_eq!(avg, weekly_average(&samples));
        }

        #[test]
        fn prop_normalized_pct_is_clamped(avg in -500.0f64..500.0, scale in 0.1f64..1000.0) {
            let pct = normalized_pct(avg, scale);
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }
}
