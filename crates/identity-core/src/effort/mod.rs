//! Effort scoring module.
//!
//! This module turns the seven daily effort samples into a zone reading, a
//! weekly average and the chart model, and maps learning features to their
//! contribution levels.

mod breakdown;
mod chart;
mod zone;

pub use breakdown::{
    effort_level, BreakdownRow, EffortBreakdown, EffortBreakdownSource, FeatureEffort,
    IdLengthBreakdown, LearningFeature, MeasuredBreakdown, LEARNING_FEATURES, MAX_EFFORT_LEVEL,
    MIN_BAR_WIDTH_PCT,
};
pub use chart::{display_score, EffortBar, EffortChart, CHART_DAY_LABELS};
pub use zone::{
    clamp_score, classify_effort, is_zero_state, normalized_pct, weekly_average, EffortZone,
    EffortZones, EFFORT_SCALE, HIGH_THRESHOLD, OPTIMAL_THRESHOLD,
};
