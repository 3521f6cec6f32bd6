//! Metrics module for training-load calculations and zones.

pub mod analytics;
pub mod zones;

pub use zones::{Color, DISCIPLINE_COLORS, HR_ZONE_COLORS, ZONE_COUNT, ZONE_NAMES};

// Re-export key analytics types for convenience
pub use analytics::{
    AnalyticsError, AnalyticsResult, AnchorMode, ChartSeries, DailyLoadPoint, LoadSeed,
    PeriodBucket, PeriodReport, PeriodSelection, PeriodSummary, ProjectionConfig, ResolvedRange,
    TrainingLoadCalculator,
};
