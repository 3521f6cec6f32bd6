//! Training analytics module.
//!
//! This module provides the period-analytics calculations behind the
//! fitness dashboard:
//! - Training Load (CTL/ATL/TSB daily series)
//! - Period resolution (duration + anchor mode -> concrete date range)
//! - Forward projection (build / taper forecast to a race)
//! - Display downsampling (chart point budget)
//! - Period aggregation (hours, TSS, and zone time per day or week)

pub mod chart;
pub mod display;
pub mod error;
pub mod period;
pub mod projection;
pub mod summary;
pub mod training_load;

// Re-exports for convenience
pub use chart::{chart_series, period_report, ChartSeries, PeriodReport};
pub use display::{downsample, DEFAULT_MAX_POINTS};
pub use error::{AnalyticsError, AnalyticsResult};
pub use period::{AnchorMode, PeriodSelection, ResolvedRange};
pub use projection::ProjectionConfig;
pub use summary::{aggregate, summarize, PeriodBucket, PeriodSummary};
pub use training_load::{DailyLoadPoint, LoadSeed, TrainingLoadCalculator};
