//! TrainSight - Training-Load Analytics Engine
//!
//! The computational core behind an endurance-training companion app's
//! fitness charts and training summaries. Derives CTL/ATL/TSB series from
//! raw session records, resolves user-chosen analysis periods against
//! "today" and an optional race date, projects the series through a taper,
//! thins it to a chart budget, and aggregates sessions into per-period
//! statistics by discipline and heart-rate zone.

pub mod metrics;
pub mod model;

// Re-export commonly used types
pub use metrics::analytics::{AnalyticsError, AnalyticsResult};
pub use metrics::analytics::{DailyLoadPoint, LoadSeed, TrainingLoadCalculator};
pub use metrics::analytics::{AnchorMode, PeriodSelection, ResolvedRange};
pub use model::{Discipline, SessionRecord};
