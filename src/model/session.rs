//! Training session record types.
//!
//! A `SessionRecord` is the engine's only raw input: one logged workout with
//! its training stress, duration, and heart-rate-zone time. Records are
//! created externally (import or manual log) and are never mutated here.

use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};
use crate::metrics::zones::ZONE_COUNT;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Float slop allowed when comparing zone minutes against session duration.
const ZONE_SLACK_MINUTES: f32 = 0.01;

/// Sport discipline of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Swim,
    Bike,
    Run,
    /// Strength, yoga, brick transitions - anything outside the big three.
    Other,
}

impl Discipline {
    /// Number of disciplines (size of per-discipline arrays).
    pub const COUNT: usize = 4;

    /// Stable index for per-discipline accumulator arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::Swim => 0,
            Self::Bike => 1,
            Self::Run => 2,
            Self::Other => 3,
        }
    }

    /// All disciplines, in index order.
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Swim, Self::Bike, Self::Run, Self::Other]
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Swim => "Swim",
            Self::Bike => "Bike",
            Self::Run => "Run",
            Self::Other => "Other",
        }
    }
}

/// A single recorded training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Sport discipline.
    pub discipline: Discipline,
    /// Training Stress Score for the session.
    pub tss: f32,
    /// Total duration in minutes.
    pub duration_minutes: f32,
    /// Minutes spent in each heart-rate zone (Z1..Z5). Not all disciplines
    /// report zones; the sum may be less than the duration.
    pub zone_minutes: [f32; ZONE_COUNT],
    /// Average heart rate, if recorded.
    pub heart_rate_avg: Option<f32>,
}

impl SessionRecord {
    /// Create a record with no zone data.
    pub fn new(date: NaiveDate, discipline: Discipline, tss: f32, duration_minutes: f32) -> Self {
        Self {
            date,
            discipline,
            tss,
            duration_minutes,
            zone_minutes: [0.0; ZONE_COUNT],
            heart_rate_avg: None,
        }
    }

    /// Create a record with per-zone minutes.
    pub fn with_zones(
        date: NaiveDate,
        discipline: Discipline,
        tss: f32,
        duration_minutes: f32,
        zone_minutes: [f32; ZONE_COUNT],
    ) -> Self {
        Self {
            date,
            discipline,
            tss,
            duration_minutes,
            zone_minutes,
            heart_rate_avg: None,
        }
    }

    /// Total minutes with zone data attached.
    pub fn zone_minutes_total(&self) -> f32 {
        self.zone_minutes.iter().sum()
    }

    /// Validate ingestion invariants. Called at the boundary where records
    /// enter the system; the analytics functions assume validated input.
    ///
    /// # Errors
    /// Returns `AnalyticsError::InvalidRecord` for negative TSS or duration,
    /// negative zone minutes, or zone minutes exceeding the duration.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.tss < 0.0 || !self.tss.is_finite() {
            return Err(AnalyticsError::InvalidRecord(format!(
                "TSS must be a non-negative number, got {}",
                self.tss
            )));
        }
        if self.duration_minutes < 0.0 || !self.duration_minutes.is_finite() {
            return Err(AnalyticsError::InvalidRecord(format!(
                "Duration must be a non-negative number, got {}",
                self.duration_minutes
            )));
        }
        if self.zone_minutes.iter().any(|m| *m < 0.0 || !m.is_finite()) {
            return Err(AnalyticsError::InvalidRecord(
                "Zone minutes must be non-negative numbers".to_string(),
            ));
        }
        if self.zone_minutes_total() > self.duration_minutes + ZONE_SLACK_MINUTES {
            return Err(AnalyticsError::InvalidRecord(format!(
                "Zone minutes ({:.1}) exceed session duration ({:.1})",
                self.zone_minutes_total(),
                self.duration_minutes
            )));
        }
        Ok(())
    }
}
