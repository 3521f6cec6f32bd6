//! Training Load calculations (CTL/ATL/TSB).
//!
//! Implements the Performance Management Chart (PMC) model:
//! - CTL (Chronic Training Load): 42-day exponentially weighted moving
//!   average of daily TSS - a proxy for fitness
//! - ATL (Acute Training Load): 7-day EWMA of daily TSS - a proxy for fatigue
//! - TSB (Training Stress Balance): CTL - ATL - a proxy for form/freshness
//!
//! TSB uses the start-of-day convention: today's form reflects yesterday's
//! accumulated load, so `tsb[t] = ctl[t-1] - atl[t-1]`. Using the end-of-day
//! values would let this morning's session count against this morning's
//! freshness.

use crate::model::SessionRecord;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard CTL window - 42 days for long-term fitness.
const CTL_WINDOW_DAYS: f32 = 42.0;

/// Standard ATL window - 7 days for short-term fatigue.
const ATL_WINDOW_DAYS: f32 = 7.0;

/// One day of the derived load series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyLoadPoint {
    /// Calendar date of this point.
    pub date: NaiveDate,
    /// Chronic Training Load (fitness).
    pub ctl: f32,
    /// Acute Training Load (fatigue).
    pub atl: f32,
    /// Training Stress Balance (form). Always derived, never stored
    /// independently.
    pub tsb: f32,
    /// True for synthetic points beyond the last observed day.
    pub is_projected: bool,
}

/// Baseline CTL/ATL carried in from before the computed horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSeed {
    pub ctl: f32,
    pub atl: f32,
}

impl LoadSeed {
    pub const fn new(ctl: f32, atl: f32) -> Self {
        Self { ctl, atl }
    }
}

/// Training load calculator.
pub struct TrainingLoadCalculator {
    /// CTL decay constant (default: 42 days).
    ctl_days: f32,
    /// ATL decay constant (default: 7 days).
    atl_days: f32,
}

impl TrainingLoadCalculator {
    /// Create with default constants (42/7 day).
    pub fn new() -> Self {
        Self {
            ctl_days: CTL_WINDOW_DAYS,
            atl_days: ATL_WINDOW_DAYS,
        }
    }

    /// Create with custom decay constants.
    pub fn with_constants(ctl_days: f32, atl_days: f32) -> Self {
        Self { ctl_days, atl_days }
    }

    /// Compute the daily CTL/ATL/TSB series over `[horizon_start,
    /// horizon_end]` inclusive: one point per calendar day, ascending, no
    /// gaps. Days without sessions contribute zero TSS, which decays both
    /// averages toward zero - intended behavior, not an error.
    ///
    /// `seed` supplies a known baseline for the day before `horizon_start`;
    /// when `None` the seed is estimated from the simple average of daily
    /// TSS over the first 7 (ATL) / 42 (CTL) days of the horizon. An empty
    /// session list yields a flat series decaying from the seed (all zeros
    /// for a zero seed). An inverted horizon yields an empty series.
    pub fn compute_series(
        &self,
        sessions: &[SessionRecord],
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
        seed: Option<LoadSeed>,
    ) -> Vec<DailyLoadPoint> {
        if horizon_end < horizon_start {
            return Vec::new();
        }

        let daily_tss = Self::daily_tss_map(sessions);
        let num_days = (horizon_end - horizon_start).num_days() + 1;

        let seed = seed.unwrap_or_else(|| {
            self.estimate_seed(&daily_tss, horizon_start, num_days)
        });

        let mut series = Vec::with_capacity(num_days as usize);
        let mut ctl = seed.ctl;
        let mut atl = seed.atl;

        for offset in 0..num_days {
            let date = horizon_start + Duration::days(offset);
            let tss = daily_tss.get(&date).copied().unwrap_or(0.0);

            // Start-of-day form, then fold today's stress into the averages.
            let tsb = ctl - atl;
            ctl += (tss - ctl) / self.ctl_days;
            atl += (tss - atl) / self.atl_days;

            series.push(DailyLoadPoint {
                date,
                ctl,
                atl,
                tsb,
                is_projected: false,
            });
        }

        series
    }

    /// Sum session TSS per calendar day.
    fn daily_tss_map(sessions: &[SessionRecord]) -> HashMap<NaiveDate, f32> {
        let mut map = HashMap::new();
        for session in sessions {
            *map.entry(session.date).or_insert(0.0) += session.tss;
        }
        map
    }

    /// Estimate a starting baseline from the first observed days' average
    /// daily TSS (7 days for ATL, 42 for CTL, clipped to the horizon).
    fn estimate_seed(
        &self,
        daily_tss: &HashMap<NaiveDate, f32>,
        horizon_start: NaiveDate,
        num_days: i64,
    ) -> LoadSeed {
        let window_avg = |window: f32| -> f32 {
            let days = (window as i64).min(num_days).max(1);
            let total: f32 = (0..days)
                .map(|offset| {
                    let date = horizon_start + Duration::days(offset);
                    daily_tss.get(&date).copied().unwrap_or(0.0)
                })
                .sum();
            total / days as f32
        };

        LoadSeed {
            ctl: window_avg(self.ctl_days),
            atl: window_avg(self.atl_days),
        }
    }
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}
