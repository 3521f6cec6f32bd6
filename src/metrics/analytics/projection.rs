//! Forward projection of the load series.
//!
//! When the chosen period reaches past today (toward a race or a custom end
//! date), the observed series is extended with a synthetic forecast that
//! models the planned training regime: a steady build until the taper
//! window opens, then a taper in which fatigue clears much faster than
//! fitness decays. Every appended point carries `is_projected = true` so the
//! chart can render the forecast distinctly (dashed).

use crate::metrics::analytics::training_load::DailyLoadPoint;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Tunables for the build/taper forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Days before the race where the taper begins.
    pub taper_window_days: i64,
    /// Daily CTL multiplier inside the taper window.
    pub taper_ctl_decay: f32,
    /// Daily ATL multiplier inside the taper window. Lower than the CTL
    /// decay: tapering sheds fatigue while mostly preserving fitness.
    pub taper_atl_decay: f32,
    /// Daily CTL increment during the build phase.
    pub build_rate: f32,
    /// ATL build increment as a fraction of `build_rate`.
    pub build_atl_factor: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            taper_window_days: 14,
            taper_ctl_decay: 0.98,
            taper_atl_decay: 0.85,
            build_rate: 0.5,
            build_atl_factor: 0.6,
        }
    }
}

impl ProjectionConfig {
    /// Extend `observed` with synthetic points from the day after its last
    /// point through `through`, inclusive. Returns the observed points
    /// followed by the projected ones; if `through` does not reach past the
    /// observed series the input is returned unchanged.
    ///
    /// Each projected day either tapers (within `taper_window_days` of
    /// `race_date`) or builds (otherwise, including when no race date is
    /// set). TSB is recomputed from the updated CTL/ATL each day - this is
    /// a forecast of where form will land, not a measurement, so the
    /// start-of-day convention of the observed series does not apply.
    ///
    /// An empty observed series projects from a zero baseline starting at
    /// `through` itself.
    pub fn extend(
        &self,
        observed: &[DailyLoadPoint],
        through: NaiveDate,
        race_date: Option<NaiveDate>,
    ) -> Vec<DailyLoadPoint> {
        let mut series = observed.to_vec();

        let (mut ctl, mut atl, first_day) = match observed.last() {
            Some(last) => {
                if through <= last.date {
                    return series;
                }
                (last.ctl, last.atl, last.date + Duration::days(1))
            }
            None => (0.0, 0.0, through),
        };

        let mut day = first_day;
        while day <= through {
            let tapering = race_date
                .map(|race| (race - day).num_days() <= self.taper_window_days)
                .unwrap_or(false);

            if tapering {
                ctl *= self.taper_ctl_decay;
                atl *= self.taper_atl_decay;
            } else {
                ctl += self.build_rate;
                atl += self.build_rate * self.build_atl_factor;
            }

            series.push(DailyLoadPoint {
                date: day,
                ctl,
                atl,
                tsb: ctl - atl,
                is_projected: true,
            });
            day += Duration::days(1);
        }

        series
    }
}
