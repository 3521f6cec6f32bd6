//! Chart display downsampling.
//!
//! Line charts render poorly (and slowly) past a point budget, so long
//! series are thinned by pure stride sampling. Point values pass through
//! untouched - no interpolation or averaging - because fidelity at anchor
//! dates like "today" and "race day" matters more than smoothing, and the
//! first and last points are always kept so the visible range boundaries
//! stay exact.

use crate::metrics::analytics::training_load::DailyLoadPoint;

/// Default chart point budget.
pub const DEFAULT_MAX_POINTS: usize = 90;

/// Downsample `series` to at most `max_points` points.
///
/// Series at or under the budget are returned unchanged. Otherwise every
/// `ceil(len / max_points)`-th point is kept, plus the final point
/// regardless of stride alignment.
pub fn downsample(series: &[DailyLoadPoint], max_points: usize) -> Vec<DailyLoadPoint> {
    if series.len() <= max_points {
        return series.to_vec();
    }
    if max_points == 0 {
        return Vec::new();
    }
    if max_points == 1 {
        return vec![series[0]];
    }

    let stride = series.len().div_ceil(max_points);
    let mut out: Vec<DailyLoadPoint> = series.iter().copied().step_by(stride).collect();

    let last = series[series.len() - 1];
    if out.last().map(|p| p.date) != Some(last.date) {
        out.push(last);
    }

    out
}
