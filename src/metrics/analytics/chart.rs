//! Dashboard-facing analytics pipeline.
//!
//! Glues the individual calculators into the two queries the presentation
//! layer actually makes: the fitness chart series (load model -> period
//! bounds -> projection -> display thinning) and the period summary report
//! (period bounds -> bucketed aggregation). Both are pure functions of
//! their inputs; every call takes the full input set and returns a fresh
//! result.

use crate::metrics::analytics::display::{downsample, DEFAULT_MAX_POINTS};
use crate::metrics::analytics::error::AnalyticsResult;
use crate::metrics::analytics::period::{PeriodSelection, ResolvedRange};
use crate::metrics::analytics::projection::ProjectionConfig;
use crate::metrics::analytics::summary::{aggregate, summarize, PeriodBucket, PeriodSummary};
use crate::metrics::analytics::training_load::{DailyLoadPoint, LoadSeed, TrainingLoadCalculator};
use crate::model::SessionRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A resolved, displayable fitness chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// The resolved period bounds.
    pub range: ResolvedRange,
    /// Daily CTL/ATL/TSB points, thinned to the chart budget. Points past
    /// today carry `is_projected = true`.
    pub points: Vec<DailyLoadPoint>,
}

/// A resolved period summary: buckets plus period-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub range: ResolvedRange,
    pub buckets: Vec<PeriodBucket>,
    pub summary: PeriodSummary,
}

/// Produce the fitness chart series for a period selection.
///
/// The observed series is computed from the earliest session (or the range
/// start, whichever is earlier) so history before the visible window shapes
/// the averages, then sliced to the range. Ranges reaching past `today` are
/// extended with the build/taper forecast, and the result is thinned to
/// `DEFAULT_MAX_POINTS`.
///
/// # Errors
/// Returns `InvalidSelection` if the selection cannot be resolved.
pub fn chart_series(
    sessions: &[SessionRecord],
    selection: &PeriodSelection,
    today: NaiveDate,
    race_date: Option<NaiveDate>,
    seed: Option<LoadSeed>,
) -> AnalyticsResult<ChartSeries> {
    chart_series_with(
        sessions,
        selection,
        today,
        race_date,
        seed,
        &ProjectionConfig::default(),
        DEFAULT_MAX_POINTS,
    )
}

/// `chart_series` with explicit projection tunables and point budget.
///
/// # Errors
/// Returns `InvalidSelection` if the selection cannot be resolved.
pub fn chart_series_with(
    sessions: &[SessionRecord],
    selection: &PeriodSelection,
    today: NaiveDate,
    race_date: Option<NaiveDate>,
    seed: Option<LoadSeed>,
    projection: &ProjectionConfig,
    max_points: usize,
) -> AnalyticsResult<ChartSeries> {
    let range = selection.resolve(today, race_date)?;
    tracing::debug!(start = %range.start, end = %range.end, corrected = range.corrected,
        "resolved chart period");

    // Accumulate from the earliest session so pre-window training counts,
    // but never past today - the future belongs to the projection. The
    // observed horizon always reaches today when the range does, so a
    // window lying entirely in the future still projects forward from the
    // athlete's current fitness rather than a cold zero.
    let earliest = sessions.iter().map(|s| s.date).min().unwrap_or(range.start);
    let observed_start = earliest.min(range.start).min(today);
    let observed_end = today.min(range.end);

    let calculator = TrainingLoadCalculator::new();
    let mut full = calculator.compute_series(sessions, observed_start, observed_end, seed);

    // Generate the whole observed+projected horizon first, then filter to
    // the visible window, so the series stays continuous day by day no
    // matter where the window falls.
    if range.end > today {
        full = projection.extend(&full, range.end, race_date);
    }

    let points: Vec<DailyLoadPoint> = full
        .into_iter()
        .filter(|p| p.date >= range.start && p.date <= range.end)
        .collect();

    Ok(ChartSeries {
        range,
        points: downsample(&points, max_points),
    })
}

/// Produce the period summary report (the summary tables and bar charts).
/// Aggregation only ever covers recorded sessions; the projection does not
/// apply here.
///
/// # Errors
/// Returns `InvalidSelection` if the selection cannot be resolved.
pub fn period_report(
    sessions: &[SessionRecord],
    selection: &PeriodSelection,
    today: NaiveDate,
    race_date: Option<NaiveDate>,
) -> AnalyticsResult<PeriodReport> {
    let range = selection.resolve(today, race_date)?;
    tracing::debug!(start = %range.start, end = %range.end, "resolved summary period");

    let buckets = aggregate(sessions, &range);
    let summary = summarize(&buckets);

    Ok(PeriodReport {
        range,
        buckets,
        summary,
    })
}
