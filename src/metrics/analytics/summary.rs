//! Period aggregation for the training-summary tables and bar charts.
//!
//! Buckets raw session records inside a resolved range into per-day (short
//! ranges) or per-week totals by discipline, plus the heart-rate-zone time
//! distribution, and rolls the buckets up into period-wide statistics.

use crate::metrics::analytics::period::ResolvedRange;
use crate::metrics::zones::ZONE_COUNT;
use crate::model::{Discipline, SessionRecord};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Ranges spanning at most this many days are bucketed per day; longer
/// ranges per week.
const DAILY_VIEW_MAX_DAYS: i64 = 14;

/// One day or week of aggregated training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// Chart axis label, "M/D" of the bucket start.
    pub label: String,
    /// First date of the bucket.
    pub start: NaiveDate,
    /// Training hours per discipline (swim/bike/run/other).
    pub hours_by_discipline: [f32; Discipline::COUNT],
    /// TSS per discipline.
    pub tss_by_discipline: [f32; Discipline::COUNT],
    /// Share of zone-tagged time per HR zone, rounded whole percentages.
    /// All zeros when the bucket has no zone-tagged time.
    pub zone_percent: [f32; ZONE_COUNT],
}

impl PeriodBucket {
    /// Total hours across disciplines.
    pub fn total_hours(&self) -> f32 {
        self.hours_by_discipline.iter().sum()
    }

    /// Total TSS across disciplines.
    pub fn total_tss(&self) -> f32 {
        self.tss_by_discipline.iter().sum()
    }
}

/// Period-wide rollup of a bucket list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_hours_by_discipline: [f32; Discipline::COUNT],
    pub total_tss_by_discipline: [f32; Discipline::COUNT],
    pub total_hours: f32,
    pub total_tss: f32,
    /// Per-bucket averages: period total divided by bucket count, never by
    /// 7 - "average" always means per displayed bucket.
    pub avg_hours_by_discipline: [f32; Discipline::COUNT],
    pub avg_tss_by_discipline: [f32; Discipline::COUNT],
    pub avg_hours: f32,
    pub avg_tss: f32,
    /// Mean of the buckets' zone percentages, rounded.
    pub avg_zone_percent: [f32; ZONE_COUNT],
    pub bucket_count: usize,
}

/// Bucket the sessions falling inside `range`.
///
/// Ranges spanning 14 days or fewer get one bucket per calendar day,
/// inclusive of both endpoints; longer ranges get 7-day buckets anchored at
/// `range.start`, the last possibly partial. Callers driving the weekly view
/// are expected to keep ranges within 12 weeks (the period picker's job);
/// no re-clamping happens here. Sessions outside the range are ignored.
pub fn aggregate(sessions: &[SessionRecord], range: &ResolvedRange) -> Vec<PeriodBucket> {
    let span = range.span_days();
    let bucket_days: i64 = if span <= DAILY_VIEW_MAX_DAYS { 1 } else { 7 };
    let bucket_count = ((span + 1 + bucket_days - 1) / bucket_days) as usize;

    let mut hours = vec![[0.0f32; Discipline::COUNT]; bucket_count];
    let mut tss = vec![[0.0f32; Discipline::COUNT]; bucket_count];
    let mut zone_minutes = vec![[0.0f32; ZONE_COUNT]; bucket_count];

    for session in sessions {
        if session.date < range.start || session.date > range.end {
            continue;
        }
        let bucket = ((session.date - range.start).num_days() / bucket_days) as usize;
        let d = session.discipline.index();
        hours[bucket][d] += session.duration_minutes / 60.0;
        tss[bucket][d] += session.tss;
        for (z, minutes) in session.zone_minutes.iter().enumerate() {
            zone_minutes[bucket][z] += minutes;
        }
    }

    (0..bucket_count)
        .map(|i| {
            let start = range.start + Duration::days(i as i64 * bucket_days);
            PeriodBucket {
                label: format!("{}/{}", start.month(), start.day()),
                start,
                hours_by_discipline: hours[i],
                tss_by_discipline: tss[i],
                zone_percent: zone_distribution(&zone_minutes[i]),
            }
        })
        .collect()
}

/// Rounded percentage share per zone, with an explicit zero-denominator
/// guard: no zone-tagged time yields all zeros, never NaN.
fn zone_distribution(zone_minutes: &[f32; ZONE_COUNT]) -> [f32; ZONE_COUNT] {
    let total: f32 = zone_minutes.iter().sum();
    if total <= 0.0 {
        return [0.0; ZONE_COUNT];
    }
    let mut percent = [0.0f32; ZONE_COUNT];
    for (z, minutes) in zone_minutes.iter().enumerate() {
        percent[z] = (100.0 * minutes / total).round();
    }
    percent
}

/// Roll a bucket list up into period-wide statistics. An empty bucket list
/// yields an all-zero summary.
pub fn summarize(buckets: &[PeriodBucket]) -> PeriodSummary {
    let mut total_hours_by_discipline = [0.0f32; Discipline::COUNT];
    let mut total_tss_by_discipline = [0.0f32; Discipline::COUNT];
    let mut zone_percent_sum = [0.0f32; ZONE_COUNT];

    for bucket in buckets {
        for d in 0..Discipline::COUNT {
            total_hours_by_discipline[d] += bucket.hours_by_discipline[d];
            total_tss_by_discipline[d] += bucket.tss_by_discipline[d];
        }
        for z in 0..ZONE_COUNT {
            zone_percent_sum[z] += bucket.zone_percent[z];
        }
    }

    let total_hours: f32 = total_hours_by_discipline.iter().sum();
    let total_tss: f32 = total_tss_by_discipline.iter().sum();

    let count = buckets.len();
    if count == 0 {
        return PeriodSummary {
            total_hours_by_discipline,
            total_tss_by_discipline,
            total_hours: 0.0,
            total_tss: 0.0,
            avg_hours_by_discipline: [0.0; Discipline::COUNT],
            avg_tss_by_discipline: [0.0; Discipline::COUNT],
            avg_hours: 0.0,
            avg_tss: 0.0,
            avg_zone_percent: [0.0; ZONE_COUNT],
            bucket_count: 0,
        };
    }

    let n = count as f32;
    let mut avg_hours_by_discipline = [0.0f32; Discipline::COUNT];
    let mut avg_tss_by_discipline = [0.0f32; Discipline::COUNT];
    for d in 0..Discipline::COUNT {
        avg_hours_by_discipline[d] = total_hours_by_discipline[d] / n;
        avg_tss_by_discipline[d] = total_tss_by_discipline[d] / n;
    }
    let mut avg_zone_percent = [0.0f32; ZONE_COUNT];
    for z in 0..ZONE_COUNT {
        avg_zone_percent[z] = (zone_percent_sum[z] / n).round();
    }

    PeriodSummary {
        total_hours_by_discipline,
        total_tss_by_discipline,
        total_hours,
        total_tss,
        avg_hours_by_discipline,
        avg_tss_by_discipline,
        avg_hours: total_hours / n,
        avg_tss: total_tss / n,
        avg_zone_percent,
        bucket_count: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> ResolvedRange {
        ResolvedRange::new(start, end)
    }

    #[test]
    fn test_short_range_buckets_per_day() {
        let r = range(date(2026, 1, 1), date(2026, 1, 14));
        let buckets = aggregate(&[], &r);
        assert_eq!(buckets.len(), 14);
        assert_eq!(buckets[0].label, "1/1");
        assert_eq!(buckets[13].start, date(2026, 1, 14));
    }

    #[test]
    fn test_long_range_buckets_per_week() {
        // 28 days inclusive -> 5 weekly buckets, last partial (1 day).
        let r = range(date(2026, 1, 1), date(2026, 1, 29));
        let buckets = aggregate(&[], &r);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[1].start, date(2026, 1, 8));
        assert_eq!(buckets[4].start, date(2026, 1, 29));
    }

    #[test]
    fn test_week_bucket_count_rounds_up() {
        // Exact multiple: 21 days inclusive -> 3 weekly buckets.
        let r = range(date(2026, 1, 1), date(2026, 1, 21));
        assert_eq!(aggregate(&[], &r).len(), 3);

        // One day over: 22 days inclusive -> 4, last bucket a single day.
        let r = range(date(2026, 1, 1), date(2026, 1, 22));
        let buckets = aggregate(&[], &r);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[3].start, date(2026, 1, 22));
    }

    #[test]
    fn test_sessions_land_in_their_buckets() {
        let r = range(date(2026, 1, 1), date(2026, 1, 29));
        let sessions = vec![
            SessionRecord::new(date(2026, 1, 2), Discipline::Swim, 50.0, 60.0),
            SessionRecord::new(date(2026, 1, 9), Discipline::Bike, 120.0, 120.0),
            SessionRecord::new(date(2026, 1, 9), Discipline::Run, 95.0, 50.0),
            // Outside the range: ignored.
            SessionRecord::new(date(2026, 2, 15), Discipline::Run, 80.0, 45.0),
        ];
        let buckets = aggregate(&sessions, &r);

        assert!((buckets[0].hours_by_discipline[Discipline::Swim.index()] - 1.0).abs() < 1e-6);
        assert!((buckets[1].hours_by_discipline[Discipline::Bike.index()] - 2.0).abs() < 1e-6);
        assert!((buckets[1].tss_by_discipline[Discipline::Run.index()] - 95.0).abs() < 1e-6);
        assert!((buckets[1].total_tss() - 215.0).abs() < 1e-6);
        assert_eq!(buckets[2].total_tss(), 0.0);

        let summary = summarize(&buckets);
        assert!((summary.total_tss - 265.0).abs() < 1e-6);
    }

    #[test]
    fn test_zone_percentages_sum_near_100() {
        let r = range(date(2026, 1, 1), date(2026, 1, 7));
        let sessions = vec![
            SessionRecord::with_zones(
                date(2026, 1, 2),
                Discipline::Run,
                60.0,
                60.0,
                [33.0, 17.0, 7.0, 2.0, 1.0],
            ),
            SessionRecord::with_zones(
                date(2026, 1, 2),
                Discipline::Bike,
                70.0,
                90.0,
                [40.0, 30.0, 10.0, 5.0, 5.0],
            ),
        ];
        let buckets = aggregate(&sessions, &r);

        let sum: f32 = buckets[1].zone_percent.iter().sum();
        assert!((99.0..=101.0).contains(&sum), "sum was {sum}");
    }

    #[test]
    fn test_bucket_without_zone_data_is_all_zero() {
        let r = range(date(2026, 1, 1), date(2026, 1, 7));
        let sessions = vec![SessionRecord::new(
            date(2026, 1, 3),
            Discipline::Other,
            20.0,
            45.0,
        )];
        let buckets = aggregate(&sessions, &r);

        // Session has hours but no zone minutes: guard yields zeros, not NaN.
        assert!(buckets[2].total_hours() > 0.0);
        assert_eq!(buckets[2].zone_percent, [0.0; ZONE_COUNT]);
    }

    #[test]
    fn test_average_is_per_bucket() {
        let r = range(date(2026, 1, 1), date(2026, 1, 29));
        let sessions = vec![
            SessionRecord::new(date(2026, 1, 2), Discipline::Run, 100.0, 60.0),
            SessionRecord::new(date(2026, 1, 16), Discipline::Run, 100.0, 60.0),
        ];
        let buckets = aggregate(&sessions, &r);
        let summary = summarize(&buckets);

        assert_eq!(summary.bucket_count, 5);
        assert!((summary.avg_tss - 200.0 / 5.0).abs() < 1e-6);
        assert!((summary.avg_hours - 2.0 / 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_buckets_summarize_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.bucket_count, 0);
        assert_eq!(summary.total_tss, 0.0);
        assert_eq!(summary.avg_zone_percent, [0.0; ZONE_COUNT]);
    }
}
