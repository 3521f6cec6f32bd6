//! Analysis period resolution.
//!
//! Turns a human-chosen period ("past 4 weeks + until the A-race") into a
//! concrete, unambiguous `[start, end]` date range against the anchors the
//! caller supplies: today's date and an optional priority-race date. The
//! resolver never returns an inverted or absent range; recoverable mistakes
//! from the date pickers (end before today, swapped custom dates) are
//! normalized and flagged rather than surfaced as errors.

use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// How the period's end date is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// Trailing window ending today.
    PastOnly,
    /// Trailing window extended to a user-picked end date.
    PastToCustom,
    /// Trailing window extended to the priority-race date.
    PastToRace,
    /// Both endpoints user-picked.
    FullCustom,
}

/// A user-chosen analysis period, prior to resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSelection {
    /// Trailing window length in weeks. Ignored by `FullCustom`.
    pub duration_weeks: u32,
    /// End-date anchoring.
    pub anchor_mode: AnchorMode,
    /// Start date, required by `FullCustom`.
    pub custom_start: Option<NaiveDate>,
    /// End date, used by `PastToCustom` and required by `FullCustom`.
    pub custom_end: Option<NaiveDate>,
}

impl PeriodSelection {
    /// Trailing window of `weeks` ending today.
    pub fn past_weeks(weeks: u32) -> Self {
        Self {
            duration_weeks: weeks,
            anchor_mode: AnchorMode::PastOnly,
            custom_start: None,
            custom_end: None,
        }
    }

    /// Trailing window of `weeks` extended to `end`.
    pub fn past_to_custom(weeks: u32, end: NaiveDate) -> Self {
        Self {
            duration_weeks: weeks,
            anchor_mode: AnchorMode::PastToCustom,
            custom_start: None,
            custom_end: Some(end),
        }
    }

    /// Trailing window of `weeks` extended to the race date.
    pub fn past_to_race(weeks: u32) -> Self {
        Self {
            duration_weeks: weeks,
            anchor_mode: AnchorMode::PastToRace,
            custom_start: None,
            custom_end: None,
        }
    }

    /// Fully custom range.
    pub fn full_custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            duration_weeks: 0,
            anchor_mode: AnchorMode::FullCustom,
            custom_start: Some(start),
            custom_end: Some(end),
        }
    }

    /// Parse the preset strings the app persists for its period picker:
    /// `"4weeks"`, `"2weeks_race"`, `"12weeks_custom"`, or `"custom"`.
    /// Custom dates travel separately from the preset string.
    ///
    /// # Errors
    /// Returns `InvalidSelection` for unrecognized presets or a `custom`
    /// preset without both dates.
    pub fn from_preset(
        preset: &str,
        custom_start: Option<NaiveDate>,
        custom_end: Option<NaiveDate>,
    ) -> AnalyticsResult<Self> {
        if preset == "custom" {
            return match (custom_start, custom_end) {
                (Some(start), Some(end)) => Ok(Self::full_custom(start, end)),
                _ => Err(AnalyticsError::InvalidSelection(
                    "custom preset requires both start and end dates".to_string(),
                )),
            };
        }

        // "<n>week" or "<n>weeks", optionally suffixed "_race" or "_custom".
        let (base, anchor_mode) = if let Some(base) = preset.strip_suffix("_race") {
            (base, AnchorMode::PastToRace)
        } else if let Some(base) = preset.strip_suffix("_custom") {
            (base, AnchorMode::PastToCustom)
        } else {
            (preset, AnchorMode::PastOnly)
        };

        let digits = base
            .strip_suffix("weeks")
            .or_else(|| base.strip_suffix("week"))
            .ok_or_else(|| {
                AnalyticsError::InvalidSelection(format!("Unrecognized period preset '{preset}'"))
            })?;
        let weeks: u32 = digits.parse().map_err(|_| {
            AnalyticsError::InvalidSelection(format!("Unrecognized period preset '{preset}'"))
        })?;

        Ok(Self {
            duration_weeks: weeks,
            anchor_mode,
            custom_start: None,
            custom_end,
        })
    }

    /// Resolve this selection into concrete date bounds.
    ///
    /// Rules by anchor mode:
    /// - `PastOnly`: `[today - weeks*7, today]`.
    /// - `PastToCustom`: same start; end is the custom date, clamped to
    ///   `today` when absent or in the past.
    /// - `PastToRace`: same start; end is the race date. Without a race
    ///   date, falls back to `PastOnly` (race mode is selectable before a
    ///   race has been scheduled).
    /// - `FullCustom`: both custom dates; swapped if inverted.
    ///
    /// The returned range always satisfies `start <= end`; `corrected` is
    /// set when a clamp or swap was applied.
    ///
    /// # Errors
    /// Returns `InvalidSelection` when `FullCustom` is missing a date, or a
    /// trailing-window mode has `duration_weeks == 0`.
    pub fn resolve(
        &self,
        today: NaiveDate,
        race_date: Option<NaiveDate>,
    ) -> AnalyticsResult<ResolvedRange> {
        if self.anchor_mode == AnchorMode::FullCustom {
            let (Some(start), Some(end)) = (self.custom_start, self.custom_end) else {
                return Err(AnalyticsError::InvalidSelection(
                    "custom range requires both start and end dates".to_string(),
                ));
            };
            if end < start {
                tracing::warn!(%start, %end, "custom range inverted, swapping");
                return Ok(ResolvedRange::corrected(end, start));
            }
            return Ok(ResolvedRange::new(start, end));
        }

        if self.duration_weeks == 0 {
            return Err(AnalyticsError::InvalidSelection(
                "duration must be at least one week".to_string(),
            ));
        }
        let start = today - Duration::weeks(i64::from(self.duration_weeks));

        match self.anchor_mode {
            AnchorMode::PastOnly => Ok(ResolvedRange::new(start, today)),
            AnchorMode::PastToCustom => match self.custom_end {
                Some(end) if end >= today => Ok(ResolvedRange::new(start, end)),
                Some(end) => {
                    tracing::debug!(%end, %today, "custom end before today, clamping");
                    Ok(ResolvedRange::corrected(start, today))
                }
                None => Ok(ResolvedRange::new(start, today)),
            },
            AnchorMode::PastToRace => match race_date {
                Some(race) if race >= today => Ok(ResolvedRange::new(start, race)),
                Some(race) => {
                    tracing::debug!(%race, %today, "race date already passed, clamping");
                    Ok(ResolvedRange::corrected(start, today))
                }
                None => {
                    tracing::debug!("race mode selected without a race date, using past-only");
                    Ok(ResolvedRange::new(start, today))
                }
            },
            AnchorMode::FullCustom => unreachable!("handled above"),
        }
    }
}

/// Concrete date bounds produced by the resolver. `start <= end` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// True when the resolver clamped or swapped the selection's dates.
    pub corrected: bool,
}

impl ResolvedRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            corrected: false,
        }
    }

    fn corrected(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            corrected: true,
        }
    }

    /// Inclusive span in days (a single-day range spans 0).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2026, 1, 10);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_past_only() {
        let range = PeriodSelection::past_weeks(2).resolve(today(), None).unwrap();
        assert_eq!(range.start, date(2025, 12, 27));
        assert_eq!(range.end, today());
        assert!(!range.corrected);
    }

    #[test]
    fn test_past_to_race() {
        let range = PeriodSelection::past_to_race(4)
            .resolve(today(), Some(date(2026, 1, 18)))
            .unwrap();
        assert_eq!(range.start, date(2025, 12, 13));
        assert_eq!(range.end, date(2026, 1, 18));
    }

    #[test]
    fn test_past_to_race_without_race_date_falls_back() {
        let range = PeriodSelection::past_to_race(4).resolve(today(), None).unwrap();
        assert_eq!(range.end, today());
        assert!(!range.corrected);
    }

    #[test]
    fn test_past_race_date_clamps_to_today() {
        let range = PeriodSelection::past_to_race(4)
            .resolve(today(), Some(date(2025, 11, 1)))
            .unwrap();
        assert_eq!(range.end, today());
        assert!(range.corrected);
    }

    #[test]
    fn test_past_to_custom_clamps_past_end() {
        let range = PeriodSelection::past_to_custom(2, date(2026, 1, 2))
            .resolve(today(), None)
            .unwrap();
        assert_eq!(range.end, today());
        assert!(range.corrected);
    }

    #[test]
    fn test_past_to_custom_missing_end_falls_back() {
        let selection = PeriodSelection {
            duration_weeks: 2,
            anchor_mode: AnchorMode::PastToCustom,
            custom_start: None,
            custom_end: None,
        };
        let range = selection.resolve(today(), None).unwrap();
        assert_eq!(range.end, today());
        assert!(!range.corrected);
    }

    #[test]
    fn test_full_custom_swaps_inverted() {
        let range = PeriodSelection::full_custom(date(2026, 2, 1), date(2026, 1, 1))
            .resolve(today(), None)
            .unwrap();
        assert_eq!(range.start, date(2026, 1, 1));
        assert_eq!(range.end, date(2026, 2, 1));
        assert!(range.corrected);
    }

    #[test]
    fn test_full_custom_missing_dates_is_error() {
        let selection = PeriodSelection {
            duration_weeks: 0,
            anchor_mode: AnchorMode::FullCustom,
            custom_start: Some(date(2026, 1, 1)),
            custom_end: None,
        };
        assert!(selection.resolve(today(), None).is_err());
    }

    #[test]
    fn test_zero_weeks_is_error() {
        assert!(PeriodSelection::past_weeks(0).resolve(today(), None).is_err());
    }

    #[test]
    fn test_start_never_after_end_across_modes() {
        let selections = [
            PeriodSelection::past_weeks(1),
            PeriodSelection::past_to_custom(1, date(2025, 6, 1)),
            PeriodSelection::past_to_race(1),
            PeriodSelection::full_custom(date(2026, 3, 1), date(2026, 2, 1)),
        ];
        for selection in &selections {
            let range = selection.resolve(today(), Some(date(2025, 12, 1))).unwrap();
            assert!(range.start <= range.end, "inverted range for {selection:?}");
        }
    }

    #[test]
    fn test_preset_parsing() {
        let sel = PeriodSelection::from_preset("4weeks", None, None).unwrap();
        assert_eq!(sel.duration_weeks, 4);
        assert_eq!(sel.anchor_mode, AnchorMode::PastOnly);

        let sel = PeriodSelection::from_preset("2weeks_race", None, None).unwrap();
        assert_eq!(sel.duration_weeks, 2);
        assert_eq!(sel.anchor_mode, AnchorMode::PastToRace);

        let sel =
            PeriodSelection::from_preset("12weeks_custom", None, Some(date(2026, 3, 1))).unwrap();
        assert_eq!(sel.duration_weeks, 12);
        assert_eq!(sel.anchor_mode, AnchorMode::PastToCustom);
        assert_eq!(sel.custom_end, Some(date(2026, 3, 1)));

        let sel = PeriodSelection::from_preset("1week", None, None).unwrap();
        assert_eq!(sel.duration_weeks, 1);

        let sel = PeriodSelection::from_preset(
            "custom",
            Some(date(2026, 1, 1)),
            Some(date(2026, 2, 1)),
        )
        .unwrap();
        assert_eq!(sel.anchor_mode, AnchorMode::FullCustom);
    }

    #[test]
    fn test_preset_parsing_rejects_garbage() {
        assert!(PeriodSelection::from_preset("fortnight", None, None).is_err());
        assert!(PeriodSelection::from_preset("weeks_race", None, None).is_err());
        assert!(PeriodSelection::from_preset("custom", None, None).is_err());
        // Exactly one week/weeks suffix is accepted.
        assert!(PeriodSelection::from_preset("4weeksweeks", None, None).is_err());
        assert!(PeriodSelection::from_preset("4weekweeks_race", None, None).is_err());
    }

    #[test]
    fn test_span_days() {
        let range = ResolvedRange::new(date(2026, 1, 1), date(2026, 1, 15));
        assert_eq!(range.span_days(), 14);
    }
}
