//! Period sequence generation.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::marker::PeriodMarker;

/// An inclusive date range, typically a project's start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Range start.
    pub start: NaiveDate,
    /// Range end.
    pub end: NaiveDate,
}

/// Policy selecting how the period window is derived.
///
/// The dashboard historically mixed two policies across views; here they are
/// variants of one parameterized generator. `RangeDerived` with a two-week
/// buffer is the canonical default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum PeriodPolicy {
    /// Window spans the union of the input ranges plus a trailing buffer.
    RangeDerived {
        /// Number of buffer weeks appended after the latest range end.
        buffer_weeks: u32,
    },
    /// Window is the current half-year (Jan-Jun or Jul-Dec) containing `today`.
    FixedHalfYear,
}

impl Default for PeriodPolicy {
    fn default() -> Self {
        Self::RangeDerived { buffer_weeks: 2 }
    }
}

/// Generates the ordered sequence of week markers for the given policy.
///
/// Pure function of its inputs: repeated calls with the same `today` and
/// ranges return the same sequence. Week starts are normalized to Monday and
/// consecutive markers are exactly 7 days apart.
#[must_use]
pub fn generate(policy: PeriodPolicy, today: NaiveDate, ranges: &[DateRange]) -> Vec<PeriodMarker> {
    let window = match policy {
        PeriodPolicy::RangeDerived { buffer_weeks } => range_window(ranges, buffer_weeks),
        PeriodPolicy::FixedHalfYear => Some(half_year_window(today)),
    };

    let Some((start, end)) = window else {
        return Vec::new();
    };

    let mut markers = Vec::new();
    let mut week_start = monday_of(start);
    while week_start <= end {
        markers.push(PeriodMarker { week_start });
        week_start += Duration::weeks(1);
    }
    markers
}

/// Window derived from the union of input ranges plus a trailing buffer.
///
/// A buffer so large that the window end overflows the calendar yields no
/// window rather than panicking.
fn range_window(ranges: &[DateRange], buffer_weeks: u32) -> Option<(NaiveDate, NaiveDate)> {
    let earliest = ranges.iter().map(|r| r.start).min()?;
    let latest = ranges.iter().map(|r| r.end).max()?;
    let end = latest.checked_add_signed(Duration::weeks(i64::from(buffer_weeks)))?;
    Some((earliest, end))
}

/// The half-year window (Jan 1..Jun 30 or Jul 1..Dec 31) containing `today`.
fn half_year_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = today.year();
    if today.month() <= 6 {
        (date(year, 1, 1), date(year, 6, 30))
    } else {
        (date(year, 7, 1), date(year, 12, 31))
    }
}

/// Monday of the week containing `day`.
fn monday_of(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
