//! Period markers and month grouping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single week column in the payment schedule.
///
/// Invariant: within a generated sequence, `week_start` is always a Monday
/// and consecutive markers are exactly 7 days apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodMarker {
    /// Monday of the week this column covers.
    pub week_start: NaiveDate,
}

impl PeriodMarker {
    /// Display label for the column header, `dd.MM` of the week start.
    #[must_use]
    pub fn label(&self) -> String {
        self.week_start.format("%d.%m").to_string()
    }

    /// Month header label, e.g. `"January 2026"`.
    #[must_use]
    pub fn month_label(&self) -> String {
        self.week_start.format("%B %Y").to_string()
    }
}

/// A contiguous run of week columns sharing the same month label.
///
/// Used for two-level header rendering: the month label spans `count`
/// week columns starting at `first_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
    /// Month header label.
    pub label: String,
    /// Index of the first marker in this group.
    pub first_index: usize,
    /// Number of consecutive markers in this group.
    pub count: usize,
}

/// Groups consecutive markers by month label.
#[must_use]
pub fn group_by_month(markers: &[PeriodMarker]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    for (index, marker) in markers.iter().enumerate() {
        let label = marker.month_label();
        match groups.last_mut() {
            Some(group) if group.label == label => group.count += 1,
            _ => groups.push(MonthGroup {
                label,
                first_index: index,
                count: 1,
            }),
        }
    }

    groups
}
