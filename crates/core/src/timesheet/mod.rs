//! Recorded work-days per employee, project, and month.
//!
//! Timesheet records feed both the accrual calculator (days times daily
//! rate) and the proportional allocator (per-project day weights).

use std::collections::BTreeMap;

use ledgerdesk_shared::types::{EmployeeId, MonthKey, ProjectId};
use serde::{Deserialize, Serialize};

/// One employee's recorded days on one project in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayRecord {
    /// Employee who worked the days.
    pub employee_id: EmployeeId,
    /// Project the days were worked on.
    pub project_id: ProjectId,
    /// Month the days fall in.
    pub month: MonthKey,
    /// Number of recorded work-days.
    pub days: u32,
}

/// Store of work-day records.
///
/// Records for the same `(employee, project, month)` accumulate.
#[derive(Debug, Clone, Default)]
pub struct TimesheetStore {
    days: BTreeMap<(EmployeeId, MonthKey, ProjectId), u32>,
}

impl TimesheetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records work-days, accumulating onto any existing record.
    ///
    /// Accumulation saturates at `u32::MAX` rather than overflowing.
    pub fn record(&mut self, record: WorkDayRecord) {
        let days = self
            .days
            .entry((record.employee_id, record.month, record.project_id))
            .or_insert(0);
        *days = days.saturating_add(record.days);
    }

    /// Per-project day counts for an employee in a month, in project order.
    #[must_use]
    pub fn days_for(&self, employee_id: EmployeeId, month: MonthKey) -> Vec<(ProjectId, u32)> {
        self.days
            .range((employee_id, month, ProjectId::from_uuid(uuid::Uuid::nil()))..)
            .take_while(|((e, m, _), _)| *e == employee_id && *m == month)
            .map(|((_, _, p), days)| (*p, *days))
            .collect()
    }

    /// Total days an employee recorded in a month across projects.
    #[must_use]
    pub fn total_days(&self, employee_id: EmployeeId, month: MonthKey) -> u32 {
        self.days_for(employee_id, month)
            .iter()
            .map(|(_, d)| d)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month() -> MonthKey {
        MonthKey::new(2026, 3).unwrap()
    }

    #[test]
    fn test_records_accumulate_per_project() {
        let mut store = TimesheetStore::new();
        let employee = EmployeeId::new();
        let project = ProjectId::new();

        store.record(WorkDayRecord {
            employee_id: employee,
            project_id: project,
            month: month(),
            days: 3,
        });
        store.record(WorkDayRecord {
            employee_id: employee,
            project_id: project,
            month: month(),
            days: 2,
        });

        assert_eq!(store.days_for(employee, month()), vec![(project, 5)]);
    }

    #[test]
    fn test_total_days_spans_projects() {
        let mut store = TimesheetStore::new();
        let employee = EmployeeId::new();

        for days in [5, 3] {
            store.record(WorkDayRecord {
                employee_id: employee,
                project_id: ProjectId::new(),
                month: month(),
                days,
            });
        }

        assert_eq!(store.total_days(employee, month()), 8);
    }

    #[test]
    fn test_months_are_isolated() {
        let mut store = TimesheetStore::new();
        let employee = EmployeeId::new();
        let project = ProjectId::new();

        store.record(WorkDayRecord {
            employee_id: employee,
            project_id: project,
            month: MonthKey::new(2026, 2).unwrap(),
            days: 10,
        });

        assert!(store.days_for(employee, month()).is_empty());
        assert_eq!(store.total_days(employee, month()), 0);
    }

    #[test]
    fn test_accumulation_saturates() {
        let mut store = TimesheetStore::new();
        let employee = EmployeeId::new();
        let project = ProjectId::new();

        for days in [u32::MAX, u32::MAX, 7] {
            store.record(WorkDayRecord {
                employee_id: employee,
                project_id: project,
                month: month(),
                days,
            });
        }

        assert_eq!(store.days_for(employee, month()), vec![(project, u32::MAX)]);
    }

    #[test]
    fn test_employees_are_isolated() {
        let mut store = TimesheetStore::new();
        let project = ProjectId::new();
        store.record(WorkDayRecord {
            employee_id: EmployeeId::new(),
            project_id: project,
            month: month(),
            days: 4,
        });

        assert_eq!(store.total_days(EmployeeId::new(), month()), 0);
    }
}
