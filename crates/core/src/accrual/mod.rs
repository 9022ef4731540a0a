//! Accrued compensation calculation.

use ledgerdesk_shared::types::MonthKey;
use rust_decimal::Decimal;

use crate::authz::Role;
use crate::directory::{CompensationMode, Employee};
use crate::timesheet::TimesheetStore;

/// Computes an employee's accrued compensation for a month.
pub struct AccrualCalculator;

impl AccrualCalculator {
    /// Accrued amount for `employee` in `month`.
    ///
    /// Contract employees accrue their flat monthly rate regardless of
    /// recorded work-days. Day-rate employees accrue recorded days times the
    /// daily rate; zero recorded days accrues zero (indistinguishable from
    /// "not assigned", which the source model also does not signal).
    /// Accountants are not accrual subjects and always accrue zero.
    #[must_use]
    pub fn accrued(employee: &Employee, month: MonthKey, timesheet: &TimesheetStore) -> Decimal {
        if employee.has_role(Role::Accountant) {
            return Decimal::ZERO;
        }

        match employee.compensation() {
            CompensationMode::Contract(rate) => rate,
            CompensationMode::Daily(rate) => {
                let total_days = timesheet.total_days(employee.id, month);
                Decimal::from(total_days) * rate
            }
            CompensationMode::Unspecified => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timesheet::WorkDayRecord;
    use ledgerdesk_shared::types::{DepartmentId, EmployeeId, ProjectId};
    use rust_decimal_macros::dec;

    fn month() -> MonthKey {
        MonthKey::new(2026, 3).unwrap()
    }

    fn employee(daily: Option<Decimal>, contract: Option<Decimal>) -> Employee {
        Employee {
            id: EmployeeId::new(),
            full_name: "Anna Petrova".into(),
            roles: vec![Role::Executor],
            daily_rate: daily,
            contract_rate: contract,
            department_id: DepartmentId::new(),
        }
    }

    fn record(employee_id: EmployeeId, days: u32) -> WorkDayRecord {
        WorkDayRecord {
            employee_id,
            project_id: ProjectId::new(),
            month: month(),
            days,
        }
    }

    #[test]
    fn test_daily_rate_times_recorded_days() {
        let employee = employee(Some(dec!(1000)), None);
        let mut timesheet = TimesheetStore::new();
        // {projA: 5, projB: 3} at rate 1000 -> 8000
        timesheet.record(record(employee.id, 5));
        timesheet.record(record(employee.id, 3));

        assert_eq!(
            AccrualCalculator::accrued(&employee, month(), &timesheet),
            dec!(8000)
        );
    }

    #[test]
    fn test_contract_rate_independent_of_work_days() {
        let employee = employee(Some(dec!(1000)), Some(dec!(75000)));
        let mut timesheet = TimesheetStore::new();
        timesheet.record(record(employee.id, 22));

        assert_eq!(
            AccrualCalculator::accrued(&employee, month(), &timesheet),
            dec!(75000)
        );
        // A different month with no records accrues the same flat amount.
        assert_eq!(
            AccrualCalculator::accrued(&employee, MonthKey::new(2026, 7).unwrap(), &timesheet),
            dec!(75000)
        );
    }

    #[test]
    fn test_no_records_accrues_zero() {
        let employee = employee(Some(dec!(1200)), None);
        let timesheet = TimesheetStore::new();
        assert_eq!(
            AccrualCalculator::accrued(&employee, month(), &timesheet),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_accountant_accrues_zero() {
        let mut accountant = employee(Some(dec!(1000)), None);
        accountant.roles = vec![Role::Accountant];
        let mut timesheet = TimesheetStore::new();
        timesheet.record(record(accountant.id, 10));

        assert_eq!(
            AccrualCalculator::accrued(&accountant, month(), &timesheet),
            Decimal::ZERO
        );
    }
}
