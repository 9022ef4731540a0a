//! Directory data types.

use chrono::NaiveDate;
use ledgerdesk_shared::types::{DepartmentId, EmployeeId, ProjectId, SubcontractorId, TaskId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::authz::Role;
use crate::period::DateRange;

/// A department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier.
    pub id: DepartmentId,
    /// Department name.
    pub name: String,
}

/// A project with a budget and a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Total budget.
    pub budget: Decimal,
    /// Project start date.
    pub start_date: NaiveDate,
    /// Project end date.
    pub end_date: NaiveDate,
    /// Owning department.
    pub department_id: DepartmentId,
}

impl Project {
    /// The project's date range, as consumed by the period generator.
    #[must_use]
    pub const fn date_range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// How an employee's compensation is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationMode {
    /// Flat monthly contract amount, month-independent.
    Contract(Decimal),
    /// Recorded work-days times a daily rate.
    Daily(Decimal),
    /// No rate on record; accrues nothing.
    Unspecified,
}

/// An employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Full display name.
    pub full_name: String,
    /// Roles held by this employee.
    pub roles: Vec<Role>,
    /// Daily rate for day-based compensation.
    pub daily_rate: Option<Decimal>,
    /// Flat monthly contract rate. A positive value selects contract mode
    /// regardless of `daily_rate`.
    pub contract_rate: Option<Decimal>,
    /// Department this employee belongs to.
    pub department_id: DepartmentId,
}

impl Employee {
    /// Returns true if the employee holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// The employee's compensation mode.
    ///
    /// A positive `contract_rate` wins over `daily_rate`.
    #[must_use]
    pub fn compensation(&self) -> CompensationMode {
        match self.contract_rate {
            Some(rate) if rate > Decimal::ZERO => CompensationMode::Contract(rate),
            _ => match self.daily_rate {
                Some(rate) => CompensationMode::Daily(rate),
                None => CompensationMode::Unspecified,
            },
        }
    }

    /// Returns true if the employee is contract-based.
    #[must_use]
    pub fn is_contract(&self) -> bool {
        matches!(self.compensation(), CompensationMode::Contract(_))
    }
}

/// A subcontractor with an agreed contract amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcontractor {
    /// Unique identifier.
    pub id: SubcontractorId,
    /// Company or person name.
    pub name: String,
    /// Agreed total amount for the engagement.
    pub agreed_amount: Decimal,
}

/// Subtype of an accounting-flagged task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountingSubtype {
    /// Outgoing payment task.
    Payment,
    /// Incoming payment task.
    Income,
}

/// A task flagged for accounting, selectable when recording a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingTask {
    /// Unique identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Project the task belongs to, if any.
    pub project_id: Option<ProjectId>,
    /// Accounting subtype.
    pub subtype: AccountingSubtype,
    /// Employees selected on the task.
    pub selected_employee_ids: Vec<EmployeeId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_employee() -> Employee {
        Employee {
            id: EmployeeId::new(),
            full_name: "Anna Petrova".into(),
            roles: vec![Role::Executor],
            daily_rate: None,
            contract_rate: None,
            department_id: DepartmentId::new(),
        }
    }

    #[test]
    fn test_positive_contract_rate_selects_contract_mode() {
        let mut employee = base_employee();
        employee.daily_rate = Some(dec!(1000));
        employee.contract_rate = Some(dec!(80000));
        assert_eq!(
            employee.compensation(),
            CompensationMode::Contract(dec!(80000))
        );
        assert!(employee.is_contract());
    }

    #[test]
    fn test_zero_contract_rate_falls_back_to_daily() {
        let mut employee = base_employee();
        employee.daily_rate = Some(dec!(1000));
        employee.contract_rate = Some(dec!(0));
        assert_eq!(employee.compensation(), CompensationMode::Daily(dec!(1000)));
    }

    #[test]
    fn test_no_rates_is_unspecified() {
        assert_eq!(base_employee().compensation(), CompensationMode::Unspecified);
    }
}
