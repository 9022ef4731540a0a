//! Role-based action policy.
//!
//! One table answering "may this role do this action", replacing the
//! scattered role-string comparisons of the original dashboard.

use serde::{Deserialize, Serialize};

/// User roles in the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Administrator,
    /// Leads projects, sees finance but does not run payroll.
    ProjectLead,
    /// Executes tasks; no finance access.
    Executor,
    /// Runs payroll and records payments. Not an accrual subject.
    Accountant,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrator" | "admin" => Ok(Self::Administrator),
            "project_lead" | "lead" => Ok(Self::ProjectLead),
            "executor" => Ok(Self::Executor),
            "accountant" => Ok(Self::Accountant),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// Finance actions gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// View ledgers and payment schedules.
    ViewFinance,
    /// Append payment/income entries to the ledgers.
    RecordPayment,
    /// Edit draft payroll lines (amounts, paid flags).
    EditPayroll,
    /// Finalize a payroll run.
    ProcessPayroll,
    /// View reconciliation reports.
    ViewReports,
}

/// Authorization policy table.
pub struct Policy;

impl Policy {
    /// Returns true if `role` may perform `action`.
    #[must_use]
    pub const fn allows(role: Role, action: Action) -> bool {
        match role {
            Role::Administrator | Role::Accountant => true,
            Role::ProjectLead => matches!(action, Action::ViewFinance | Action::ViewReports),
            Role::Executor => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_administrator_and_accountant_allow_everything() {
        for action in [
            Action::ViewFinance,
            Action::RecordPayment,
            Action::EditPayroll,
            Action::ProcessPayroll,
            Action::ViewReports,
        ] {
            assert!(Policy::allows(Role::Administrator, action));
            assert!(Policy::allows(Role::Accountant, action));
        }
    }

    #[test]
    fn test_project_lead_is_read_only() {
        assert!(Policy::allows(Role::ProjectLead, Action::ViewFinance));
        assert!(Policy::allows(Role::ProjectLead, Action::ViewReports));
        assert!(!Policy::allows(Role::ProjectLead, Action::RecordPayment));
        assert!(!Policy::allows(Role::ProjectLead, Action::EditPayroll));
        assert!(!Policy::allows(Role::ProjectLead, Action::ProcessPayroll));
    }

    #[test]
    fn test_executor_has_no_finance_access() {
        assert!(!Policy::allows(Role::Executor, Action::ViewFinance));
        assert!(!Policy::allows(Role::Executor, Action::ViewReports));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("accountant").unwrap(), Role::Accountant);
        assert_eq!(Role::from_str("Admin").unwrap(), Role::Administrator);
        assert_eq!(Role::from_str("project_lead").unwrap(), Role::ProjectLead);
        assert!(Role::from_str("intern").is_err());
    }
}
