//! Reconciliation data types.

use ledgerdesk_shared::types::{EmployeeId, MonthKey, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Three-tier budget-health classification.
///
/// Classified on the fraction of budget remaining. The cut points are part
/// of the contract: exactly 0.50 is `Healthy`, exactly 0.10 is `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    /// At least half the budget remains.
    Healthy,
    /// Between 10% and 50% of the budget remains.
    Warning,
    /// Less than 10% of the budget remains.
    Critical,
}

impl HealthTier {
    /// Classifies a remaining-budget fraction.
    #[must_use]
    pub fn classify(remaining_fraction: Decimal) -> Self {
        let half = Decimal::new(5, 1);
        let tenth = Decimal::new(1, 1);
        if remaining_fraction >= half {
            Self::Healthy
        } else if remaining_fraction >= tenth {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

/// Per-project reconciliation figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReconciliation {
    /// Project ID.
    pub project_id: ProjectId,
    /// Project budget.
    pub budget: Decimal,
    /// Total paid out of the expense ledger for this project.
    pub total_paid: Decimal,
    /// Budget minus total paid.
    pub remaining: Decimal,
    /// Total income recorded for this project.
    pub total_income: Decimal,
    /// Total paid to subcontractors (subcontract-reason entries).
    pub subcontract_paid: Decimal,
    /// Budget-health tier from the remaining fraction.
    pub tier: HealthTier,
}

/// Per-employee reconciliation for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReconciliation {
    /// Employee ID.
    pub employee_id: EmployeeId,
    /// Month under reconciliation.
    pub month: MonthKey,
    /// Accrued compensation for the month.
    pub accrued: Decimal,
    /// Total paid to the employee (paid payroll lines across runs).
    pub paid: Decimal,
    /// Accrued minus paid.
    pub remaining: Decimal,
}

/// Organization-wide reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationReconciliation {
    /// Sum of project budgets.
    pub total_budget: Decimal,
    /// Total expenses across all projects plus the unassigned bucket.
    pub total_paid: Decimal,
    /// Total income across all projects plus the unassigned bucket.
    pub total_income: Decimal,
    /// Sum of per-project remaining amounts.
    pub total_remaining: Decimal,
    /// Expenses in the unassigned (overhead) bucket.
    pub unassigned_paid: Decimal,
    /// Per-project breakdown.
    pub projects: Vec<ProjectReconciliation>,
}
