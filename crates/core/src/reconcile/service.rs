//! Reconciliation folds.

use ledgerdesk_shared::types::MonthKey;
use rust_decimal::Decimal;

use super::types::{
    EmployeeReconciliation, HealthTier, OrganizationReconciliation, ProjectReconciliation,
};
use crate::accrual::AccrualCalculator;
use crate::directory::{Employee, Project};
use crate::ledger::{BucketKey, PaymentLedger, PaymentReason};
use crate::payroll::PayrollBook;
use crate::timesheet::TimesheetStore;

/// Read-only aggregation over the finance stores.
pub struct ReconciliationService;

impl ReconciliationService {
    /// Per-project budget vs. paid vs. income figures.
    #[must_use]
    pub fn project(
        project: &Project,
        expense: &PaymentLedger,
        income: &PaymentLedger,
    ) -> ProjectReconciliation {
        let bucket = BucketKey::Project(project.id);
        let total_paid = expense.total_for_bucket(bucket);
        let remaining = project.budget - total_paid;

        let fraction = if project.budget.is_zero() {
            Decimal::ZERO
        } else {
            remaining / project.budget
        };

        ProjectReconciliation {
            project_id: project.id,
            budget: project.budget,
            total_paid,
            remaining,
            total_income: income.total_for_bucket(bucket),
            subcontract_paid: expense.total_for_reason(bucket, PaymentReason::Subcontract),
            tier: HealthTier::classify(fraction),
        }
    }

    /// Net cash movement for one project in one period column.
    #[must_use]
    pub fn net_for_period(
        bucket: BucketKey,
        period_index: usize,
        expense: &PaymentLedger,
        income: &PaymentLedger,
    ) -> Decimal {
        income.total_for_cell(bucket, period_index) - expense.total_for_cell(bucket, period_index)
    }

    /// Per-employee accrued vs. paid for one month.
    ///
    /// "Paid" is the sum of paid payroll lines across runs; ad-hoc ledger
    /// salary entries carry their own per-employee breakdown and are
    /// reported through the ledger folds, not double-counted here.
    #[must_use]
    pub fn employee(
        employee: &Employee,
        month: MonthKey,
        timesheet: &TimesheetStore,
        payroll: &PayrollBook,
    ) -> EmployeeReconciliation {
        let accrued = AccrualCalculator::accrued(employee, month, timesheet);
        let paid = payroll.total_paid_to_employee(employee.id);

        EmployeeReconciliation {
            employee_id: employee.id,
            month,
            accrued,
            paid,
            remaining: accrued - paid,
        }
    }

    /// Organization-wide rollup across all projects plus the unassigned
    /// overhead bucket.
    #[must_use]
    pub fn organization(
        projects: &[Project],
        expense: &PaymentLedger,
        income: &PaymentLedger,
    ) -> OrganizationReconciliation {
        let per_project: Vec<ProjectReconciliation> = projects
            .iter()
            .map(|p| Self::project(p, expense, income))
            .collect();

        let unassigned_paid = expense.total_for_bucket(BucketKey::Unassigned);
        let unassigned_income = income.total_for_bucket(BucketKey::Unassigned);

        OrganizationReconciliation {
            total_budget: per_project.iter().map(|p| p.budget).sum(),
            total_paid: per_project.iter().map(|p| p.total_paid).sum::<Decimal>()
                + unassigned_paid,
            total_income: per_project.iter().map(|p| p.total_income).sum::<Decimal>()
                + unassigned_income,
            total_remaining: per_project.iter().map(|p| p.remaining).sum(),
            unassigned_paid,
            projects: per_project,
        }
    }
}
