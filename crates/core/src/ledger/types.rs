//! Ledger data types.

use ledgerdesk_shared::types::{EmployeeId, PaymentEntryId, ProjectId, SubcontractorId, TaskId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which of the two parallel ledgers an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKind {
    /// Outgoing payments (salaries, subcontractors, other expenses).
    Expense,
    /// Incoming payments from clients.
    Income,
}

/// Reason code attached to a payment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentReason {
    /// Salary payment to employees.
    Salary,
    /// Payment to a subcontractor.
    Subcontract,
    /// Additional project expense.
    Additional,
    /// Uncategorized expense.
    Other,
    /// Incoming client payment.
    Income,
}

/// Ledger cell address: a project bucket or the unassigned overhead bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKey {
    /// Entries attributed to a specific project.
    Project(ProjectId),
    /// Entries not attributable to any project (company overhead).
    Unassigned,
}

/// Reference to the accounting task a payment was recorded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Task ID.
    pub id: TaskId,
    /// Task title at the time of recording.
    pub title: String,
}

/// One employee's share of a payment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeShare {
    /// Employee ID.
    pub employee_id: EmployeeId,
    /// Employee display name at the time of recording.
    pub name: String,
    /// Share amount.
    pub amount: Decimal,
}

/// A single monetary entry in a ledger cell.
///
/// Entries are immutable once appended; corrections are recorded as new
/// entries, never by mutating an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    /// Unique identifier.
    pub id: PaymentEntryId,
    /// Payment amount, non-negative.
    pub amount: Decimal,
    /// Task this payment was recorded against, if any.
    pub task: Option<TaskRef>,
    /// Reason code, if any.
    pub reason: Option<PaymentReason>,
    /// Subcontractor the payment went to; set when `reason` is `Subcontract`
    /// so per-subcontractor balances stay derivable.
    pub subcontractor_id: Option<SubcontractorId>,
    /// Per-employee breakdown. When non-empty, share amounts must sum to
    /// `amount`.
    #[serde(default)]
    pub employee_payments: Vec<EmployeeShare>,
}

impl PaymentEntry {
    /// Creates a bare entry with just an amount.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            id: PaymentEntryId::new(),
            amount,
            task: None,
            reason: None,
            subcontractor_id: None,
            employee_payments: Vec::new(),
        }
    }

    /// Sets the reason code.
    #[must_use]
    pub fn with_reason(mut self, reason: PaymentReason) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Sets the task reference.
    #[must_use]
    pub fn with_task(mut self, task: TaskRef) -> Self {
        self.task = Some(task);
        self
    }

    /// Sets the subcontractor.
    #[must_use]
    pub fn with_subcontractor(mut self, subcontractor_id: SubcontractorId) -> Self {
        self.subcontractor_id = Some(subcontractor_id);
        self
    }

    /// Sets the per-employee breakdown.
    #[must_use]
    pub fn with_employee_payments(mut self, shares: Vec<EmployeeShare>) -> Self {
        self.employee_payments = shares;
        self
    }

    /// Sum of the per-employee breakdown.
    #[must_use]
    pub fn breakdown_total(&self) -> Decimal {
        self.employee_payments.iter().map(|s| s.amount).sum()
    }
}
