//! Payroll data types.

use chrono::NaiveDate;
use ledgerdesk_shared::types::{EmployeeId, MonthKey, PayrollRunId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollRunType {
    /// Mid-month advance.
    Advance,
    /// End-of-month salary.
    Salary,
}

/// One employee's line within a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// Employee ID.
    pub employee_id: EmployeeId,
    /// Employee display name at run creation time.
    pub employee_name: String,
    /// Amount for this line.
    pub amount: Decimal,
    /// Whether this line has been paid out.
    pub paid: bool,
}

/// A payroll run.
///
/// State machine: `processed == false` (draft, lines mutable) transitions
/// one way to `processed == true` (read-only). There is no unprocess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier.
    pub id: PayrollRunId,
    /// Run date.
    pub date: NaiveDate,
    /// Advance or salary.
    pub run_type: PayrollRunType,
    /// Month the run settles.
    pub month: MonthKey,
    /// Per-employee lines.
    pub lines: Vec<PayrollLine>,
    /// Whether the run has been finalized.
    pub processed: bool,
}

impl PayrollRun {
    /// Returns true if line fields may still be edited.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        !self.processed
    }

    /// Sum of line amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// Sum of amounts on lines marked paid.
    #[must_use]
    pub fn total_paid(&self) -> Decimal {
        self.lines
            .iter()
            .filter(|l| l.paid)
            .map(|l| l.amount)
            .sum()
    }

    /// The line for one employee, if present.
    #[must_use]
    pub fn line(&self, employee_id: EmployeeId) -> Option<&PayrollLine> {
        self.lines.iter().find(|l| l.employee_id == employee_id)
    }
}
