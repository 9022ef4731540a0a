//! Payroll error types.

use ledgerdesk_shared::types::{EmployeeId, PayrollRunId};
use thiserror::Error;

/// Errors that can occur during payroll operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// Payroll run not found.
    #[error("Payroll run not found: {0}")]
    RunNotFound(PayrollRunId),

    /// No line for the employee in the run.
    #[error("No line for employee {employee_id} in run {run_id}")]
    LineNotFound {
        /// The run that was targeted.
        run_id: PayrollRunId,
        /// The employee with no line.
        employee_id: EmployeeId,
    },

    /// Line amount cannot be negative.
    #[error("Line amount cannot be negative")]
    NegativeAmount,
}
