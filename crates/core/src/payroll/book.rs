//! Payroll run store.

use ledgerdesk_shared::types::{EmployeeId, PayrollRunId};
use rust_decimal::Decimal;

use super::error::PayrollError;
use super::types::PayrollRun;

/// Ordered collection of payroll runs.
///
/// Insertion order is chronological by construction; runs are never removed.
/// Line edits on a processed run are refused, not errors: the mutators
/// return `Ok(false)` so callers can surface the refusal.
#[derive(Debug, Clone, Default)]
pub struct PayrollBook {
    runs: Vec<PayrollRun>,
}

impl PayrollBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a run at the end of the book.
    pub fn add_run(&mut self, run: PayrollRun) {
        self.runs.push(run);
    }

    /// All runs in insertion (chronological) order.
    #[must_use]
    pub fn runs(&self) -> &[PayrollRun] {
        &self.runs
    }

    /// Looks up one run.
    #[must_use]
    pub fn run(&self, run_id: PayrollRunId) -> Option<&PayrollRun> {
        self.runs.iter().find(|r| r.id == run_id)
    }

    /// Sets the paid flag on one line.
    ///
    /// Returns `Ok(true)` if applied, `Ok(false)` if the run is already
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns `PayrollError` if the run or line does not exist.
    pub fn set_paid(
        &mut self,
        run_id: PayrollRunId,
        employee_id: EmployeeId,
        paid: bool,
    ) -> Result<bool, PayrollError> {
        let run = self.run_mut(run_id)?;
        if run.processed {
            return Ok(false);
        }
        let line = run
            .lines
            .iter_mut()
            .find(|l| l.employee_id == employee_id)
            .ok_or(PayrollError::LineNotFound { run_id, employee_id })?;
        line.paid = paid;
        Ok(true)
    }

    /// Overwrites the amount on one line.
    ///
    /// Returns `Ok(true)` if applied, `Ok(false)` if the run is already
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns `PayrollError` if the run or line does not exist, or the
    /// amount is negative.
    pub fn set_amount(
        &mut self,
        run_id: PayrollRunId,
        employee_id: EmployeeId,
        amount: Decimal,
    ) -> Result<bool, PayrollError> {
        if amount < Decimal::ZERO {
            return Err(PayrollError::NegativeAmount);
        }
        let run = self.run_mut(run_id)?;
        if run.processed {
            return Ok(false);
        }
        let line = run
            .lines
            .iter_mut()
            .find(|l| l.employee_id == employee_id)
            .ok_or(PayrollError::LineNotFound { run_id, employee_id })?;
        line.amount = amount;
        Ok(true)
    }

    /// Finalizes a run: one-way draft to processed transition.
    ///
    /// Idempotent in effect: processing an already-processed run leaves it
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns `PayrollError::RunNotFound` for an unknown run.
    pub fn process(&mut self, run_id: PayrollRunId) -> Result<(), PayrollError> {
        let run = self.run_mut(run_id)?;
        run.processed = true;
        Ok(())
    }

    /// Total paid to an employee across all runs (lines marked paid).
    #[must_use]
    pub fn total_paid_to_employee(&self, employee_id: EmployeeId) -> Decimal {
        self.runs
            .iter()
            .flat_map(|r| &r.lines)
            .filter(|l| l.employee_id == employee_id && l.paid)
            .map(|l| l.amount)
            .sum()
    }

    fn run_mut(&mut self, run_id: PayrollRunId) -> Result<&mut PayrollRun, PayrollError> {
        self.runs
            .iter_mut()
            .find(|r| r.id == run_id)
            .ok_or(PayrollError::RunNotFound(run_id))
    }
}
