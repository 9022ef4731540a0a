//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Entry amount cannot be negative.
    #[error("Entry amount cannot be negative")]
    NegativeAmount,

    /// Per-employee breakdown does not sum to the entry amount.
    #[error("Employee breakdown sums to {breakdown_total}, expected {amount}")]
    BreakdownMismatch {
        /// The entry amount.
        amount: Decimal,
        /// Sum of the per-employee shares.
        breakdown_total: Decimal,
    },
}
