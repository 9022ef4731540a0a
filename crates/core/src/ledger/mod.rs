//! Append-only payment and income ledgers.
//!
//! This module implements the core ledger functionality:
//! - Payment entries with reason codes and per-employee breakdowns
//! - Bucket keys (project or the unassigned overhead bucket)
//! - Append-only cell storage keyed by bucket and period index
//! - Read-side folds (cell, bucket, reason, subcontractor totals)
//! - Error types for ledger operations

pub mod error;
pub mod store;
pub mod types;

#[cfg(test)]
mod store_props;

pub use error::LedgerError;
pub use store::PaymentLedger;
pub use types::{BucketKey, EmployeeShare, LedgerKind, PaymentEntry, PaymentReason, TaskRef};
