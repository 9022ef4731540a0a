//! Append-only ledger store.
//!
//! A `PaymentLedger` maps `(bucket, period index)` cells to ordered lists of
//! entries. There is no removal operation: corrections are appended as new
//! entries. The store itself is a plain owned value; callers inject it where
//! shared access is needed (the API layer wraps it in a lock).

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{BucketKey, PaymentEntry, PaymentReason};
use ledgerdesk_shared::types::SubcontractorId;

/// Append-only mapping from `(bucket, period index)` to payment entries.
#[derive(Debug, Clone, Default)]
pub struct PaymentLedger {
    cells: BTreeMap<(BucketKey, usize), Vec<PaymentEntry>>,
}

impl PaymentLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to a cell.
    ///
    /// Prior entries in the cell are never replaced or removed.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeAmount` for a negative amount, and
    /// `LedgerError::BreakdownMismatch` when a non-empty per-employee
    /// breakdown does not sum to the entry amount.
    pub fn append(
        &mut self,
        bucket: BucketKey,
        period_index: usize,
        entry: PaymentEntry,
    ) -> Result<(), LedgerError> {
        if entry.amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }
        if !entry.employee_payments.is_empty() {
            let breakdown_total = entry.breakdown_total();
            if breakdown_total != entry.amount {
                return Err(LedgerError::BreakdownMismatch {
                    amount: entry.amount,
                    breakdown_total,
                });
            }
        }

        self.cells.entry((bucket, period_index)).or_default().push(entry);
        Ok(())
    }

    /// Entries in a single cell, in append order.
    #[must_use]
    pub fn entries(&self, bucket: BucketKey, period_index: usize) -> &[PaymentEntry] {
        self.cells
            .get(&(bucket, period_index))
            .map_or(&[], Vec::as_slice)
    }

    /// Sum of amounts in a single cell.
    #[must_use]
    pub fn total_for_cell(&self, bucket: BucketKey, period_index: usize) -> Decimal {
        self.entries(bucket, period_index)
            .iter()
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of amounts over all periods of a bucket.
    #[must_use]
    pub fn total_for_bucket(&self, bucket: BucketKey) -> Decimal {
        self.bucket_entries(bucket).map(|e| e.amount).sum()
    }

    /// Sum of amounts in a bucket with the given reason code.
    #[must_use]
    pub fn total_for_reason(&self, bucket: BucketKey, reason: PaymentReason) -> Decimal {
        self.bucket_entries(bucket)
            .filter(|e| e.reason == Some(reason))
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of amounts in a bucket attributed to one subcontractor.
    #[must_use]
    pub fn total_for_subcontractor(
        &self,
        bucket: BucketKey,
        subcontractor_id: SubcontractorId,
    ) -> Decimal {
        self.bucket_entries(bucket)
            .filter(|e| e.subcontractor_id == Some(subcontractor_id))
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of an employee's shares across every bucket and period.
    #[must_use]
    pub fn total_for_employee(&self, employee_id: ledgerdesk_shared::types::EmployeeId) -> Decimal {
        self.cells
            .values()
            .flatten()
            .flat_map(|e| &e.employee_payments)
            .filter(|s| s.employee_id == employee_id)
            .map(|s| s.amount)
            .sum()
    }

    /// Sum of amounts over the whole ledger.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.cells.values().flatten().map(|e| e.amount).sum()
    }

    /// Buckets that have at least one entry, deduplicated and in key order.
    #[must_use]
    pub fn buckets(&self) -> Vec<BucketKey> {
        let mut buckets: Vec<BucketKey> = self.cells.keys().map(|(b, _)| *b).collect();
        buckets.dedup();
        buckets
    }

    fn bucket_entries(&self, bucket: BucketKey) -> impl Iterator<Item = &PaymentEntry> {
        self.cells
            .range((bucket, 0)..=(bucket, usize::MAX))
            .flat_map(|(_, entries)| entries)
    }
}
