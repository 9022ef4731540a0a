//! Property-based tests for the payment ledger.
//!
//! - Appends are strictly additive: a cell total grows by exactly the
//!   appended amount and no prior entry changes
//! - Bucket totals equal the sum of their cell totals

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::store::PaymentLedger;
use super::types::{BucketKey, PaymentEntry};
use ledgerdesk_shared::types::ProjectId;

/// Strategy for non-negative amounts up to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a small period index.
fn period_index() -> impl Strategy<Value = usize> {
    0usize..26
}

proptest! {
    #[test]
    fn append_grows_cell_total_by_exactly_amount(
        amounts in proptest::collection::vec((period_index(), amount()), 1..40)
    ) {
        let mut ledger = PaymentLedger::new();
        let bucket = BucketKey::Project(ProjectId::new());

        for (index, value) in amounts {
            let before = ledger.total_for_cell(bucket, index);
            let prior: Vec<_> = ledger.entries(bucket, index).to_vec();

            ledger.append(bucket, index, PaymentEntry::new(value)).unwrap();

            prop_assert_eq!(ledger.total_for_cell(bucket, index), before + value);
            prop_assert_eq!(&ledger.entries(bucket, index)[..prior.len()], &prior[..]);
        }
    }

    #[test]
    fn bucket_total_is_sum_of_cells(
        amounts in proptest::collection::vec((period_index(), amount()), 0..40)
    ) {
        let mut ledger = PaymentLedger::new();
        let bucket = BucketKey::Project(ProjectId::new());

        for (index, value) in &amounts {
            ledger.append(bucket, *index, PaymentEntry::new(*value)).unwrap();
        }

        let by_cells: Decimal = (0..26).map(|i| ledger.total_for_cell(bucket, i)).sum();
        prop_assert_eq!(ledger.total_for_bucket(bucket), by_cells);
    }
}
