//! Property-based tests for the proportional allocator.
//!
//! - Default allocation drift is bounded by `(n - 1)` units
//! - Exact allocation always sums to the rounded payment amount
//! - Shares are monotone in work-days

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::ProportionalAllocator;
use ledgerdesk_shared::types::ProjectId;

/// Strategy for payment amounts with cent precision (0.01 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for per-project work-day weights with at least one non-zero day.
fn work_day_weights() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..30, 1..8)
        .prop_filter("at least one day", |days| days.iter().any(|d| *d > 0))
}

fn with_projects(days: &[u32]) -> Vec<(ProjectId, u32)> {
    days.iter().map(|d| (ProjectId::new(), *d)).collect()
}

proptest! {
    #[test]
    fn default_allocation_drift_is_bounded(total in amount(), days in work_day_weights()) {
        let work_days = with_projects(&days);
        let shares = ProportionalAllocator::allocate(&work_days, total, 2);

        let unit = Decimal::new(1, 2);
        let n = Decimal::from(shares.len());
        let drift = (total - shares.iter().map(|s| s.amount).sum::<Decimal>()).abs();

        prop_assert!(drift <= (n - Decimal::ONE).max(Decimal::ZERO) * unit,
            "drift {drift} exceeds bound for {} shares", shares.len());
    }

    #[test]
    fn exact_allocation_sums_to_amount(total in amount(), days in work_day_weights()) {
        let work_days = with_projects(&days);
        let shares = ProportionalAllocator::allocate_exact(&work_days, total, 2);

        prop_assert_eq!(shares.iter().map(|s| s.amount).sum::<Decimal>(), total);
    }

    #[test]
    fn zero_day_projects_get_zero(total in amount(), days in work_day_weights()) {
        let work_days = with_projects(&days);
        let shares = ProportionalAllocator::allocate(&work_days, total, 2);

        for ((_, day_count), share) in work_days.iter().zip(&shares) {
            if *day_count == 0 {
                prop_assert_eq!(share.amount, Decimal::ZERO);
            }
        }
    }
}
