//! Proportional payment allocation across projects.
//!
//! A salary payment to an employee is attributed to the projects they worked
//! on in proportion to recorded work-days. The default allocator rounds each
//! share independently, which can leave the share sum short of (or past) the
//! payment by up to `n - 1` smallest units; that drift is a documented
//! property of the source model and is asserted, not corrected. Callers that
//! need shares to sum exactly use `allocate_exact`, which applies a
//! largest-remainder correction.

#[cfg(test)]
mod props;

use ledgerdesk_shared::types::ProjectId;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ledger::BucketKey;

/// One project's share of an allocated payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectShare {
    /// Project receiving the share.
    pub project_id: ProjectId,
    /// Share amount.
    pub amount: Decimal,
}

/// Distributes payment amounts across projects by work-day weights.
pub struct ProportionalAllocator;

impl ProportionalAllocator {
    /// Allocates `amount` across projects proportionally to work-days.
    ///
    /// Each share is `amount * days / total_days`, rounded independently with
    /// banker's rounding at `decimal_places`. The sum of shares may drift
    /// from `amount` by at most `(n - 1)` units of the target precision.
    /// Zero total days yields no shares.
    #[must_use]
    pub fn allocate(
        work_days: &[(ProjectId, u32)],
        amount: Decimal,
        decimal_places: u32,
    ) -> Vec<ProjectShare> {
        let total_days: u32 = work_days.iter().map(|(_, d)| d).sum();
        if total_days == 0 {
            return Vec::new();
        }
        let total = Decimal::from(total_days);

        work_days
            .iter()
            .map(|(project_id, days)| ProjectShare {
                project_id: *project_id,
                amount: (amount * Decimal::from(*days) / total).round_dp_with_strategy(
                    decimal_places,
                    RoundingStrategy::MidpointNearestEven,
                ),
            })
            .collect()
    }

    /// Allocates with a largest-remainder correction so shares sum exactly
    /// to `amount` (rounded to `decimal_places`).
    ///
    /// Shares are floored to the target precision first; the leftover units
    /// go to the shares with the largest fractional remainders.
    #[must_use]
    pub fn allocate_exact(
        work_days: &[(ProjectId, u32)],
        amount: Decimal,
        decimal_places: u32,
    ) -> Vec<ProjectShare> {
        let total_days: u32 = work_days.iter().map(|(_, d)| d).sum();
        if total_days == 0 {
            return Vec::new();
        }
        let total = Decimal::from(total_days);
        let unit = Decimal::new(1, decimal_places);
        let amount_rounded = amount
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);

        let exact: Vec<Decimal> = work_days
            .iter()
            .map(|(_, days)| amount_rounded * Decimal::from(*days) / total)
            .collect();

        let mut rounded: Vec<Decimal> = exact
            .iter()
            .map(|a| a.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero))
            .collect();

        let sum_rounded: Decimal = rounded.iter().copied().sum();
        let remainder = amount_rounded - sum_rounded;
        let units_to_distribute = (remainder / unit)
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_u64()
            .and_then(|u| usize::try_from(u).ok())
            .unwrap_or(0);

        if units_to_distribute > 0 {
            let mut remainders: Vec<(usize, Decimal)> = exact
                .iter()
                .zip(rounded.iter())
                .enumerate()
                .map(|(i, (e, r))| (i, *e - *r))
                .collect();
            remainders
                .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            for (idx, _) in remainders.iter().take(units_to_distribute) {
                rounded[*idx] += unit;
            }
        }

        work_days
            .iter()
            .zip(rounded)
            .map(|((project_id, _), amount)| ProjectShare {
                project_id: *project_id,
                amount,
            })
            .collect()
    }

    /// Attribution for a contract employee: the full amount goes to their
    /// single declared project, or to company overhead when none exists.
    #[must_use]
    pub fn contract_attribution(
        declared_project: Option<ProjectId>,
        amount: Decimal,
    ) -> (BucketKey, Decimal) {
        match declared_project {
            Some(project_id) => (BucketKey::Project(project_id), amount),
            None => (BucketKey::Unassigned, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn projects(n: usize) -> Vec<ProjectId> {
        (0..n).map(|_| ProjectId::new()).collect()
    }

    #[test]
    fn test_even_split() {
        let ids = projects(2);
        let shares =
            ProportionalAllocator::allocate(&[(ids[0], 5), (ids[1], 5)], dec!(10000), 0);
        assert_eq!(shares[0].amount, dec!(5000));
        assert_eq!(shares[1].amount, dec!(5000));
    }

    #[test]
    fn test_exact_thirds() {
        let ids = projects(2);
        let shares = ProportionalAllocator::allocate(&[(ids[0], 1), (ids[1], 2)], dec!(3000), 0);
        assert_eq!(shares[0].amount, dec!(1000));
        assert_eq!(shares[1].amount, dec!(2000));
    }

    #[test]
    fn test_rounding_drift_is_kept_and_bounded() {
        let ids = projects(3);
        let work_days = [(ids[0], 1), (ids[1], 1), (ids[2], 1)];
        let shares = ProportionalAllocator::allocate(&work_days, dec!(100), 0);

        // 100/3 -> 33 each; the sum is one unit short of the payment.
        assert_eq!(
            shares.iter().map(|s| s.amount).collect::<Vec<_>>(),
            vec![dec!(33), dec!(33), dec!(33)]
        );
        let drift = (dec!(100) - shares.iter().map(|s| s.amount).sum::<Decimal>()).abs();
        assert_eq!(drift, dec!(1));
        assert!(drift <= Decimal::from(work_days.len() - 1));
    }

    #[test]
    fn test_allocate_exact_sums_to_amount() {
        let ids = projects(3);
        let work_days = [(ids[0], 1), (ids[1], 1), (ids[2], 1)];
        let shares = ProportionalAllocator::allocate_exact(&work_days, dec!(100), 0);

        assert_eq!(shares.iter().map(|s| s.amount).sum::<Decimal>(), dec!(100));
        // The extra unit lands on one share; all are 33 or 34.
        assert!(shares.iter().all(|s| s.amount == dec!(33) || s.amount == dec!(34)));
    }

    #[test]
    fn test_allocate_exact_keeps_exact_cases_exact() {
        let ids = projects(2);
        let shares =
            ProportionalAllocator::allocate_exact(&[(ids[0], 1), (ids[1], 2)], dec!(3000), 0);
        assert_eq!(shares[0].amount, dec!(1000));
        assert_eq!(shares[1].amount, dec!(2000));
    }

    #[test]
    fn test_zero_total_days_yields_no_shares() {
        let ids = projects(2);
        assert!(ProportionalAllocator::allocate(&[(ids[0], 0), (ids[1], 0)], dec!(500), 2).is_empty());
        assert!(ProportionalAllocator::allocate(&[], dec!(500), 2).is_empty());
    }

    #[test]
    fn test_contract_attribution() {
        let project = ProjectId::new();
        assert_eq!(
            ProportionalAllocator::contract_attribution(Some(project), dec!(75000)),
            (BucketKey::Project(project), dec!(75000))
        );
        assert_eq!(
            ProportionalAllocator::contract_attribution(None, dec!(75000)),
            (BucketKey::Unassigned, dec!(75000))
        );
    }

    #[test]
    fn test_cent_precision_shares() {
        let ids = projects(3);
        let work_days = [(ids[0], 1), (ids[1], 1), (ids[2], 1)];
        let shares = ProportionalAllocator::allocate(&work_days, dec!(100), 2);

        // 33.33 each at cent precision; drift is one cent.
        assert!(shares.iter().all(|s| s.amount == dec!(33.33)));
        assert_eq!(
            dec!(100) - shares.iter().map(|s| s.amount).sum::<Decimal>(),
            dec!(0.01)
        );
    }
}
