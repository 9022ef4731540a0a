//! Budget vs. paid vs. accrued reconciliation.
//!
//! Pure read-side folds over the ledgers, payroll book, and timesheets.
//! Nothing here mutates state; aggregates are recomputed from scratch on
//! each call, which is fine at this data scale.

pub mod service;
pub mod types;


pub use service::ReconciliationService;
pub use types::{
    EmployeeReconciliation, HealthTier, OrganizationReconciliation, ProjectReconciliation,
};
