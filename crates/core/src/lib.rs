//! Core finance logic for Ledgerdesk.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, calculations, and store semantics live here; the API
//! layer injects storage and maps errors to HTTP.
//!
//! # Modules
//!
//! - `period` - Weekly payment-schedule period generation
//! - `ledger` - Append-only payment/income ledgers
//! - `payroll` - Payroll runs and the draft/processed state machine
//! - `timesheet` - Recorded work-days per employee, project, and month
//! - `accrual` - Accrued compensation from work-days and rates
//! - `allocation` - Proportional payment allocation across projects
//! - `reconcile` - Budget vs. paid vs. accrued reconciliation folds
//! - `directory` - Projects, employees, subcontractors, accounting tasks
//! - `authz` - Role-based action policy

pub mod accrual;
pub mod allocation;
pub mod authz;
pub mod directory;
pub mod ledger;
pub mod payroll;
pub mod period;
pub mod reconcile;
pub mod timesheet;
