//! Payroll runs and the draft/processed state machine.
//!
//! A payroll run (advance or salary) holds one line per employee. While the
//! run is a draft, line amounts and paid flags are mutable; processing the
//! run is a one-way transition after which line edits are refused.

pub mod book;
pub mod error;
pub mod types;

pub use book::PayrollBook;
pub use error::PayrollError;
pub use types::{PayrollLine, PayrollRun, PayrollRunType};
