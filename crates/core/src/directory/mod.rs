//! Projects, employees, subcontractors, and accounting tasks.
//!
//! These records are owned by the project-management collaborator; the
//! finance core reads them and never mutates them.

pub mod types;

pub use types::{
    AccountingSubtype, AccountingTask, CompensationMode, Department, Employee, Project,
    Subcontractor,
};
