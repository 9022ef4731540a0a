//! Application state: the injected in-memory store.
//!
//! The original dashboard kept these collections as module-level mutable
//! globals. Here they live in one owned `MemoryStore` injected through
//! `AppState`, so tests construct their own store and nothing is ambient.

use std::sync::{Arc, RwLock};

use crate::error::ApiError;
use ledgerdesk_core::directory::{AccountingTask, Department, Employee, Project, Subcontractor};
use ledgerdesk_core::ledger::PaymentLedger;
use ledgerdesk_core::payroll::PayrollBook;
use ledgerdesk_core::timesheet::TimesheetStore;
use ledgerdesk_shared::AppError;
use ledgerdesk_shared::types::{EmployeeId, ProjectId};

/// All finance collections for one process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Projects (read-only to the finance core).
    pub projects: Vec<Project>,
    /// Employees.
    pub employees: Vec<Employee>,
    /// Departments.
    pub departments: Vec<Department>,
    /// Subcontractors.
    pub subcontractors: Vec<Subcontractor>,
    /// Accounting-flagged tasks.
    pub tasks: Vec<AccountingTask>,
    /// Expense ledger.
    pub expense: PaymentLedger,
    /// Income ledger.
    pub income: PaymentLedger,
    /// Payroll runs.
    pub payroll: PayrollBook,
    /// Recorded work-days.
    pub timesheet: TimesheetStore,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a project.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Looks up an employee.
    #[must_use]
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single process-wide store. Handlers take the lock for the
    /// duration of one synchronous operation; nothing suspends mid-mutation.
    pub store: Arc<RwLock<MemoryStore>>,
}

impl AppState {
    /// Creates state around a store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Takes the read lock.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, MemoryStore>, ApiError> {
        self.store
            .read()
            .map_err(|_| ApiError(AppError::Internal("store lock poisoned".into())))
    }

    /// Takes the write lock.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, MemoryStore>, ApiError> {
        self.store
            .write()
            .map_err(|_| ApiError(AppError::Internal("store lock poisoned".into())))
    }
}
