//! Work-day recording routes.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use ledgerdesk_core::timesheet::WorkDayRecord;
use ledgerdesk_shared::AppError;
use ledgerdesk_shared::types::{EmployeeId, MonthKey, ProjectId};

/// Creates the timesheet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/timesheet/records", post(record_days))
        .route("/timesheet/employees/{employee_id}", get(employee_days))
}

/// Request body for recording work-days.
#[derive(Debug, Deserialize)]
pub struct RecordDaysRequest {
    /// Employee who worked the days.
    pub employee_id: EmployeeId,
    /// Project the days were worked on.
    pub project_id: ProjectId,
    /// Month the days fall in, `YYYY-MM`.
    pub month: String,
    /// Number of work-days to record.
    pub days: u32,
}

/// One per-project day count in a month listing.
#[derive(Debug, Serialize)]
pub struct ProjectDays {
    /// Project.
    pub project_id: ProjectId,
    /// Recorded days.
    pub days: u32,
}

/// Response after recording, and for month listings.
#[derive(Debug, Serialize)]
pub struct EmployeeDaysResponse {
    /// Per-project day counts for the month.
    pub records: Vec<ProjectDays>,
    /// Total days across projects.
    pub total_days: u32,
}

/// Query for month listings.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// Month, `YYYY-MM`.
    pub month: String,
}

fn parse_month(month: &str) -> Result<MonthKey, ApiError> {
    month
        .parse()
        .map_err(|e: String| ApiError(AppError::Validation(e)))
}

fn days_response(
    store: &crate::state::MemoryStore,
    employee_id: EmployeeId,
    month: MonthKey,
) -> EmployeeDaysResponse {
    let records: Vec<ProjectDays> = store
        .timesheet
        .days_for(employee_id, month)
        .into_iter()
        .map(|(project_id, days)| ProjectDays { project_id, days })
        .collect();
    let total_days = records.iter().map(|r| r.days).sum();
    EmployeeDaysResponse {
        records,
        total_days,
    }
}

/// POST `/timesheet/records` - Record work-days; repeated records accumulate.
///
/// Any role may record time, as in the original workflow where executors
/// track their own days.
async fn record_days(
    State(state): State<AppState>,
    Json(request): Json<RecordDaysRequest>,
) -> Result<Json<EmployeeDaysResponse>, ApiError> {
    let month = parse_month(&request.month)?;

    let mut store = state.write()?;
    if store.employee(request.employee_id).is_none() {
        return Err(ApiError(AppError::NotFound(format!(
            "employee {}",
            request.employee_id
        ))));
    }
    if store.project(request.project_id).is_none() {
        return Err(ApiError(AppError::NotFound(format!(
            "project {}",
            request.project_id
        ))));
    }

    store.timesheet.record(WorkDayRecord {
        employee_id: request.employee_id,
        project_id: request.project_id,
        month,
        days: request.days,
    });

    Ok(Json(days_response(&store, request.employee_id, month)))
}

/// GET `/timesheet/employees/{employee_id}?month=YYYY-MM` - Month listing.
async fn employee_days(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<EmployeeDaysResponse>, ApiError> {
    let month = parse_month(&query.month)?;
    let store = state.read()?;
    if store.employee(employee_id).is_none() {
        return Err(ApiError(AppError::NotFound(format!(
            "employee {employee_id}"
        ))));
    }
    Ok(Json(days_response(&store, employee_id, month)))
}
