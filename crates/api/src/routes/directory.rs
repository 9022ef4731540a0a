//! Read-only directory routes: projects, employees, subcontractors, tasks.

use axum::{Json, Router, extract::State, routing::get};

use crate::error::ApiError;
use crate::state::AppState;
use ledgerdesk_core::directory::{AccountingTask, Department, Employee, Project, Subcontractor};

/// Creates the directory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/employees", get(list_employees))
        .route("/departments", get(list_departments))
        .route("/subcontractors", get(list_subcontractors))
        .route("/tasks", get(list_tasks))
}

/// GET `/projects` - All projects.
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.read()?.projects.clone()))
}

/// GET `/employees` - All employees.
async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.read()?.employees.clone()))
}

/// GET `/departments` - All departments.
async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(state.read()?.departments.clone()))
}

/// GET `/subcontractors` - All subcontractors.
async fn list_subcontractors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Subcontractor>>, ApiError> {
    Ok(Json(state.read()?.subcontractors.clone()))
}

/// GET `/tasks` - Accounting-flagged tasks.
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<AccountingTask>>, ApiError> {
    Ok(Json(state.read()?.tasks.clone()))
}
