//! Reconciliation report routes.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::ActingRole;
use crate::state::AppState;
use ledgerdesk_core::authz::Action;
use ledgerdesk_core::reconcile::{
    EmployeeReconciliation, OrganizationReconciliation, ProjectReconciliation,
    ReconciliationService,
};
use ledgerdesk_shared::AppError;
use ledgerdesk_shared::types::{EmployeeId, MonthKey, ProjectId};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/projects/{project_id}", get(project_report))
        .route("/reports/employees/{employee_id}", get(employee_report))
        .route("/reports/organization", get(organization_report))
}

/// Query for employee reports.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// Month under reconciliation, `YYYY-MM`.
    pub month: String,
}

/// GET `/reports/projects/{project_id}` - Budget vs. paid for one project.
async fn project_report(
    State(state): State<AppState>,
    role: ActingRole,
    Path(project_id): Path<ProjectId>,
) -> Result<Json<ProjectReconciliation>, ApiError> {
    role.require(Action::ViewReports)?;

    let store = state.read()?;
    let project = store
        .project(project_id)
        .ok_or_else(|| ApiError(AppError::NotFound(format!("project {project_id}"))))?;

    Ok(Json(ReconciliationService::project(
        project,
        &store.expense,
        &store.income,
    )))
}

/// GET `/reports/employees/{employee_id}?month=YYYY-MM` - Accrued vs. paid.
async fn employee_report(
    State(state): State<AppState>,
    role: ActingRole,
    Path(employee_id): Path<EmployeeId>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<EmployeeReconciliation>, ApiError> {
    role.require(Action::ViewReports)?;

    let month: MonthKey = query
        .month
        .parse()
        .map_err(|e: String| ApiError(AppError::Validation(e)))?;

    let store = state.read()?;
    let employee = store
        .employee(employee_id)
        .ok_or_else(|| ApiError(AppError::NotFound(format!("employee {employee_id}"))))?;

    Ok(Json(ReconciliationService::employee(
        employee,
        month,
        &store.timesheet,
        &store.payroll,
    )))
}

/// GET `/reports/organization` - Organization-wide rollup.
async fn organization_report(
    State(state): State<AppState>,
    role: ActingRole,
) -> Result<Json<OrganizationReconciliation>, ApiError> {
    role.require(Action::ViewReports)?;

    let store = state.read()?;
    Ok(Json(ReconciliationService::organization(
        &store.projects,
        &store.expense,
        &store.income,
    )))
}

#[cfg(test)]
mod integration_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::AppState;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_organization_rollup_over_fixtures() {
        let app = crate::create_router(AppState::new(crate::seed::demo_fixtures()));

        let request = Request::builder()
            .uri("/api/v1/reports/organization")
            .header("x-role", "lead")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_budget"], "2000000");
        assert_eq!(body["total_paid"], "235000");
        assert_eq!(body["total_income"], "300000");
    }

    #[tokio::test]
    async fn test_employee_report_rejects_bad_month() {
        let state = AppState::new(crate::seed::demo_fixtures());
        let employee_id = state.read().unwrap().employees[0].id;
        let app = crate::create_router(state);

        let request = Request::builder()
            .uri(format!(
                "/api/v1/reports/employees/{employee_id}?month=March-2026"
            ))
            .header("x-role", "accountant")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_logged_404() {
        let app = crate::create_router(AppState::new(crate::seed::demo_fixtures()));

        let request = Request::builder()
            .uri("/api/v1/ledger/expense/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
