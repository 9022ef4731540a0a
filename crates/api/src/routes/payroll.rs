//! Payroll run routes.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::middleware::ActingRole;
use crate::state::AppState;
use ledgerdesk_core::authz::Action;
use ledgerdesk_core::payroll::PayrollRun;
use ledgerdesk_shared::AppError;
use ledgerdesk_shared::types::{EmployeeId, PayrollRunId};

/// Creates the payroll routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payroll/runs", get(list_runs))
        .route("/payroll/runs/{run_id}/process", post(process_run))
        .route(
            "/payroll/runs/{run_id}/lines/{employee_id}",
            put(update_line),
        )
}

/// Request body for updating a payroll line.
///
/// Either field may be given; omitted fields stay unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    /// New line amount.
    pub amount: Option<Decimal>,
    /// New paid flag.
    pub paid: Option<bool>,
}

/// Response for line updates and run processing.
#[derive(Debug, Serialize)]
pub struct UpdateLineResponse {
    /// Whether the edit was applied (false when the run is processed).
    pub applied: bool,
}

/// GET `/payroll/runs` - All payroll runs in chronological order.
async fn list_runs(
    State(state): State<AppState>,
    role: ActingRole,
) -> Result<Json<Vec<PayrollRun>>, ApiError> {
    role.require(Action::ViewFinance)?;
    Ok(Json(state.read()?.payroll.runs().to_vec()))
}

/// PUT `/payroll/runs/{run_id}/lines/{employee_id}` - Edit a draft line.
async fn update_line(
    State(state): State<AppState>,
    role: ActingRole,
    Path((run_id, employee_id)): Path<(PayrollRunId, EmployeeId)>,
    Json(request): Json<UpdateLineRequest>,
) -> Result<Json<UpdateLineResponse>, ApiError> {
    role.require(Action::EditPayroll)?;

    if request.amount.is_none() && request.paid.is_none() {
        return Err(ApiError(AppError::Validation(
            "nothing to update: set amount and/or paid".into(),
        )));
    }

    let mut store = state.write()?;
    let mut applied = true;

    if let Some(amount) = request.amount {
        applied &= store.payroll.set_amount(run_id, employee_id, amount)?;
    }
    if let Some(paid) = request.paid {
        applied &= store.payroll.set_paid(run_id, employee_id, paid)?;
    }

    Ok(Json(UpdateLineResponse { applied }))
}

/// POST `/payroll/runs/{run_id}/process` - Finalize a run (one-way).
async fn process_run(
    State(state): State<AppState>,
    role: ActingRole,
    Path(run_id): Path<PayrollRunId>,
) -> Result<Json<PayrollRun>, ApiError> {
    role.require(Action::ProcessPayroll)?;

    let mut store = state.write()?;
    store.payroll.process(run_id)?;
    info!(%run_id, "payroll run processed");

    let run = store
        .payroll
        .run(run_id)
        .cloned()
        .ok_or_else(|| ApiError(AppError::NotFound(format!("payroll run {run_id}"))))?;

    Ok(Json(run))
}

#[cfg(test)]
mod integration_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::state::AppState;

    /// Returns the router plus the IDs of the draft March advance run and
    /// its first line's employee.
    fn seeded_app() -> (axum::Router, String, String) {
        let state = AppState::new(crate::seed::demo_fixtures());
        let (run_id, employee_id) = {
            let store = state.read().unwrap();
            let run = store
                .payroll
                .runs()
                .iter()
                .find(|r| !r.processed)
                .expect("seed data has a draft run");
            (run.id.to_string(), run.lines[0].employee_id.to_string())
        };
        (crate::create_router(state), run_id, employee_id)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_edit_draft_line_applies() {
        let (app, run_id, employee_id) = seeded_app();

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/payroll/runs/{run_id}/lines/{employee_id}"))
            .header("x-role", "accountant")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "amount": "12500", "paid": true }).to_string(),
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["applied"], true);
    }

    #[tokio::test]
    async fn test_edit_after_processing_is_refused() {
        let (app, run_id, employee_id) = seeded_app();

        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/payroll/runs/{run_id}/process"))
            .header("x-role", "administrator")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let run = body_json(response).await;
        assert_eq!(run["processed"], true);

        // Processing again is a no-op, not an error.
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/payroll/runs/{run_id}/process"))
            .header("x-role", "administrator")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/payroll/runs/{run_id}/lines/{employee_id}"))
            .header("x-role", "accountant")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "paid": true }).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["applied"], false);
    }

    #[tokio::test]
    async fn test_empty_update_rejected() {
        let (app, run_id, employee_id) = seeded_app();

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/payroll/runs/{run_id}/lines/{employee_id}"))
            .header("x-role", "accountant")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json!({}).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_project_lead_may_not_edit_payroll() {
        let (app, run_id, employee_id) = seeded_app();

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/payroll/runs/{run_id}/lines/{employee_id}"))
            .header("x-role", "project_lead")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "paid": true }).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
