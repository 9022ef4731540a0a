//! Salary allocation preview routes.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::ActingRole;
use crate::state::AppState;
use ledgerdesk_core::allocation::{ProjectShare, ProportionalAllocator};
use ledgerdesk_core::authz::Action;
use ledgerdesk_core::ledger::BucketKey;
use ledgerdesk_shared::AppError;
use ledgerdesk_shared::types::{EmployeeId, MonthKey};

/// Creates the allocation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/allocations/preview", post(preview_allocation))
}

/// Request body for an allocation preview.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Employee whose work-days drive the split.
    pub employee_id: EmployeeId,
    /// Month of work-days, `YYYY-MM`.
    pub month: String,
    /// Amount to distribute.
    pub amount: Decimal,
    /// Apply the largest-remainder correction so shares sum exactly.
    #[serde(default)]
    pub exact: bool,
}

/// An allocation preview: per-project shares plus any overhead remainder.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    /// Per-project shares.
    pub shares: Vec<ProjectShare>,
    /// Amount attributed to company overhead (unassigned bucket).
    pub overhead: Decimal,
}

/// POST `/allocations/preview` - Split an amount across an employee's
/// projects in proportion to recorded work-days.
///
/// Contract employees are not split: the full amount goes to the single
/// project they worked in that month, or to overhead when their work-days
/// name no unique project.
async fn preview_allocation(
    State(state): State<AppState>,
    role: ActingRole,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    role.require(Action::ViewFinance)?;

    let month: MonthKey = request
        .month
        .parse()
        .map_err(|e: String| ApiError(AppError::Validation(e)))?;
    if request.amount < Decimal::ZERO {
        return Err(ApiError(AppError::Validation(
            "amount must be non-negative".into(),
        )));
    }

    let store = state.read()?;
    let employee = store
        .employee(request.employee_id)
        .ok_or_else(|| ApiError(AppError::NotFound(format!("employee {}", request.employee_id))))?;

    let work_days = store.timesheet.days_for(request.employee_id, month);

    let (shares, overhead) = if employee.is_contract() {
        let declared = match work_days.as_slice() {
            [(project_id, _)] => Some(*project_id),
            _ => None,
        };
        match ProportionalAllocator::contract_attribution(declared, request.amount) {
            (BucketKey::Project(project_id), amount) => {
                (vec![ProjectShare { project_id, amount }], Decimal::ZERO)
            }
            (BucketKey::Unassigned, amount) => (Vec::new(), amount),
        }
    } else if request.exact {
        (
            ProportionalAllocator::allocate_exact(&work_days, request.amount, 2),
            Decimal::ZERO,
        )
    } else {
        (
            ProportionalAllocator::allocate(&work_days, request.amount, 2),
            Decimal::ZERO,
        )
    };

    Ok(Json(PreviewResponse { shares, overhead }))
}
