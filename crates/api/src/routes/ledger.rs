//! Payment and income ledger routes.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::middleware::ActingRole;
use crate::state::AppState;
use ledgerdesk_core::authz::Action;
use ledgerdesk_core::ledger::{
    BucketKey, EmployeeShare, LedgerKind, PaymentEntry, PaymentReason, TaskRef,
};
use ledgerdesk_shared::AppError;
use ledgerdesk_shared::types::{EmployeeId, ProjectId, SubcontractorId, TaskId};

/// Creates the ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ledger/{kind}/entries", post(append_entry))
        .route("/ledger/{kind}/buckets/{bucket}/entries", get(list_entries))
        .route("/ledger/{kind}/buckets/{bucket}/total", get(bucket_total))
}

fn parse_kind(kind: &str) -> Result<LedgerKind, ApiError> {
    match kind {
        "expense" => Ok(LedgerKind::Expense),
        "income" => Ok(LedgerKind::Income),
        other => Err(ApiError(AppError::Validation(format!(
            "unknown ledger kind: {other}"
        )))),
    }
}

fn parse_bucket(bucket: &str) -> Result<BucketKey, ApiError> {
    if bucket == "unassigned" {
        return Ok(BucketKey::Unassigned);
    }
    bucket
        .parse::<ProjectId>()
        .map(BucketKey::Project)
        .map_err(|_| ApiError(AppError::Validation(format!("invalid bucket key: {bucket}"))))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// One employee share in an append request.
#[derive(Debug, Deserialize)]
pub struct EmployeeShareInput {
    /// Employee ID.
    pub employee_id: EmployeeId,
    /// Share amount.
    pub amount: Decimal,
}

/// Request body for appending a ledger entry.
#[derive(Debug, Deserialize)]
pub struct AppendEntryRequest {
    /// Target bucket: a project UUID or `"unassigned"`.
    pub bucket: String,
    /// Period column index.
    pub period_index: usize,
    /// Entry amount.
    pub amount: Decimal,
    /// Optional reason code.
    pub reason: Option<PaymentReason>,
    /// Optional task the payment is recorded against.
    pub task_id: Option<TaskId>,
    /// Subcontractor receiving the payment, for subcontract entries.
    pub subcontractor_id: Option<SubcontractorId>,
    /// Optional per-employee breakdown; must sum to `amount`.
    pub employee_payments: Option<Vec<EmployeeShareInput>>,
}

/// Response after appending an entry.
#[derive(Debug, Serialize)]
pub struct AppendEntryResponse {
    /// The stored entry.
    pub entry: PaymentEntry,
    /// New total of the target cell.
    pub cell_total: Decimal,
}

/// Query for cell entry listings.
#[derive(Debug, Deserialize)]
pub struct CellQuery {
    /// Period column index.
    pub period_index: usize,
}

/// Query filters for bucket totals.
#[derive(Debug, Deserialize)]
pub struct TotalQuery {
    /// Restrict to one period column.
    pub period_index: Option<usize>,
    /// Restrict to one reason code.
    pub reason: Option<PaymentReason>,
    /// Restrict to one subcontractor.
    pub subcontractor_id: Option<SubcontractorId>,
}

/// A bucket total.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    /// The summed amount.
    pub total: Decimal,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/ledger/{kind}/entries` - Append an entry to a ledger cell.
async fn append_entry(
    State(state): State<AppState>,
    role: ActingRole,
    Path(kind): Path<String>,
    Json(request): Json<AppendEntryRequest>,
) -> Result<Json<AppendEntryResponse>, ApiError> {
    role.require(Action::RecordPayment)?;

    let kind = parse_kind(&kind)?;
    let bucket = parse_bucket(&request.bucket)?;

    let mut store = state.write()?;

    let task = match request.task_id {
        Some(task_id) => {
            let task = store
                .tasks
                .iter()
                .find(|t| t.id == task_id)
                .ok_or_else(|| ApiError(AppError::NotFound(format!("task {task_id}"))))?;
            Some(TaskRef {
                id: task.id,
                title: task.title.clone(),
            })
        }
        None => None,
    };

    let employee_payments = match request.employee_payments {
        Some(shares) => {
            let mut resolved = Vec::with_capacity(shares.len());
            for share in shares {
                let employee = store.employee(share.employee_id).ok_or_else(|| {
                    ApiError(AppError::NotFound(format!("employee {}", share.employee_id)))
                })?;
                resolved.push(EmployeeShare {
                    employee_id: share.employee_id,
                    name: employee.full_name.clone(),
                    amount: share.amount,
                });
            }
            resolved
        }
        None => Vec::new(),
    };

    let mut entry = PaymentEntry::new(request.amount).with_employee_payments(employee_payments);
    if let Some(reason) = request.reason {
        entry = entry.with_reason(reason);
    }
    if let Some(task) = task {
        entry = entry.with_task(task);
    }
    if let Some(subcontractor_id) = request.subcontractor_id {
        entry = entry.with_subcontractor(subcontractor_id);
    }

    let stored = entry.clone();
    let ledger = match kind {
        LedgerKind::Expense => &mut store.expense,
        LedgerKind::Income => &mut store.income,
    };
    ledger.append(bucket, request.period_index, entry)?;
    let cell_total = ledger.total_for_cell(bucket, request.period_index);

    info!(
        amount = %stored.amount,
        period_index = request.period_index,
        "ledger entry recorded"
    );

    Ok(Json(AppendEntryResponse {
        entry: stored,
        cell_total,
    }))
}

/// GET `/ledger/{kind}/buckets/{bucket}/entries` - Entries in one cell.
async fn list_entries(
    State(state): State<AppState>,
    role: ActingRole,
    Path((kind, bucket)): Path<(String, String)>,
    Query(query): Query<CellQuery>,
) -> Result<Json<Vec<PaymentEntry>>, ApiError> {
    role.require(Action::ViewFinance)?;

    let kind = parse_kind(&kind)?;
    let bucket = parse_bucket(&bucket)?;
    let store = state.read()?;
    let ledger = match kind {
        LedgerKind::Expense => &store.expense,
        LedgerKind::Income => &store.income,
    };

    Ok(Json(ledger.entries(bucket, query.period_index).to_vec()))
}

/// GET `/ledger/{kind}/buckets/{bucket}/total` - Filtered bucket total.
async fn bucket_total(
    State(state): State<AppState>,
    role: ActingRole,
    Path((kind, bucket)): Path<(String, String)>,
    Query(query): Query<TotalQuery>,
) -> Result<Json<TotalResponse>, ApiError> {
    role.require(Action::ViewFinance)?;

    let kind = parse_kind(&kind)?;
    let bucket = parse_bucket(&bucket)?;
    let store = state.read()?;
    let ledger = match kind {
        LedgerKind::Expense => &store.expense,
        LedgerKind::Income => &store.income,
    };

    let total = match (query.period_index, query.reason, query.subcontractor_id) {
        (Some(period_index), None, None) => ledger.total_for_cell(bucket, period_index),
        (None, Some(reason), None) => ledger.total_for_reason(bucket, reason),
        (None, None, Some(subcontractor_id)) => {
            ledger.total_for_subcontractor(bucket, subcontractor_id)
        }
        (None, None, None) => ledger.total_for_bucket(bucket),
        _ => {
            return Err(ApiError(AppError::Validation(
                "at most one of period_index, reason, subcontractor_id".into(),
            )));
        }
    };

    Ok(Json(TotalResponse { total }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("expense").ok(), Some(LedgerKind::Expense));
        assert_eq!(parse_kind("income").ok(), Some(LedgerKind::Income));
        assert!(parse_kind("payroll").is_err());
    }

    #[test]
    fn test_parse_bucket() {
        assert_eq!(parse_bucket("unassigned").ok(), Some(BucketKey::Unassigned));

        let id = ProjectId::new();
        assert_eq!(
            parse_bucket(&id.to_string()).ok(),
            Some(BucketKey::Project(id))
        );
        assert!(parse_bucket("not-a-uuid").is_err());
    }
}
