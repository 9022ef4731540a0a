//! Error mapping to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ledgerdesk_core::ledger::LedgerError;
use ledgerdesk_core::payroll::PayrollError;
use ledgerdesk_shared::AppError;

/// Wrapper giving `AppError` an HTTP response mapping.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<PayrollError> for ApiError {
    fn from(err: PayrollError) -> Self {
        match err {
            PayrollError::RunNotFound(_) | PayrollError::LineNotFound { .. } => {
                Self(AppError::NotFound(err.to_string()))
            }
            PayrollError::NegativeAmount => Self(AppError::Validation(err.to_string())),
        }
    }
}
