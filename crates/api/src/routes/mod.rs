//! API route definitions.

use axum::http::Uri;
use tracing::warn;

use crate::AppState;
use crate::error::ApiError;
use ledgerdesk_shared::AppError;

pub mod allocation;
pub mod directory;
pub mod health;
pub mod ledger;
pub mod payroll;
pub mod periods;
pub mod reports;
pub mod timesheet;

/// Creates the API router with all routes.
pub fn api_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .merge(health::routes())
        .merge(directory::routes())
        .merge(periods::routes())
        .merge(ledger::routes())
        .merge(allocation::routes())
        .merge(payroll::routes())
        .merge(timesheet::routes())
        .merge(reports::routes())
}

/// Fallback for unrecognized routes.
///
/// The mock layer this replaces answered unknown routes with an empty
/// collection; here they are a logged 404.
pub async fn unknown_route(uri: Uri) -> ApiError {
    warn!(%uri, "unhandled route");
    ApiError(AppError::NotFound(format!("no route for {uri}")))
}
