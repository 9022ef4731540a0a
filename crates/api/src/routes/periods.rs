//! Payment-schedule period routes.

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::ActingRole;
use crate::state::AppState;
use ledgerdesk_core::authz::Action;
use ledgerdesk_core::directory::Project;
use ledgerdesk_core::period::{self, DateRange, MonthGroup, PeriodPolicy};
use ledgerdesk_shared::AppError;

/// Creates period routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/periods", get(get_periods))
}

/// Largest accepted trailing buffer, two years of week columns.
const MAX_BUFFER_WEEKS: u32 = 104;

/// Query parameters for period generation.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// `range_derived` (default) or `fixed_half_year`.
    pub policy: Option<String>,
    /// Trailing buffer weeks for the range-derived policy.
    pub buffer_weeks: Option<u32>,
}

/// One week column in the response.
#[derive(Debug, Serialize)]
pub struct PeriodResponse {
    /// Week start date.
    pub week_start: chrono::NaiveDate,
    /// Column label, `dd.MM`.
    pub label: String,
}

/// Full schedule response: week columns plus month header groups.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Week columns in order.
    pub periods: Vec<PeriodResponse>,
    /// Month header groups.
    pub months: Vec<MonthGroup>,
}

/// GET `/periods` - The week-column schedule spanning all projects.
async fn get_periods(
    State(state): State<AppState>,
    role: ActingRole,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    role.require(Action::ViewFinance)?;

    let buffer_weeks = query.buffer_weeks.unwrap_or(2);
    if buffer_weeks > MAX_BUFFER_WEEKS {
        return Err(ApiError(AppError::Validation(format!(
            "buffer_weeks must be at most {MAX_BUFFER_WEEKS}"
        ))));
    }

    let policy = match query.policy.as_deref() {
        None | Some("range_derived") => PeriodPolicy::RangeDerived { buffer_weeks },
        Some("fixed_half_year") => PeriodPolicy::FixedHalfYear,
        Some(other) => {
            return Err(ApiError(AppError::Validation(format!(
                "unknown period policy: {other}"
            ))));
        }
    };

    let store = state.read()?;
    let ranges: Vec<DateRange> = store.projects.iter().map(Project::date_range).collect();
    drop(store);

    let markers = period::generate(policy, Utc::now().date_naive(), &ranges);
    let months = period::group_by_month(&markers);

    Ok(Json(ScheduleResponse {
        periods: markers
            .iter()
            .map(|m| PeriodResponse {
                week_start: m.week_start,
                label: m.label(),
            })
            .collect(),
        months,
    }))
}
