//! HTTP request handlers for the payroll report API.

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::PayrollQuery;
use super::response::{ApiError, ApiErrorResponse, PayrollResource};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/payroll", get(payroll_handler))
        .with_state(state)
}

/// Handler for GET /api/payroll.
///
/// Accepts `sort` and `filter[...]` query parameters and returns the
/// payroll report as an array of resources.
async fn payroll_handler(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let query = match params {
        Ok(Query(params)) => PayrollQuery::from_params(params),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string rejected"
            );
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_query(rejection.body_text()),
            }
            .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        sort = query.sort.as_deref(),
        filtered = !query.filters.is_empty(),
        department = query.filters.department.as_deref(),
        name = query.filters.name.as_deref(),
        surname = query.filters.surname.as_deref(),
        "Processing payroll report request"
    );

    let start_time = Instant::now();
    match state.builder().build(query.sort.as_deref(), &query.filters) {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                rows = rows.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Payroll report built successfully"
            );
            let resources: Vec<PayrollResource> = rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(resources),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
