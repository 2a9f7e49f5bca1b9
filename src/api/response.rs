//! Response types for the payroll report API.
//!
//! Report rows are rendered as JSON:API-style resources. Errors use the
//! [`ApiError`] body; only sort validation errors carry a client-facing
//! message, every other failure is reported as a generic internal error.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReportError;
use crate::models::PayrollReportRow;
use crate::query::{MEMORY_SORTABLE, STORE_SORTABLE};

/// Resource type of every report entry.
pub const PAYROLL_RESOURCE_TYPE: &str = "payroll";

/// One report entry: `{"data": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResource {
    /// The resource object.
    pub data: PayrollResourceData,
}

/// The resource object of a report entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResourceData {
    /// The employee id.
    pub id: Uuid,
    /// Always `"payroll"`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The row attributes.
    pub attributes: PayrollAttributes,
}

/// Attributes of a report entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollAttributes {
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Department name.
    pub department: String,
    /// Base remuneration.
    pub base_remuneration: u64,
    /// The computed addition.
    #[serde(with = "rust_decimal::serde::float")]
    pub addition: Decimal,
    /// Bonus kind label.
    pub bonus_type: String,
    /// Base remuneration plus addition.
    #[serde(with = "rust_decimal::serde::float")]
    pub final_remuneration: Decimal,
}

impl From<PayrollReportRow> for PayrollResource {
    fn from(row: PayrollReportRow) -> Self {
        PayrollResource {
            data: PayrollResourceData {
                id: row.employee_id,
                resource_type: PAYROLL_RESOURCE_TYPE.to_string(),
                attributes: PayrollAttributes {
                    name: row.name,
                    surname: row.surname,
                    department: row.department,
                    base_remuneration: row.base_remuneration,
                    addition: row.addition_amount,
                    bonus_type: row.bonus_type,
                    final_remuneration: row.final_remuneration,
                },
            },
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid sorting error response listing the accepted fields.
    pub fn invalid_sorting(message: impl Into<String>) -> Self {
        let allowed: Vec<&str> = STORE_SORTABLE
            .iter()
            .map(|(field, _)| *field)
            .chain(MEMORY_SORTABLE.iter().map(|(field, _)| *field))
            .collect();

        Self::with_details(
            "INVALID_SORTING",
            message,
            format!("Allowed sort fields: {}", allowed.join(", ")),
        )
    }

    /// Creates a malformed query string error response.
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_QUERY", message)
    }

    /// Creates a generic internal error response.
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "Internal server error")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::InvalidSorting { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_sorting(error.to_string()),
            },
            _ => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::internal(),
            },
        }
    }
}
