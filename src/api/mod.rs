//! HTTP API module for the payroll report engine.
//!
//! This module exposes the payroll report as `GET /api/payroll`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollQuery;
pub use response::{ApiError, ApiErrorResponse, PayrollAttributes, PayrollResource, PayrollResourceData};
pub use state::AppState;
