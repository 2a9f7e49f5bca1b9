//! Application state for the payroll report API.

use std::sync::Arc;

use crate::query::{EmployeeQuery, PayrollReportBuilder};

/// Shared application state.
///
/// Holds the report builder, which is read-only and shared by every
/// request handler.
#[derive(Clone)]
pub struct AppState {
    builder: Arc<PayrollReportBuilder>,
}

impl AppState {
    /// Creates application state around a report builder.
    pub fn new(builder: PayrollReportBuilder) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }

    /// Creates application state with a default builder over the given store.
    pub fn from_store(store: Arc<dyn EmployeeQuery>) -> Self {
        Self::new(PayrollReportBuilder::new(store))
    }

    /// Returns the report builder.
    pub fn builder(&self) -> &PayrollReportBuilder {
        &self.builder
    }
}
