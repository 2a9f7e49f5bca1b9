//! Error types for the payroll report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a payroll report
//! or loading the employee dataset.

use thiserror::Error;

/// The main error type for the payroll report engine.
///
/// # Example
///
/// ```
/// use payroll_report::error::ReportError;
///
/// let error = ReportError::InvalidSorting {
///     field: "invalidField".to_string(),
/// };
/// assert_eq!(error.to_string(), "Sorting by 'invalidField' is not allowed.");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested sort field is neither store-sortable nor memory-sortable.
    #[error("Sorting by '{field}' is not allowed.")]
    InvalidSorting {
        /// The rejected sort field.
        field: String,
    },

    /// No calculation strategy supports the department's bonus kind.
    #[error("Strategy not found for bonus type {kind}")]
    StrategyNotFound {
        /// The label of the unmatched bonus kind.
        kind: String,
    },

    /// The employee store failed to answer a query.
    #[error("Employee store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// A sort field was registered as both store-sortable and memory-sortable.
    #[error("Sort field '{field}' is registered for both store and memory sorting")]
    SortFieldConflict {
        /// The field present in both tables.
        field: String,
    },

    /// Dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Dataset file could not be parsed.
    #[error("Failed to parse dataset file '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Dataset parsed but contains inconsistent records.
    #[error("Invalid dataset: {message}")]
    InvalidDataset {
        /// A description of what made the dataset invalid.
        message: String,
    },

    /// Server configuration could not be read from the environment.
    #[error("Invalid configuration '{key}': {message}")]
    InvalidConfig {
        /// The environment variable that was invalid.
        key: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
