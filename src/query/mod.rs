//! Report query pipeline.
//!
//! This module resolves sort requests, queries the employee store with
//! filters pushed down, and assembles payroll report rows. Sorting is
//! split between two stages: fields stored on the employee or department
//! are ordered by the store, fields that only exist after calculation are
//! ordered in memory once every row has been built.

mod filters;
mod report;
mod repository;
mod sort;

pub use filters::ReportFilters;
pub use report::PayrollReportBuilder;
pub use repository::{EmployeeQuery, InMemoryEmployeeStore};
pub use sort::{
    MEMORY_SORTABLE, MemorySortField, STORE_SORTABLE, SortColumn, SortDirection, SortResolver,
    SortSpec,
};
