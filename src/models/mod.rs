//! Core data models for the payroll report engine.
//!
//! This module contains the domain models read from the employee store
//! and the ephemeral values produced while building a report.

mod addition;
mod department;
mod employee;
mod report_row;

pub use addition::AdditionResult;
pub use department::{BonusKind, Department};
pub use employee::Employee;
pub use report_row::PayrollReportRow;
