//! Payroll Report Engine
//!
//! This crate builds a monthly payroll report: every employee's department
//! bonus policy is applied to their base remuneration, and the resulting
//! rows can be filtered and sorted by stored or computed fields.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
