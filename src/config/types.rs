//! Configuration types.
//!
//! This module contains the records deserialized from the dataset YAML
//! file and the server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ReportError, ReportResult};
use crate::models::BonusKind;

/// Bind address used when `PAYROLL_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Dataset path used when `PAYROLL_DATASET` is unset.
pub const DEFAULT_DATASET_PATH: &str = "./data/payroll.yaml";

/// A department as written in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentRecord {
    /// Optional fixed id; generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Department name, referenced by employees.
    pub name: String,
    /// Bonus policy kind (`fixed_bonus` or `percent_bonus`).
    pub bonus_type: BonusKind,
    /// Bonus policy value.
    pub bonus_value: u32,
}

/// An employee as written in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    /// Optional fixed id; generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Monthly base remuneration.
    pub remuneration_base: u64,
    /// Completed years of work.
    #[serde(default)]
    pub years_of_work: Option<u32>,
    /// Name of the department the employee belongs to.
    pub department: String,
}

/// Top-level structure of the dataset file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetFile {
    /// All departments.
    #[serde(default)]
    pub departments: Vec<DepartmentRecord>,
    /// All employees.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_addr: SocketAddr,
    /// Path to the dataset YAML file.
    pub dataset_path: PathBuf,
}

impl ServerConfig {
    /// Reads `PAYROLL_BIND_ADDR` and `PAYROLL_DATASET` from the process environment.
    pub fn from_env() -> ReportResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through the given lookup, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidConfig`] if the bind address does not
    /// parse as a socket address.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_report::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_lookup(|key| match key {
    ///     "PAYROLL_BIND_ADDR" => Some("0.0.0.0:8080".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.bind_addr.port(), 8080);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("PAYROLL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ReportError::InvalidConfig {
                key: "PAYROLL_BIND_ADDR".to_string(),
                message: format!("'{}' is not a socket address: {}", bind_addr, e),
            })?;

        let dataset_path = lookup("PAYROLL_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

        Ok(Self {
            bind_addr,
            dataset_path,
        })
    }
}
