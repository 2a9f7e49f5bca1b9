//! Dataset loading functionality.
//!
//! This module provides the [`DatasetLoader`] type for loading the
//! employee dataset from a YAML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::{ReportError, ReportResult};
use crate::models::{Department, Employee};
use crate::query::InMemoryEmployeeStore;

use super::types::DatasetFile;

/// Loads the employee dataset into an in-memory store.
///
/// # File Structure
///
/// ```text
/// departments:
///   - name: Engineering
///     bonus_type: fixed_bonus     # or percent_bonus
///     bonus_value: 500
/// employees:
///   - name: John
///     surname: Doe
///     remuneration_base: 10000
///     years_of_work: 5            # optional
///     department: Engineering     # must name a department above
/// ```
///
/// Both record kinds accept an optional `id` (UUID); missing ids are
/// generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads and validates the dataset at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file is missing (`DatasetNotFound`)
    /// - the file is not valid YAML for the dataset structure (`DatasetParseError`)
    /// - the records are inconsistent (`InvalidDataset`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_report::config::DatasetLoader;
    ///
    /// let store = DatasetLoader::load("./data/payroll.yaml")?;
    /// # Ok::<(), payroll_report::error::ReportError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<InMemoryEmployeeStore> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::DatasetNotFound {
            path: path_str.clone(),
        })?;

        let store = Self::from_yaml_str(&content, &path_str)?;

        info!(
            path = %path_str,
            departments = store.departments().len(),
            employees = store.len(),
            "Loaded payroll dataset"
        );

        Ok(store)
    }

    /// Parses and validates a dataset held in memory.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> ReportResult<InMemoryEmployeeStore> {
        let file: DatasetFile =
            serde_yaml::from_str(content).map_err(|e| ReportError::DatasetParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::build_store(file)
    }

    /// Resolves department references and checks record invariants.
    pub fn build_store(file: DatasetFile) -> ReportResult<InMemoryEmployeeStore> {
        let mut by_name: HashMap<String, Arc<Department>> = HashMap::new();
        let mut departments = Vec::with_capacity(file.departments.len());

        for record in file.departments {
            if record.name.trim().is_empty() {
                return Err(invalid("department name must not be empty"));
            }
            if by_name.contains_key(&record.name) {
                return Err(invalid(format!(
                    "department '{}' is defined more than once",
                    record.name
                )));
            }

            let department = Arc::new(Department {
                id: record.id.unwrap_or_else(Uuid::new_v4),
                name: record.name,
                bonus_kind: record.bonus_type,
                bonus_value: record.bonus_value,
            });
            by_name.insert(department.name.clone(), Arc::clone(&department));
            departments.push(department);
        }

        let mut employees = Vec::with_capacity(file.employees.len());

        for (index, record) in file.employees.into_iter().enumerate() {
            if record.name.trim().is_empty() || record.surname.trim().is_empty() {
                return Err(invalid(format!(
                    "employee #{} must have a non-empty name and surname",
                    index + 1
                )));
            }

            let department = by_name.get(&record.department).ok_or_else(|| {
                invalid(format!(
                    "employee '{} {}' references unknown department '{}'",
                    record.name, record.surname, record.department
                ))
            })?;

            employees.push(Employee {
                id: record.id.unwrap_or_else(Uuid::new_v4),
                name: record.name,
                surname: record.surname,
                remuneration_base: record.remuneration_base,
                years_of_work: record.years_of_work,
                department: Arc::clone(department),
            });
        }

        Ok(InMemoryEmployeeStore::new(departments, employees))
    }
}

fn invalid(message: impl Into<String>) -> ReportError {
    ReportError::InvalidDataset {
        message: message.into(),
    }
}
