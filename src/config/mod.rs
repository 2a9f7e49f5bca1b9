//! Configuration loading for the payroll report engine.
//!
//! This module loads the employee dataset from a YAML file into an
//! [`InMemoryEmployeeStore`](crate::query::InMemoryEmployeeStore), and
//! reads the server settings from environment variables.
//!
//! # Example
//!
//! ```no_run
//! use payroll_report::config::DatasetLoader;
//!
//! let store = DatasetLoader::load("./data/payroll.yaml").unwrap();
//! println!("Loaded {} employees", store.len());
//! ```

mod loader;
mod types;

pub use loader::DatasetLoader;
pub use types::{
    DEFAULT_BIND_ADDR, DEFAULT_DATASET_PATH, DatasetFile, DepartmentRecord, EmployeeRecord,
    ServerConfig,
};
