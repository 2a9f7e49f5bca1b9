//! Employee store access.
//!
//! [`EmployeeQuery`] is the only contract the report pipeline has with
//! persistence. [`InMemoryEmployeeStore`] implements it over a dataset
//! loaded at startup.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::ReportResult;
use crate::models::{Department, Employee};

use super::{ReportFilters, SortColumn, SortDirection};

/// Queries employees joined with their departments.
pub trait EmployeeQuery: Send + Sync {
    /// Returns employees matching every present filter.
    ///
    /// When `sort` is present the result is ordered by that column in that
    /// direction. Otherwise the order is whatever the store yields and
    /// callers must not rely on it. No match yields an empty vector, not an
    /// error.
    fn find_filtered_and_sorted(
        &self,
        filters: &ReportFilters,
        sort: Option<(SortColumn, SortDirection)>,
    ) -> ReportResult<Vec<Employee>>;
}

/// An employee store held entirely in memory.
///
/// Unsorted queries return employees in insertion order. The store is
/// read-only once built.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeStore {
    departments: Vec<Arc<Department>>,
    employees: Vec<Employee>,
}

impl InMemoryEmployeeStore {
    /// Creates a store from departments and the employees that reference them.
    pub fn new(departments: Vec<Arc<Department>>, employees: Vec<Employee>) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Creates a store from employees alone, collecting their departments.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        let mut departments: Vec<Arc<Department>> = Vec::new();
        for employee in &employees {
            if !departments
                .iter()
                .any(|department| Arc::ptr_eq(department, &employee.department))
            {
                departments.push(Arc::clone(&employee.department));
            }
        }

        Self::new(departments, employees)
    }

    /// All departments in the store.
    pub fn departments(&self) -> &[Arc<Department>] {
        &self.departments
    }

    /// All employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the store holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

fn compare_by_column(column: SortColumn, a: &Employee, b: &Employee) -> Ordering {
    match column {
        SortColumn::EmployeeName => a.name.cmp(&b.name),
        SortColumn::EmployeeSurname => a.surname.cmp(&b.surname),
        SortColumn::RemunerationBase => a.remuneration_base.cmp(&b.remuneration_base),
        SortColumn::DepartmentName => a.department_name().cmp(b.department_name()),
    }
}

impl EmployeeQuery for InMemoryEmployeeStore {
    fn find_filtered_and_sorted(
        &self,
        filters: &ReportFilters,
        sort: Option<(SortColumn, SortDirection)>,
    ) -> ReportResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self
            .employees
            .iter()
            .filter(|employee| filters.matches(employee))
            .cloned()
            .collect();

        if let Some((column, direction)) = sort {
            employees.sort_by(|a, b| direction.apply(compare_by_column(column, a, b)));
        }

        Ok(employees)
    }
}
