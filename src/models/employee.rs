//! Employee model.

use std::sync::Arc;

use uuid::Uuid;

use super::Department;

/// An employee as returned by the employee store.
///
/// The department is shared between all of its employees; an employee
/// never owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Monthly base remuneration in whole currency units.
    pub remuneration_base: u64,
    /// Completed years of work, `None` when never recorded.
    pub years_of_work: Option<u32>,
    /// The department the employee belongs to.
    pub department: Arc<Department>,
}

impl Employee {
    /// Creates an employee with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        remuneration_base: u64,
        years_of_work: Option<u32>,
        department: Arc<Department>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            surname: surname.into(),
            remuneration_base,
            years_of_work,
            department,
        }
    }

    /// Returns the years of work used for calculation; unset counts as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use payroll_report::models::{BonusKind, Department, Employee};
    ///
    /// let department = Arc::new(Department::new("Sales", BonusKind::FixedBonus, 100));
    /// let employee = Employee::new("Ann", "Lee", 4000, None, department);
    /// assert_eq!(employee.years_of_work_or_zero(), 0);
    /// ```
    pub fn years_of_work_or_zero(&self) -> u32 {
        self.years_of_work.unwrap_or(0)
    }

    /// Returns the name of the employee's department.
    pub fn department_name(&self) -> &str {
        &self.department.name
    }
}
