//! Exact-match report filters.

use crate::models::Employee;

/// Optional exact-match predicates on department name, employee name and
/// employee surname. Absent filters impose no constraint; all present
/// filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    /// Required department name.
    pub department: Option<String>,
    /// Required employee name.
    pub name: Option<String>,
    /// Required employee surname.
    pub surname: Option<String>,
}

impl ReportFilters {
    /// Builds filters from key/value pairs.
    ///
    /// Recognised keys are `department`, `name` and `surname`; any other
    /// key is ignored. A repeated key keeps its last value.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_report::query::ReportFilters;
    ///
    /// let filters = ReportFilters::from_pairs([("department", "Sales"), ("salary", "5000")]);
    /// assert_eq!(filters.department.as_deref(), Some("Sales"));
    /// assert_eq!(filters.name, None);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = Self::default();

        for (key, value) in pairs {
            match key.as_ref() {
                "department" => filters.department = Some(value.into()),
                "name" => filters.name = Some(value.into()),
                "surname" => filters.surname = Some(value.into()),
                _ => {}
            }
        }

        filters
    }

    /// Requires the given department name.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Requires the given employee name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Requires the given employee surname.
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.name.is_none() && self.surname.is_none()
    }

    /// Returns true if the employee satisfies every present filter.
    ///
    /// Predicates are checked department first, then surname, then name.
    pub fn matches(&self, employee: &Employee) -> bool {
        fn accepts(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().is_none_or(|expected| expected == actual)
        }

        accepts(&self.department, employee.department_name())
            && accepts(&self.surname, &employee.surname)
            && accepts(&self.name, &employee.name)
    }
}
