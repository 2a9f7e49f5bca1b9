//! Sort field resolution.
//!
//! Every sortable report field belongs to exactly one stage: the store
//! ([`STORE_SORTABLE`]) or the in-memory pass over computed rows
//! ([`MEMORY_SORTABLE`]). [`SortResolver`] is the only place that knows
//! which is which.

use std::cmp::Ordering;

use crate::error::{ReportError, ReportResult};
use crate::models::PayrollReportRow;

/// Direction of a sort, parsed from the presence of a leading `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Orients an ascending comparison result in this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A parsed sort request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// The requested report field, unvalidated.
    pub field: String,
    /// The requested direction.
    pub direction: SortDirection,
}

/// A store column that report rows can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// The employee's given name.
    EmployeeName,
    /// The employee's family name.
    EmployeeSurname,
    /// The employee's base remuneration.
    RemunerationBase,
    /// The name of the employee's department.
    DepartmentName,
}

impl SortColumn {
    /// Returns the qualified column name in the employee/department relation.
    pub fn column_name(&self) -> &'static str {
        match self {
            SortColumn::EmployeeName => "employee.name",
            SortColumn::EmployeeSurname => "employee.surname",
            SortColumn::RemunerationBase => "employee.remuneration_base",
            SortColumn::DepartmentName => "department.name",
        }
    }
}

/// A report field that only exists after remuneration has been calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemorySortField {
    /// The computed addition.
    AdditionAmount,
    /// Base remuneration plus addition.
    FinalRemuneration,
    /// The bonus kind label.
    BonusType,
}

impl MemorySortField {
    /// Compares two rows by this field in ascending order.
    pub fn compare(&self, a: &PayrollReportRow, b: &PayrollReportRow) -> Ordering {
        match self {
            MemorySortField::AdditionAmount => a.addition_amount.cmp(&b.addition_amount),
            MemorySortField::FinalRemuneration => a.final_remuneration.cmp(&b.final_remuneration),
            MemorySortField::BonusType => a.bonus_type.cmp(&b.bonus_type),
        }
    }
}

/// Report fields the store can order by, and the column each maps to.
pub const STORE_SORTABLE: &[(&str, SortColumn)] = &[
    ("name", SortColumn::EmployeeName),
    ("surname", SortColumn::EmployeeSurname),
    ("remunerationBase", SortColumn::RemunerationBase),
    ("department", SortColumn::DepartmentName),
];

/// Report fields that can only be ordered after calculation.
pub const MEMORY_SORTABLE: &[(&str, MemorySortField)] = &[
    ("additionAmount", MemorySortField::AdditionAmount),
    ("finalRemuneration", MemorySortField::FinalRemuneration),
    ("bonusType", MemorySortField::BonusType),
];

/// Classifies sort fields as store-sortable or memory-sortable.
///
/// Field names are matched exactly; there is no trimming or case folding.
///
/// # Examples
///
/// ```
/// use payroll_report::query::{SortDirection, SortResolver};
///
/// let resolver = SortResolver::new();
/// let spec = resolver.parse_sort(Some("-surname")).unwrap();
///
/// assert_eq!(spec.field, "surname");
/// assert_eq!(spec.direction, SortDirection::Desc);
/// assert!(resolver.is_db_sortable(&spec.field));
/// assert!(resolver.assert_sortable("invalidField").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SortResolver {
    store: &'static [(&'static str, SortColumn)],
    memory: &'static [(&'static str, MemorySortField)],
}

impl SortResolver {
    /// Creates a resolver over the built-in field tables.
    pub fn new() -> Self {
        Self {
            store: STORE_SORTABLE,
            memory: MEMORY_SORTABLE,
        }
    }

    /// Creates a resolver over custom field tables.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::SortFieldConflict`] if a field appears in both
    /// tables.
    pub fn with_fields(
        store: &'static [(&'static str, SortColumn)],
        memory: &'static [(&'static str, MemorySortField)],
    ) -> ReportResult<Self> {
        if let Some((field, _)) = store
            .iter()
            .find(|(field, _)| memory.iter().any(|(other, _)| other == field))
        {
            return Err(ReportError::SortFieldConflict {
                field: field.to_string(),
            });
        }

        Ok(Self { store, memory })
    }

    /// Parses a raw sort string; a leading `-` means descending.
    pub fn parse_sort(&self, raw: Option<&str>) -> Option<SortSpec> {
        let raw = raw?;

        let spec = match raw.strip_prefix('-') {
            Some(field) => SortSpec {
                field: field.to_string(),
                direction: SortDirection::Desc,
            },
            None => SortSpec {
                field: raw.to_string(),
                direction: SortDirection::Asc,
            },
        };

        Some(spec)
    }

    /// Returns true if the store can order by this field.
    pub fn is_db_sortable(&self, field: &str) -> bool {
        self.db_sort_column(field).is_some()
    }

    /// Returns true if the field can only be ordered after calculation.
    pub fn is_memory_sortable(&self, field: &str) -> bool {
        self.memory_sort_field(field).is_some()
    }

    /// Returns the store column for a store-sortable field.
    pub fn db_sort_column(&self, field: &str) -> Option<SortColumn> {
        self.store
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
    }

    /// Returns the computed field for a memory-sortable field.
    pub fn memory_sort_field(&self, field: &str) -> Option<MemorySortField> {
        self.memory
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, computed)| *computed)
    }

    /// Rejects fields that neither stage can sort by.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidSorting`] naming the field.
    pub fn assert_sortable(&self, field: &str) -> ReportResult<()> {
        if self.is_db_sortable(field) || self.is_memory_sortable(field) {
            return Ok(());
        }

        Err(ReportError::InvalidSorting {
            field: field.to_string(),
        })
    }
}

impl Default for SortResolver {
    fn default() -> Self {
        Self::new()
    }
}
