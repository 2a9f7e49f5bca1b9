//! Payroll report assembly.

use std::sync::Arc;

use tracing::debug;

use crate::calculation::RemunerationCalculator;
use crate::error::ReportResult;
use crate::models::PayrollReportRow;

use super::{EmployeeQuery, ReportFilters, SortResolver};

/// Builds payroll reports from the employee store.
///
/// A build validates the sort field, fetches filtered employees (sorted by
/// the store when it can), computes every employee's addition, and finally
/// sorts rows in memory when the sort field is a computed one. Builds share
/// no mutable state and may run concurrently.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use payroll_report::models::{BonusKind, Department, Employee};
/// use payroll_report::query::{InMemoryEmployeeStore, PayrollReportBuilder, ReportFilters};
/// use rust_decimal::Decimal;
///
/// let department = Arc::new(Department::new("Engineering", BonusKind::FixedBonus, 500));
/// let employee = Employee::new("John", "Doe", 10000, Some(5), department);
/// let store = InMemoryEmployeeStore::from_employees(vec![employee]);
///
/// let builder = PayrollReportBuilder::new(Arc::new(store));
/// let rows = builder.build(None, &ReportFilters::default()).unwrap();
///
/// assert_eq!(rows[0].addition_amount, Decimal::from(2500));
/// assert_eq!(rows[0].final_remuneration, Decimal::from(12500));
/// ```
pub struct PayrollReportBuilder {
    store: Arc<dyn EmployeeQuery>,
    calculator: RemunerationCalculator,
    resolver: SortResolver,
}

impl PayrollReportBuilder {
    /// Creates a builder with the default calculator and sort resolver.
    pub fn new(store: Arc<dyn EmployeeQuery>) -> Self {
        Self::with_components(store, RemunerationCalculator::default(), SortResolver::new())
    }

    /// Creates a builder from explicit components.
    pub fn with_components(
        store: Arc<dyn EmployeeQuery>,
        calculator: RemunerationCalculator,
        resolver: SortResolver,
    ) -> Self {
        Self {
            store,
            calculator,
            resolver,
        }
    }

    /// Builds the report rows.
    ///
    /// # Arguments
    ///
    /// * `sort` - Optional sort field, prefixed with `-` for descending order
    /// * `filters` - Exact-match filters pushed down to the store
    ///
    /// # Errors
    ///
    /// - [`InvalidSorting`](crate::error::ReportError::InvalidSorting) if the
    ///   sort field is unknown; the store is not queried in that case
    /// - [`StrategyNotFound`](crate::error::ReportError::StrategyNotFound) if
    ///   an employee's department has no matching bonus strategy
    /// - any error returned by the store, unchanged
    pub fn build(
        &self,
        sort: Option<&str>,
        filters: &ReportFilters,
    ) -> ReportResult<Vec<PayrollReportRow>> {
        let sort = self.resolver.parse_sort(sort);

        if let Some(spec) = &sort {
            self.resolver.assert_sortable(&spec.field)?;
        }

        let store_sort = sort.as_ref().and_then(|spec| {
            self.resolver
                .db_sort_column(&spec.field)
                .map(|column| (column, spec.direction))
        });

        debug!(
            sort_field = sort.as_ref().map(|spec| spec.field.as_str()),
            store_column = store_sort.map(|(column, _)| column.column_name()),
            "Querying employee store"
        );

        let employees = self.store.find_filtered_and_sorted(filters, store_sort)?;

        let mut rows = employees
            .iter()
            .map(|employee| {
                let addition = self.calculator.calculate(employee)?;
                Ok(PayrollReportRow::from_calculation(employee, addition))
            })
            .collect::<ReportResult<Vec<_>>>()?;

        if let Some(spec) = &sort {
            if let Some(field) = self.resolver.memory_sort_field(&spec.field) {
                debug!(sort_field = %spec.field, rows = rows.len(), "Sorting rows in memory");
                // sort_by is stable: equal values keep store order.
                rows.sort_by(|a, b| spec.direction.apply(field.compare(a, b)));
            }
        }

        Ok(rows)
    }
}
