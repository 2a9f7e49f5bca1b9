//! Request parameters for the payroll report API.

use crate::query::ReportFilters;

/// Query parameters of `GET /api/payroll`.
///
/// `sort` holds the raw sort string; `filter[department]`, `filter[name]`
/// and `filter[surname]` become [`ReportFilters`]. Any other parameter is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollQuery {
    /// Raw sort string, e.g. `surname` or `-finalRemuneration`.
    pub sort: Option<String>,
    /// Exact-match filters.
    pub filters: ReportFilters,
}

impl PayrollQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_report::api::PayrollQuery;
    ///
    /// let query = PayrollQuery::from_params(vec![
    ///     ("sort".to_string(), "-name".to_string()),
    ///     ("filter[department]".to_string(), "Finance".to_string()),
    /// ]);
    /// assert_eq!(query.sort.as_deref(), Some("-name"));
    /// assert_eq!(query.filters.department.as_deref(), Some("Finance"));
    /// ```
    pub fn from_params(params: Vec<(String, String)>) -> Self {
        let mut sort = None;
        let mut filter_pairs = Vec::new();

        for (key, value) in params {
            if key == "sort" {
                sort = Some(value);
            } else if let Some(filter) = key
                .strip_prefix("filter[")
                .and_then(|rest| rest.strip_suffix(']'))
            {
                filter_pairs.push((filter.to_string(), value));
            }
        }

        Self {
            sort,
            filters: ReportFilters::from_pairs(filter_pairs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(PayrollQuery::from_params(vec![]), PayrollQuery::default());
    }

    #[test]
    fn test_all_filters_and_sort() {
        let query = PayrollQuery::from_params(params(&[
            ("sort", "finalRemuneration"),
            ("filter[department]", "Engineering"),
            ("filter[name]", "John"),
            ("filter[surname]", "Doe"),
        ]));

        assert_eq!(query.sort.as_deref(), Some("finalRemuneration"));
        assert_eq!(
            query.filters,
            ReportFilters::default()
                .with_department("Engineering")
                .with_name("John")
                .with_surname("Doe")
        );
    }

    #[test]
    fn test_unknown_parameters_are_ignored() {
        let query = PayrollQuery::from_params(params(&[
            ("filter[salary]", "5000"),
            ("page", "2"),
            ("filter", "name"),
            ("department", "Engineering"),
        ]));

        assert_eq!(query, PayrollQuery::default());
    }

    #[test]
    fn test_empty_sort_is_kept() {
        let query = PayrollQuery::from_params(params(&[("sort", "")]));
        assert_eq!(query.sort.as_deref(), Some(""));
    }
}
