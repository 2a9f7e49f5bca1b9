//! Integration tests for the payroll report engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - Report contents for both bonus kinds
//! - Filtering by department, name and surname
//! - Store-side and in-memory sorting in both directions
//! - Error cases

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use payroll_report::api::{create_router, ApiError, AppState};
use payroll_report::config::DatasetLoader;
use payroll_report::error::ReportResult;
use payroll_report::models::{BonusKind, Department, Employee};
use payroll_report::query::{
    EmployeeQuery, InMemoryEmployeeStore, ReportFilters, SortColumn, SortDirection,
};

// =============================================================================
// Test Helpers
// =============================================================================

/// Alpha pays 500 per year, Beta pays 10%.
///
/// | name    | surname | base  | years | dept  | addition | final |
/// |---------|---------|-------|-------|-------|----------|-------|
/// | Alice   | Zebra   | 5000  | 2     | Alpha | 1000     | 6000  |
/// | Bob     | Alpha   | 10000 | 8     | Beta  | 1000     | 11000 |
/// | Charlie | Beta    | 7500  | 5     | Alpha | 2500     | 10000 |
fn create_store() -> InMemoryEmployeeStore {
    let alpha = Arc::new(Department::new("Alpha", BonusKind::FixedBonus, 500));
    let beta = Arc::new(Department::new("Beta", BonusKind::PercentBonus, 10));

    InMemoryEmployeeStore::new(
        vec![Arc::clone(&alpha), Arc::clone(&beta)],
        vec![
            Employee::new("Alice", "Zebra", 5000, Some(2), Arc::clone(&alpha)),
            Employee::new("Bob", "Alpha", 10000, Some(8), Arc::clone(&beta)),
            Employee::new("Charlie", "Beta", 7500, Some(5), Arc::clone(&alpha)),
        ],
    )
}

fn create_router_for_test() -> Router {
    create_router(AppState::from_store(Arc::new(create_store())))
}

/// Counts store queries so tests can check validation happens first.
struct CountingStore {
    inner: InMemoryEmployeeStore,
    calls: AtomicUsize,
}

impl EmployeeQuery for CountingStore {
    fn find_filtered_and_sorted(
        &self,
        filters: &ReportFilters,
        sort: Option<(SortColumn, SortDirection)>,
    ) -> ReportResult<Vec<Employee>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_filtered_and_sorted(filters, sort)
    }
}

async fn get_payroll(router: Router, query: &str) -> (StatusCode, Value) {
    let uri = if query.is_empty() {
        "/api/payroll".to_string()
    } else {
        format!("/api/payroll?{}", query)
    };

    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn attribute<'a>(entries: &'a Value, index: usize, name: &str) -> &'a Value {
    &entries[index]["data"]["attributes"][name]
}

fn names(entries: &Value) -> Vec<String> {
    entries
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            entry["data"]["attributes"]["name"]
                .as_str()
                .unwrap()
                .to_string()
        })
        .collect()
}

async fn assert_sorted_names(sort: &str, expected: &[&str]) {
    let (status, body) = get_payroll(create_router_for_test(), &format!("sort={}", sort)).await;

    assert_eq!(status, StatusCode::OK, "sort={}", sort);
    assert_eq!(names(&body), expected, "sort={}", sort);
}

// =============================================================================
// Report contents
// =============================================================================

#[tokio::test]
async fn test_single_fixed_bonus_employee() {
    let department = Arc::new(Department::new("Engineering", BonusKind::FixedBonus, 500));
    let employee = Employee::new("John", "Doe", 10000, Some(5), department);
    let employee_id = employee.id;
    let store = InMemoryEmployeeStore::from_employees(vec![employee]);

    let (status, body) = get_payroll(create_router(AppState::from_store(Arc::new(store))), "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["data"]["id"], employee_id.to_string());
    assert_eq!(body[0]["data"]["type"], "payroll");
    assert_eq!(attribute(&body, 0, "name"), "John");
    assert_eq!(attribute(&body, 0, "surname"), "Doe");
    assert_eq!(attribute(&body, 0, "department"), "Engineering");
    assert_eq!(attribute(&body, 0, "baseRemuneration"), 10000);
    assert_eq!(attribute(&body, 0, "addition"), 2500.0);
    assert_eq!(attribute(&body, 0, "bonusType"), "FIXED_BONUS");
    assert_eq!(attribute(&body, 0, "finalRemuneration"), 12500.0);
}

#[tokio::test]
async fn test_percent_bonus_employee() {
    let (status, body) =
        get_payroll(create_router_for_test(), "filter%5Bdepartment%5D=Beta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Bob"]);
    assert_eq!(attribute(&body, 0, "addition"), 1000.0);
    assert_eq!(attribute(&body, 0, "bonusType"), "PERCENT_BONUS");
    assert_eq!(attribute(&body, 0, "finalRemuneration"), 11000.0);
}

#[tokio::test]
async fn test_every_row_has_final_equal_to_base_plus_addition() {
    let (_, body) = get_payroll(create_router_for_test(), "").await;

    for entry in body.as_array().unwrap() {
        let attributes = &entry["data"]["attributes"];
        let base = attributes["baseRemuneration"].as_f64().unwrap();
        let addition = attributes["addition"].as_f64().unwrap();
        let final_remuneration = attributes["finalRemuneration"].as_f64().unwrap();
        assert!((base + addition - final_remuneration).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_empty_store_returns_empty_array() {
    let store = InMemoryEmployeeStore::default();
    let (status, body) = get_payroll(create_router(AppState::from_store(Arc::new(store))), "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

// =============================================================================
// Filtering
// =============================================================================

#[tokio::test]
async fn test_filter_by_department_without_match_returns_empty_array() {
    let (status, body) =
        get_payroll(create_router_for_test(), "filter%5Bdepartment%5D=Gamma").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_filter_by_name() {
    let (_, body) = get_payroll(create_router_for_test(), "filter%5Bname%5D=Charlie").await;
    assert_eq!(names(&body), vec!["Charlie"]);
}

#[tokio::test]
async fn test_filter_by_surname() {
    let (_, body) = get_payroll(create_router_for_test(), "filter%5Bsurname%5D=Zebra").await;
    assert_eq!(names(&body), vec!["Alice"]);
}

#[tokio::test]
async fn test_filters_combine() {
    let (_, body) = get_payroll(
        create_router_for_test(),
        "filter%5Bdepartment%5D=Alpha&filter%5Bsurname%5D=Zebra",
    )
    .await;
    assert_eq!(names(&body), vec!["Alice"]);

    let (_, body) = get_payroll(
        create_router_for_test(),
        "filter%5Bdepartment%5D=Beta&filter%5Bsurname%5D=Zebra",
    )
    .await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_filter_is_ignored() {
    let (status, body) = get_payroll(create_router_for_test(), "filter%5Bsalary%5D=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

// =============================================================================
// Sorting pushed to the store
// =============================================================================

#[tokio::test]
async fn test_sort_by_name() {
    assert_sorted_names("name", &["Alice", "Bob", "Charlie"]).await;
    assert_sorted_names("-name", &["Charlie", "Bob", "Alice"]).await;
}

#[tokio::test]
async fn test_sort_by_surname() {
    assert_sorted_names("surname", &["Bob", "Charlie", "Alice"]).await;
    assert_sorted_names("-surname", &["Alice", "Charlie", "Bob"]).await;
}

#[tokio::test]
async fn test_sort_by_remuneration_base() {
    assert_sorted_names("remunerationBase", &["Alice", "Charlie", "Bob"]).await;
    assert_sorted_names("-remunerationBase", &["Bob", "Charlie", "Alice"]).await;
}

#[tokio::test]
async fn test_sort_by_department() {
    assert_sorted_names("department", &["Alice", "Charlie", "Bob"]).await;
    assert_sorted_names("-department", &["Bob", "Alice", "Charlie"]).await;
}

// =============================================================================
// Sorting in memory
// =============================================================================

#[tokio::test]
async fn test_sort_by_final_remuneration() {
    assert_sorted_names("finalRemuneration", &["Alice", "Charlie", "Bob"]).await;
    assert_sorted_names("-finalRemuneration", &["Bob", "Charlie", "Alice"]).await;
}

#[tokio::test]
async fn test_sort_by_addition_amount_keeps_ties_in_store_order() {
    assert_sorted_names("additionAmount", &["Alice", "Bob", "Charlie"]).await;
    assert_sorted_names("-additionAmount", &["Charlie", "Alice", "Bob"]).await;
}

#[tokio::test]
async fn test_sort_by_bonus_type() {
    assert_sorted_names("bonusType", &["Alice", "Charlie", "Bob"]).await;
    assert_sorted_names("-bonusType", &["Bob", "Alice", "Charlie"]).await;
}

#[tokio::test]
async fn test_final_remuneration_is_non_decreasing() {
    let (_, body) = get_payroll(create_router_for_test(), "sort=finalRemuneration").await;

    let values: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["data"]["attributes"]["finalRemuneration"].as_f64().unwrap())
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn test_repeated_requests_return_identical_reports() {
    let router = create_router_for_test();

    let (_, first) = get_payroll(router.clone(), "sort=-additionAmount").await;
    let (_, second) = get_payroll(router, "sort=-additionAmount").await;

    assert_eq!(first, second);
}

// =============================================================================
// Sample dataset
// =============================================================================

#[tokio::test]
async fn test_sample_dataset_sorted_by_final_remuneration_descending() {
    let store = DatasetLoader::load("./data/payroll.yaml").expect("Failed to load dataset");
    let router = create_router(AppState::from_store(Arc::new(store)));

    let (status, body) = get_payroll(router, "sort=-finalRemuneration").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["John", "Jane", "Adam", "Piotr", "Anna"]);
    // Adam has 15 years of work, capped at 10 x 500
    assert_eq!(attribute(&body, 2, "addition"), 5000.0);
    // Jane: 15% of 7500
    assert_eq!(attribute(&body, 1, "addition"), 1125.0);
    // Anna: 10% of 1100
    assert_eq!(attribute(&body, 4, "finalRemuneration"), 1210.0);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_invalid_sort_field() {
    let (status, body) = get_payroll(create_router_for_test(), "sort=invalidField").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ApiError = serde_json::from_value(body).unwrap();
    assert_eq!(error.code, "INVALID_SORTING");
    assert_eq!(error.message, "Sorting by 'invalidField' is not allowed.");
}

#[tokio::test]
async fn test_error_invalid_descending_sort_field() {
    let (status, body) = get_payroll(create_router_for_test(), "sort=-salary").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("'salary'"));
}

#[tokio::test]
async fn test_error_empty_sort_field() {
    let (status, _) = get_payroll(create_router_for_test(), "sort=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_sort_does_not_query_store() {
    let store = Arc::new(CountingStore {
        inner: create_store(),
        calls: AtomicUsize::new(0),
    });
    let router = create_router(AppState::from_store(store.clone()));

    let (status, _) = get_payroll(router, "sort=invalidField&filter%5Bname%5D=Alice").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}
