//! End-to-end tests for the Faculty Payroll Engine HTTP API.
//!
//! This test suite covers:
//! - Workload submission, editing, and deletion
//! - Overlap rejection, including touching boundaries
//! - Monthly summaries and receipts
//! - Admin listings and analytics
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use faculty_payroll::api::{AppState, create_router};
use faculty_payroll::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal that serializes as a JSON string.
fn decimal_at(value: &Value) -> Decimal {
    match value {
        Value::String(s) => decimal(s),
        Value::Number(n) => decimal(&n.to_string()),
        other => panic!("Expected a decimal, got {}", other),
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Registers a faculty member with one subject and returns their ids.
async fn seed_faculty(router: &Router, name: &str, email: &str, subject: &str) -> (u64, u64) {
    let (status, faculty) = send(
        router,
        "POST",
        "/api/admin/faculty",
        Some(json!({"name": name, "email": email, "department": "Computer Engineering"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let faculty_id = faculty["id"].as_u64().unwrap();

    let (status, subject) = send(
        router,
        "POST",
        "/api/admin/subjects",
        Some(json!({"name": subject, "faculty_id": faculty_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (faculty_id, subject["id"].as_u64().unwrap())
}

fn workload(date: &str, subject_id: u64, activity: &str, start: &str, end: &str) -> Value {
    json!({
        "date": date,
        "subject_id": subject_id,
        "activity_type": activity,
        "start_time": start,
        "end_time": end,
    })
}

async fn submit(router: &Router, faculty_id: u64, body: Value) -> (StatusCode, Value) {
    send(
        router,
        "POST",
        &format!("/api/faculty/{}/daily-workload", faculty_id),
        Some(body),
    )
    .await
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_lecture_hour_pays_500() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, result) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal_at(&result["entry"]["duration_hours"]), decimal("1"));
    assert_eq!(decimal_at(&result["entry"]["hourly_rate"]), decimal("500"));
    assert_eq!(decimal_at(&result["entry"]["pay"]), decimal("500"));
    assert_eq!(result["entry"]["work_date"], "2025-03-10");
    assert_eq!(result["audit_trace"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_tutorial_ninety_minutes_pays_450() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, result) = submit(&router, faculty, workload("2025-03-10", subject, "tutorial", "14:00", "15:30")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal_at(&result["entry"]["duration_hours"]), decimal("1.5"));
    assert_eq!(decimal_at(&result["entry"]["pay"]), decimal("450"));
}

#[tokio::test]
async fn test_unknown_activity_uses_default_rate() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, result) = submit(&router, faculty, workload("2025-03-10", subject, "seminar", "09:00", "10:00")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal_at(&result["entry"]["hourly_rate"]), decimal("500"));
    assert_eq!(result["entry"]["activity_kind"], "seminar");
}

#[tokio::test]
async fn test_twenty_minutes_rounds_duration_before_pay() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, result) = submit(&router, faculty, workload("2025-03-10", subject, "lab", "09:00", "09:20")).await;

    assert_eq!(status, StatusCode::CREATED);
    // 20 minutes rounds to 0.33h; 0.33 × 400
    assert_eq!(decimal_at(&result["entry"]["duration_hours"]), decimal("0.33"));
    assert_eq!(decimal_at(&result["entry"]["pay"]), decimal("132"));
}

#[tokio::test]
async fn test_equal_start_and_end_rejected() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, error) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "10:00", "10:00")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_TIME_RANGE");
}

#[tokio::test]
async fn test_unparsable_time_rejected() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, error) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "nine", "10:00")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_TIME_RANGE");
}

#[tokio::test]
async fn test_blank_activity_rejected() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, error) = submit(&router, faculty, workload("2025-03-10", subject, "  ", "09:00", "10:00")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_FIELD");
}

#[tokio::test]
async fn test_unknown_subject_returns_404() {
    let router = create_router(create_test_state());
    let (faculty, _) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, error) = submit(&router, faculty, workload("2025-03-10", 999, "lecture", "09:00", "10:00")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "SUBJECT_NOT_FOUND");
}

// =============================================================================
// Overlap
// =============================================================================

#[tokio::test]
async fn test_touching_entries_accepted() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (first, _) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;
    let (second, _) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "10:00", "11:00")).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);
}

#[tokio::test]
async fn test_overlap_rejected_and_names_conflict() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (_, first) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;
    let (status, error) = submit(&router, faculty, workload("2025-03-10", subject, "lab", "09:30", "10:30")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "OVERLAPPING_SLOT");
    let first_id = first["entry"]["id"].as_u64().unwrap();
    assert!(error["message"].as_str().unwrap().contains(&first_id.to_string()));
}

#[tokio::test]
async fn test_same_range_other_day_or_faculty_accepted() {
    let router = create_router(create_test_state());
    let (asha, compilers) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;
    let (ravi, networks) = seed_faculty(&router, "Ravi Kulkarni", "ravi@example.edu", "Networks").await;

    let (a, _) = submit(&router, asha, workload("2025-03-10", compilers, "lecture", "09:00", "10:00")).await;
    let (b, _) = submit(&router, asha, workload("2025-03-11", compilers, "lecture", "09:00", "10:00")).await;
    let (c, _) = submit(&router, ravi, workload("2025-03-10", networks, "lecture", "09:00", "10:00")).await;

    assert_eq!(a, StatusCode::CREATED);
    assert_eq!(b, StatusCode::CREATED);
    assert_eq!(c, StatusCode::CREATED);
}

// =============================================================================
// Edit and delete
// =============================================================================

#[tokio::test]
async fn test_edit_entry_in_place() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (_, created) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;
    let entry_id = created["entry"]["id"].as_u64().unwrap();

    let (status, edited) = send(
        &router,
        "PUT",
        &format!("/api/faculty/{}/daily-workload/{}", faculty, entry_id),
        Some(workload("2025-03-10", subject, "lecture", "09:00", "10:30")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["entry"]["id"].as_u64(), Some(entry_id));
    assert_eq!(decimal_at(&edited["entry"]["pay"]), decimal("750"));
}

#[tokio::test]
async fn test_edit_onto_sibling_rejected() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;
    let (_, second) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "11:00", "12:00")).await;
    let entry_id = second["entry"]["id"].as_u64().unwrap();

    let (status, error) = send(
        &router,
        "PUT",
        &format!("/api/faculty/{}/daily-workload/{}", faculty, entry_id),
        Some(workload("2025-03-10", subject, "lecture", "09:30", "11:30")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "OVERLAPPING_SLOT");
}

#[tokio::test]
async fn test_delete_entry_then_slot_is_free() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (_, created) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;
    let entry_id = created["entry"]["id"].as_u64().unwrap();

    let (status, _) = send(
        &router,
        "DELETE",
        &format!("/api/faculty/{}/daily-workload/{}", faculty, entry_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// Summary and receipt
// =============================================================================

#[tokio::test]
async fn test_monthly_summary_orders_and_totals() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    submit(&router, faculty, workload("2025-03-03", subject, "lecture", "09:00", "10:00")).await;
    submit(&router, faculty, workload("2025-03-12", subject, "lab", "14:00", "15:00")).await;
    submit(&router, faculty, workload("2025-03-12", subject, "tutorial", "09:00", "10:00")).await;
    submit(&router, faculty, workload("2025-04-01", subject, "lecture", "09:00", "10:00")).await;

    let (status, summary) = send(
        &router,
        "GET",
        &format!("/api/faculty/{}/monthly-summary?month=2025-03", faculty),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let entries = summary["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["work_date"], "2025-03-12");
    assert_eq!(entries[0]["start_time"], "09:00");
    assert_eq!(entries[1]["start_time"], "14:00");
    assert_eq!(entries[2]["work_date_formatted"], "03-03-2025");
    assert_eq!(entries[0]["subject_name"], "Compilers");
    // 300 + 400 + 500
    assert_eq!(decimal_at(&summary["total_pay"]), decimal("1200"));
}

#[tokio::test]
async fn test_monthly_summary_empty_month_is_zero() {
    let router = create_router(create_test_state());
    let (faculty, _) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, summary) = send(
        &router,
        "GET",
        &format!("/api/faculty/{}/monthly-summary?month=2025-02", faculty),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(summary["entries"].as_array().unwrap().is_empty());
    assert_eq!(decimal_at(&summary["total_pay"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_monthly_summary_bad_month_rejected() {
    let router = create_router(create_test_state());
    let (faculty, _) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, error) = send(
        &router,
        "GET",
        &format!("/api/faculty/{}/monthly-summary?month=2025-3", faculty),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_MONTH");
}

#[tokio::test]
async fn test_receipt_document() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(
        &router,
        "Asha Patil",
        "asha@example.edu",
        "Advanced Compiler Construction Techniques",
    )
    .await;

    submit(&router, faculty, workload("2025-03-12", subject, "lab", "14:00", "15:30")).await;
    submit(&router, faculty, workload("2025-03-03", subject, "lecture", "09:00", "10:00")).await;

    let (status, receipt) = send(
        &router,
        "GET",
        &format!("/api/faculty/{}/receipt?month=2025-03", faculty),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["file_name"], "receipt_Asha_Patil_2025-03.pdf");
    assert_eq!(receipt["title"]["faculty_name"], "Asha Patil");
    assert_eq!(receipt["title"]["month"], "2025-03");

    let rows = receipt["table"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Oldest first, unlike the monthly summary.
    assert_eq!(
        rows[0],
        json!(["03-03-2025", "Advanced Compiler Co", "Lecture", "09:00-10:00", "1.00", "₹500", "₹500.00"])
    );
    assert_eq!(
        rows[1],
        json!(["12-03-2025", "Advanced Compiler Co", "Lab", "14:00-15:30", "1.50", "₹400", "₹600.00"])
    );
    assert_eq!(
        receipt["table"]["totals"],
        json!(["", "", "", "TOTAL:", "2.50", "", "₹1100.00"])
    );
    assert_eq!(receipt["table"]["header"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_receipt_unknown_faculty_returns_404() {
    let router = create_router(create_test_state());

    let (status, error) = send(&router, "GET", "/api/faculty/42/receipt?month=2025-03", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "FACULTY_NOT_FOUND");
}

// =============================================================================
// Admin
// =============================================================================

#[tokio::test]
async fn test_faculty_lookup_by_email() {
    let router = create_router(create_test_state());
    let (faculty, _) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    let (status, found) = send(&router, "GET", "/api/admin/faculty?email=ASHA@example.edu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"].as_u64(), Some(faculty));

    let (status, missing) = send(&router, "GET", "/api/admin/faculty?email=nobody@example.edu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(missing, Value::Null);

    let (_, all) = send(&router, "GET", "/api/admin/faculty", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_subject_listings() {
    let router = create_router(create_test_state());
    let (faculty, _) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Networks").await;
    send(
        &router,
        "POST",
        "/api/admin/subjects",
        Some(json!({"name": "Algorithms", "faculty_id": faculty})),
    )
    .await;

    let (status, own) = send(&router, "GET", &format!("/api/faculty/{}/subjects", faculty), None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = own
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Algorithms", "Networks"]);

    let (_, all) = send(&router, "GET", "/api/admin/subjects", None).await;
    assert_eq!(all[0]["faculty_name"], "Asha Patil");
}

#[tokio::test]
async fn test_delete_faculty_cascades() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;
    submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;

    let (status, _) = send(&router, "DELETE", &format!("/api/admin/faculty/{}", faculty), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, workload_rows) = send(&router, "GET", "/api/admin/workload", None).await;
    assert!(workload_rows.as_array().unwrap().is_empty());
    let (_, subjects) = send(&router, "GET", "/api/admin/subjects", None).await;
    assert!(subjects.as_array().unwrap().is_empty());

    let (status, _) = send(&router, "DELETE", &format!("/api/admin/faculty/{}", faculty), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_subject_removes_its_entries() {
    let router = create_router(create_test_state());
    let (faculty, subject) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;
    submit(&router, faculty, workload("2025-03-10", subject, "lecture", "09:00", "10:00")).await;

    let (status, _) = send(&router, "DELETE", &format!("/api/admin/subjects/{}", subject), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, rows) = send(&router, "GET", "/api/admin/workload", None).await;
    assert!(rows.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_workload_ordering() {
    let router = create_router(create_test_state());
    let (ravi, networks) = seed_faculty(&router, "Ravi Kulkarni", "ravi@example.edu", "Networks").await;
    let (asha, compilers) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;

    submit(&router, ravi, workload("2025-03-10", networks, "lecture", "09:00", "10:00")).await;
    submit(&router, asha, workload("2025-03-10", compilers, "lecture", "11:00", "12:00")).await;
    submit(&router, asha, workload("2025-03-11", compilers, "lab", "09:00", "10:00")).await;

    let (status, rows) = send(&router, "GET", "/api/admin/workload", None).await;
    assert_eq!(status, StatusCode::OK);

    let order: Vec<(&str, &str)> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["work_date"].as_str().unwrap(), r["faculty_name"].as_str().unwrap()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("2025-03-11", "Asha Patil"),
            ("2025-03-10", "Asha Patil"),
            ("2025-03-10", "Ravi Kulkarni"),
        ]
    );
}

#[tokio::test]
async fn test_analytics() {
    let router = create_router(create_test_state());
    let (asha, compilers) = seed_faculty(&router, "Asha Patil", "asha@example.edu", "Compilers").await;
    let (ravi, networks) = seed_faculty(&router, "Ravi Kulkarni", "ravi@example.edu", "Networks").await;
    seed_faculty(&router, "Meera Joshi", "meera@example.edu", "Databases").await;

    submit(&router, asha, workload("2025-03-10", compilers, "lecture", "09:00", "11:00")).await;
    submit(&router, ravi, workload("2025-03-10", networks, "tutorial", "09:00", "12:00")).await;

    let (status, analytics) = send(&router, "GET", "/api/admin/analytics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(analytics["total_faculty"], 3);
    assert_eq!(analytics["total_workload_entries"], 2);
    // 2h × 500 + 3h × 300
    assert_eq!(decimal_at(&analytics["total_salary"]), decimal("1900"));

    let workload = analytics["faculty_workload"].as_array().unwrap();
    assert_eq!(workload.len(), 3);
    assert_eq!(workload[0]["name"], "Ravi Kulkarni");
    assert_eq!(decimal_at(&workload[2]["workload"]), Decimal::ZERO);

    let salaries = analytics["salary_distribution"].as_array().unwrap();
    assert_eq!(salaries.len(), 2);
    assert_eq!(salaries[0]["name"], "Asha Patil");
}
