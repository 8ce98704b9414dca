//! HTTP request handlers for the Faculty Payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{EntryId, FacultyId, SubjectId};

use super::request::{FacultyQuery, FacultyRequest, MonthQuery, SubjectRequest, WorkloadRequest};
use super::response::{ApiError, ApiErrorResponse, SubjectRow};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/faculty/:faculty_id/daily-workload",
            post(create_workload_handler),
        )
        .route(
            "/api/faculty/:faculty_id/daily-workload/:entry_id",
            put(update_workload_handler).delete(delete_workload_handler),
        )
        .route("/api/faculty/:faculty_id/subjects", get(faculty_subjects_handler))
        .route(
            "/api/faculty/:faculty_id/monthly-summary",
            get(monthly_summary_handler),
        )
        .route("/api/faculty/:faculty_id/receipt", get(receipt_handler))
        .route(
            "/api/admin/faculty",
            get(list_faculty_handler).post(create_faculty_handler),
        )
        .route("/api/admin/faculty/:faculty_id", delete(delete_faculty_handler))
        .route(
            "/api/admin/subjects",
            get(list_subjects_handler).post(create_subject_handler),
        )
        .route("/api/admin/subjects/:subject_id", delete(delete_subject_handler))
        .route("/api/admin/workload", get(admin_workload_handler))
        .route("/api/admin/analytics", get(analytics_handler))
        .with_state(state)
}

/// Handler for POST /api/faculty/:faculty_id/daily-workload.
///
/// Validates, prices, and stores a new entry. Responds 201 with the stored
/// entry and its validation trace.
async fn create_workload_handler(
    State(state): State<AppState>,
    Path(faculty_id): Path<FacultyId>,
    payload: Result<Json<WorkloadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, faculty_id = %faculty_id, "Processing workload submission");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let result = state
        .service()
        .submit_entry(&request.into_candidate(faculty_id));
    if result.is_ok() {
        info!(
            correlation_id = %correlation_id,
            duration_us = started.elapsed().as_micros(),
            "Workload submission accepted"
        );
    }
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for PUT /api/faculty/:faculty_id/daily-workload/:entry_id.
async fn update_workload_handler(
    State(state): State<AppState>,
    Path((faculty_id, entry_id)): Path<(FacultyId, EntryId)>,
    payload: Result<Json<WorkloadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        faculty_id = %faculty_id,
        entry_id = %entry_id,
        "Processing workload edit"
    );

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state
        .service()
        .edit_entry(entry_id, &request.into_candidate(faculty_id));
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for DELETE /api/faculty/:faculty_id/daily-workload/:entry_id.
async fn delete_workload_handler(
    State(state): State<AppState>,
    Path((faculty_id, entry_id)): Path<(FacultyId, EntryId)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.service().delete_entry(faculty_id, entry_id);
    respond_empty(correlation_id, result)
}

/// Handler for GET /api/faculty/:faculty_id/subjects.
async fn faculty_subjects_handler(
    State(state): State<AppState>,
    Path(faculty_id): Path<FacultyId>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.service().subjects_for_faculty(faculty_id);
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /api/faculty/:faculty_id/monthly-summary?month=YYYY-MM.
async fn monthly_summary_handler(
    State(state): State<AppState>,
    Path(faculty_id): Path<FacultyId>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = query
        .billing_month()
        .and_then(|month| state.service().monthly_summary(faculty_id, month));
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /api/faculty/:faculty_id/receipt?month=YYYY-MM.
///
/// Returns the renderer-agnostic receipt document.
async fn receipt_handler(
    State(state): State<AppState>,
    Path(faculty_id): Path<FacultyId>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, faculty_id = %faculty_id, "Processing receipt request");

    let result = query
        .billing_month()
        .and_then(|month| state.service().receipt(faculty_id, month));
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /api/admin/faculty.
///
/// With `?email=`, responds with the matching faculty member or `null`.
async fn list_faculty_handler(
    State(state): State<AppState>,
    Query(query): Query<FacultyQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match query.email.as_deref().filter(|email| !email.trim().is_empty()) {
        Some(email) => {
            let result = state.service().find_faculty_by_email(email);
            respond(correlation_id, StatusCode::OK, result)
        }
        None => respond(correlation_id, StatusCode::OK, state.service().list_faculty()),
    }
}

/// Handler for POST /api/admin/faculty.
async fn create_faculty_handler(
    State(state): State<AppState>,
    payload: Result<Json<FacultyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.service().add_faculty(request.into());
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for DELETE /api/admin/faculty/:faculty_id.
async fn delete_faculty_handler(
    State(state): State<AppState>,
    Path(faculty_id): Path<FacultyId>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond_empty(correlation_id, state.service().delete_faculty(faculty_id))
}

/// Handler for GET /api/admin/subjects.
async fn list_subjects_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let service = state.service();

    let result = service.list_faculty().and_then(|faculty| {
        Ok(service
            .list_subjects()?
            .into_iter()
            .map(|subject| SubjectRow {
                faculty_name: faculty
                    .iter()
                    .find(|member| member.id == subject.faculty_id)
                    .map(|member| member.name.clone()),
                subject,
            })
            .collect::<Vec<_>>())
    });
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for POST /api/admin/subjects.
async fn create_subject_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubjectRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.service().add_subject(request.into());
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for DELETE /api/admin/subjects/:subject_id.
async fn delete_subject_handler(
    State(state): State<AppState>,
    Path(subject_id): Path<SubjectId>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond_empty(correlation_id, state.service().delete_subject(subject_id))
}

/// Handler for GET /api/admin/workload.
async fn admin_workload_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, StatusCode::OK, state.service().admin_workload())
}

/// Handler for GET /api/admin/analytics.
async fn analytics_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, StatusCode::OK, state.service().analytics())
}

/// Unwraps a JSON body or builds the 400 response for its rejection.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("MISSING_FIELD", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error).into_response())
}

/// Serializes a successful result with `status`, or maps the error.
fn respond<T: Serialize>(correlation_id: Uuid, status: StatusCode, result: EngineResult<T>) -> Response {
    match result {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(body),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Responds 204 on success, or maps the error.
fn respond_empty(correlation_id: Uuid, result: EngineResult<()>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
