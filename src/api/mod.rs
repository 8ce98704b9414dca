//! HTTP API module for the Faculty Payroll Engine.
//!
//! This module provides the REST API endpoints for recording daily workload,
//! reading monthly summaries and receipts, and administering faculty and
//! subjects.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FacultyQuery, FacultyRequest, MonthQuery, SubjectRequest, WorkloadRequest};
pub use response::{ApiError, ApiErrorResponse, SubjectRow};
pub use state::AppState;
