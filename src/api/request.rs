//! Request types for the Faculty Payroll API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! workload and admin endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ActivityKind, BillingMonth, FacultyId, NewFaculty, NewSubject, SubjectId, WorkloadCandidate,
};

/// Request body for creating or editing a daily workload entry.
///
/// The faculty id comes from the path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadRequest {
    /// The calendar date of the activity (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// The subject the activity belongs to.
    pub subject_id: SubjectId,
    /// The activity kind, e.g. `lecture`. Unknown kinds are priced at the default rate.
    pub activity_type: String,
    /// The start time as `HH:MM`.
    pub start_time: String,
    /// The end time as `HH:MM`.
    pub end_time: String,
}

impl WorkloadRequest {
    /// Converts the body into a validation candidate for `faculty_id`.
    pub fn into_candidate(self, faculty_id: FacultyId) -> WorkloadCandidate {
        WorkloadCandidate {
            faculty_id,
            subject_id: self.subject_id,
            work_date: self.date,
            activity_kind: ActivityKind::from(self.activity_type.as_str()),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Query string carrying the `month` parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    /// The month as `YYYY-MM`.
    #[serde(default)]
    pub month: Option<String>,
}

impl MonthQuery {
    /// Parses the month, rejecting a missing or blank value.
    pub fn billing_month(&self) -> EngineResult<BillingMonth> {
        match self.month.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.parse(),
            _ => Err(EngineError::MissingField {
                field: "month".to_string(),
            }),
        }
    }
}

/// Query string for the faculty listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacultyQuery {
    /// When present, look up a single faculty member by email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for registering a faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyRequest {
    /// Full name.
    pub name: String,
    /// Contact email, unique across faculty.
    pub email: String,
    /// Department name.
    pub department: String,
}

impl From<FacultyRequest> for NewFaculty {
    fn from(req: FacultyRequest) -> Self {
        NewFaculty {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            department: req.department.trim().to_string(),
        }
    }
}

/// Request body for registering a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequest {
    /// Subject name.
    pub name: String,
    /// The faculty member who teaches it.
    pub faculty_id: FacultyId,
}

impl From<SubjectRequest> for NewSubject {
    fn from(req: SubjectRequest) -> Self {
        NewSubject {
            name: req.name.trim().to_string(),
            faculty_id: req.faculty_id,
        }
    }
}
