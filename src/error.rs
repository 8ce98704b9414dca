//! Error types for the Faculty Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejection and failure the engine can report.

use thiserror::Error;

use crate::models::{BillingMonth, EntryId, FacultyId, SubjectId};
use crate::store::StoreError;

/// The main error type for the Faculty Payroll Engine.
///
/// Validation rejections (`InvalidTimeRange`, `OverlappingSlot`, `MissingField`)
/// are recoverable and carry enough context for a caller to re-prompt. An
/// unknown activity kind is deliberately absent: it is priced at the default rate.
///
/// # Example
///
/// ```
/// use faculty_payroll::error::EngineError;
///
/// let error = EngineError::InvalidTimeRange {
///     start: "14:00".to_string(),
///     end: "13:00".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time range 14:00-13:00: end time must be after start time"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end time is not after the start time, or a time could not be parsed.
    #[error("Invalid time range {start}-{end}: end time must be after start time")]
    InvalidTimeRange {
        /// The start time as submitted.
        start: String,
        /// The end time as submitted.
        end: String,
    },

    /// The candidate range overlaps an existing entry of the same faculty and day.
    #[error("Time slot overlaps with existing entry {conflicting_entry_id}")]
    OverlappingSlot {
        /// The stored entry that the candidate conflicts with.
        conflicting_entry_id: EntryId,
    },

    /// A receipt was requested for a month with no entries.
    #[error("No entries found for faculty {faculty_id} in {month}")]
    NoEntriesForPeriod {
        /// The faculty the receipt was requested for.
        faculty_id: FacultyId,
        /// The requested month.
        month: BillingMonth,
    },

    /// A required field was empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the empty field.
        field: String,
    },

    /// A month string was not in `YYYY-MM` form.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected value.
        value: String,
    },

    /// The faculty member does not exist.
    #[error("Faculty not found: {faculty_id}")]
    FacultyNotFound {
        /// The missing faculty id.
        faculty_id: FacultyId,
    },

    /// The workload entry does not exist (or belongs to another faculty).
    #[error("Entry not found: {entry_id}")]
    EntryNotFound {
        /// The missing entry id.
        entry_id: EntryId,
    },

    /// The subject does not exist.
    #[error("Subject not found: {subject_id}")]
    SubjectNotFound {
        /// The missing subject id.
        subject_id: SubjectId,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The storage collaborator failed. Passed through unchanged.
    #[error("Storage error: {0}")]
    Store(StoreError),
}

/// A late exclusion-constraint conflict from the store is reported the same
/// way as one caught during validation.
impl From<StoreError> for EngineError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Conflict { conflicting_id } => EngineError::OverlappingSlot {
                conflicting_entry_id: conflicting_id,
            },
            other => EngineError::Store(other),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
