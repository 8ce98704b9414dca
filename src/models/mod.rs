//! Core data models for the Faculty Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod activity;
mod entry;
mod faculty;
mod ids;
mod receipt;
mod summary;
mod time_range;

pub use activity::ActivityKind;
pub use entry::{
    AuditStep, DATE_FORMAT, PricedEntry, RecordedEntry, WorkloadCandidate, WorkloadEntry,
};
pub use faculty::{Faculty, NewFaculty, NewSubject, Subject};
pub use ids::{EntryId, FacultyId, SubjectId};
pub use receipt::{Alignment, ColumnHint, ReceiptDocument, ReceiptTable, ReceiptTitle};
pub use summary::{
    AdminWorkloadRow, Analytics, BillingMonth, FacultySalary, FacultyWorkload, MonthlySummary,
    SummaryEntry,
};
pub use time_range::{TIME_FORMAT, TimeRange};
