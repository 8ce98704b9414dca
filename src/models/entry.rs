//! Workload entry models.
//!
//! A submission moves through three shapes: a [`WorkloadCandidate`] as entered,
//! a [`PricedEntry`] once validated and priced, and a [`WorkloadEntry`] once
//! the store has assigned it an id.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{ActivityKind, EntryId, FacultyId, SubjectId, TimeRange};

/// The persisted calendar date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A proposed workload entry, before validation.
///
/// Times are kept as submitted so that an unparsable value can be reported
/// back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadCandidate {
    /// The faculty member who did the work.
    pub faculty_id: FacultyId,
    /// The subject the activity belongs to.
    pub subject_id: SubjectId,
    /// The calendar date of the activity.
    pub work_date: NaiveDate,
    /// The kind of activity.
    pub activity_kind: ActivityKind,
    /// The start time as `HH:MM`.
    pub start_time: String,
    /// The end time as `HH:MM`.
    pub end_time: String,
}

/// A single step in the validation trace of a priced entry.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A validated entry carrying all derived fields, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedEntry {
    /// The faculty member who did the work.
    pub faculty_id: FacultyId,
    /// The subject the activity belongs to.
    pub subject_id: SubjectId,
    /// The calendar date of the activity.
    pub work_date: NaiveDate,
    /// The kind of activity.
    pub activity_kind: ActivityKind,
    /// The validated time range.
    pub time_range: TimeRange,
    /// Duration in hours, rounded to 2 decimal places.
    pub duration_hours: Decimal,
    /// Hourly rate from the rate table.
    pub hourly_rate: Decimal,
    /// `duration_hours * hourly_rate`, rounded to 2 decimal places.
    pub pay: Decimal,
    /// The validation steps that produced this entry.
    pub audit_trace: Vec<AuditStep>,
}

/// A stored entry together with the validation trace that admitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEntry {
    /// The entry as stored.
    pub entry: WorkloadEntry,
    /// The validation steps that produced it.
    pub audit_trace: Vec<AuditStep>,
}

/// A stored workload entry.
///
/// Date and time fields hold their persisted text form (`YYYY-MM-DD` and
/// `HH:MM`). Records written by this engine are always well-formed, but
/// records from elsewhere may not be, and readers must tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadEntry {
    /// Store-assigned id.
    pub id: EntryId,
    /// The faculty member who did the work.
    pub faculty_id: FacultyId,
    /// The subject the activity belongs to.
    pub subject_id: SubjectId,
    /// The calendar date as `YYYY-MM-DD`.
    pub work_date: String,
    /// The kind of activity.
    pub activity_kind: ActivityKind,
    /// The start time as `HH:MM`.
    pub start_time: String,
    /// The end time as `HH:MM`.
    pub end_time: String,
    /// Duration in hours as stored.
    pub duration_hours: Decimal,
    /// Hourly rate as stored.
    pub hourly_rate: Decimal,
    /// Pay as stored.
    pub pay: Decimal,
}

impl WorkloadEntry {
    /// Builds the stored form of a priced entry.
    pub fn from_priced(id: EntryId, priced: &PricedEntry) -> Self {
        Self {
            id,
            faculty_id: priced.faculty_id,
            subject_id: priced.subject_id,
            work_date: priced.work_date.format(DATE_FORMAT).to_string(),
            activity_kind: priced.activity_kind.clone(),
            start_time: priced.time_range.start_str(),
            end_time: priced.time_range.end_str(),
            duration_hours: priced.duration_hours,
            hourly_rate: priced.hourly_rate,
            pay: priced.pay,
        }
    }

    /// Parses the stored times.
    pub fn time_range(&self) -> EngineResult<TimeRange> {
        TimeRange::parse(&self.start_time, &self.end_time)
    }

    /// Parses the stored date, if well-formed.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.work_date, DATE_FORMAT).ok()
    }

    /// Returns true if this entry blocks the given range.
    ///
    /// Stored times that do not parse always conflict, so a corrupt record can
    /// never let an overlapping entry through.
    pub fn conflicts_with(&self, range: &TimeRange) -> bool {
        match self.time_range() {
            Ok(stored) => stored.overlaps(range),
            Err(_) => true,
        }
    }
}
