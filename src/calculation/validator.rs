//! Workload entry validation and pricing.
//!
//! This module decides whether a proposed entry may be recorded and computes
//! its derived fields. It never touches storage: the caller supplies the
//! existing same-day entries and persists the result.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EntryId, PricedEntry, TimeRange, WorkloadCandidate, WorkloadEntry};

use super::round_money;

/// Validates a candidate entry and prices it.
///
/// # Arguments
///
/// * `candidate` - The proposed entry
/// * `existing_same_day` - Every stored entry for the same faculty on the same date
/// * `exclude_entry_id` - When editing, the entry's own id, so it is not compared with itself
/// * `rates` - The activity rate table
///
/// # Steps
///
/// 1. Duration: the times must parse and the end must be after the start,
///    otherwise `InvalidTimeRange`.
/// 2. Overlap: any other same-day entry whose range intersects the candidate,
///    or whose stored times do not parse, rejects with `OverlappingSlot`.
/// 3. Pricing: the rate comes from the rate table (default rate for unknown
///    kinds) and pay is `duration * rate` rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use faculty_payroll::calculation::validate_and_price;
/// use faculty_payroll::config::RateTable;
/// use faculty_payroll::models::{ActivityKind, FacultyId, SubjectId, WorkloadCandidate};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let rates = RateTable::new(Decimal::new(500, 0), HashMap::new());
/// let candidate = WorkloadCandidate {
///     faculty_id: FacultyId(1),
///     subject_id: SubjectId(1),
///     work_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     activity_kind: ActivityKind::from("seminar"),
///     start_time: "10:00".to_string(),
///     end_time: "12:00".to_string(),
/// };
///
/// let priced = validate_and_price(&candidate, &[], None, &rates).unwrap();
/// assert_eq!(priced.pay, Decimal::new(100000, 2));
/// ```
pub fn validate_and_price(
    candidate: &WorkloadCandidate,
    existing_same_day: &[WorkloadEntry],
    exclude_entry_id: Option<EntryId>,
    rates: &RateTable,
) -> EngineResult<PricedEntry> {
    check_required_fields(candidate)?;

    let (time_range, duration_hours, duration_step) = check_duration(candidate)?;
    let overlap_step = check_overlap(&time_range, existing_same_day, exclude_entry_id, 2)?;

    let hourly_rate = rates.rate_for(&candidate.activity_kind);
    let configured = rates.is_configured(&candidate.activity_kind);
    let source = if configured { "configured" } else { "default" };
    let rate_step = AuditStep {
        step_number: 3,
        rule_id: "rate_lookup".to_string(),
        rule_name: "Rate Lookup".to_string(),
        input: serde_json::json!({
            "activity_kind": candidate.activity_kind.as_str(),
        }),
        output: serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "source": source,
        }),
        reasoning: if configured {
            format!(
                "Activity '{}' is paid at its configured rate of {}",
                candidate.activity_kind, hourly_rate
            )
        } else {
            format!(
                "Activity '{}' has no configured rate; using the default rate of {}",
                candidate.activity_kind, hourly_rate
            )
        },
    };

    let pay = round_money(duration_hours * hourly_rate);
    let pay_step = AuditStep {
        step_number: 4,
        rule_id: "pay_calculation".to_string(),
        rule_name: "Pay Calculation".to_string(),
        input: serde_json::json!({
            "duration_hours": duration_hours.to_string(),
            "hourly_rate": hourly_rate.to_string(),
        }),
        output: serde_json::json!({
            "pay": pay.to_string(),
        }),
        reasoning: format!("{} hours × {} = {}", duration_hours, hourly_rate, pay),
    };

    debug!(
        faculty_id = %candidate.faculty_id,
        work_date = %candidate.work_date,
        duration_hours = %duration_hours,
        hourly_rate = %hourly_rate,
        pay = %pay,
        "Priced workload entry"
    );

    Ok(PricedEntry {
        faculty_id: candidate.faculty_id,
        subject_id: candidate.subject_id,
        work_date: candidate.work_date,
        activity_kind: candidate.activity_kind.clone(),
        time_range,
        duration_hours,
        hourly_rate,
        pay,
        audit_trace: vec![duration_step, overlap_step, rate_step, pay_step],
    })
}

fn check_required_fields(candidate: &WorkloadCandidate) -> EngineResult<()> {
    let missing = if candidate.faculty_id.0 == 0 {
        Some("faculty_id")
    } else if candidate.subject_id.0 == 0 {
        Some("subject_id")
    } else if candidate.activity_kind.is_blank() {
        Some("activity_type")
    } else if candidate.start_time.trim().is_empty() {
        Some("start_time")
    } else if candidate.end_time.trim().is_empty() {
        Some("end_time")
    } else {
        None
    };

    match missing {
        Some(field) => Err(EngineError::MissingField {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_duration(candidate: &WorkloadCandidate) -> EngineResult<(TimeRange, Decimal, AuditStep)> {
    let time_range = TimeRange::parse(&candidate.start_time, &candidate.end_time).inspect_err(|_| {
        warn!(
            start_time = %candidate.start_time,
            end_time = %candidate.end_time,
            "Rejected entry with unparsable times"
        );
    })?;

    let duration_hours = time_range.duration_hours();
    if duration_hours <= Decimal::ZERO {
        warn!(
            start_time = %candidate.start_time,
            end_time = %candidate.end_time,
            "Rejected entry whose end is not after its start"
        );
        return Err(EngineError::InvalidTimeRange {
            start: candidate.start_time.clone(),
            end: candidate.end_time.clone(),
        });
    }

    let step = AuditStep {
        step_number: 1,
        rule_id: "duration_check".to_string(),
        rule_name: "Duration Check".to_string(),
        input: serde_json::json!({
            "start_time": time_range.start_str(),
            "end_time": time_range.end_str(),
        }),
        output: serde_json::json!({
            "duration_hours": duration_hours.to_string(),
        }),
        reasoning: format!(
            "{}-{} lasts {} hours",
            time_range.start_str(),
            time_range.end_str(),
            duration_hours
        ),
    };

    Ok((time_range, duration_hours, step))
}

/// Checks a range against the stored same-day entries, skipping `exclude_entry_id`.
///
/// Stored entries with unparsable times count as conflicts.
fn check_overlap(
    range: &TimeRange,
    existing_same_day: &[WorkloadEntry],
    exclude_entry_id: Option<EntryId>,
    step_number: u32,
) -> EngineResult<AuditStep> {
    let others = existing_same_day
        .iter()
        .filter(|entry| Some(entry.id) != exclude_entry_id);

    let mut compared = 0usize;
    for entry in others {
        compared += 1;
        if entry.conflicts_with(range) {
            if entry.time_range().is_err() {
                warn!(
                    entry_id = %entry.id,
                    start_time = %entry.start_time,
                    end_time = %entry.end_time,
                    "Stored entry has unparsable times; treating as overlap"
                );
            } else {
                warn!(
                    entry_id = %entry.id,
                    start_time = %entry.start_time,
                    end_time = %entry.end_time,
                    "Rejected entry overlapping an existing slot"
                );
            }
            return Err(EngineError::OverlappingSlot {
                conflicting_entry_id: entry.id,
            });
        }
    }

    Ok(AuditStep {
        step_number,
        rule_id: "overlap_check".to_string(),
        rule_name: "Overlap Check".to_string(),
        input: serde_json::json!({
            "start_time": range.start_str(),
            "end_time": range.end_str(),
            "excluded_entry_id": exclude_entry_id.map(|id| id.0),
        }),
        output: serde_json::json!({
            "entries_compared": compared,
            "overlap": false,
        }),
        reasoning: format!("No overlap with {} other entries on the same day", compared),
    })
}
