//! Monthly aggregation and listings.
//!
//! Pure functions over stored entries. Totals sum the pay stored with each
//! entry rather than recomputing `duration * rate`, so a receipt for a past
//! month is unaffected by later rate changes.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::{
    AdminWorkloadRow, BillingMonth, Faculty, FacultyId, MonthlySummary, SubjectId, SummaryEntry,
    TIME_FORMAT, WorkloadEntry,
};

use super::{format_display_date, round_money};

/// Summarizes one faculty member's entries for one month.
///
/// `entries_for_month` must already be filtered to the faculty and month.
/// Entries are ordered by work date (newest first) and then start time; the
/// sort is stable so entries with equal keys keep their input order.
///
/// Subject names come from `subject_names`; an entry whose subject is not
/// listed is shown as `Subject #<id>`.
///
/// # Examples
///
/// ```
/// use faculty_payroll::calculation::summarize;
/// use faculty_payroll::models::FacultyId;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let summary = summarize(FacultyId(1), "2025-03".parse().unwrap(), &[], &HashMap::new());
/// assert!(summary.entries.is_empty());
/// assert_eq!(summary.total_pay, Decimal::ZERO);
/// ```
pub fn summarize(
    faculty_id: FacultyId,
    month: BillingMonth,
    entries_for_month: &[WorkloadEntry],
    subject_names: &HashMap<SubjectId, String>,
) -> MonthlySummary {
    let mut ordered: Vec<&WorkloadEntry> = entries_for_month.iter().collect();
    ordered.sort_by(|a, b| {
        b.work_date
            .cmp(&a.work_date)
            .then_with(|| compare_start_times(&a.start_time, &b.start_time))
    });

    let total_pay = round_money(ordered.iter().map(|entry| entry.pay).sum::<Decimal>());

    let entries = ordered
        .into_iter()
        .map(|entry| SummaryEntry {
            entry: entry.clone(),
            subject_name: subject_name(subject_names, entry.subject_id),
            work_date_formatted: format_display_date(&entry.work_date),
        })
        .collect();

    MonthlySummary {
        faculty_id,
        month,
        entries,
        total_pay,
    }
}

/// Lists every entry across all faculty.
///
/// Ordered by work date (newest first), then faculty name, then start time.
/// Entries whose faculty is unknown are skipped.
pub fn admin_listing(
    entries: &[WorkloadEntry],
    faculty: &[Faculty],
    subject_names: &HashMap<SubjectId, String>,
) -> Vec<AdminWorkloadRow> {
    let faculty_names: HashMap<FacultyId, &str> = faculty
        .iter()
        .map(|member| (member.id, member.name.as_str()))
        .collect();

    let mut rows: Vec<AdminWorkloadRow> = entries
        .iter()
        .filter_map(|entry| {
            let faculty_name = faculty_names.get(&entry.faculty_id)?;
            Some(AdminWorkloadRow {
                entry: entry.clone(),
                faculty_name: faculty_name.to_string(),
                subject_name: subject_name(subject_names, entry.subject_id),
                work_date_formatted: format_display_date(&entry.work_date),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.entry
            .work_date
            .cmp(&a.entry.work_date)
            .then_with(|| a.faculty_name.cmp(&b.faculty_name))
            .then_with(|| compare_start_times(&a.entry.start_time, &b.entry.start_time))
    });

    rows
}

/// Orders stored start times by clock time, so `9:00` comes before `10:00`.
///
/// Times that do not parse sort after every valid time, by their raw text.
pub(super) fn compare_start_times(a: &str, b: &str) -> Ordering {
    start_time_key(a).cmp(&start_time_key(b))
}

fn start_time_key(raw: &str) -> (bool, Option<NaiveTime>, &str) {
    let parsed = NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).ok();
    (parsed.is_none(), parsed, raw)
}

fn subject_name(subject_names: &HashMap<SubjectId, String>, id: SubjectId) -> String {
    subject_names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("Subject #{}", id))
}
