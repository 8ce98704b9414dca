//! Monthly summary, listing, and analytics models.
//!
//! None of these are persisted; they are recomputed from stored entries on
//! every query.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::{FacultyId, WorkloadEntry};

/// A calendar month in `YYYY-MM` form.
///
/// # Example
///
/// ```
/// use faculty_payroll::models::BillingMonth;
/// use chrono::NaiveDate;
///
/// let month: BillingMonth = "2025-03".parse().unwrap();
/// assert!(month.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
/// assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
/// assert_eq!(month.to_string(), "2025-03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillingMonth {
    year: i32,
    month: u32,
}

impl BillingMonth {
    /// Creates a month, returning `None` if `month` is not in 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true if the date falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for BillingMonth {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: value.to_string(),
        };

        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for BillingMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillingMonth> for String {
    fn from(month: BillingMonth) -> Self {
        month.to_string()
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A stored entry together with the display fields a summary needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// The stored entry.
    #[serde(flatten)]
    pub entry: WorkloadEntry,
    /// The name of the entry's subject.
    pub subject_name: String,
    /// The work date as `DD-MM-YYYY`, or the raw value if it did not parse.
    pub work_date_formatted: String,
}

/// One faculty member's entries and pay for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The faculty member.
    pub faculty_id: FacultyId,
    /// The month covered.
    pub month: BillingMonth,
    /// Entries ordered by date (newest first), then start time.
    pub entries: Vec<SummaryEntry>,
    /// Sum of the stored pay of every entry, rounded to 2 decimal places.
    pub total_pay: Decimal,
}

/// A row of the institution-wide workload listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminWorkloadRow {
    /// The stored entry.
    #[serde(flatten)]
    pub entry: WorkloadEntry,
    /// The name of the faculty member.
    pub faculty_name: String,
    /// The name of the subject.
    pub subject_name: String,
    /// The work date as `DD-MM-YYYY`, or the raw value if it did not parse.
    pub work_date_formatted: String,
}

/// Hours logged by one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyWorkload {
    /// Faculty name.
    pub name: String,
    /// Total hours across all entries.
    pub workload: Decimal,
}

/// Pay earned by one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultySalary {
    /// Faculty name.
    pub name: String,
    /// Total pay across all entries.
    pub salary: Decimal,
}

/// Institution-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    /// Number of registered faculty members.
    pub total_faculty: usize,
    /// Number of stored workload entries.
    pub total_workload_entries: usize,
    /// Sum of all stored pay, rounded to 2 decimal places.
    pub total_salary: Decimal,
    /// Every faculty member with their total hours, highest first.
    pub faculty_workload: Vec<FacultyWorkload>,
    /// Faculty members with non-zero pay, highest first.
    pub salary_distribution: Vec<FacultySalary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_month() {
        let month: BillingMonth = "2024-12".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 12);
    }

    #[test]
    fn test_parse_rejects_bad_months() {
        for value in ["2024-13", "2024-00", "2024-1", "24-01", "2024/01", "", "2024-ab"] {
            match value.parse::<BillingMonth>() {
                Err(EngineError::InvalidMonth { value: v }) => assert_eq!(v, value),
                other => panic!("Expected InvalidMonth for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_month_serde_round_trips_as_string() {
        let month: BillingMonth = serde_json::from_str("\"2025-01\"").unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2025-01\"");
        assert!(serde_json::from_str::<BillingMonth>("\"2025-1\"").is_err());
    }
}
