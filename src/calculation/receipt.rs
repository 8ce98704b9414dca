//! Receipt data building.
//!
//! Turns a [`MonthlySummary`] and the faculty member's identity into the rows,
//! totals, and layout hints consumed by an external document renderer.

use rust_decimal::Decimal;

use crate::config::InstitutionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Alignment, BillingMonth, ColumnHint, Faculty, MonthlySummary, ReceiptDocument, ReceiptTable,
    ReceiptTitle, SummaryEntry,
};

use super::aggregator::compare_start_times;
use super::{fixed2, format_display_date, truncate_chars, whole};

/// Maximum number of subject name characters printed on a receipt row.
pub const SUBJECT_NAME_WIDTH: usize = 20;

/// Receipt column titles.
pub const RECEIPT_HEADER: [&str; 7] = ["Date", "Subject", "Activity", "Time", "Hours", "Rate/Hr", "Pay"];

const COLUMN_WIDTHS: [f32; 7] = [0.9, 1.5, 0.9, 1.2, 0.7, 0.7, 0.9];

/// Builds receipt data for the document renderer.
#[derive(Debug, Clone)]
pub struct ReceiptDataBuilder {
    organization: String,
    currency_symbol: String,
    note: String,
}

impl ReceiptDataBuilder {
    /// Creates a builder that prefixes monetary cells with `currency_symbol`.
    pub fn new(
        organization: impl Into<String>,
        currency_symbol: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            currency_symbol: currency_symbol.into(),
            note: note.into(),
        }
    }

    /// Creates a builder from the institution configuration.
    pub fn from_config(institution: &InstitutionConfig) -> Self {
        Self::new(
            institution.name.clone(),
            institution.currency_symbol.clone(),
            institution.receipt_note.clone(),
        )
    }

    /// Builds the receipt table for a summary.
    ///
    /// Produces one row per summary entry followed by a totals row. Rows run
    /// oldest date first, then by start time; equal keys keep summary order.
    /// The total hours are summed from the rows themselves while the total
    /// pay is taken from the summary, so a rounding drift between the two
    /// stays visible.
    ///
    /// Returns `NoEntriesForPeriod` if the summary has no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use faculty_payroll::calculation::{ReceiptDataBuilder, summarize};
    /// use faculty_payroll::error::EngineError;
    /// use faculty_payroll::models::{Faculty, FacultyId};
    /// use std::collections::HashMap;
    ///
    /// let faculty = Faculty {
    ///     id: FacultyId(1),
    ///     name: "Asha Patil".to_string(),
    ///     email: "asha@example.edu".to_string(),
    ///     department: "Computer".to_string(),
    /// };
    /// let month = "2025-03".parse().unwrap();
    /// let summary = summarize(faculty.id, month, &[], &HashMap::new());
    ///
    /// let builder = ReceiptDataBuilder::new("Example College", "₹", "");
    /// let result = builder.build_rows(&faculty, month, &summary);
    /// assert!(matches!(result, Err(EngineError::NoEntriesForPeriod { .. })));
    /// ```
    pub fn build_rows(
        &self,
        faculty: &Faculty,
        month: BillingMonth,
        summary: &MonthlySummary,
    ) -> EngineResult<ReceiptTable> {
        if summary.entries.is_empty() {
            return Err(EngineError::NoEntriesForPeriod {
                faculty_id: faculty.id,
                month,
            });
        }

        let mut lines: Vec<&SummaryEntry> = summary.entries.iter().collect();
        lines.sort_by(|a, b| {
            a.entry
                .work_date
                .cmp(&b.entry.work_date)
                .then_with(|| compare_start_times(&a.entry.start_time, &b.entry.start_time))
        });

        let mut total_hours = Decimal::ZERO;
        let rows = lines
            .into_iter()
            .map(|line| {
                let entry = &line.entry;
                total_hours += entry.duration_hours;
                vec![
                    format_display_date(&entry.work_date),
                    truncate_chars(&line.subject_name, SUBJECT_NAME_WIDTH),
                    entry.activity_kind.display_name(),
                    format!("{}-{}", entry.start_time, entry.end_time),
                    fixed2(entry.duration_hours),
                    format!("{}{}", self.currency_symbol, whole(entry.hourly_rate)),
                    format!("{}{}", self.currency_symbol, fixed2(entry.pay)),
                ]
            })
            .collect();

        let totals = vec![
            String::new(),
            String::new(),
            String::new(),
            "TOTAL:".to_string(),
            fixed2(total_hours),
            String::new(),
            format!("{}{}", self.currency_symbol, fixed2(summary.total_pay)),
        ];

        let columns = COLUMN_WIDTHS
            .iter()
            .map(|&width_inches| ColumnHint {
                width_inches,
                alignment: Alignment::Center,
            })
            .collect();

        Ok(ReceiptTable {
            header: RECEIPT_HEADER.iter().map(|title| title.to_string()).collect(),
            rows,
            totals,
            columns,
            total_hours,
            total_pay: summary.total_pay,
        })
    }

    /// Builds the full receipt: title block, table, footer note, and file name.
    pub fn build_document(
        &self,
        faculty: &Faculty,
        month: BillingMonth,
        summary: &MonthlySummary,
    ) -> EngineResult<ReceiptDocument> {
        let table = self.build_rows(faculty, month, summary)?;

        Ok(ReceiptDocument {
            title: ReceiptTitle {
                organization: self.organization.clone(),
                heading: format!("Monthly Payment Receipt - {}", month),
                faculty_name: faculty.name.clone(),
                department: faculty.department.clone(),
                email: faculty.email.clone(),
                month,
            },
            table,
            note: self.note.clone(),
            file_name: receipt_file_name(&faculty.name, month),
        })
    }
}

/// Returns the download name for a receipt, e.g. `receipt_Asha_Patil_2025-03.pdf`.
pub fn receipt_file_name(faculty_name: &str, month: BillingMonth) -> String {
    format!("receipt_{}_{}.pdf", faculty_name.replace(' ', "_"), month)
}
