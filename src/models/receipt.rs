//! Receipt data handed to the document renderer.
//!
//! The engine never renders; these types describe the rows, totals, and layout
//! hints a renderer needs to typeset a monthly payment receipt.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BillingMonth;

/// Horizontal alignment hint for a receipt column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left-aligned.
    Left,
    /// Centred.
    Center,
    /// Right-aligned.
    Right,
}

/// Layout hint for one receipt column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHint {
    /// Suggested width in inches.
    pub width_inches: f32,
    /// Suggested alignment.
    pub alignment: Alignment,
}

/// The tabular body of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptTable {
    /// Column titles.
    pub header: Vec<String>,
    /// One row per workload entry, already formatted.
    pub rows: Vec<Vec<String>>,
    /// The trailing totals row.
    pub totals: Vec<String>,
    /// One layout hint per column.
    pub columns: Vec<ColumnHint>,
    /// Sum of the row durations.
    pub total_hours: Decimal,
    /// The summary's total pay.
    pub total_pay: Decimal,
}

/// The title block printed above the receipt table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptTitle {
    /// The issuing organisation.
    pub organization: String,
    /// The receipt heading, including the month.
    pub heading: String,
    /// Faculty name.
    pub faculty_name: String,
    /// Faculty department.
    pub department: String,
    /// Faculty email.
    pub email: String,
    /// The month covered.
    pub month: BillingMonth,
}

/// Everything a renderer needs to produce one receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    /// The title block.
    pub title: ReceiptTitle,
    /// The table of entries and totals.
    pub table: ReceiptTable,
    /// Footer note.
    pub note: String,
    /// Suggested download file name.
    pub file_name: String,
}
