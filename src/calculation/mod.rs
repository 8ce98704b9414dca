//! Calculation logic for the Faculty Payroll Engine.
//!
//! This module contains the workload validator (duration, overlap, and pay),
//! the monthly aggregator, the receipt data builder, institution-wide
//! analytics, and the rounding and display helpers they share.

mod aggregator;
mod analytics;
mod formatting;
mod receipt;
mod rounding;
mod validator;

pub use aggregator::{admin_listing, summarize};
pub use analytics::compute_analytics;
pub use formatting::{fixed2, format_display_date, truncate_chars, whole};
pub use receipt::{RECEIPT_HEADER, ReceiptDataBuilder, SUBJECT_NAME_WIDTH, receipt_file_name};
pub use rounding::{DECIMAL_PLACES, round_hours, round_money};
pub use validator::validate_and_price;
