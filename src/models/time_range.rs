//! Same-day time range model.
//!
//! This module defines [`TimeRange`], the wall-clock start/end pair attached to
//! every workload entry, along with its duration and overlap rules.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_hours;
use crate::error::{EngineError, EngineResult};

/// The persisted 24-hour time format.
pub const TIME_FORMAT: &str = "%H:%M";

/// A same-day start/end pair.
///
/// A range whose end is not strictly after its start is representable but has
/// a non-positive duration; consumers must reject it.
///
/// # Example
///
/// ```
/// use faculty_payroll::models::TimeRange;
/// use rust_decimal::Decimal;
///
/// let morning = TimeRange::parse("09:00", "10:30").unwrap();
/// assert_eq!(morning.duration_hours(), Decimal::new(150, 2));
///
/// let next = TimeRange::parse("10:30", "11:00").unwrap();
/// assert!(!morning.overlaps(&next));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// The start of the activity.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// The end of the activity.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a range from two times without checking their order.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses a range from two `HH:MM` strings.
    ///
    /// Returns `InvalidTimeRange` carrying the raw pair if either side does not
    /// parse. The order of the two times is not checked here.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidTimeRange {
            start: start.to_string(),
            end: end.to_string(),
        };

        let start_time = NaiveTime::parse_from_str(start.trim(), TIME_FORMAT).map_err(|_| invalid())?;
        let end_time = NaiveTime::parse_from_str(end.trim(), TIME_FORMAT).map_err(|_| invalid())?;

        Ok(Self::new(start_time, end_time))
    }

    /// Returns the length of the range in hours, rounded to 2 decimal places.
    ///
    /// The result is zero or negative when the end is not after the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use faculty_payroll::models::TimeRange;
    /// use rust_decimal::Decimal;
    ///
    /// let range = TimeRange::parse("14:00", "13:00").unwrap();
    /// assert!(range.duration_hours() <= Decimal::ZERO);
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes();
        round_hours(Decimal::new(minutes, 0) / Decimal::new(60, 0))
    }

    /// Returns true if the two half-open ranges intersect.
    ///
    /// Touching ranges such as 10:00-11:00 and 11:00-12:00 do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Formats the start time as `HH:MM`.
    pub fn start_str(&self) -> String {
        self.start.format(TIME_FORMAT).to_string()
    }

    /// Formats the end time as `HH:MM`.
    pub fn end_str(&self) -> String {
        self.end.format(TIME_FORMAT).to_string()
    }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(D::Error::custom)
    }
}
