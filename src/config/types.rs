//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::ActivityKind;

/// Details about the institution issuing receipts.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionConfig {
    /// The organisation name printed at the top of each receipt.
    pub name: String,
    /// Symbol prefixed to monetary receipt cells.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Footer note printed under the receipt table.
    #[serde(default = "default_receipt_note")]
    pub receipt_note: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_receipt_note() -> String {
    "This is a computer-generated receipt.".to_string()
}

/// Rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Rate applied to any activity kind missing from `rates`.
    pub default_rate: Decimal,
    /// Map of activity kind name to hourly rate.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

/// Hourly rates per activity kind, with a default fallback.
///
/// # Example
///
/// ```
/// use faculty_payroll::config::RateTable;
/// use faculty_payroll::models::ActivityKind;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let rates = RateTable::new(
///     Decimal::new(500, 0),
///     HashMap::from([("tutorial".to_string(), Decimal::new(300, 0))]),
/// );
/// assert_eq!(rates.rate_for(&ActivityKind::Tutorial), Decimal::new(300, 0));
/// assert_eq!(rates.rate_for(&ActivityKind::from("seminar")), Decimal::new(500, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    default_rate: Decimal,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates a rate table. Keys are matched case-insensitively.
    pub fn new(default_rate: Decimal, rates: HashMap<String, Decimal>) -> Self {
        let rates = rates
            .into_iter()
            .map(|(kind, rate)| (kind.trim().to_lowercase(), rate))
            .collect();
        Self { default_rate, rates }
    }

    /// Returns the rate for an activity kind, or the default rate if the kind
    /// is not configured.
    pub fn rate_for(&self, kind: &ActivityKind) -> Decimal {
        self.rates
            .get(kind.as_str())
            .copied()
            .unwrap_or(self.default_rate)
    }

    /// Returns true if the kind has its own configured rate.
    pub fn is_configured(&self, kind: &ActivityKind) -> bool {
        self.rates.contains_key(kind.as_str())
    }

    /// Returns the fallback rate.
    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }
}

impl From<RatesConfig> for RateTable {
    fn from(config: RatesConfig) -> Self {
        RateTable::new(config.default_rate, config.rates)
    }
}
