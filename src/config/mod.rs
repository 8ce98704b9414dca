//! Configuration loading and management for the Faculty Payroll Engine.
//!
//! This module loads the institution details and the activity rate table from
//! YAML files. The rate table is immutable once loaded.
//!
//! # Example
//!
//! ```no_run
//! use faculty_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Issuing receipts for: {}", config.institution().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{InstitutionConfig, RateTable, RatesConfig};
