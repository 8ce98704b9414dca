//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{InstitutionConfig, RateTable, RatesConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── institution.yaml  # Organisation name, currency symbol, receipt note
/// └── rates.yaml        # Default rate and per-activity hourly rates
/// ```
///
/// # Example
///
/// ```no_run
/// use faculty_payroll::config::ConfigLoader;
/// use faculty_payroll::models::ActivityKind;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Lecture rate: {}", loader.rate_table().rate_for(&ActivityKind::Lecture));
/// # Ok::<(), faculty_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    institution: InstitutionConfig,
    rate_table: RateTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let institution = Self::load_yaml::<InstitutionConfig>(&path.join("institution.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;

        Ok(Self::from_parts(institution, rates.into()))
    }

    /// Builds a loader from already-parsed configuration.
    pub fn from_parts(institution: InstitutionConfig, rate_table: RateTable) -> Self {
        Self {
            institution,
            rate_table,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the institution details.
    pub fn institution(&self) -> &InstitutionConfig {
        &self.institution
    }

    /// Returns the rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }
}
