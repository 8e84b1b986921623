//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::CompanySettings;
use crate::validation::validate_company_settings;

use super::types::{PayrollConfig, ServerConfig};

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "PAYROLL_CONFIG_DIR";

/// Configuration directory used when [`CONFIG_DIR_ENV`] is not set.
pub const DEFAULT_CONFIG_DIR: &str = "./config/default";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── company.yaml   # Employer identity and payroll month
/// └── server.yaml    # HTTP bind address
/// ```
///
/// Statutory rates are not configurable; they live in
/// [`crate::calculation::StatutoryRates`].
///
/// # Example
///
/// ```no_run
/// use ghana_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Company: {}", loader.company().company_name);
/// # Ok::<(), ghana_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `company.yaml` or `server.yaml` is missing
    /// - Either file contains invalid YAML
    /// - The company settings fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanySettings>(&path.join("company.yaml"))?;
        if let Some(issue) = validate_company_settings(&company).into_iter().next() {
            return Err(EngineError::InvalidCompanySettings {
                field: issue.field,
                message: issue.message,
            });
        }

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;

        info!(
            config_dir = %path.display(),
            company = %company.company_name,
            payroll_month = %company.payroll_month,
            "Configuration loaded"
        );

        Ok(Self {
            config: PayrollConfig::new(company, server),
        })
    }

    /// Loads configuration from `PAYROLL_CONFIG_DIR`, or from
    /// `./config/default` when the variable is unset.
    pub fn from_env() -> EngineResult<Self> {
        let dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
        Self::load(dir)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the company settings.
    pub fn company(&self) -> &CompanySettings {
        self.config.company()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }
}
