//! Configuration types.
//!
//! These structures are deserialized from the YAML files in a configuration
//! directory. Company settings reuse [`CompanySettings`] from the models.

use serde::{Deserialize, Serialize};

use crate::models::CompanySettings;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

/// HTTP server settings, read from `server.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// The complete loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    company: CompanySettings,
    server: ServerConfig,
}

impl PayrollConfig {
    /// Creates a new configuration from its parts.
    pub fn new(company: CompanySettings, server: ServerConfig) -> Self {
        Self { company, server }
    }

    /// Returns the company settings.
    pub fn company(&self) -> &CompanySettings {
        &self.company
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults_bind_address() {
        let config: ServerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_server_config_reads_bind_address() {
        let config: ServerConfig = serde_yaml::from_str("bind_address: 0.0.0.0:8080").unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_company_settings_from_yaml() {
        let yaml = r#"
company_name: Accra Textiles Ltd
company_tin: P0001112223
company_ssnit: C00011122233
payroll_month: "2026-01"
"#;
        let company: CompanySettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(company.company_name, "Accra Textiles Ltd");
        assert_eq!(company.company_address, None);
        assert_eq!(company.payroll_month, "2026-01");
    }
}
