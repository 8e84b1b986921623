//! Configuration loading and management.
//!
//! Loads the employer's company settings and the server settings from YAML
//! files. Statutory rates are compiled in and are not part of configuration.
//!
//! # Example
//!
//! ```no_run
//! use ghana_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded company: {}", config.company().company_name);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_DIR_ENV, ConfigLoader, DEFAULT_CONFIG_DIR};
pub use types::{DEFAULT_BIND_ADDRESS, PayrollConfig, ServerConfig};
