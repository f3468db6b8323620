//! Configuration management.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLINIC_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting (an empty file is valid)
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clinic_adapter::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinic.toml")?;
//!
//! match config.backend.base_url() {
//!     Some(url) => println!("Live mode against {url}"),
//!     None => println!("Mock mode"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`BackendConfig`] - Base URL, CSRF header/token, timeout, cookies
//! - [`MockConfig`] - Fixture latency simulation
//! - [`LoggingConfig`] - Optional rolling JSON log file
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [backend]
//! base_url = "https://emr.example.org/api"
//! csrf_header = "X-CSRF-Token"
//! csrf_token = "${CLINIC_CSRF_TOKEN}"
//!
//! [mock]
//! simulate_latency = true
//! read_delay_ms = 300
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, BackendConfig, ClinicConfig, LoggingConfig, MockConfig};
pub use secret::{secret_string, SecretString, SecretValue};
