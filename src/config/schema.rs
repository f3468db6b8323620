//! `clinic.toml` layout
//!
//! Every section is optional: an empty file yields a valid mock-mode
//! configuration.

use crate::adapters::http::{HttpSettings, HttpSettingsStore};
use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Root of `clinic.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClinicConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Backend connection; omitting `base_url` selects mock mode
    #[serde(default)]
    pub backend: BackendConfig,

    /// Fixture provider settings
    #[serde(default)]
    pub mock: MockConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClinicConfig {
    /// Check every section, reporting the first invalid key
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.backend.validate()?;
        self.mock.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Whether this configuration runs against fixtures
    pub fn is_mock_mode(&self) -> bool {
        self.backend.base_url().is_none()
    }

    /// Seeds the runtime settings store from the `[backend]` section
    pub fn http_settings(&self) -> HttpSettingsStore {
        HttpSettingsStore::new(HttpSettings::from_backend_config(&self.backend))
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        one_of(
            "application.log_level",
            &self.log_level,
            &["trace", "debug", "info", "warn", "error"],
        )
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Backend (EMR REST API) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the EMR API; absent or empty means mock mode
    #[serde(default)]
    pub base_url: Option<String>,

    /// Name of the anti-forgery header, e.g. `X-CSRF-Token`
    #[serde(default)]
    pub csrf_header: Option<String>,

    /// Anti-forgery token sent in `csrf_header`
    #[serde(default)]
    pub csrf_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Keep and send session cookies with every request
    #[serde(default = "default_true")]
    pub send_credentials: bool,
}

impl BackendConfig {
    /// Base URL if one is configured and non-empty
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(url) = self.base_url() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("backend.base_url must start with http:// or https://".to_string());
            }
        }

        if self.csrf_token.is_some()
            && self
                .csrf_header
                .as_deref()
                .map(str::is_empty)
                .unwrap_or(true)
        {
            return Err("backend.csrf_header is required when backend.csrf_token is set".to_string());
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(format!(
                "backend.timeout_seconds must be between 1 and 300, got {}",
                self.timeout_seconds
            ));
        }

        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            csrf_header: None,
            csrf_token: None,
            timeout_seconds: default_timeout_seconds(),
            send_credentials: true,
        }
    }
}

/// Fixture provider configuration
///
/// Delays default to the latencies the front end was tuned against so that
/// loading states behave the same in mock and live mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Sleep before returning fixture data
    #[serde(default = "default_true")]
    pub simulate_latency: bool,

    /// Delay for read operations
    #[serde(default = "default_read_delay_ms")]
    pub read_delay_ms: u64,

    /// Delay for appointment status updates
    #[serde(default = "default_status_update_delay_ms")]
    pub status_update_delay_ms: u64,

    /// Delay for encounter note saves
    #[serde(default = "default_note_save_delay_ms")]
    pub note_save_delay_ms: u64,

    /// Delay for inbox acknowledgements
    #[serde(default = "default_inbox_ack_delay_ms")]
    pub inbox_ack_delay_ms: u64,

    /// Delay for sending a message
    #[serde(default = "default_message_send_delay_ms")]
    pub message_send_delay_ms: u64,

    /// Delay for running a report
    #[serde(default = "default_report_run_delay_ms")]
    pub report_run_delay_ms: u64,
}

impl MockConfig {
    /// Configuration with latency simulation switched off
    pub fn instant() -> Self {
        Self {
            simulate_latency: false,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), String> {
        let delays = [
            ("read_delay_ms", self.read_delay_ms),
            ("status_update_delay_ms", self.status_update_delay_ms),
            ("note_save_delay_ms", self.note_save_delay_ms),
            ("inbox_ack_delay_ms", self.inbox_ack_delay_ms),
            ("message_send_delay_ms", self.message_send_delay_ms),
            ("report_run_delay_ms", self.report_run_delay_ms),
        ];
        for (name, value) in delays {
            if value > 10_000 {
                return Err(format!("mock.{name} must be at most 10000, got {value}"));
            }
        }
        Ok(())
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            read_delay_ms: default_read_delay_ms(),
            status_update_delay_ms: default_status_update_delay_ms(),
            note_save_delay_ms: default_note_save_delay_ms(),
            inbox_ack_delay_ms: default_inbox_ack_delay_ms(),
            message_send_delay_ms: default_message_send_delay_ms(),
            report_run_delay_ms: default_report_run_delay_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to a rolling file in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        one_of(
            "logging.local_rotation",
            &self.local_rotation,
            &["daily", "hourly", "never"],
        )?;
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn one_of(key: &str, value: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!("{key} is '{value}', expected one of: {}", allowed.join(", ")))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_read_delay_ms() -> u64 {
    300
}

fn default_status_update_delay_ms() -> u64 {
    200
}

fn default_note_save_delay_ms() -> u64 {
    250
}

fn default_inbox_ack_delay_ms() -> u64 {
    150
}

fn default_message_send_delay_ms() -> u64 {
    200
}

fn default_report_run_delay_ms() -> u64 {
    400
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
