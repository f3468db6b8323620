//! Reads `clinic.toml`, expands `${VAR}` references and layers `CLINIC_*`
//! environment overrides on top

use super::schema::ClinicConfig;
use super::secret::secret_string;
use crate::domain::errors::ClinicError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

/// Load and validate the configuration at `path`
///
/// `${VAR}` references are expanded before parsing, then `CLINIC_*`
/// variables override individual keys, and finally the result is validated.
/// A missing file is an error here; see [`load_config_or_default`].
///
/// ```no_run
/// use clinic_adapter::config::loader::load_config;
///
/// let config = load_config("clinic.toml")?;
/// println!("mock mode: {}", config.is_mock_mode());
/// # Ok::<(), clinic_adapter::domain::ClinicError>(())
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            ClinicError::Configuration(format!("No configuration at {}", path.display()))
        }
        _ => ClinicError::Configuration(format!("Cannot read {}: {e}", path.display())),
    })?;

    let expanded = expand_env_refs(&raw)?;
    let mut config: ClinicConfig = toml::from_str(&expanded)
        .map_err(|e| ClinicError::Configuration(format!("{}: {e}", path.display())))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration from `path`, or starts from defaults when the file
/// does not exist
///
/// Defaults select mock mode. Environment overrides and validation apply in
/// both cases, so `CLINIC_BACKEND_BASE_URL` alone is enough to go live.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = ClinicConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut ClinicConfig) -> Result<()> {
    apply_env_overrides(config);
    config
        .validate()
        .map_err(|e| ClinicError::Configuration(format!("Invalid configuration: {e}")))
}

/// Replace every `${NAME}` outside comment lines with the variable's value
///
/// All unset names are collected and reported together.
fn expand_env_refs(input: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClinicError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut unset: Vec<String> = Vec::new();

    let expanded: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }
            pattern
                .replace_all(line, |caps: &Captures| {
                    let name = &caps[1];
                    std::env::var(name).unwrap_or_else(|_| {
                        if !unset.iter().any(|n| n == name) {
                            unset.push(name.to_string());
                        }
                        String::new()
                    })
                })
                .into_owned()
        })
        .collect();

    if !unset.is_empty() {
        return Err(ClinicError::Configuration(format!(
            "Unset environment variables referenced in configuration: {}",
            unset.join(", ")
        )));
    }

    let mut out = expanded.join("\n");
    out.push('\n');
    Ok(out)
}

fn env_value<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Overrides follow `CLINIC_<SECTION>_<KEY>`, e.g. `CLINIC_BACKEND_BASE_URL`
///
/// Values that fail to parse are ignored and the file value stays.
fn apply_env_overrides(config: &mut ClinicConfig) {
    if let Some(level) = env_value("CLINIC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = level;
    }

    let backend = &mut config.backend;
    if let Some(url) = env_value("CLINIC_BACKEND_BASE_URL") {
        backend.base_url = Some(url);
    }
    if let Some(header) = env_value("CLINIC_BACKEND_CSRF_HEADER") {
        backend.csrf_header = Some(header);
    }
    if let Ok(token) = std::env::var("CLINIC_BACKEND_CSRF_TOKEN") {
        backend.csrf_token = Some(secret_string(token));
    }
    if let Some(secs) = env_value("CLINIC_BACKEND_TIMEOUT_SECONDS") {
        backend.timeout_seconds = secs;
    }
    if let Some(flag) = env_value("CLINIC_BACKEND_SEND_CREDENTIALS") {
        backend.send_credentials = flag;
    }

    let mock = &mut config.mock;
    if let Some(flag) = env_value("CLINIC_MOCK_SIMULATE_LATENCY") {
        mock.simulate_latency = flag;
    }
    if let Some(ms) = env_value("CLINIC_MOCK_READ_DELAY_MS") {
        mock.read_delay_ms = ms;
    }

    let logging = &mut config.logging;
    if let Some(flag) = env_value("CLINIC_LOGGING_LOCAL_ENABLED") {
        logging.local_enabled = flag;
    }
    if let Some(dir) = env_value("CLINIC_LOGGING_LOCAL_PATH") {
        logging.local_path = dir;
    }
}
