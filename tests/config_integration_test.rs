//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold `ENV_MUTEX`.

use clinic_adapter::config::{load_config, load_config_or_default};
use clinic_adapter::domain::ClinicError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "CLINIC_APPLICATION_LOG_LEVEL",
        "CLINIC_BACKEND_BASE_URL",
        "CLINIC_BACKEND_CSRF_HEADER",
        "CLINIC_BACKEND_CSRF_TOKEN",
        "CLINIC_BACKEND_TIMEOUT_SECONDS",
        "CLINIC_BACKEND_SEND_CREDENTIALS",
        "CLINIC_MOCK_SIMULATE_LATENCY",
        "CLINIC_MOCK_READ_DELAY_MS",
        "CLINIC_LOGGING_LOCAL_ENABLED",
        "CLINIC_LOGGING_LOCAL_PATH",
        "TEST_CLINIC_CSRF_TOKEN",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[backend]
base_url = "https://emr.example.org/api"
csrf_header = "X-CSRF-Token"
csrf_token = "token-123"
timeout_seconds = 15
send_credentials = false

[mock]
simulate_latency = false
read_delay_ms = 50
report_run_delay_ms = 1000

[logging]
local_enabled = false
local_path = "/tmp/clinic"
local_rotation = "never"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.backend.base_url(), Some("https://emr.example.org/api"));
    assert_eq!(config.backend.csrf_header.as_deref(), Some("X-CSRF-Token"));
    assert_eq!(
        config
            .backend
            .csrf_token
            .as_ref()
            .unwrap()
            .expose_secret()
            .as_ref(),
        "token-123"
    );
    assert_eq!(config.backend.timeout_seconds, 15);
    assert!(!config.backend.send_credentials);
    assert!(!config.mock.simulate_latency);
    assert_eq!(config.mock.read_delay_ms, 50);
    assert_eq!(config.mock.report_run_delay_ms, 1000);
    assert_eq!(config.mock.note_save_delay_ms, 250);
    assert_eq!(config.logging.local_rotation, "never");
    assert!(!config.is_mock_mode());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_CLINIC_CSRF_TOKEN", "from-env");

    let file = write_config(
        r#"
[backend]
base_url = "http://localhost:8080"
csrf_header = "X-CSRF-Token"
csrf_token = "${TEST_CLINIC_CSRF_TOKEN}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    let settings = config.http_settings().snapshot();
    assert_eq!(
        settings.csrf_pair(),
        Some(("X-CSRF-Token", "from-env".to_string()))
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[backend]\ncsrf_token = \"${TEST_CLINIC_CSRF_TOKEN}\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ClinicError::Configuration(_)));
    assert!(err.to_string().contains("TEST_CLINIC_CSRF_TOKEN"));
}

#[test]
fn test_env_overrides_switch_to_live_mode() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("CLINIC_BACKEND_BASE_URL", "http://localhost:9000");
    std::env::set_var("CLINIC_MOCK_READ_DELAY_MS", "5");
    std::env::set_var("CLINIC_APPLICATION_LOG_LEVEL", "warn");

    let file = write_config("[mock]\nread_delay_ms = 300\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.backend.base_url(), Some("http://localhost:9000"));
    assert_eq!(config.mock.read_delay_ms, 5);
    assert_eq!(config.application.log_level, "warn");

    cleanup_env_vars();
}

#[test]
fn test_env_override_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("CLINIC_BACKEND_BASE_URL", "emr.example.org");

    let file = write_config("");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("http:// or https://"));

    cleanup_env_vars();
}

#[test]
fn test_missing_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_config_or_default("no-such-dir/clinic.toml").unwrap();
    assert!(config.is_mock_mode());
    assert!(config.mock.simulate_latency);

    assert!(load_config("no-such-dir/clinic.toml").is_err());
}

#[test]
fn test_invalid_toml_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[backend\nbase_url = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ClinicError::Configuration(_)));
}
