//! CLI command implementations
//!
//! Data commands share a [`Session`]: one [`ClinicClient`] plus the
//! cancellation signal fired by Ctrl+C. Results print as pretty JSON on
//! stdout; diagnostics go to stderr.

pub mod appointments;
pub mod encounters;
pub mod inbox;
pub mod init;
pub mod messages;
pub mod overview;
pub mod patients;
pub mod reports;
pub mod validate;

use super::{exit_code_for, EXIT_OK};
use crate::adapters::http::{CancelSignal, HttpSettingsPatch};
use crate::config::ClinicConfig;
use crate::domain::{ClinicError, Result};
use crate::log_error_with_context;
use crate::services::ClinicClient;
use serde::Serialize;

/// Client and cancellation shared by one CLI invocation
pub struct Session {
    pub client: ClinicClient,
    cancel: CancelSignal,
}

impl Session {
    /// Builds the client, applying a `--base-url` override
    ///
    /// An empty override switches to mock mode even if the configuration
    /// file names a backend.
    pub fn new(config: &ClinicConfig, base_url: Option<&str>, cancel: CancelSignal) -> Result<Self> {
        let client = ClinicClient::from_config(config)?;

        match base_url.map(str::trim) {
            Some("") => client
                .settings()
                .set_config(HttpSettingsPatch::new().clear_base_url()),
            Some(url) => client
                .settings()
                .set_config(HttpSettingsPatch::new().base_url(url)),
            None => {}
        }

        Ok(Self { client, cancel })
    }

    /// Signal to pass into service operations
    pub fn cancel(&self) -> Option<&CancelSignal> {
        Some(&self.cancel)
    }
}

/// Prints a successful result as JSON, or reports the failure
pub fn emit<T: Serialize>(result: Result<T>) -> anyhow::Result<i32> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(EXIT_OK)
        }
        Err(e) => Ok(fail(&e)),
    }
}

/// Reports the outcome of a write with no result body
pub fn confirm(result: Result<()>, done: &str) -> anyhow::Result<i32> {
    match result {
        Ok(()) => {
            eprintln!("✅ {done}");
            Ok(EXIT_OK)
        }
        Err(e) => Ok(fail(&e)),
    }
}

fn fail(error: &ClinicError) -> i32 {
    if error.is_cancelled() {
        eprintln!("⚠️  Cancelled");
    } else {
        log_error_with_context!(error, "Command failed");
        eprintln!("❌ {error}");
    }
    exit_code_for(error)
}

/// Today's date in `YYYY-MM-DD` form, in local time
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::cancel_pair;
    use crate::cli::{EXIT_CANCELLED, EXIT_FAILURE};

    #[test]
    fn test_session_base_url_override() {
        let (_handle, signal) = cancel_pair();
        let session = Session::new(
            &ClinicConfig::default(),
            Some("http://localhost:8080"),
            signal.clone(),
        )
        .unwrap();
        assert!(!session.client.is_mock_mode());

        let mut config = ClinicConfig::default();
        config.backend.base_url = Some("http://localhost:8080".to_string());
        let session = Session::new(&config, Some(""), signal).unwrap();
        assert!(session.client.is_mock_mode());
    }

    #[test]
    fn test_emit_and_confirm_exit_codes() {
        assert_eq!(emit(Ok(vec![1, 2])).unwrap(), EXIT_OK);
        assert_eq!(emit::<()>(Err(ClinicError::Cancelled)).unwrap(), EXIT_CANCELLED);
        assert_eq!(
            confirm(Err(ClinicError::NotFound("x".into())), "done").unwrap(),
            EXIT_FAILURE
        );
    }

    #[test]
    fn test_today_format() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
    }
}
