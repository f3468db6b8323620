//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the clinic configuration file.

use crate::cli::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Unlike data commands, a missing file is an error here.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        match config.backend.base_url() {
            Some(url) => {
                println!("  Mode: live");
                println!("  Backend: {url}");
                println!("  Timeout: {}s", config.backend.timeout_seconds);
                println!(
                    "  Session Cookies: {}",
                    if config.backend.send_credentials { "sent" } else { "not sent" }
                );
                match (&config.backend.csrf_header, &config.backend.csrf_token) {
                    (Some(header), Some(_)) => println!("  CSRF: {header} (token set)"),
                    (Some(header), None) => println!("  CSRF: {header} (no token)"),
                    _ => println!("  CSRF: disabled"),
                }
            }
            None => {
                println!("  Mode: mock");
                if config.mock.simulate_latency {
                    println!("  Simulated Latency: {}ms reads", config.mock.read_delay_ms);
                } else {
                    println!("  Simulated Latency: off");
                }
            }
        }
        if config.logging.local_enabled {
            println!(
                "  Log File: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }

        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let code = ValidateArgs {}
            .execute("definitely-missing-clinic.toml")
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_validate_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[backend]\nbase_url = \"ftp://emr.local\"").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_validate_mock_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[mock]\nsimulate_latency = false").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, EXIT_OK);
    }
}
