// Clinic Adapter - EMR front-end data access layer
// Copyright (c) 2025 Clinic Adapter Contributors
// Licensed under the MIT License

use clap::Parser;
use clinic_adapter::adapters::http::CancelSignal;
use clinic_adapter::cli::commands::Session;
use clinic_adapter::cli::{exit_code_for, Cli, Commands, EXIT_CONFIG, EXIT_FAILURE};
use clinic_adapter::config::{load_config_or_default, ClinicConfig, LoggingConfig};
use clinic_adapter::domain::Result;
use clinic_adapter::logging::init_logging;
use std::process;
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Configuration is loaded up front so its log settings apply; load
    // errors are reported by the command that needs the configuration
    let config = load_config_or_default(&cli.config);
    let (log_level, logging_config) = match &config {
        Ok(c) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| c.application.log_level.clone()),
            c.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };
    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_CONFIG);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Clinic adapter CLI");

    // Ctrl+C cancels the in-flight operation
    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        } else {
            tracing::info!("Received SIGINT (Ctrl+C), cancelling request");
            let _ = cancel_tx.send(true);
        }
    });

    let exit_code = match execute_command(&cli, config, CancelSignal::from(cancel_rx)).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    };

    // process::exit skips destructors; flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    config: Result<ClinicConfig>,
    cancel: CancelSignal,
) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
        command => {
            let config = match config {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("❌ {e}");
                    return Ok(EXIT_CONFIG);
                }
            };
            let session = match Session::new(&config, cli.base_url.as_deref(), cancel) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("❌ {e}");
                    return Ok(exit_code_for(&e));
                }
            };
            command.run(&session).await
        }
    }
}
