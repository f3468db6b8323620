//! CLI interface and argument parsing
//!
//! This module provides the `clinic` command-line interface using clap.

pub mod commands;

use crate::domain::ClinicError;
use clap::{Parser, Subcommand};

/// Exit code for a successful command
pub const EXIT_OK: i32 = 0;
/// Exit code for configuration problems
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for backend, validation or lookup failures
pub const EXIT_FAILURE: i32 = 3;
/// Exit code when the user interrupted the command
pub const EXIT_CANCELLED: i32 = 130;

/// Clinic - EMR front-end data access from the command line
#[derive(Parser, Debug)]
#[command(name = "clinic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "clinic.toml", env = "CLINIC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINIC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Backend base URL, overriding the configuration file; empty selects mock mode
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and look up patients
    Patients(commands::patients::PatientsArgs),

    /// Day sheet and appointment status
    Appointments(commands::appointments::AppointmentsArgs),

    /// Read or save an encounter note
    Note(commands::encounters::NoteArgs),

    /// Labs, documents and results awaiting triage
    Inbox(commands::inbox::InboxArgs),

    /// Internal messages
    Messages(commands::messages::MessagesArgs),

    /// List follow-up tasks
    Ticklers(commands::overview::TicklersArgs),

    /// List or run reports
    Reports(commands::reports::ReportsArgs),

    /// Daily dashboard counters
    Dashboard(commands::overview::DashboardArgs),

    /// Backend version and site summary
    SystemInfo(commands::overview::SystemInfoArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Runs a data command against an open session
    ///
    /// # Errors
    ///
    /// Fails for `validate-config` and `init`, which run without a session
    pub async fn run(&self, session: &commands::Session) -> anyhow::Result<i32> {
        match self {
            Commands::Patients(args) => args.execute(session).await,
            Commands::Appointments(args) => args.execute(session).await,
            Commands::Note(args) => args.execute(session).await,
            Commands::Inbox(args) => args.execute(session).await,
            Commands::Messages(args) => args.execute(session).await,
            Commands::Ticklers(args) => args.execute(session).await,
            Commands::Reports(args) => args.execute(session).await,
            Commands::Dashboard(args) => args.execute(session).await,
            Commands::SystemInfo(args) => args.execute(session).await,
            Commands::ValidateConfig(_) | Commands::Init(_) => {
                anyhow::bail!("command does not use a backend session")
            }
        }
    }
}

/// Maps an operation failure to the process exit code
pub fn exit_code_for(error: &ClinicError) -> i32 {
    match error {
        ClinicError::Configuration(_) => EXIT_CONFIG,
        ClinicError::Cancelled => EXIT_CANCELLED,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HttpError, ValidationError};
    use test_case::test_case;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["clinic", "ticklers"]);
        assert_eq!(cli.config, "clinic.toml");
        assert!(cli.base_url.is_none());
        assert!(matches!(cli.command, Commands::Ticklers(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["clinic", "--config", "custom.toml", "messages", "list"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["clinic", "--log-level", "debug", "system-info"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_base_url_is_global() {
        let cli = Cli::parse_from(["clinic", "dashboard", "--base-url", "http://localhost:8080"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["clinic", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["clinic", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test_case(ClinicError::Configuration("x".into()), EXIT_CONFIG)]
    #[test_case(ClinicError::Cancelled, EXIT_CANCELLED)]
    #[test_case(ClinicError::Http(HttpError::new(500, "Internal Server Error", "")), EXIT_FAILURE)]
    #[test_case(ClinicError::Validation(ValidationError::new("id", "required field is missing")), EXIT_FAILURE)]
    #[test_case(ClinicError::NotFound("patient p9".into()), EXIT_FAILURE)]
    fn test_exit_code_for(error: ClinicError, expected: i32) {
        assert_eq!(exit_code_for(&error), expected);
    }
}
