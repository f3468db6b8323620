use super::{confirm, emit, today, Session};
use crate::domain::AppointmentStatus;
use clap::{Args, Subcommand};

/// Arguments for the appointments command
#[derive(Args, Debug)]
pub struct AppointmentsArgs {
    #[command(subcommand)]
    pub action: AppointmentsAction,
}

#[derive(Subcommand, Debug)]
pub enum AppointmentsAction {
    /// Day sheet
    List {
        /// Day to list (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Only this provider's appointments
        #[arg(long)]
        provider: Option<String>,
    },

    /// Move an appointment to a new status
    SetStatus {
        id: String,

        /// Scheduled, Arrived, "In Room", Completed or Cancelled
        status: AppointmentStatus,
    },
}

impl AppointmentsArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        let appointments = session.client.appointments();
        match &self.action {
            AppointmentsAction::List { date, provider } => {
                let date = date.clone().unwrap_or_else(today);
                emit(
                    appointments
                        .by_day(&date, provider.as_deref(), session.cancel())
                        .await,
                )
            }
            AppointmentsAction::SetStatus { id, status } => confirm(
                appointments
                    .update_status(id, *status, session.cancel())
                    .await,
                &format!("Appointment {id} is now {status}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use crate::domain::AppointmentStatus;
    use clap::Parser;

    #[test]
    fn test_parse_set_status_with_space() {
        let cli = Cli::parse_from(["clinic", "appointments", "set-status", "a3", "In Room"]);
        match cli.command {
            Commands::Appointments(args) => match args.action {
                super::AppointmentsAction::SetStatus { id, status } => {
                    assert_eq!(id, "a3");
                    assert_eq!(status, AppointmentStatus::InRoom);
                }
                other => panic!("unexpected action {other:?}"),
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let result =
            Cli::try_parse_from(["clinic", "appointments", "set-status", "a1", "Teleported"]);
        assert!(result.is_err());
    }
}
