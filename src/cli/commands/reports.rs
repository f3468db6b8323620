use super::{emit, Session};
use clap::{Args, Subcommand};

/// Arguments for the reports command
#[derive(Args, Debug)]
pub struct ReportsArgs {
    #[command(subcommand)]
    pub action: ReportsAction,
}

#[derive(Subcommand, Debug)]
pub enum ReportsAction {
    /// List available reports
    List,

    /// Run a report and print its output
    Run { id: String },
}

impl ReportsArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        let reports = session.client.reports();
        match &self.action {
            ReportsAction::List => emit(reports.list(session.cancel()).await),
            ReportsAction::Run { id } => emit(reports.run(id, session.cancel()).await),
        }
    }
}
