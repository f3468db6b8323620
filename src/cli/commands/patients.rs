use super::{emit, Session};
use clap::{Args, Subcommand};

/// Arguments for the patients command
#[derive(Args, Debug)]
pub struct PatientsArgs {
    #[command(subcommand)]
    pub action: PatientsAction,
}

#[derive(Subcommand, Debug)]
pub enum PatientsAction {
    /// Search by name or phone; no query lists everyone
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Show one patient
    Get { id: String },

    /// List providers
    Providers,
}

impl PatientsArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        let patients = session.client.patients();
        match &self.action {
            PatientsAction::Search { query } => emit(patients.search(query, session.cancel()).await),
            PatientsAction::Get { id } => emit(patients.get(id, session.cancel()).await),
            PatientsAction::Providers => emit(patients.providers(session.cancel()).await),
        }
    }
}
