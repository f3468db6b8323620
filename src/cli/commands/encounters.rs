use super::{emit, Session};
use crate::domain::NotePatch;
use clap::{Args, Subcommand};

/// Arguments for the note command
#[derive(Args, Debug)]
pub struct NoteArgs {
    #[command(subcommand)]
    pub action: NoteAction,
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Show the note for an encounter
    Get { encounter_id: String },

    /// Save SOAP sections; omitted sections are left out of the request
    Save {
        encounter_id: String,

        #[arg(long)]
        subjective: Option<String>,

        #[arg(long)]
        objective: Option<String>,

        #[arg(long)]
        assessment: Option<String>,

        #[arg(long)]
        plan: Option<String>,
    },
}

impl NoteArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        let encounters = session.client.encounters();
        match &self.action {
            NoteAction::Get { encounter_id } => {
                emit(encounters.note(encounter_id, session.cancel()).await)
            }
            NoteAction::Save {
                encounter_id,
                subjective,
                objective,
                assessment,
                plan,
            } => {
                let patch = NotePatch {
                    subjective: subjective.clone(),
                    objective: objective.clone(),
                    assessment: assessment.clone(),
                    plan: plan.clone(),
                };
                emit(
                    encounters
                        .save_note(encounter_id, patch, session.cancel())
                        .await,
                )
            }
        }
    }
}
