//! Encounter (SOAP) notes

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal, HttpMethod, RequestOptions};
use crate::adapters::mock::MockOperation;
use crate::domain::{ClinicError, EncounterNote, NotePatch, Result, Schema};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EncounterService {
    ctx: Arc<ServiceContext>,
}

impl EncounterService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Note attached to an encounter
    ///
    /// Mock mode returns an empty unsigned note with id `n-{encounter_id}`.
    pub async fn note(&self, encounter_id: &str, cancel: Option<&CancelSignal>) -> Result<EncounterNote> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| Ok(f.note(encounter_id)))
                    .await
            }
            Route::Live(live) => {
                live.fetch(&ApiPath::new(["encounters", encounter_id, "note"]), cancel)
                    .await
            }
        }
    }

    /// Saves the sections present in `patch` and returns the stored note
    ///
    /// # Errors
    ///
    /// [`ClinicError::Decode`] if the backend answers 204 instead of the
    /// stored note
    pub async fn save_note(
        &self,
        encounter_id: &str,
        patch: NotePatch,
        cancel: Option<&CancelSignal>,
    ) -> Result<EncounterNote> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::NoteSave, cancel, |_| {
                    Ok(patch.into_note(encounter_id))
                })
                .await
            }
            Route::Live(live) => {
                let options = RequestOptions::new(HttpMethod::Post)
                    .with_json(&patch)?
                    .with_cancel(cancel);
                let raw = live
                    .send(&ApiPath::new(["encounters", encounter_id, "note"]), options)
                    .await?
                    .ok_or_else(|| ClinicError::Decode("empty response".to_string()))?;
                let note = EncounterNote::parse(&raw)?;
                tracing::info!(encounter_id = %encounter_id, note_id = %note.id, "Encounter note saved");
                Ok(note)
            }
        }
    }
}
