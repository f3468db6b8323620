//! Patient search and provider directory

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal};
use crate::adapters::mock::MockOperation;
use crate::domain::{ClinicError, Patient, Provider, Result};
use std::sync::Arc;

/// Patient lookups
#[derive(Debug, Clone)]
pub struct PatientService {
    ctx: Arc<ServiceContext>,
}

impl PatientService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Searches patients by name or phone
    ///
    /// In mock mode the match is a case-insensitive substring test and an
    /// empty query returns every patient. In live mode the query is passed
    /// through as `search` and the backend decides.
    ///
    /// # Errors
    ///
    /// Transport failures, cancellation, or a response element that fails
    /// validation (the whole batch is rejected)
    pub async fn search(&self, query: &str, cancel: Option<&CancelSignal>) -> Result<Vec<Patient>> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| {
                    Ok(f.patients()
                        .into_iter()
                        .filter(|p| p.matches_search(query))
                        .collect())
                })
                .await
            }
            Route::Live(live) => {
                let path = ApiPath::new(["patients"]).query("search", query);
                live.fetch_list(&path, cancel).await
            }
        }
    }

    /// Fetches one patient by id
    ///
    /// # Errors
    ///
    /// [`ClinicError::NotFound`] for an unknown id in mock mode; a 404
    /// [`ClinicError::Http`] in live mode
    pub async fn get(&self, id: &str, cancel: Option<&CancelSignal>) -> Result<Patient> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| {
                    f.patient(id)
                        .ok_or_else(|| ClinicError::NotFound(format!("patient {id}")))
                })
                .await
            }
            Route::Live(live) => live.fetch(&ApiPath::new(["patients", id]), cancel).await,
        }
    }

    /// Lists providers for filter pickers
    pub async fn providers(&self, cancel: Option<&CancelSignal>) -> Result<Vec<Provider>> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| Ok(f.providers()))
                    .await
            }
            Route::Live(live) => live.fetch_list(&ApiPath::new(["providers"]), cancel).await,
        }
    }
}
