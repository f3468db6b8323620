//! Day sheet queries and patient-flow status updates

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal, HttpMethod, RequestOptions};
use crate::adapters::mock::MockOperation;
use crate::domain::{Appointment, AppointmentStatus, Result};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppointmentService {
    ctx: Arc<ServiceContext>,
}

impl AppointmentService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Appointments on `date`, optionally limited to one provider
    ///
    /// # Arguments
    ///
    /// * `date` - Day in `YYYY-MM-DD` form, passed through unvalidated
    /// * `provider_id` - Exact provider id filter; `None` or empty returns all
    pub async fn by_day(
        &self,
        date: &str,
        provider_id: Option<&str>,
        cancel: Option<&CancelSignal>,
    ) -> Result<Vec<Appointment>> {
        let provider_id = provider_id.filter(|p| !p.is_empty());

        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| {
                    Ok(f.appointments(date)
                        .into_iter()
                        .filter(|a| provider_id.map_or(true, |p| a.provider_id == p))
                        .collect())
                })
                .await
            }
            Route::Live(live) => {
                let path = ApiPath::new(["appointments"])
                    .query("date", date)
                    .query_opt("providerId", provider_id);
                live.fetch_list(&path, cancel).await
            }
        }
    }

    /// Moves an appointment to `status`
    ///
    /// Any response body is ignored. Mock mode succeeds without changing
    /// fixture data.
    pub async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
        cancel: Option<&CancelSignal>,
    ) -> Result<()> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::StatusUpdate, cancel, |_| Ok(()))
                    .await
            }
            Route::Live(live) => {
                let options = RequestOptions::new(HttpMethod::Patch)
                    .with_body(json!({ "status": status }))
                    .with_cancel(cancel);
                live.send(&ApiPath::new(["appointments", id, "status"]), options)
                    .await?;
                tracing::info!(appointment_id = %id, status = %status, "Appointment status updated");
                Ok(())
            }
        }
    }
}
