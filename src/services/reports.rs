//! Report catalogue and execution

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal, HttpMethod, RequestOptions};
use crate::adapters::mock::MockOperation;
use crate::domain::{Report, Result};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ReportService {
    ctx: Arc<ServiceContext>,
}

impl ReportService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, cancel: Option<&CancelSignal>) -> Result<Vec<Report>> {
        match self.ctx.route() {
            Route::Mock(mock) => mock.serve(MockOperation::Read, cancel, |f| Ok(f.reports())).await,
            Route::Live(live) => live.fetch_list(&ApiPath::new(["reports"]), cancel).await,
        }
    }

    /// Runs a report
    ///
    /// The output shape is report-specific and returned unvalidated; `None`
    /// when the backend answers 204.
    pub async fn run(&self, id: &str, cancel: Option<&CancelSignal>) -> Result<Option<Value>> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::ReportRun, cancel, |f| Ok(Some(f.report_run(id))))
                    .await
            }
            Route::Live(live) => {
                let options = RequestOptions::new(HttpMethod::Post).with_cancel(cancel);
                let output = live.send(&ApiPath::new(["reports", id, "run"]), options).await?;
                tracing::info!(report_id = %id, has_output = output.is_some(), "Report run completed");
                Ok(output)
            }
        }
    }
}
