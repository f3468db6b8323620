//! Day-level dashboard counters

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal};
use crate::adapters::mock::MockOperation;
use crate::domain::{DashboardStats, Result};
use std::sync::Arc;

/// Daily KPI counters
#[derive(Debug, Clone)]
pub struct DashboardService {
    ctx: Arc<ServiceContext>,
}

impl DashboardService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn stats(&self, date: &str, cancel: Option<&CancelSignal>) -> Result<DashboardStats> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| Ok(f.dashboard(date)))
                    .await
            }
            Route::Live(live) => {
                let path = ApiPath::new(["dashboard"]).query("date", date);
                live.fetch(&path, cancel).await
            }
        }
    }
}
