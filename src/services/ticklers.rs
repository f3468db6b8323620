//! Follow-up reminders

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal};
use crate::adapters::mock::MockOperation;
use crate::domain::{Result, Tickler};
use std::sync::Arc;

/// Follow-up task list
#[derive(Debug, Clone)]
pub struct TicklerService {
    ctx: Arc<ServiceContext>,
}

impl TicklerService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, cancel: Option<&CancelSignal>) -> Result<Vec<Tickler>> {
        match self.ctx.route() {
            Route::Mock(mock) => mock.serve(MockOperation::Read, cancel, |f| Ok(f.ticklers())).await,
            Route::Live(live) => live.fetch_list(&ApiPath::new(["ticklers"]), cancel).await,
        }
    }
}
