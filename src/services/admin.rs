//! Site administration

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal};
use crate::adapters::mock::MockOperation;
use crate::domain::{Result, SystemInfo};
use std::sync::Arc;

/// Site administration
#[derive(Debug, Clone)]
pub struct AdminService {
    ctx: Arc<ServiceContext>,
}

impl AdminService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Backend version and site summary
    pub async fn system_info(&self, cancel: Option<&CancelSignal>) -> Result<SystemInfo> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| Ok(f.system_info()))
                    .await
            }
            Route::Live(live) => {
                live.fetch(&ApiPath::new(["admin", "system-info"]), cancel)
                    .await
            }
        }
    }
}
