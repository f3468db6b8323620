//! Inbox of labs, documents and results

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal, HttpMethod, RequestOptions};
use crate::adapters::mock::MockOperation;
use crate::domain::{InboxItem, InboxQuery, InboxType, Result};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InboxService {
    ctx: Arc<ServiceContext>,
}

impl InboxService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Items matching `query`
    ///
    /// Filters are sent as `type` and `assignedTo`; in mock mode the type
    /// must match and the assignee must match exactly.
    pub async fn items(&self, query: &InboxQuery, cancel: Option<&CancelSignal>) -> Result<Vec<InboxItem>> {
        match self.ctx.route() {
            Route::Mock(mock) => {
                mock.serve(MockOperation::Read, cancel, |f| {
                    Ok(f.inbox_items()
                        .into_iter()
                        .filter(|item| query.matches(item))
                        .collect())
                })
                .await
            }
            Route::Live(live) => {
                let path = ApiPath::new(["inbox"])
                    .query_opt("type", query.item_type.as_ref().map(InboxType::as_str))
                    .query_opt("assignedTo", query.assigned_to.as_deref());
                live.fetch_list(&path, cancel).await
            }
        }
    }

    /// Acknowledges one item
    pub async fn acknowledge(&self, id: &str, cancel: Option<&CancelSignal>) -> Result<()> {
        match self.ctx.route() {
            Route::Mock(mock) => mock.serve(MockOperation::InboxAck, cancel, |_| Ok(())).await,
            Route::Live(live) => {
                let options = RequestOptions::new(HttpMethod::Post).with_cancel(cancel);
                live.send(&ApiPath::new(["inbox", id, "ack"]), options).await?;
                tracing::info!(inbox_item = %id, "Inbox item acknowledged");
                Ok(())
            }
        }
    }
}
