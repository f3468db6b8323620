//! Internal staff messaging

use super::context::{Route, ServiceContext};
use crate::adapters::http::{ApiPath, CancelSignal, HttpMethod, RequestOptions};
use crate::adapters::mock::MockOperation;
use crate::domain::{Message, NewMessage, Result};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MessageService {
    ctx: Arc<ServiceContext>,
}

impl MessageService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, cancel: Option<&CancelSignal>) -> Result<Vec<Message>> {
        match self.ctx.route() {
            Route::Mock(mock) => mock.serve(MockOperation::Read, cancel, |f| Ok(f.messages())).await,
            Route::Live(live) => live.fetch_list(&ApiPath::new(["messages"]), cancel).await,
        }
    }

    /// Sends a message; any response body is ignored
    pub async fn send(&self, message: &NewMessage, cancel: Option<&CancelSignal>) -> Result<()> {
        match self.ctx.route() {
            Route::Mock(mock) => mock.serve(MockOperation::MessageSend, cancel, |_| Ok(())).await,
            Route::Live(live) => {
                let options = RequestOptions::new(HttpMethod::Post)
                    .with_json(message)?
                    .with_cancel(cancel);
                live.send(&ApiPath::new(["messages"]), options).await?;
                tracing::info!(to = %message.to, "Message sent");
                Ok(())
            }
        }
    }
}
