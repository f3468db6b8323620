//! Simulated network latency for mock mode

use crate::adapters::http::cancel::{with_cancel, CancelSignal};
use crate::config::MockConfig;
use crate::domain::Result;
use std::time::Duration;

/// Kind of operation being served from fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOperation {
    Read,
    StatusUpdate,
    NoteSave,
    InboxAck,
    MessageSend,
    ReportRun,
}

/// Per-operation delays applied before fixture data is returned
#[derive(Debug, Clone)]
pub struct MockLatency {
    enabled: bool,
    read: Duration,
    status_update: Duration,
    note_save: Duration,
    inbox_ack: Duration,
    message_send: Duration,
    report_run: Duration,
}

impl MockLatency {
    /// Builds delays from the `[mock]` configuration section
    pub fn from_config(config: &MockConfig) -> Self {
        Self {
            enabled: config.simulate_latency,
            read: Duration::from_millis(config.read_delay_ms),
            status_update: Duration::from_millis(config.status_update_delay_ms),
            note_save: Duration::from_millis(config.note_save_delay_ms),
            inbox_ack: Duration::from_millis(config.inbox_ack_delay_ms),
            message_send: Duration::from_millis(config.message_send_delay_ms),
            report_run: Duration::from_millis(config.report_run_delay_ms),
        }
    }

    /// No delays at all
    pub fn none() -> Self {
        Self::from_config(&MockConfig::instant())
    }

    /// Delay applied to `operation`
    pub fn delay_for(&self, operation: MockOperation) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        match operation {
            MockOperation::Read => self.read,
            MockOperation::StatusUpdate => self.status_update,
            MockOperation::NoteSave => self.note_save,
            MockOperation::InboxAck => self.inbox_ack,
            MockOperation::MessageSend => self.message_send,
            MockOperation::ReportRun => self.report_run,
        }
    }

    /// Sleeps for the operation's delay
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Cancelled`](crate::domain::ClinicError::Cancelled)
    /// if the signal fires before or during the delay
    pub async fn wait(&self, operation: MockOperation, cancel: Option<&CancelSignal>) -> Result<()> {
        let delay = self.delay_for(operation);
        with_cancel(
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(())
            },
            cancel,
        )
        .await
    }
}

impl Default for MockLatency {
    fn default() -> Self {
        Self::from_config(&MockConfig::default())
    }
}
