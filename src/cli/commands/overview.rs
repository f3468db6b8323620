//! Single-shot read commands: ticklers, dashboard and system info

use super::{emit, today, Session};
use clap::Args;

/// Arguments for the ticklers command
#[derive(Args, Debug)]
pub struct TicklersArgs {}

impl TicklersArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        emit(session.client.ticklers().list(session.cancel()).await)
    }
}

/// Arguments for the dashboard command
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Day to summarize (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

impl DashboardArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        let date = self.date.clone().unwrap_or_else(today);
        emit(session.client.dashboard().stats(&date, session.cancel()).await)
    }
}

/// Arguments for the system-info command
#[derive(Args, Debug)]
pub struct SystemInfoArgs {}

impl SystemInfoArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        emit(session.client.admin().system_info(session.cancel()).await)
    }
}
