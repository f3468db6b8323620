use super::{confirm, emit, Session};
use crate::domain::{InboxQuery, InboxType};
use clap::{Args, Subcommand};

/// Arguments for the inbox command
#[derive(Args, Debug)]
pub struct InboxArgs {
    #[command(subcommand)]
    pub action: InboxAction,
}

#[derive(Subcommand, Debug)]
pub enum InboxAction {
    /// List items
    List {
        /// Lab, Document or Result
        #[arg(long = "type")]
        item_type: Option<InboxType>,

        /// Exact assignee name
        #[arg(long)]
        assigned_to: Option<String>,
    },

    /// Acknowledge an item
    Ack { id: String },
}

impl InboxArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        let inbox = session.client.inbox();
        match &self.action {
            InboxAction::List {
                item_type,
                assigned_to,
            } => {
                let mut query = InboxQuery::new();
                if let Some(item_type) = item_type {
                    query = query.with_type(*item_type);
                }
                if let Some(assignee) = assigned_to {
                    query = query.with_assignee(assignee.as_str());
                }
                emit(inbox.items(&query, session.cancel()).await)
            }
            InboxAction::Ack { id } => confirm(
                inbox.acknowledge(id, session.cancel()).await,
                &format!("Inbox item {id} acknowledged"),
            ),
        }
    }
}
