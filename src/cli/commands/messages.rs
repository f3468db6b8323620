use super::{confirm, emit, Session};
use crate::domain::NewMessage;
use clap::{Args, Subcommand};

/// Arguments for the messages command
#[derive(Args, Debug)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub action: MessagesAction,
}

#[derive(Subcommand, Debug)]
pub enum MessagesAction {
    /// List messages
    List,

    /// Send a message
    Send {
        #[arg(long)]
        to: String,

        #[arg(long)]
        subject: String,

        #[arg(long, default_value = "")]
        body: String,
    },
}

impl MessagesArgs {
    pub async fn execute(&self, session: &Session) -> anyhow::Result<i32> {
        let messages = session.client.messages();
        match &self.action {
            MessagesAction::List => emit(messages.list(session.cancel()).await),
            MessagesAction::Send { to, subject, body } => {
                let message = NewMessage::new(to.as_str(), subject.as_str(), body.as_str());
                confirm(
                    messages.send(&message, session.cancel()).await,
                    &format!("Message sent to {to}"),
                )
            }
        }
    }
}
