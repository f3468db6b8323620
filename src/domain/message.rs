//! Internal staff message domain model

use super::schema::{null_as_default, Schema};
use serde::{Deserialize, Serialize};

/// Message between staff members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from: String,
    pub to: String,
    pub sent_at: String,
    pub subject: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
}

impl Schema for Message {}

/// Outgoing message payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl NewMessage {
    /// Creates a new outgoing message
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}
