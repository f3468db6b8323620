//! Inbox item domain model (labs, documents, results)

use super::schema::{null_as_default, Schema};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of incoming item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InboxType {
    Lab,
    Document,
    Result,
}

impl InboxType {
    /// Wire representation, also used as the `type` query value
    pub fn as_str(&self) -> &'static str {
        match self {
            InboxType::Lab => "Lab",
            InboxType::Document => "Document",
            InboxType::Result => "Result",
        }
    }
}

impl fmt::Display for InboxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InboxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
            .map_err(|e: serde::de::value::Error| format!("Invalid inbox type: {e}"))
    }
}

/// Triage state of an inbox item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InboxStatus {
    #[default]
    New,
    Assigned,
    Ack,
    Filed,
}

/// One incoming lab, document or result awaiting triage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxItem {
    pub id: String,

    #[serde(rename = "type")]
    pub item_type: InboxType,

    pub received_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,

    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: InboxStatus,
}

impl Schema for InboxItem {}

/// Filter for inbox listing
///
/// Both filters are optional; an unset filter matches everything. The
/// assignee filter is an exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboxQuery {
    pub item_type: Option<InboxType>,
    pub assigned_to: Option<String>,
}

impl InboxQuery {
    /// Creates a query without filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one item type
    pub fn with_type(mut self, item_type: InboxType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Restricts to items assigned to `assignee`
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Whether `item` passes both filters
    pub fn matches(&self, item: &InboxItem) -> bool {
        let type_ok = self.item_type.map_or(true, |t| item.item_type == t);
        let assignee_ok = match self.assigned_to.as_deref() {
            None | Some("") => true,
            Some(who) => item.assigned_to.as_deref() == Some(who),
        };
        type_ok && assignee_ok
    }
}
