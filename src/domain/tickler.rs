//! Tickler (follow-up task) domain model

use super::schema::{null_as_default, Schema};
use serde::{Deserialize, Serialize};

/// Work state of a tickler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TicklerStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

/// A reminder task, optionally linking to the item that raised it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tickler {
    pub id: String,
    pub title: String,
    pub created_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TicklerStatus,

    /// In-app route of the related item, e.g. `/inbox#i1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Schema for Tickler {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_open() {
        let tickler = Tickler::parse(&json!({
            "id": "t1", "title": "Review lab: A1C", "createdAt": "2025-03-14T08:00:00Z", "dueAt": null
        }))
        .unwrap();
        assert_eq!(tickler.status, TicklerStatus::Open);
        assert_eq!(tickler.due_at, None);
    }

    #[test]
    fn test_in_progress_wire_value() {
        let tickler = Tickler::parse(&json!({
            "id": "t2", "title": "Sign note", "createdAt": "x", "status": "In Progress"
        }))
        .unwrap();
        assert_eq!(tickler.status, TicklerStatus::InProgress);

        let json = serde_json::to_value(&tickler).unwrap();
        assert_eq!(json["status"], "In Progress");
        assert_eq!(Tickler::parse(&json).unwrap(), tickler);
    }

    #[test]
    fn test_round_trip_with_every_optional_field() {
        let tickler = Tickler {
            id: "t1".into(),
            title: "Review lab: A1C".into(),
            created_at: "2025-03-14T08:00:00Z".into(),
            due_at: Some("2025-03-21T08:00:00Z".into()),
            assigned_to: Some("Dr. Lee".into()),
            status: TicklerStatus::Done,
            link: Some("/inbox#i1".into()),
        };

        let json = serde_json::to_value(&tickler).unwrap();
        assert_eq!(json["dueAt"], "2025-03-21T08:00:00Z");
        assert_eq!(json["assignedTo"], "Dr. Lee");
        assert_eq!(json["link"], "/inbox#i1");
        assert_eq!(Tickler::parse(&json).unwrap(), tickler);
    }

    #[test]
    fn test_title_required() {
        let err = Tickler::parse(&json!({"id": "t1", "createdAt": "x"})).unwrap_err();
        assert_eq!(err.path, "title");
    }
}
