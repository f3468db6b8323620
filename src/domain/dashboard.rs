//! Dashboard counters for a clinic day

use super::schema::Schema;
use serde::{Deserialize, Serialize};

/// Day-level counts shown on the dashboard tiles
///
/// Counters are plain counts; no referential integrity between them is
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub date: String,
    pub total_appointments: u32,
    pub arrived: u32,
    pub in_room: u32,
    pub results_to_review: u32,
    pub unread_messages: u32,
    pub open_ticklers: u32,
}

impl Schema for DashboardStats {}
