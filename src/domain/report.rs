//! Report catalogue and admin system info

use super::schema::Schema;
use serde::{Deserialize, Serialize};

/// Report descriptor from the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: String,
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema for Report {}

/// Backend installation summary for the admin page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub version: String,
    pub site: String,
    pub providers: u32,
    pub users: u32,
}

impl Schema for SystemInfo {}
