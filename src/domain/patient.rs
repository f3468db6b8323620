//! Patient and provider domain models

use super::schema::Schema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Administrative sex as shown in the chart header
///
/// Only `M` and `F` are carried through verbatim; any other string a legacy
/// backend sends (`U`, `X`, `unknown`, ...) is normalized to [`Sex::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    M,
    F,
    Other,
}

impl Sex {
    /// Coerces a raw wire value into the canonical domain
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "M" => Sex::M,
            "F" => Sex::F,
            _ => Sex::Other,
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
            Sex::Other => "Other",
        }
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Sex::coerce(&raw))
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient demographics as returned by search
///
/// # Examples
///
/// ```
/// use clinic_adapter::domain::schema::Schema;
/// use clinic_adapter::domain::{Patient, Sex};
/// use serde_json::json;
///
/// let patient = Patient::parse(&json!({
///     "id": "p100",
///     "name": "Jane Doe",
///     "dob": "1991-04-10",
///     "sex": "female",
///     "phone": null
/// }))
/// .unwrap();
///
/// assert_eq!(patient.sex, Sex::Other);
/// assert_eq!(patient.phone, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,

    /// ISO date string
    pub dob: String,

    pub sex: Sex,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Patient {
    /// Case-insensitive substring match on name or phone
    ///
    /// An empty query matches every patient.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .phone
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
    }
}

impl Schema for Patient {}

/// Scheduling provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
}

impl Schema for Provider {}
