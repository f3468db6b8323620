//! Encounter note domain model (simplified SOAP)

use super::schema::{null_as_default, Schema};
use serde::{Deserialize, Serialize};

/// The SOAP note attached to an encounter
///
/// There is logically one note per encounter id at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterNote {
    pub id: String,
    pub encounter_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub subjective: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objective: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assessment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plan: String,

    /// Timestamp of signature; absent while the note is a draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<String>,
}

impl EncounterNote {
    /// Whether the note has been signed
    pub fn is_signed(&self) -> bool {
        self.signed_at.is_some()
    }
}

impl Schema for EncounterNote {}

/// Partial note submitted on save
///
/// Sections left unset are not sent to the backend.
///
/// # Examples
///
/// ```
/// use clinic_adapter::domain::NotePatch;
///
/// let patch = NotePatch::new()
///     .subjective("Cough for 3 days")
///     .plan("Fluids, rest");
///
/// let json = serde_json::to_value(&patch).unwrap();
/// assert_eq!(json["plan"], "Fluids, rest");
/// assert!(json.get("objective").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjective: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl NotePatch {
    /// Creates an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subjective section
    pub fn subjective(mut self, text: impl Into<String>) -> Self {
        self.subjective = Some(text.into());
        self
    }

    /// Sets the objective section
    pub fn objective(mut self, text: impl Into<String>) -> Self {
        self.objective = Some(text.into());
        self
    }

    /// Sets the assessment section
    pub fn assessment(mut self, text: impl Into<String>) -> Self {
        self.assessment = Some(text.into());
        self
    }

    /// Sets the plan section
    pub fn plan(mut self, text: impl Into<String>) -> Self {
        self.plan = Some(text.into());
        self
    }

    /// Applies the patch to an unsigned, otherwise empty note
    pub fn into_note(self, encounter_id: &str) -> EncounterNote {
        EncounterNote {
            id: format!("n-{encounter_id}"),
            encounter_id: encounter_id.to_string(),
            subjective: self.subjective.unwrap_or_default(),
            objective: self.objective.unwrap_or_default(),
            assessment: self.assessment.unwrap_or_default(),
            plan: self.plan.unwrap_or_default(),
            signed_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sections_default_to_empty() {
        let note = EncounterNote::parse(&json!({"id": "n-1", "encounterId": "1"})).unwrap();
        assert_eq!(note.subjective, "");
        assert_eq!(note.objective, "");
        assert_eq!(note.assessment, "");
        assert_eq!(note.plan, "");
        assert!(!note.is_signed());
    }

    #[test]
    fn test_null_sections_default_to_empty() {
        let note = EncounterNote::parse(&json!({
            "id": "n-1", "encounterId": "1", "subjective": null, "signedAt": null
        }))
        .unwrap();
        assert_eq!(note.subjective, "");
        assert!(!note.is_signed());
    }

    #[test]
    fn test_signed_note() {
        let note = EncounterNote::parse(&json!({
            "id": "n-1",
            "encounterId": "1",
            "plan": "Return in 2 weeks",
            "signedAt": "2025-03-14T10:00:00Z"
        }))
        .unwrap();
        assert!(note.is_signed());
        assert_eq!(note.plan, "Return in 2 weeks");
    }

    #[test]
    fn test_encounter_id_required() {
        let err = EncounterNote::parse(&json!({"id": "n-1"})).unwrap_err();
        assert_eq!(err.path, "encounterId");
    }

    #[test]
    fn test_patch_into_note() {
        let note = NotePatch::new().assessment("URI").into_note("1234");
        assert_eq!(note.id, "n-1234");
        assert_eq!(note.encounter_id, "1234");
        assert_eq!(note.assessment, "URI");
        assert_eq!(note.plan, "");
    }

    #[test]
    fn test_round_trip() {
        let note = NotePatch::new()
            .subjective("S")
            .objective("O")
            .assessment("A")
            .plan("P")
            .into_note("7");
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(EncounterNote::parse(&json).unwrap(), note);
    }
}
