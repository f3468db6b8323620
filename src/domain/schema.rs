//! Schema validation and normalization
//!
//! Every value that crosses the network boundary goes through a [`Schema`]
//! implementation before reaching the caller. Entities derive `Deserialize`
//! and the derive carries the rules:
//!
//! - **Validation**: required fields must be present with the right shape,
//!   otherwise a [`ValidationError`] naming the offending path is returned.
//! - **Defaulting**: absent (or `null`) defaulted fields receive their
//!   documented default, through [`null_as_default`].
//! - **Normalization**: `null` optional fields become `None`, never a
//!   sentinel, and coercing fields map out-of-domain values into the
//!   canonical domain.
//!
//! Lists are validated element-wise and all-or-nothing: a single invalid
//! element fails the whole batch.
//!
//! # Example
//!
//! ```
//! use clinic_adapter::domain::schema::Schema;
//! use clinic_adapter::domain::{Appointment, AppointmentStatus};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "id": "a1",
//!     "date": "2025-03-14",
//!     "time": "09:00",
//!     "patientName": "John Smith",
//!     "providerId": "p1"
//! });
//!
//! let appointment = Appointment::parse(&raw).unwrap();
//! assert_eq!(appointment.status, AppointmentStatus::Scheduled);
//! assert_eq!(appointment.reason, "");
//! ```

use super::errors::ValidationError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Canonical-shape parser for one wire entity
pub trait Schema: DeserializeOwned {
    /// Parses a single value
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        deserialize_tracked(value)
    }

    /// Parses an array of values; the first invalid element fails the batch
    fn parse_list(value: &Value) -> Result<Vec<Self>, ValidationError> {
        deserialize_tracked(value)
    }
}

/// Deserializes `value`, reporting failures with the path they occurred at
///
/// A missing field is reported at the field itself (`[1].id`), not at the
/// object that lacks it.
fn deserialize_tracked<T: DeserializeOwned>(value: &Value) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = match err.path().to_string() {
            root if root == "." => String::new(),
            path => path,
        };
        let message = err.into_inner().to_string();

        match missing_field(&message) {
            Some(field) if path.is_empty() => ValidationError::new(field, "required field is missing"),
            Some(field) => ValidationError::new(format!("{path}.{field}"), "required field is missing"),
            None => ValidationError::new(path, message),
        }
    })
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
}

/// `deserialize_with` hook for defaulted fields: `null` takes the default
/// just like an absent key
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
    enum Light {
        #[default]
        Green,
        Red,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Signal {
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        light: Light,
        #[serde(default, deserialize_with = "null_as_default")]
        blink_count: u32,
        note: Option<String>,
    }

    impl Schema for Signal {}

    #[test]
    fn test_missing_field_reported_at_field() {
        let err = Signal::parse(&json!({"light": "Red"})).unwrap_err();
        assert_eq!(err.path, "id");
        assert_eq!(err.message, "required field is missing");

        let err = Signal::parse_list(&json!([{"id": "s1"}, {}])).unwrap_err();
        assert_eq!(err.path, "[1].id");
    }

    #[test]
    fn test_null_required_is_rejected() {
        let err = Signal::parse(&json!({"id": null})).unwrap_err();
        assert_eq!(err.path, "id");
        assert!(err.message.contains("null"));
    }

    #[test]
    fn test_null_defaulted_and_optional() {
        let signal = Signal::parse(&json!({
            "id": "s1", "light": null, "blinkCount": null, "note": null
        }))
        .unwrap();
        assert_eq!(
            signal,
            Signal { id: "s1".into(), light: Light::Green, blink_count: 0, note: None }
        );
    }

    #[test]
    fn test_wrong_type_reports_path() {
        let list = json!([{"id": "s1"}, {"id": "s2"}, {"id": "s3", "blinkCount": "two"}]);
        let err = Signal::parse_list(&list).unwrap_err();
        assert_eq!(err.path, "[2].blinkCount");
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = Signal::parse(&json!({"id": "s1", "light": "Blue"})).unwrap_err();
        assert_eq!(err.path, "light");
        assert!(err.message.contains("unknown variant `Blue`"));
    }

    #[test]
    fn test_non_object_and_non_array() {
        let err = Signal::parse_list(&json!([1])).unwrap_err();
        assert_eq!(err.path, "[0]");

        let err = Signal::parse_list(&json!({"rows": []})).unwrap_err();
        assert_eq!(err.path, "");
        assert!(err.message.contains("sequence"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        assert!(Signal::parse(&json!({"id": "s1", "extra": [1, 2]})).is_ok());
    }
}
