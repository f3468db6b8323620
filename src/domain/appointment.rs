//! Appointment domain model

use super::schema::{null_as_default, Schema};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient flow status for a booked slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Arrived,
    #[serde(rename = "In Room")]
    InRoom,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Arrived => "Arrived",
            AppointmentStatus::InRoom => "In Room",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
            .map_err(|e: serde::de::value::Error| format!("Invalid appointment status: {e}"))
    }
}

/// A booked slot on the day sheet
///
/// `date` is `YYYY-MM-DD` and `time` is `HH:mm`; both are carried as the
/// backend sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub date: String,
    pub time: String,
    pub patient_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub provider_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AppointmentStatus,
}

impl Schema for Appointment {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn raw() -> serde_json::Value {
        json!({
            "id": "a1",
            "date": "2025-03-14",
            "time": "09:00",
            "patientName": "John Smith",
            "reason": "Follow-up",
            "phone": "555-1234",
            "providerId": "p1",
            "status": "Arrived"
        })
    }

    #[test]
    fn test_missing_status_defaults_to_scheduled() {
        let mut value = raw();
        value.as_object_mut().unwrap().remove("status");
        let appointment = Appointment::parse(&value).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_missing_reason_defaults_to_empty() {
        let mut value = raw();
        value.as_object_mut().unwrap().remove("reason");
        assert_eq!(Appointment::parse(&value).unwrap().reason, "");
    }

    #[test]
    fn test_null_phone_becomes_absent() {
        let mut value = raw();
        value["phone"] = serde_json::Value::Null;
        assert_eq!(Appointment::parse(&value).unwrap().phone, None);
    }

    #[test_case("Scheduled", AppointmentStatus::Scheduled)]
    #[test_case("Arrived", AppointmentStatus::Arrived)]
    #[test_case("In Room", AppointmentStatus::InRoom)]
    #[test_case("Completed", AppointmentStatus::Completed)]
    #[test_case("Cancelled", AppointmentStatus::Cancelled)]
    fn test_status_wire_values(raw_status: &str, expected: AppointmentStatus) {
        let mut value = raw();
        value["status"] = json!(raw_status);
        assert_eq!(Appointment::parse(&value).unwrap().status, expected);
        assert_eq!(expected.as_str(), raw_status);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let mut value = raw();
        value["status"] = json!("NoShow");
        let err = Appointment::parse(&value).unwrap_err();
        assert_eq!(err.path, "status");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let mut value = raw();
        value.as_object_mut().unwrap().remove("id");
        let err = Appointment::parse(&value).unwrap_err();
        assert_eq!(err.path, "id");
    }

    #[test]
    fn test_list_fails_on_single_bad_element() {
        let mut bad = raw();
        bad.as_object_mut().unwrap().remove("providerId");
        let list = json!([raw(), bad, raw()]);

        let err = Appointment::parse_list(&list).unwrap_err();
        assert_eq!(err.path, "[1].providerId");
    }

    #[test]
    fn test_round_trip() {
        let appointment = Appointment::parse(&raw()).unwrap();
        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["status"], "Arrived");
        assert_eq!(Appointment::parse(&json).unwrap(), appointment);
    }

    #[test]
    fn test_null_status_defaults_to_scheduled() {
        let mut value = raw();
        value["status"] = serde_json::Value::Null;
        assert_eq!(
            Appointment::parse(&value).unwrap().status,
            AppointmentStatus::Scheduled
        );
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "In Room".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::InRoom
        );
        assert!("in room".parse::<AppointmentStatus>().is_err());
    }
}
