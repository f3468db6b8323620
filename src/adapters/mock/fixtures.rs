//! Canned clinic data for mock mode
//!
//! Every accessor builds fresh values; nothing here is ever mutated, so
//! repeated calls return identical data. Timestamps are derived from the
//! provider's anchor time.

use crate::domain::{
    Appointment, AppointmentStatus, DashboardStats, EncounterNote, InboxItem, InboxStatus,
    InboxType, Message, Patient, Provider, Report, Sex, SystemInfo, Tickler, TicklerStatus,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

/// Source of fixture data
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    anchor: DateTime<Utc>,
}

impl FixtureProvider {
    /// Fixtures stamped with the current time
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    /// Fixtures stamped with a fixed time
    pub fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    fn timestamp(&self) -> String {
        self.anchor.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn patients(&self) -> Vec<Patient> {
        vec![
            patient("p100", "Jane Doe", "1991-04-10", Sex::F, Some("555-1234")),
            patient("p101", "John Smith", "1984-09-21", Sex::M, Some("555-9933")),
            patient("p102", "Ava Chen", "1990-02-17", Sex::F, None),
        ]
    }

    pub fn patient(&self, id: &str) -> Option<Patient> {
        self.patients().into_iter().find(|p| p.id == id)
    }

    pub fn providers(&self) -> Vec<Provider> {
        vec![
            Provider {
                id: "p1".to_string(),
                name: "Dr. Lee".to_string(),
            },
            Provider {
                id: "p2".to_string(),
                name: "Dr. Patel".to_string(),
            },
        ]
    }

    /// Day sheet for `date`
    pub fn appointments(&self, date: &str) -> Vec<Appointment> {
        vec![
            appointment(
                "a1",
                date,
                "09:00",
                "John Smith",
                "Follow-up",
                Some("555-1234"),
                "p1",
                AppointmentStatus::Scheduled,
            ),
            appointment(
                "a2",
                date,
                "09:30",
                "Ava Chen",
                "Annual Physical",
                Some("555-5555"),
                "p2",
                AppointmentStatus::Arrived,
            ),
            appointment(
                "a3",
                date,
                "10:15",
                "Samuel Park",
                "Blood Pressure",
                None,
                "p1",
                AppointmentStatus::InRoom,
            ),
        ]
    }

    /// Empty unsigned note for an encounter
    pub fn note(&self, encounter_id: &str) -> EncounterNote {
        EncounterNote {
            id: format!("n-{encounter_id}"),
            encounter_id: encounter_id.to_string(),
            subjective: String::new(),
            objective: String::new(),
            assessment: String::new(),
            plan: String::new(),
            signed_at: None,
        }
    }

    pub fn inbox_items(&self) -> Vec<InboxItem> {
        let received_at = self.timestamp();
        let item = |id: &str,
                    item_type: InboxType,
                    patient: &str,
                    summary: &str,
                    assigned_to: Option<&str>,
                    status: InboxStatus| InboxItem {
            id: id.to_string(),
            item_type,
            received_at: received_at.clone(),
            patient_name: Some(patient.to_string()),
            summary: summary.to_string(),
            assigned_to: assigned_to.map(str::to_string),
            status,
        };

        vec![
            item("i1", InboxType::Lab, "Jane Doe", "CBC: WNL", Some("Dr. Lee"), InboxStatus::New),
            item(
                "i2",
                InboxType::Document,
                "John Smith",
                "Discharge summary (PDF)",
                Some("Dr. Patel"),
                InboxStatus::Assigned,
            ),
            item(
                "i3",
                InboxType::Result,
                "Ava Chen",
                "CXR: No acute findings",
                None,
                InboxStatus::Ack,
            ),
        ]
    }

    pub fn messages(&self) -> Vec<Message> {
        let sent_at = self.timestamp();
        vec![
            Message {
                id: "m1".to_string(),
                from: "Nurse Station".to_string(),
                to: "Dr. Lee".to_string(),
                sent_at: sent_at.clone(),
                subject: "Patient arrived".to_string(),
                body: "John Smith is ready in Room 2".to_string(),
                read: false,
            },
            Message {
                id: "m2".to_string(),
                from: "Front Desk".to_string(),
                to: "Dr. Lee".to_string(),
                sent_at,
                subject: "Refill request".to_string(),
                body: "Please review refill for Lisinopril".to_string(),
                read: true,
            },
        ]
    }

    pub fn ticklers(&self) -> Vec<Tickler> {
        let created_at = self.timestamp();
        vec![
            Tickler {
                id: "t1".to_string(),
                title: "Review lab: A1C".to_string(),
                created_at: created_at.clone(),
                due_at: None,
                assigned_to: Some("Dr. Lee".to_string()),
                status: TicklerStatus::Open,
                link: Some("/inbox#i1".to_string()),
            },
            Tickler {
                id: "t2".to_string(),
                title: "Sign encounter note (Jane Doe)".to_string(),
                created_at,
                due_at: None,
                assigned_to: Some("Dr. Lee".to_string()),
                status: TicklerStatus::InProgress,
                link: Some("/encounter/1234".to_string()),
            },
        ]
    }

    pub fn reports(&self) -> Vec<Report> {
        vec![
            report("r1", "Appointment Utilization", "Scheduling", "Daily appointment counts by provider"),
            report("r2", "Outstanding Labs", "Clinical", "Labs without acknowledgement"),
            report("r3", "Billing Summary", "Billing", "Claims and payments overview"),
        ]
    }

    /// Opaque output of a report run
    pub fn report_run(&self, report_id: &str) -> Value {
        json!({
            "id": report_id,
            "generatedAt": self.timestamp(),
            "rows": 42,
        })
    }

    pub fn dashboard(&self, date: &str) -> DashboardStats {
        DashboardStats {
            date: date.to_string(),
            total_appointments: 24,
            arrived: 10,
            in_room: 4,
            results_to_review: 6,
            unread_messages: 3,
            open_ticklers: 5,
        }
    }

    pub fn system_info(&self) -> SystemInfo {
        SystemInfo {
            version: "OSCAR 19 (mock)".to_string(),
            site: "Clinic A".to_string(),
            providers: 12,
            users: 45,
        }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn patient(id: &str, name: &str, dob: &str, sex: Sex, phone: Option<&str>) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        dob: dob.to_string(),
        sex,
        phone: phone.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    date: &str,
    time: &str,
    patient_name: &str,
    reason: &str,
    phone: Option<&str>,
    provider_id: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        patient_name: patient_name.to_string(),
        reason: reason.to_string(),
        phone: phone.map(str::to_string),
        provider_id: provider_id.to_string(),
        status,
    }
}

fn report(id: &str, name: &str, category: &str, description: &str) -> Report {
    Report {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: Some(description.to_string()),
    }
}
