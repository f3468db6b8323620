//! Canonical clinical entities and their schemas.
//!
//! Every type in this module is the *canonical shape* of an entity: the
//! validated, defaulted and coerced form the rest of the application is
//! guaranteed to receive, whether it came from a live backend or from the
//! fixture provider.
//!
//! # Overview
//!
//! - **Entities** ([`Patient`], [`Provider`], [`Appointment`], [`EncounterNote`],
//!   [`InboxItem`], [`Message`], [`Tickler`], [`DashboardStats`], [`Report`],
//!   [`SystemInfo`])
//! - **Write payloads** ([`NotePatch`], [`NewMessage`]) and filters ([`InboxQuery`])
//! - **Schemas** ([`schema::Schema`]) turning raw JSON into entities
//! - **Error types** ([`ClinicError`], [`HttpError`], [`ValidationError`])
//! - **Result type alias** ([`Result`])
//!
//! Entities are immutable snapshots. They serialize back to the wire shape
//! (camelCase keys, absent optionals omitted), so parsing a serialized
//! entity yields the same value.
//!
//! # Error Handling
//!
//! ```rust
//! use clinic_adapter::domain::schema::Schema;
//! use clinic_adapter::domain::{Appointment, ClinicError, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     // Missing id: the validation error converts with ?
//!     let err = Appointment::parse(&json!({"date": "2025-03-14"})).unwrap_err();
//!     assert_eq!(err.path, "id");
//!     Err(ClinicError::from(err))
//! }
//! # assert!(example().is_err());
//! ```

pub mod appointment;
pub mod dashboard;
pub mod encounter;
pub mod errors;
pub mod inbox;
pub mod message;
pub mod patient;
pub mod report;
pub mod result;
pub mod schema;
pub mod tickler;

// Re-export commonly used types for convenience
pub use appointment::{Appointment, AppointmentStatus};
pub use dashboard::DashboardStats;
pub use encounter::{EncounterNote, NotePatch};
pub use errors::{ClinicError, HttpError, ValidationError};
pub use inbox::{InboxItem, InboxQuery, InboxStatus, InboxType};
pub use message::{Message, NewMessage};
pub use patient::{Patient, Provider, Sex};
pub use report::{Report, SystemInfo};
pub use result::Result;
pub use schema::Schema;
pub use tickler::{Tickler, TicklerStatus};
