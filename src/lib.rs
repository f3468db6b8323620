// Clinic Adapter - EMR front-end data access layer
// Copyright (c) 2025 Clinic Adapter Contributors
// Licensed under the MIT License

//! # Clinic Adapter
//!
//! Typed data access for an EMR front end: patients, appointments,
//! encounter notes, inbox, messages, ticklers, reports, dashboard counters
//! and system information.
//!
//! ## Overview
//!
//! Every operation runs in one of two modes, decided per call:
//! - **Live**: JSON over HTTP against the configured backend, with every
//!   response validated into canonical domain types
//! - **Mock**: deterministic fixtures with simulated latency, used whenever
//!   no backend base URL is configured
//!
//! Callers see the same types and the same error taxonomy in both modes.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`services`] - Service operations and the [`services::ClinicClient`] facade
//! - [`adapters`] - HTTP transport, runtime settings and mock fixtures
//! - [`domain`] - Entities, schema validation and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic_adapter::config::load_config_or_default;
//! use clinic_adapter::services::ClinicClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("clinic.toml")?;
//!     let client = ClinicClient::from_config(&config)?;
//!
//!     let day = client.appointments().by_day("2025-01-15", Some("p1"), None).await?;
//!     for appointment in day {
//!         println!("{} {} ({})", appointment.time, appointment.patient_name, appointment.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Switching to a live backend at runtime
//!
//! ```rust,no_run
//! use clinic_adapter::adapters::http::HttpSettingsPatch;
//! use clinic_adapter::config::ClinicConfig;
//! use clinic_adapter::services::ClinicClient;
//!
//! # async fn example() -> clinic_adapter::domain::Result<()> {
//! let client = ClinicClient::from_config(&ClinicConfig::default())?;
//! assert!(client.is_mock_mode());
//!
//! client.settings().set_config(
//!     HttpSettingsPatch::new()
//!         .base_url("https://emr.example.org/api")
//!         .csrf_header("X-CSRF-Token")
//!         .csrf_token_source(|| std::env::var("CLINIC_CSRF_TOKEN").ok()),
//! );
//! let inbox = client.inbox().items(&Default::default(), None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Cancellation
//!
//! Every operation takes an optional [`adapters::http::CancelSignal`]. Firing
//! the paired handle aborts the call with
//! [`domain::ClinicError::Cancelled`] in either mode.
//!
//! ## Error Handling
//!
//! All operations return [`domain::Result`], whose error is
//! [`domain::ClinicError`]. Nothing is retried or swallowed.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod services;
