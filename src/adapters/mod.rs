//! External system integrations.
//!
//! Every service operation is served by one of two strategies, chosen per
//! call from the current [`http::HttpSettingsStore`]:
//!
//! - [`http`] - Live mode: JSON over HTTP against the EMR backend
//! - [`mock`] - Mock mode: in-memory fixtures with simulated latency
//!
//! # Switching modes
//!
//! ```rust
//! use clinic_adapter::adapters::http::{HttpSettingsPatch, HttpSettingsStore};
//!
//! let settings = HttpSettingsStore::default();
//! assert!(settings.is_mock_mode());
//!
//! settings.set_config(
//!     HttpSettingsPatch::new()
//!         .base_url("https://emr.example.org/api")
//!         .csrf_header("X-CSRF-Token")
//!         .csrf_token_source(|| std::env::var("CLINIC_CSRF_TOKEN").ok()),
//! );
//! assert!(!settings.is_mock_mode());
//! ```

pub mod http;
pub mod mock;
