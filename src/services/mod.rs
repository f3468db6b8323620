//! Typed service operations over the clinic backend.
//!
//! Each service picks its strategy per call through
//! [`ServiceContext::route`]: fixtures when no base URL is configured,
//! HTTP plus schema validation otherwise. Callers see the same types and
//! errors in both modes.
//!
//! # Example
//!
//! ```rust
//! use clinic_adapter::config::{ClinicConfig, MockConfig};
//! use clinic_adapter::services::ClinicClient;
//!
//! # async fn example() -> clinic_adapter::domain::Result<()> {
//! let config = ClinicConfig {
//!     mock: MockConfig::instant(),
//!     ..Default::default()
//! };
//! let client = ClinicClient::from_config(&config)?;
//!
//! let patients = client.patients().search("chen", None).await?;
//! assert_eq!(patients[0].name, "Ava Chen");
//! # Ok(())
//! # }
//! # tokio::runtime::Runtime::new().unwrap().block_on(example()).unwrap();
//! ```

pub mod admin;
pub mod appointments;
pub mod context;
pub mod dashboard;
pub mod encounters;
pub mod inbox;
pub mod messages;
pub mod patients;
pub mod reports;
pub mod ticklers;

pub use admin::AdminService;
pub use appointments::AppointmentService;
pub use context::{LiveRoute, MockRoute, Route, ServiceContext};
pub use dashboard::DashboardService;
pub use encounters::EncounterService;
pub use inbox::InboxService;
pub use messages::MessageService;
pub use patients::PatientService;
pub use reports::ReportService;
pub use ticklers::TicklerService;

use crate::adapters::http::HttpSettingsStore;
use crate::config::ClinicConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Entry point bundling every service around one shared context
///
/// Cheap to clone. Changing the settings through [`ClinicClient::settings`]
/// switches every service between mock and live mode for later calls.
#[derive(Debug, Clone)]
pub struct ClinicClient {
    ctx: Arc<ServiceContext>,
}

impl ClinicClient {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }

    /// Builds a client from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Configuration`](crate::domain::ClinicError::Configuration)
    /// if the HTTP client cannot be built
    pub fn from_config(config: &ClinicConfig) -> Result<Self> {
        let ctx = ServiceContext::from_config(config)?;
        tracing::info!(mock_mode = ctx.settings().is_mock_mode(), "Clinic client ready");
        Ok(Self::new(ctx))
    }

    /// Runtime settings store
    pub fn settings(&self) -> &HttpSettingsStore {
        self.ctx.settings()
    }

    pub fn is_mock_mode(&self) -> bool {
        self.ctx.settings().is_mock_mode()
    }

    pub fn patients(&self) -> PatientService {
        PatientService::new(Arc::clone(&self.ctx))
    }

    pub fn appointments(&self) -> AppointmentService {
        AppointmentService::new(Arc::clone(&self.ctx))
    }

    pub fn encounters(&self) -> EncounterService {
        EncounterService::new(Arc::clone(&self.ctx))
    }

    pub fn inbox(&self) -> InboxService {
        InboxService::new(Arc::clone(&self.ctx))
    }

    pub fn messages(&self) -> MessageService {
        MessageService::new(Arc::clone(&self.ctx))
    }

    pub fn ticklers(&self) -> TicklerService {
        TicklerService::new(Arc::clone(&self.ctx))
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(Arc::clone(&self.ctx))
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(Arc::clone(&self.ctx))
    }

    pub fn admin(&self) -> AdminService {
        AdminService::new(Arc::clone(&self.ctx))
    }
}
