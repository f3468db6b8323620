//! Shared state behind every service and the per-call mock/live choice

use crate::adapters::http::{
    ApiPath, CancelSignal, HttpSettings, HttpSettingsStore, RequestOptions, Transport,
};
use crate::adapters::mock::{FixtureProvider, MockLatency, MockOperation};
use crate::config::ClinicConfig;
use crate::domain::{ClinicError, Result, Schema};
use serde_json::Value;

/// Everything a service needs to serve a call in either mode
#[derive(Debug, Clone)]
pub struct ServiceContext {
    settings: HttpSettingsStore,
    transport: Transport,
    fixtures: FixtureProvider,
    latency: MockLatency,
}

impl ServiceContext {
    /// Assembles a context from explicit parts; the settings store is the
    /// one `transport` reads
    pub fn new(transport: Transport, fixtures: FixtureProvider, latency: MockLatency) -> Self {
        Self {
            settings: transport.settings().clone(),
            transport,
            fixtures,
            latency,
        }
    }

    /// Builds a context from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Configuration`] if the HTTP client cannot be built
    pub fn from_config(config: &ClinicConfig) -> Result<Self> {
        let transport = Transport::new(config.http_settings(), &config.backend)?;
        Ok(Self::new(
            transport,
            FixtureProvider::new(),
            MockLatency::from_config(&config.mock),
        ))
    }

    /// Runtime settings store shared with the transport
    pub fn settings(&self) -> &HttpSettingsStore {
        &self.settings
    }

    /// Chooses the strategy for one call
    ///
    /// Settings are read exactly once here; the returned route keeps its
    /// snapshot even if the store changes while the call runs.
    pub fn route(&self) -> Route<'_> {
        let settings = self.settings.snapshot();
        if settings.is_mock_mode() {
            Route::Mock(MockRoute {
                fixtures: &self.fixtures,
                latency: &self.latency,
            })
        } else {
            Route::Live(LiveRoute {
                transport: &self.transport,
                settings,
            })
        }
    }
}

/// Strategy for a single call
pub enum Route<'a> {
    Mock(MockRoute<'a>),
    Live(LiveRoute<'a>),
}

/// Serves a call from fixtures after the simulated delay
pub struct MockRoute<'a> {
    fixtures: &'a FixtureProvider,
    latency: &'a MockLatency,
}

impl<'a> MockRoute<'a> {
    /// Waits for the operation's delay, then builds the result from fixtures
    pub async fn serve<T, F>(
        &self,
        operation: MockOperation,
        cancel: Option<&CancelSignal>,
        build: F,
    ) -> Result<T>
    where
        F: FnOnce(&FixtureProvider) -> Result<T>,
    {
        self.latency.wait(operation, cancel).await?;
        tracing::debug!(?operation, "Serving fixture data");
        build(self.fixtures)
    }
}

/// Serves a call from the backend
pub struct LiveRoute<'a> {
    transport: &'a Transport,
    settings: HttpSettings,
}

impl<'a> LiveRoute<'a> {
    /// Sends a request and returns the raw body, if any
    pub async fn send(&self, path: &ApiPath, options: RequestOptions<'_>) -> Result<Option<Value>> {
        self.transport
            .request_with(&self.settings, path, options)
            .await
    }

    /// GETs `path` and validates the body as one `T`
    pub async fn fetch<T: Schema>(&self, path: &ApiPath, cancel: Option<&CancelSignal>) -> Result<T> {
        let raw = self.fetch_raw(path, cancel).await?;
        Ok(T::parse(&raw)?)
    }

    /// GETs `path` and validates the body as a list of `T`
    pub async fn fetch_list<T: Schema>(
        &self,
        path: &ApiPath,
        cancel: Option<&CancelSignal>,
    ) -> Result<Vec<T>> {
        let raw = self.fetch_raw(path, cancel).await?;
        Ok(T::parse_list(&raw)?)
    }

    async fn fetch_raw(&self, path: &ApiPath, cancel: Option<&CancelSignal>) -> Result<Value> {
        self.send(path, RequestOptions::get().with_cancel(cancel))
            .await?
            .ok_or_else(|| ClinicError::Decode("empty response".to_string()))
    }
}
