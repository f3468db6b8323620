//! Runtime HTTP settings and the mock/live switch
//!
//! [`HttpSettingsStore`] is the configuration store of the adapter layer. It
//! is an explicit handle, cloned into every service rather than kept in a
//! global, yet it can still be changed at runtime: [`HttpSettingsStore::set_config`]
//! merges a patch into the current settings and every later call observes
//! the new mode. A call in progress keeps the snapshot it started with.

use crate::config::{BackendConfig, SecretString};
use secrecy::ExposeSecret;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Supplies the current anti-forgery token
///
/// Implemented for closures so that the token can be read lazily, e.g. from
/// a cookie jar that changes after login.
pub trait CsrfTokenSource: Send + Sync {
    /// Current token, or `None` if no token is available yet
    fn token(&self) -> Option<String>;
}

impl<F> CsrfTokenSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Fixed token loaded from configuration
pub struct StaticToken(SecretString);

impl StaticToken {
    /// Wraps a configured token
    pub fn new(token: SecretString) -> Self {
        Self(token)
    }
}

impl CsrfTokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.expose_secret().as_ref().to_string())
    }
}

/// Snapshot of the active HTTP settings
#[derive(Clone, Default)]
pub struct HttpSettings {
    /// Backend base URL; `None` selects mock mode
    pub base_url: Option<String>,

    /// Anti-forgery header name
    pub csrf_header: Option<String>,

    /// Anti-forgery token source
    pub csrf_token: Option<Arc<dyn CsrfTokenSource>>,
}

impl HttpSettings {
    /// Builds settings from the `[backend]` configuration section
    pub fn from_backend_config(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url().map(str::to_string),
            csrf_header: config.csrf_header.clone(),
            csrf_token: config
                .csrf_token
                .clone()
                .map(|token| Arc::new(StaticToken::new(token)) as Arc<dyn CsrfTokenSource>),
        }
    }

    /// Base URL if set and non-empty
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// True iff no backend is configured
    pub fn is_mock_mode(&self) -> bool {
        self.base_url().is_none()
    }

    /// Header name and token, only when both are present and non-empty
    pub fn csrf_pair(&self) -> Option<(&str, String)> {
        let header = self.csrf_header.as_deref().filter(|h| !h.is_empty())?;
        let token = self.csrf_token.as_ref()?.token().filter(|t| !t.is_empty())?;
        Some((header, token))
    }
}

impl fmt::Debug for HttpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSettings")
            .field("base_url", &self.base_url)
            .field("csrf_header", &self.csrf_header)
            .field(
                "csrf_token",
                &self.csrf_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Partial update for [`HttpSettingsStore::set_config`]
///
/// Only fields that were set on the patch replace the current values.
///
/// # Examples
///
/// ```
/// use clinic_adapter::adapters::http::{HttpSettingsPatch, HttpSettingsStore};
///
/// let store = HttpSettingsStore::default();
/// assert!(store.is_mock_mode());
///
/// store.set_config(HttpSettingsPatch::new().base_url("https://emr.example.org/api"));
/// assert!(!store.is_mock_mode());
///
/// store.set_config(HttpSettingsPatch::new().clear_base_url());
/// assert!(store.is_mock_mode());
/// ```
#[derive(Default)]
pub struct HttpSettingsPatch {
    base_url: Option<String>,
    clear_base_url: bool,
    csrf_header: Option<String>,
    csrf_token: Option<Arc<dyn CsrfTokenSource>>,
}

impl HttpSettingsPatch {
    /// Creates an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self.clear_base_url = false;
        self
    }

    /// Removes the backend base URL, switching to mock mode
    pub fn clear_base_url(mut self) -> Self {
        self.base_url = None;
        self.clear_base_url = true;
        self
    }

    /// Sets the anti-forgery header name
    pub fn csrf_header(mut self, header: impl Into<String>) -> Self {
        self.csrf_header = Some(header.into());
        self
    }

    /// Sets a lazily evaluated token source
    pub fn csrf_token_source(mut self, source: impl CsrfTokenSource + 'static) -> Self {
        self.csrf_token = Some(Arc::new(source));
        self
    }

    /// Sets a fixed token
    pub fn csrf_token(self, token: SecretString) -> Self {
        self.csrf_token_source(StaticToken::new(token))
    }
}

/// Shared, runtime-mutable settings handle
#[derive(Debug, Clone, Default)]
pub struct HttpSettingsStore {
    inner: Arc<RwLock<HttpSettings>>,
}

impl HttpSettingsStore {
    /// Creates a store holding `settings`
    pub fn new(settings: HttpSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Merges `patch` into the current settings
    pub fn set_config(&self, patch: HttpSettingsPatch) {
        let mut settings = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let was_mock = settings.is_mock_mode();

        if patch.clear_base_url {
            settings.base_url = None;
        } else if let Some(url) = patch.base_url {
            settings.base_url = Some(url);
        }
        if let Some(header) = patch.csrf_header {
            settings.csrf_header = Some(header);
        }
        if let Some(token) = patch.csrf_token {
            settings.csrf_token = Some(token);
        }

        let is_mock = settings.is_mock_mode();
        if was_mock != is_mock {
            tracing::info!(
                mock_mode = is_mock,
                base_url = settings.base_url().unwrap_or(""),
                "Adapter mode changed"
            );
        }
    }

    /// Copy of the current settings
    pub fn snapshot(&self) -> HttpSettings {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// True iff no backend is currently configured
    pub fn is_mock_mode(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_mock_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_default_is_mock_mode() {
        assert!(HttpSettings::default().is_mock_mode());
        assert!(HttpSettingsStore::default().is_mock_mode());
    }

    #[test]
    fn test_empty_base_url_is_mock_mode() {
        let settings = HttpSettings {
            base_url: Some(String::new()),
            ..Default::default()
        };
        assert!(settings.is_mock_mode());
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let store = HttpSettingsStore::default();
        store.set_config(
            HttpSettingsPatch::new()
                .base_url("https://emr.example.org")
                .csrf_header("X-CSRF-Token"),
        );
        store.set_config(HttpSettingsPatch::new().csrf_token_source(|| Some("t1".to_string())));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.base_url(), Some("https://emr.example.org"));
        assert_eq!(
            snapshot.csrf_pair(),
            Some(("X-CSRF-Token", "t1".to_string()))
        );
    }

    #[test]
    fn test_clones_share_state() {
        let store = HttpSettingsStore::default();
        let clone = store.clone();
        store.set_config(HttpSettingsPatch::new().base_url("http://localhost:8080"));
        assert!(!clone.is_mock_mode());
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_changes() {
        let store = HttpSettingsStore::default();
        store.set_config(HttpSettingsPatch::new().base_url("http://localhost:8080"));
        let snapshot = store.snapshot();

        store.set_config(HttpSettingsPatch::new().clear_base_url());
        assert!(!snapshot.is_mock_mode());
        assert!(store.is_mock_mode());
    }

    #[test]
    fn test_csrf_requires_header_and_non_empty_token() {
        let mut settings = HttpSettings {
            csrf_token: Some(Arc::new(|| Some("abc".to_string()))),
            ..Default::default()
        };
        assert!(settings.csrf_pair().is_none());

        settings.csrf_header = Some("X-CSRF-Token".to_string());
        assert!(settings.csrf_pair().is_some());

        settings.csrf_token = Some(Arc::new(|| Some(String::new())));
        assert!(settings.csrf_pair().is_none());

        settings.csrf_token = Some(Arc::new(|| None));
        assert!(settings.csrf_pair().is_none());
    }

    #[test]
    fn test_from_backend_config() {
        let config = BackendConfig {
            base_url: Some("https://emr.example.org/api".to_string()),
            csrf_header: Some("X-XSRF-TOKEN".to_string()),
            csrf_token: Some(secret_string("s3cret".to_string())),
            ..Default::default()
        };
        let settings = HttpSettings::from_backend_config(&config);
        assert!(!settings.is_mock_mode());
        assert_eq!(
            settings.csrf_pair(),
            Some(("X-XSRF-TOKEN", "s3cret".to_string()))
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = HttpSettings {
            csrf_header: Some("X-CSRF-Token".to_string()),
            csrf_token: Some(Arc::new(StaticToken::new(secret_string("s3cret".to_string())))),
            ..Default::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("REDACTED"));
    }
}
