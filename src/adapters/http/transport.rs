//! JSON-over-HTTP transport
//!
//! [`Transport`] performs one request against the configured backend and
//! turns the response into `Option<serde_json::Value>`:
//!
//! - 2xx with a body: `Some(value)`, or [`ClinicError::Decode`] if the body is not JSON
//! - 204 No Content: `None`
//! - any other status: [`ClinicError::Http`] carrying status, reason and body text
//!
//! There are no retries. Cancellation aborts the in-flight exchange and
//! yields [`ClinicError::Cancelled`].

use super::cancel::{with_cancel, CancelSignal};
use super::path::ApiPath;
use super::settings::{HttpSettings, HttpSettingsStore};
use crate::config::BackendConfig;
use crate::domain::{ClinicError, HttpError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

/// HTTP verbs used by the adapter layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    fn as_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_reqwest())
    }
}

/// Per-request options
#[derive(Debug, Clone, Default)]
pub struct RequestOptions<'a> {
    /// HTTP verb, GET by default
    pub method: HttpMethod,

    /// JSON body; sets `Content-Type: application/json` when present
    pub body: Option<Value>,

    /// Abort signal
    pub cancel: Option<&'a CancelSignal>,
}

impl<'a> RequestOptions<'a> {
    /// Options for the given verb
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// GET without a body
    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    /// Attaches a JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `payload` as the JSON body
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Serialization`] if `payload` cannot be encoded
    pub fn with_json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        Ok(self.with_body(serde_json::to_value(payload)?))
    }

    /// Attaches an abort signal
    pub fn with_cancel(mut self, cancel: Option<&'a CancelSignal>) -> Self {
        self.cancel = cancel;
        self
    }
}

/// HTTP transport bound to a settings store
///
/// # Example
///
/// ```no_run
/// use clinic_adapter::adapters::http::{ApiPath, HttpSettingsPatch, HttpSettingsStore, RequestOptions, Transport};
/// use clinic_adapter::config::BackendConfig;
///
/// # async fn example() -> clinic_adapter::domain::Result<()> {
/// let settings = HttpSettingsStore::default();
/// settings.set_config(HttpSettingsPatch::new().base_url("https://emr.example.org/api"));
///
/// let transport = Transport::new(settings, &BackendConfig::default())?;
/// let messages = transport.request(&ApiPath::new(["messages"]), RequestOptions::get()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    settings: HttpSettingsStore,
}

impl Transport {
    /// Creates a transport with a client built from `config`
    ///
    /// # Arguments
    ///
    /// * `settings` - Store read on every request for base URL and CSRF header
    /// * `config` - Supplies the request timeout and the cookie policy
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Configuration`] if the HTTP client cannot be built
    pub fn new(settings: HttpSettingsStore, config: &BackendConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .cookie_store(config.send_credentials)
            .build()
            .map_err(|e| ClinicError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(settings, client))
    }

    /// Creates a transport around an existing client
    pub fn with_client(settings: HttpSettingsStore, client: Client) -> Self {
        Self { client, settings }
    }

    /// Settings store this transport reads from
    pub fn settings(&self) -> &HttpSettingsStore {
        &self.settings
    }

    /// Performs a request using the current settings
    ///
    /// # Errors
    ///
    /// - [`ClinicError::Configuration`] in mock mode or with an unusable base URL
    /// - [`ClinicError::Http`] on a non-2xx status
    /// - [`ClinicError::Decode`] when a 2xx body is not valid JSON
    /// - [`ClinicError::Connection`] when the exchange itself fails
    /// - [`ClinicError::Cancelled`] when the signal fires first
    pub async fn request(&self, path: &ApiPath, options: RequestOptions<'_>) -> Result<Option<Value>> {
        let settings = self.settings.snapshot();
        self.request_with(&settings, path, options).await
    }

    /// Performs a request against an already captured settings snapshot
    pub(crate) async fn request_with(
        &self,
        settings: &HttpSettings,
        path: &ApiPath,
        options: RequestOptions<'_>,
    ) -> Result<Option<Value>> {
        let base = settings.base_url().ok_or_else(|| {
            ClinicError::Configuration(
                "No backend base URL configured; requests are served from fixtures in mock mode"
                    .to_string(),
            )
        })?;
        let url = resolve_url(base, path)?;

        let mut request = self
            .client
            .request(options.method.as_reqwest(), url.clone())
            .header(ACCEPT, "application/json");

        if let Some(body) = &options.body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        if let Some((header, token)) = settings.csrf_pair() {
            request = request.header(header, token);
        }

        tracing::debug!(method = %options.method, url = %url, "Sending backend request");

        let method = options.method;
        let exchange = async move {
            let resp = request.send().await.map_err(send_error)?;
            read_response(resp).await
        };

        let result = with_cancel(exchange, options.cancel).await;
        match &result {
            Ok(_) => tracing::debug!(method = %method, path = %path, "Backend request completed"),
            Err(ClinicError::Cancelled) => {
                tracing::debug!(method = %method, path = %path, "Backend request cancelled")
            }
            Err(e) => tracing::warn!(method = %method, path = %path, error = %e, "Backend request failed"),
        }
        result
    }
}

/// Joins `path` onto `base`, keeping any path prefix the base URL carries
fn resolve_url(base: &str, path: &ApiPath) -> Result<Url> {
    path.check_segments()?;
    let mut url = Url::parse(base.trim())
        .map_err(|e| ClinicError::Configuration(format!("Invalid base URL '{base}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| ClinicError::Configuration(format!("Base URL '{base}' cannot carry a path")))?
        .pop_if_empty()
        .extend(path.segments());

    if !path.query_pairs().is_empty() {
        url.query_pairs_mut().extend_pairs(path.query_pairs());
    }

    Ok(url)
}

fn send_error(err: reqwest::Error) -> ClinicError {
    if err.is_builder() {
        ClinicError::Configuration(format!("Invalid request: {err}"))
    } else {
        ClinicError::Connection(err.to_string())
    }
}

async fn read_response(resp: reqwest::Response) -> Result<Option<Value>> {
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(HttpError::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        )
        .into());
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ClinicError::Connection(e.to_string()))?;

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| ClinicError::Decode(format!("Response body is not valid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::cancel::cancel_pair;
    use crate::adapters::http::settings::HttpSettingsPatch;
    use mockito::Matcher;
    use serde_json::json;

    fn transport_for(base_url: &str) -> Transport {
        let settings = HttpSettingsStore::default();
        settings.set_config(HttpSettingsPatch::new().base_url(base_url));
        Transport::new(settings, &BackendConfig::default()).unwrap()
    }

    #[test]
    fn test_resolve_url_trims_slashes() {
        let path = ApiPath::new(["patients", "p100"]);
        assert_eq!(
            resolve_url("https://emr.example.org/api/", &path).unwrap().as_str(),
            "https://emr.example.org/api/patients/p100"
        );
        assert_eq!(
            resolve_url("https://emr.example.org/api", &path).unwrap().as_str(),
            "https://emr.example.org/api/patients/p100"
        );
    }

    #[test]
    fn test_resolve_url_encodes_segments() {
        let path = ApiPath::new(["patients", "a/b c"]);
        assert_eq!(
            resolve_url("http://localhost", &path).unwrap().as_str(),
            "http://localhost/patients/a%2Fb%20c"
        );
    }

    #[test]
    fn test_resolve_url_rejects_garbage() {
        let err = resolve_url("not a url", &ApiPath::new(["x"])).unwrap_err();
        assert!(matches!(err, ClinicError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_mock_mode_is_configuration_error() {
        let transport =
            Transport::new(HttpSettingsStore::default(), &BackendConfig::default()).unwrap();
        let err = transport
            .request(&ApiPath::new(["messages"]), RequestOptions::get())
            .await
            .unwrap_err();
        assert!(matches!(err, ClinicError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_get_returns_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/messages")
            .match_header("accept", "application/json")
            .match_header("content-type", Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"m1"}]"#)
            .create_async()
            .await;

        let value = transport_for(&server.url())
            .request(&ApiPath::new(["messages"]), RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(value, Some(json!([{"id": "m1"}])));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_body_sets_content_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/appointments/a1/status")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"status": "Arrived"})))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let options = RequestOptions::new(HttpMethod::Patch).with_body(json!({"status": "Arrived"}));
        transport_for(&server.url())
            .request(&ApiPath::new(["appointments", "a1", "status"]), options)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_csrf_header_sent_when_configured() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/inbox/i1/ack")
            .match_header("x-csrf-token", "tok-1")
            .with_status(204)
            .create_async()
            .await;

        let transport = transport_for(&server.url());
        transport.settings().set_config(
            HttpSettingsPatch::new()
                .csrf_header("X-CSRF-Token")
                .csrf_token_source(|| Some("tok-1".to_string())),
        );

        let value = transport
            .request(
                &ApiPath::new(["inbox", "i1", "ack"]),
                RequestOptions::new(HttpMethod::Post),
            )
            .await
            .unwrap();

        assert!(value.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_csrf_header_omitted_for_empty_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ticklers")
            .match_header("x-csrf-token", Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let transport = transport_for(&server.url());
        transport.settings().set_config(
            HttpSettingsPatch::new()
                .csrf_header("X-CSRF-Token")
                .csrf_token_source(|| Some(String::new())),
        );

        transport
            .request(&ApiPath::new(["ticklers"]), RequestOptions::get())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/reports")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = transport_for(&server.url())
            .request(&ApiPath::new(["reports"]), RequestOptions::get())
            .await
            .unwrap_err();

        match err {
            ClinicError::Http(http) => {
                assert_eq!(http.status, 500);
                assert_eq!(http.status_text, "Internal Server Error");
                assert_eq!(http.body, "boom");
                assert!(http.is_server_error());
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_standard_status_has_empty_reason() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/reports")
            .with_status(599)
            .with_body("overloaded")
            .create_async()
            .await;

        let err = transport_for(&server.url())
            .request(&ApiPath::new(["reports"]), RequestOptions::get())
            .await
            .unwrap_err();

        match err {
            ClinicError::Http(http) => {
                assert_eq!(http.status, 599);
                assert_eq!(http.status_text, "");
                assert_eq!(http.to_string(), "599 : overloaded");
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dashboard")
            .match_query(Matcher::UrlEncoded("date".into(), "2025-01-15".into()))
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let err = transport_for(&server.url())
            .request(
                &ApiPath::new(["dashboard"]).query("date", "2025-01-15"),
                RequestOptions::get(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClinicError::Decode(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/messages")
            .with_status(200)
            .with_body("[]")
            .expect(0)
            .create_async()
            .await;

        let (handle, signal) = cancel_pair();
        handle.cancel();

        let err = transport_for(&server.url())
            .request(
                &ApiPath::new(["messages"]),
                RequestOptions::get().with_cancel(Some(&signal)),
            )
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_refused_is_connection_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = transport_for(&format!("http://127.0.0.1:{port}"))
            .request(&ApiPath::new(["messages"]), RequestOptions::get())
            .await
            .unwrap_err();
        assert!(matches!(err, ClinicError::Connection(_)));
    }
}
