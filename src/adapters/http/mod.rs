//! HTTP plumbing for live mode
//!
//! - [`settings`] - Runtime base URL and CSRF settings; an unset base URL selects mock mode
//! - [`transport`] - Single-shot JSON requests with uniform error mapping
//! - [`path`] - Endpoint paths and query strings
//! - [`cancel`] - Caller-driven cancellation shared by live and mock mode

pub mod cancel;
pub mod path;
pub mod settings;
pub mod transport;

pub use cancel::{cancel_pair, with_cancel, CancelHandle, CancelSignal};
pub use path::ApiPath;
pub use settings::{CsrfTokenSource, HttpSettings, HttpSettingsPatch, HttpSettingsStore, StaticToken};
pub use transport::{HttpMethod, RequestOptions, Transport};
