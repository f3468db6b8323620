//! Endpoint paths relative to the backend base URL

use crate::domain::{ClinicError, Result, ValidationError};
use std::fmt;
use url::form_urlencoded;

/// Relative endpoint path with optional query parameters
///
/// Segments and query values are kept raw and percent-encoded only when the
/// path is resolved against the base URL, so identifiers containing `/`,
/// `?` or spaces cannot escape their segment. Empty, `.` and `..` segments
/// would be dropped or collapsed by URL normalization and are rejected by
/// [`ApiPath::check_segments`].
///
/// # Example
///
/// ```
/// use clinic_adapter::adapters::http::ApiPath;
///
/// let path = ApiPath::new(["appointments"])
///     .query("date", "2025-01-15")
///     .query_opt("providerId", Some("p1"));
///
/// assert_eq!(path.to_string(), "/appointments?date=2025-01-15&providerId=p1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ApiPath {
    /// Creates a path from its segments
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends a query parameter when `value` is present and non-empty
    pub fn query_opt(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Raw path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Fails for a segment that URL normalization would drop or collapse
    ///
    /// `/inbox/../ack` would otherwise reach `/inbox/ack`.
    pub fn check_segments(&self) -> Result<()> {
        match self
            .segments
            .iter()
            .enumerate()
            .find(|(_, s)| matches!(s.as_str(), "" | "." | ".."))
        {
            Some((index, segment)) => Err(ClinicError::Validation(ValidationError::new(
                format!("{self}"),
                format!("path segment {index} ('{segment}') is not a usable identifier"),
            ))),
            None => Ok(()),
        }
    }

    /// Raw query pairs, in insertion order
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if self.segments.is_empty() {
            write!(f, "/")?;
        }
        if !self.query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{encoded}")?;
        }
        Ok(())
    }
}
