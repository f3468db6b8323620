//! Result alias used throughout the crate

use super::errors::ClinicError;

/// Outcome of every adapter operation
///
/// ```
/// use clinic_adapter::domain::{ClinicError, Result};
///
/// fn find(id: &str) -> Result<&'static str> {
///     match id {
///         "p100" => Ok("Jane Doe"),
///         other => Err(ClinicError::NotFound(format!("patient {other}"))),
///     }
/// }
///
/// assert!(find("p404").is_err());
/// ```
pub type Result<T> = std::result::Result<T, ClinicError>;
