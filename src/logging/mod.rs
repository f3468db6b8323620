//! Logging for the adapter and its CLI
//!
//! Operations emit `tracing` events: writes at `info`, mode switches at
//! `info`, request routing at `debug`. [`init_logging`] installs a
//! subscriber with stderr output and an optional rolling JSON file.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Emit an `error` event carrying the failed operation and its error
///
/// ```no_run
/// use clinic_adapter::domain::ClinicError;
/// use clinic_adapter::log_error_with_context;
///
/// let error = ClinicError::NotFound("patient p404".to_string());
/// log_error_with_context!(&error, "patients get");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            operation = $context,
            status = ?$error.status(),
            "Operation failed"
        );
    };
}
