//! `tracing` subscriber for the CLI and embedding applications
//!
//! Console output goes to stderr so that command results on stdout stay
//! machine-readable. An optional JSON layer writes to a rolling file.
//!
//! ```no_run
//! use clinic_adapter::config::LoggingConfig;
//! use clinic_adapter::logging::init_logging;
//!
//! let _guard = init_logging("info", &LoggingConfig::default())?;
//! # Ok::<(), clinic_adapter::domain::ClinicError>(())
//! ```

use crate::config::LoggingConfig;
use crate::domain::{ClinicError, Result};
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "clinic.log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Keeps the background file writer alive; drop it to flush
#[must_use = "dropping the guard stops the file writer"]
pub struct LoggingGuard {
    _writer: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `level` when it is set. Fails with
/// [`ClinicError::Configuration`] for an unknown level, an uncreatable log
/// directory, or a second call in the same process.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = crate_filter(level);

    let mut layers: Vec<BoxedLayer<_>> = vec![tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter.clone())
        .boxed()];

    let writer = if config.local_enabled {
        let (layer, guard) = json_file_layer(config, filter)?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| ClinicError::Configuration(format!("Failed to install logger: {e}")))?;

    tracing::debug!(
        %level,
        file = config.local_enabled,
        dir = %config.local_path,
        rotation = %config.local_rotation,
        "Logging ready"
    );

    Ok(LoggingGuard { _writer: writer })
}

fn crate_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clinic_adapter={level},clinic={level}")))
}

fn json_file_layer<S>(
    config: &LoggingConfig,
    filter: EnvFilter,
) -> Result<(BoxedLayer<S>, WorkerGuard)>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        ClinicError::Configuration(format!("Cannot create log directory {}: {e}", config.local_path))
    })?;

    let appender = RollingFileAppender::new(
        rotation_for(&config.local_rotation),
        &config.local_path,
        LOG_FILE_PREFIX,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_thread_ids(true)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();

    Ok((layer, guard))
}

fn rotation_for(policy: &str) -> Rotation {
    match policy {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

fn parse_log_level(name: &str) -> Result<Level> {
    const NAMES: [(&str, Level); 5] = [
        ("trace", Level::TRACE),
        ("debug", Level::DEBUG),
        ("info", Level::INFO),
        ("warn", Level::WARN),
        ("error", Level::ERROR),
    ];

    NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(_, level)| *level)
        .ok_or_else(|| {
            ClinicError::Configuration(format!(
                "Unknown log level '{name}' (expected trace, debug, info, warn or error)"
            ))
        })
}
