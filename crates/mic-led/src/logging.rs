//! Structured logging to the console and a daily rolling file.

use crate::{AppError, AppResult, config::project_dirs};

use std::{fs, panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "mic_led=debug,mic_led_core=debug";

/// Prefix of the rolling log files.
const LOG_FILE_PREFIX: &str = "mic-led.log";

/// Keeps the file writer flushing. Drop it last.
pub struct Logging {
    /// Directory the log files are written to.
    pub dir: PathBuf,
    _guard: WorkerGuard,
}

/// Install the global subscriber.
///
/// Console output is compact; the file gets the same events without ANSI
/// colors, rotated daily under `<data dir>/logs`.
#[track_caller]
pub fn init() -> AppResult<Logging> {
    let dir = project_dirs()?.data_dir().join("logs");
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .map_err(|e| AppError::LoggingError {
            reason: format!("Failed to install subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Logging { dir, _guard: guard })
}
