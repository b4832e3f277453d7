//! Logging initialization using the `tracing` ecosystem.

use crate::settings::LoggingSettings;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File prefix of the daily-rotated log files.
const LOG_FILE_PREFIX: &str = "journal.log";

/// Initialize the global tracing subscriber.
///
/// Call once at program start. `RUST_LOG` takes precedence over
/// `settings.level`. Console output goes to stderr so command output on
/// stdout stays clean; when `settings.directory` is set, logs are also
/// written to a daily-rotating file there.
pub fn init_logging(settings: &LoggingSettings) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if let Some(dir) = &settings.directory {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}
