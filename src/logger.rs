// wordcount-plugin — Structured logging via tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Diagnostics go to stderr; stdout is reserved for the single JSON response
/// document. Log level is controlled by the `WORDCOUNT_LOG` env var
/// (default: `warn`, so an unconfigured run emits nothing). Examples:
///   WORDCOUNT_LOG=debug
///   WORDCOUNT_LOG=wordcount_plugin::counter=trace,info
pub fn init() {
    let filter = EnvFilter::try_from_env("WORDCOUNT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
