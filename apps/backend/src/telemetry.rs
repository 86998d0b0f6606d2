use silhouette_backend::config::logging::{LogFormat, DEFAULT_LOG_FILTER};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber: `RUST_LOG` filtering, `LOG_FORMAT` output.
///
/// A bad `LOG_FORMAT` falls back to JSON and is reported once the
/// subscriber is live.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (format, format_error) = match LogFormat::from_env() {
        Ok(format) => (format, None),
        Err(e) => (LogFormat::Json, Some(e)),
    };

    // Json keeps the `request` span's trace_id and session_id on every line
    let json_layer = (format == LogFormat::Json).then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(false)
            .with_ansi(false)
    });
    let compact_layer = (format == LogFormat::Compact).then(|| {
        fmt::layer()
            .compact()
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(compact_layer)
        .init();

    if let Some(e) = format_error {
        tracing::warn!(error = %e, "ignoring LOG_FORMAT");
    }
}
