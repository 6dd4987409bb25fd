//! Log output for the migrator.
//!
//! The binary runs once and exits, so events go to stderr without span
//! timing. Stdout stays free for anything a wrapper script wants to parse.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Builds the event filter. A valid `RUST_LOG` value wins over the
/// configured level.
pub fn build_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

/// Installs the global subscriber. Call once, before the first event.
pub fn init_logging(config: &LoggingConfig) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), &config.level);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        let filter = build_filter(None, "debug");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_filter_prefers_rust_log() {
        let filter = build_filter(Some("persistence=trace"), "info");
        assert_eq!(filter.to_string(), "persistence=trace");
    }

    #[test]
    fn test_filter_ignores_malformed_rust_log() {
        let filter = build_filter(Some("persistence=loud"), "warn");
        assert_eq!(filter.to_string(), "warn");
    }
}
