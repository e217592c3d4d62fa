use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogLevel;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `--log-level`, falling back to `RUST_LOG`
pub fn filter(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr so stdout stays parseable. The interactive console owns
/// the terminal, so its events are filtered but never written.
pub fn init(level: Option<LogLevel>, interactive: bool) {
    let registry = tracing_subscriber::registry().with(filter(level));

    let result = if interactive {
        registry
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
    };

    // A subscriber set by an embedding process wins
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        let filter = filter(Some(LogLevel::Debug));
        assert_eq!(filter.to_string(), "debug");
    }
}
