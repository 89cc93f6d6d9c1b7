use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::DEFAULT_LOG_FILTER;
use crate::models::LoggingConfig;

/// Install the global tracing subscriber using the configured filter.
///
/// An unparsable filter falls back to [`DEFAULT_LOG_FILTER`]. Fails only if a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = build_filter(&config.filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}

fn build_filter(directives: &str) -> EnvFilter {
    if directives.trim().is_empty() {
        return EnvFilter::new(DEFAULT_LOG_FILTER);
    }
    EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_fallbacks() {
        assert_eq!(build_filter("").to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(
            build_filter("tubedeck_core=debug").to_string(),
            "tubedeck_core=debug"
        );
    }
}
