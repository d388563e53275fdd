//! Tracing subscriber setup

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},tower_http=debug", config.level)))
        .context("Invalid log filter")?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(fmt::layer().json())
            .try_init()
            .context("Failed to install tracing subscriber")
    } else {
        registry
            .with(fmt::layer().pretty())
            .try_init()
            .context("Failed to install tracing subscriber")
    }
}
