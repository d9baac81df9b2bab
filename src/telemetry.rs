// Copyright 2025 Cowboy AI, LLC.

//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::errors::{LifecycleError, LifecycleResult};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `false` when a
/// global subscriber was already installed, which leaves that one in place.
pub fn init_tracing(config: &LoggingConfig) -> LifecycleResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LifecycleError::Configuration(format!("invalid log level: {e}")))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Tracing initialized");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }
}
