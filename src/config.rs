// Copyright 2025 Cowboy AI, LLC.

//! Engine configuration
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `lifecycle.toml` (optional)
//! 3. Environment variables prefixed with `LIFECYCLE_`, nested keys joined
//!    with `__` (e.g. `LIFECYCLE_ACTORS__IT_SYSTEM`)

use crate::errors::LifecycleResult;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "lifecycle.toml";

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Prefix of generated employee identifiers
    pub employee_id_prefix: String,
    /// Audit actor names for system-driven checklist updates
    pub actors: ActorNames,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Conceptual actors written to the audit trail when a caller names none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorNames {
    /// Provisioning and deprovisioning
    pub it_system: String,
    /// Compliance checks
    pub compliance_system: String,
    /// Finance enrollment and final payroll
    pub finance_system: String,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            employee_id_prefix: "EMP".to_string(),
            actors: ActorNames::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ActorNames {
    fn default() -> Self {
        Self {
            it_system: "IT System".to_string(),
            compliance_system: "Compliance System".to_string(),
            finance_system: "Finance System".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl EngineConfig {
    /// Load from `lifecycle.toml` in the working directory and the environment
    pub fn load() -> LifecycleResult<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load from an explicit file path and the environment
    pub fn load_from(path: &Path) -> LifecycleResult<Self> {
        let config = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("LIFECYCLE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: EngineConfig = config.try_deserialize()?;
        tracing::debug!(
            path = %path.display(),
            prefix = %loaded.employee_id_prefix,
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Parse an inline TOML document over the defaults
    pub fn from_toml_str(toml: &str) -> LifecycleResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.employee_id_prefix, "EMP");
        assert_eq!(config.actors.it_system, "IT System");
        assert_eq!(config.actors.compliance_system, "Compliance System");
        assert_eq!(config.actors.finance_system, "Finance System");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            employee_id_prefix = "ACME"

            [actors]
            it_system = "ServiceDesk"
            "#,
        )
        .unwrap();

        assert_eq!(config.employee_id_prefix, "ACME");
        assert_eq!(config.actors.it_system, "ServiceDesk");
        assert_eq!(config.actors.finance_system, "Finance System");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_from(Path::new("does-not-exist/lifecycle.toml")).unwrap();
        assert_eq!(config.actors, ActorNames::default());
    }

    #[test]
    fn test_invalid_toml_is_a_configuration_error() {
        let err = EngineConfig::from_toml_str("employee_id_prefix = [").unwrap_err();
        assert!(matches!(err, crate::LifecycleError::Configuration(_)));
    }
}
