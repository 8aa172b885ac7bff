//! Run configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use consolidate_types::{Decimal, MigrationParams};
use consolidate_utils::LogFormat;

#[derive(Debug, Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

/// Configuration for a consolidation run.
///
/// Loaded from a TOML file via [`ConsolidateConfig::from_toml_file`] or built
/// programmatically; CLI flags override individual fields afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsolidateConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Grand total the verified ledger must sum to, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_total: Option<String>,

    /// Denomination, supply and prefixes for the migration.
    #[serde(default)]
    pub params: MigrationParams,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ConsolidateConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError(e.to_string()))
    }

    /// The configured expected total, parsed.
    pub fn expected_total(&self) -> Result<Option<Decimal>, ConfigError> {
        self.expected_total
            .as_deref()
            .map(|s| {
                s.parse::<Decimal>()
                    .map_err(|e| ConfigError(format!("expected_total: {e}")))
            })
            .transpose()
    }
}

impl Default for ConsolidateConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            expected_total: None,
            params: MigrationParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ConsolidateConfig::default();
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = ConsolidateConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.params, config.params);
        assert_eq!(parsed.log_level, config.log_level);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ConsolidateConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.params, MigrationParams::gno_defaults());
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
        assert!(config.expected_total().unwrap().is_none());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            log_format = "json"
            expected_total = "699999999676645.000000000000000000"

            [params]
            total_supply = 1000
            qualifying_denom = "uosmo"
        "#;
        let config = ConsolidateConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.params.total_supply, 1000);
        assert_eq!(config.params.qualifying_denom, "uosmo");
        assert_eq!(config.params.target_prefix, "g"); // default
        assert_eq!(
            config.expected_total().unwrap(),
            Some(Decimal::from(699_999_999_676_645u64))
        );
    }

    #[test]
    fn bad_expected_total_is_config_error() {
        let config = ConsolidateConfig::from_toml_str(r#"expected_total = "12,5""#).unwrap();
        assert!(config.expected_total().is_err());
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = ConsolidateConfig::from_toml_file(Path::new("/nonexistent/consolidate.toml"));
        assert!(result.is_err());
    }
}
