//! CLI configuration loaded from a TOML file.

use anyhow::Context;
use friendgraph_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_db_path() -> String {
    "friendgraph.db".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration for the friendgraph binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Report empty friends / common-friends results as errors
    /// (the historical service behavior)
    #[serde(default = "default_true")]
    pub empty_result_is_error: bool,

    /// Reject subscriptions where requestor and target are the same user
    #[serde(default)]
    pub forbid_self_subscription: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            empty_result_is_error: true,
            forbid_self_subscription: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// The engine configuration this CLI configuration selects.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            empty_result_is_error: self.empty_result_is_error,
            forbid_self_subscription: self.forbid_self_subscription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.db_path, "friendgraph.db");
        assert!(config.empty_result_is_error);
        assert!(!config.forbid_self_subscription);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db_path = \"/tmp/edges.db\"").unwrap();
        writeln!(file, "forbid_self_subscription = true").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.db_path, "/tmp/edges.db");
        assert!(config.empty_result_is_error, "missing key takes default");
        assert!(config.forbid_self_subscription);
    }

    #[test]
    fn test_from_file_missing() {
        let err = CliConfig::from_file("/nonexistent/friendgraph.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_engine_config_mapping() {
        let config = CliConfig {
            empty_result_is_error: false,
            ..CliConfig::default()
        };
        assert!(!config.engine_config().empty_result_is_error);
    }
}
