//! Optional configuration file support.
//!
//! Settings load once from `.nosgrade.toml` in the working directory; a
//! missing file means defaults, and an unreadable or invalid file logs a
//! warning and falls back to defaults rather than failing the process.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::tiers::TierThresholds;

pub const CONFIG_FILE_NAME: &str = ".nosgrade.toml";

/// Export metadata settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Tool name written into export headers
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

fn default_tool_name() -> String {
    "Newcastle-Ottawa Scale Assessment Tool".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tool_name: default_tool_name(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NosgradeConfig {
    #[serde(default)]
    pub tiers: TierThresholds,

    #[serde(default)]
    pub export: ExportConfig,
}

static CONFIG: OnceLock<NosgradeConfig> = OnceLock::new();

/// Load-once accessor; reads the config file from the working directory on
/// first use.
pub fn get() -> &'static NosgradeConfig {
    CONFIG.get_or_init(|| load_from_dir(Path::new(".")))
}

/// Load configuration from a directory, falling back to defaults
pub fn load_from_dir(dir: &Path) -> NosgradeConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read config file {}: {}", path.display(), e);
            }
            return NosgradeConfig::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!(
                "invalid config file {}: {}. Using defaults.",
                path.display(),
                e
            );
            NosgradeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_dir(dir.path());
        assert_eq!(config, NosgradeConfig::default());
        assert_eq!(config.tiers.cohort_good_min, 7);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[export]\ntool_name = \"Review Toolkit\"\n\n[tiers]\ncohort_good_min = 8\n",
        )
        .unwrap();

        let config = load_from_dir(dir.path());
        assert_eq!(config.export.tool_name, "Review Toolkit");
        assert_eq!(config.tiers.cohort_good_min, 8);
        assert_eq!(config.tiers.cohort_fair_min, 5);
        assert_eq!(config.tiers.cross_sectional_good_min, 6);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "tiers = \"not a table\"").unwrap();

        let config = load_from_dir(dir.path());
        assert_eq!(config, NosgradeConfig::default());
    }
}
