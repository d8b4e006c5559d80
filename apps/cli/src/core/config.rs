use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::CliError;
use risk_engine::domain::batch::{DEFAULT_BATCH_SIZE, DEFAULT_SEED};
use risk_engine::domain::timeline::{DEFAULT_END_YEAR, DEFAULT_NOISE_STD_DEV, DEFAULT_START_YEAR};

/// Run defaults. Coefficients and presets are fixed; only how the
/// simulations are driven can be configured.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskConfig {
    pub timeline: TimelineConfig,
    pub batch: BatchConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    pub start_year: i32,
    pub end_year: i32,
    pub noise_std_dev: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            noise_std_dev: DEFAULT_NOISE_STD_DEV,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub count: usize,
    pub seed: u64,
    /// How many samples to print.
    pub show: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BATCH_SIZE,
            seed: DEFAULT_SEED,
            show: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

impl RiskConfig {
    pub fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }
}

pub struct ConfigStore {
    path: Option<PathBuf>,
    explicit: bool,
}

impl ConfigStore {
    /// Use `explicit` when given, else `~/.conflict-risk/config.toml`.
    pub fn new(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => Self {
                path: Some(path),
                explicit: true,
            },
            None => Self {
                path: dirs::home_dir().map(|home| home.join(".conflict-risk").join("config.toml")),
                explicit: false,
            },
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the config. A missing default file yields the built-in defaults;
    /// a missing explicit file is an error.
    pub fn load(&self) -> Result<RiskConfig, CliError> {
        let Some(path) = &self.path else {
            tracing::debug!("no home directory, using built-in defaults");
            return Ok(RiskConfig::default());
        };

        if !path.exists() {
            if self.explicit {
                return Err(CliError::ConfigNotFound(path.clone()));
            }
            tracing::debug!(path = %path.display(), "no config file, using built-in defaults");
            return Ok(RiskConfig::default());
        }

        let content = fs::read_to_string(path)?;
        let config = RiskConfig::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let config = RiskConfig::parse(
            r#"
            [timeline]
            start_year = 2030
            end_year = 2040
            noise_std_dev = 0.05

            [batch]
            count = 10
            seed = 7
            show = 3

            [export]
            out_dir = "reports"
            "#,
        )
        .unwrap();

        assert_eq!(config.timeline.start_year, 2030);
        assert_eq!(config.timeline.end_year, 2040);
        assert_eq!(config.timeline.noise_std_dev, 0.05);
        assert_eq!(config.batch.count, 10);
        assert_eq!(config.batch.seed, 7);
        assert_eq!(config.batch.show, 3);
        assert_eq!(config.export.out_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = RiskConfig::parse("[batch]\nseed = 1\n").unwrap();
        assert_eq!(config.batch.seed, 1);
        assert_eq!(config.batch.count, 50);
        assert_eq!(config.timeline, TimelineConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(RiskConfig::parse("").unwrap(), RiskConfig::default());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = RiskConfig::parse("[model]\nintercept = 2.0\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        let err = RiskConfig::parse("[batch]\nsize = 2\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[timeline]\nend_year = 2030\n").unwrap();

        let config = ConfigStore::new(Some(path)).load().unwrap();
        assert_eq!(config.timeline.end_year, 2030);
        assert_eq!(config.timeline.start_year, 2025);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(Some(dir.path().join("nope.toml")));
        assert!(matches!(store.load(), Err(CliError::ConfigNotFound(_))));
    }
}
