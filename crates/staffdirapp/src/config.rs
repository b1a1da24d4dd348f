use crate::error::{DirectoryError, Result};
use crate::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "staffdir.json";
const DEFAULT_MUTATION_DELAY_MS: u64 = 500;

pub const ENV_PAGE_SIZE: &str = "STAFFDIR_PAGE_SIZE";
pub const ENV_DELAY_MS: &str = "STAFFDIR_DELAY_MS";

/// Configuration for staffdir, stored in `staffdir.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DirectoryConfig {
    /// Employees per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated latency before an add/update completes
    #[serde(default = "default_mutation_delay_ms")]
    pub mutation_delay_ms: u64,

    /// JSON file with the initial employees; the built-in sample when unset
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_mutation_delay_ms() -> u64 {
    DEFAULT_MUTATION_DELAY_MS
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            mutation_delay_ms: DEFAULT_MUTATION_DELAY_MS,
            seed_file: None,
        }
    }
}

impl DirectoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DirectoryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Apply `STAFFDIR_*` overrides from the given lookup (normally `std::env::var`).
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw.trim().parse().map_err(|_| {
                DirectoryError::Config(format!("{} must be a positive integer", ENV_PAGE_SIZE))
            })?;
        }
        if let Some(raw) = lookup(ENV_DELAY_MS) {
            self.mutation_delay_ms = raw.trim().parse().map_err(|_| {
                DirectoryError::Config(format!("{} must be an integer", ENV_DELAY_MS))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn mutation_delay(&self) -> Duration {
        Duration::from_millis(self.mutation_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DirectoryError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.mutation_delay(), Duration::from_millis(500));
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = DirectoryConfig {
            page_size: 5,
            mutation_delay_ms: 0,
            seed_file: Some(PathBuf::from("people.json")),
        };
        config.save(dir.path().join("nested")).unwrap();

        let loaded = DirectoryConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 25}"#).unwrap();
        let loaded = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.mutation_delay_ms, 500);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 0}"#).unwrap();
        assert!(matches!(
            DirectoryConfig::load(dir.path()),
            Err(DirectoryError::Config(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let config = DirectoryConfig::default()
            .with_env_overrides(|key| match key {
                ENV_PAGE_SIZE => Some("20".to_string()),
                ENV_DELAY_MS => Some(" 0 ".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.mutation_delay_ms, 0);

        let bad = DirectoryConfig::default().with_env_overrides(|key| {
            (key == ENV_PAGE_SIZE).then(|| "lots".to_string())
        });
        assert!(matches!(bad, Err(DirectoryError::Config(_))));
    }
}
