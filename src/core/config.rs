//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::inventory::CounterRetention;
use crate::core::tracker::DEFAULT_RANK_LIMIT;

/// Partbin configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of rows in `top-used` / `top-out` rankings
    pub top_n: Option<usize>,

    /// Keep usage counters of deleted SKUs as history
    pub keep_counters: Option<bool>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let global = Self::global_config_path();
        Self::load_with(global.as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from an explicit config file and environment lookup
    pub fn load_with(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Self {
        // 1. Built-in defaults (already in Default impl)
        let mut config = Config::default();

        // 2. Global user config (~/.config/partbin/config.yaml)
        if let Some(path) = path {
            if let Some(file_config) = Self::read_file(path) {
                config.merge(file_config);
            }
        }

        // 3. Environment variables
        config.apply_env(env);

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config file");
                return None;
            }
        };
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(top_n) = env("PARTBIN_TOP_N") {
            match top_n.trim().parse() {
                Ok(n) => self.top_n = Some(n),
                Err(_) => warn!(value = %top_n, "PARTBIN_TOP_N is not a number"),
            }
        }
        if let Some(keep) = env("PARTBIN_KEEP_COUNTERS") {
            match keep.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.keep_counters = Some(true),
                "0" | "false" | "no" => self.keep_counters = Some(false),
                _ => warn!(value = %keep, "PARTBIN_KEEP_COUNTERS is not a boolean"),
            }
        }
        if let Some(format) = env("PARTBIN_FORMAT") {
            self.default_format = Some(format);
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "partbin")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.top_n.is_some() {
            self.top_n = other.top_n;
        }
        if other.keep_counters.is_some() {
            self.keep_counters = other.keep_counters;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Ranking size, falling back to the built-in default
    pub fn top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_RANK_LIMIT)
    }

    pub fn counter_retention(&self) -> CounterRetention {
        match self.keep_counters {
            Some(true) => CounterRetention::Keep,
            _ => CounterRetention::Drop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_with(None, no_env);
        assert_eq!(config.top_n(), DEFAULT_RANK_LIMIT);
        assert_eq!(config.counter_retention(), CounterRetention::Drop);
        assert!(config.default_format.is_none());
    }

    #[test]
    fn test_file_then_env_precedence() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "top_n: 3\nkeep_counters: true\ndefault_format: json\n").unwrap();

        let config = Config::load_with(Some(&path), no_env);
        assert_eq!(config.top_n(), 3);
        assert_eq!(config.counter_retention(), CounterRetention::Keep);
        assert_eq!(config.default_format.as_deref(), Some("json"));

        let env: HashMap<&str, &str> = [("PARTBIN_TOP_N", "8"), ("PARTBIN_KEEP_COUNTERS", "no")]
            .into_iter()
            .collect();
        let config = Config::load_with(Some(&path), |key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.top_n(), 8);
        assert_eq!(config.counter_retention(), CounterRetention::Drop);
        assert_eq!(config.default_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "top_n: [not, a, number\n").unwrap();

        assert_eq!(Config::load_with(Some(&path), no_env), Config::default());
    }

    #[test]
    fn test_bad_env_value_keeps_file_value() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "top_n: 2\n").unwrap();

        let config = Config::load_with(Some(&path), |key| {
            (key == "PARTBIN_TOP_N").then(|| "many".to_string())
        });
        assert_eq!(config.top_n(), 2);
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_with(Some(&tmp.path().join("absent.yaml")), no_env);
        assert_eq!(config, Config::default());
    }
}
