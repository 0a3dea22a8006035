//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.issuemill.toml` in the scanned root
//! 4. `~/.config/issuemill/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::env::Env;
use crate::models::ProviderName;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub tracker: TrackerConfig,
    pub scan: ScanConfig,
}

/// LLM provider configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub name: ProviderName,
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: ProviderName::DeepSeek,
            model: "deepseek-chat".to_string(),
            base_url: None,
            api_key: None,
        }
    }
}

/// Issue-tracker configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// Default team name; prompted interactively at runtime when absent.
    pub team: Option<String>,
}

impl std::fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("team", &self.team)
            .finish()
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::constants::TRACKER_URL.to_string(),
            api_key: None,
            team: None,
        }
    }
}

/// Scanner exclusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
    pub exclude_types: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: [
                ".git",
                ".idea",
                ".venv",
                ".ruff_cache",
                ".pytest_cache",
                "__pycache__",
                "node_modules",
                "target",
                "migrations",
                "data",
                "docs",
            ]
            .map(String::from)
            .to_vec(),
            exclude_files: [".env", ".DS_Store", ".gitignore"].map(String::from).to_vec(),
            exclude_types: [".pyc", ".pyo", ".pyd", ".lock"].map(String::from).to_vec(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, root-local config, then applies
    /// environment variable overrides.
    pub fn load(scan_root: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: root-local config
        if let Some(root) = scan_root {
            let local_path = root.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        // Provider settings
        let default_provider = ProviderConfig::default();
        if other.provider.name != default_provider.name {
            self.provider.name = other.provider.name;
        }
        if other.provider.model != default_provider.model {
            self.provider.model = other.provider.model;
        }
        if other.provider.base_url.is_some() {
            self.provider.base_url = other.provider.base_url;
        }
        if other.provider.api_key.is_some() {
            self.provider.api_key = other.provider.api_key;
        }

        // Tracker settings
        if other.tracker.endpoint != TrackerConfig::default().endpoint {
            self.tracker.endpoint = other.tracker.endpoint;
        }
        if other.tracker.api_key.is_some() {
            self.tracker.api_key = other.tracker.api_key;
        }
        if other.tracker.team.is_some() {
            self.tracker.team = other.tracker.team;
        }

        // Scan settings
        let default_scan = ScanConfig::default();
        if other.scan.exclude_dirs != default_scan.exclude_dirs {
            self.scan.exclude_dirs = other.scan.exclude_dirs;
        }
        if other.scan.exclude_files != default_scan.exclude_files {
            self.scan.exclude_files = other.scan.exclude_files;
        }
        if other.scan.exclude_types != default_scan.exclude_types {
            self.scan.exclude_types = other.scan.exclude_types;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_PROVIDER) {
            if let Ok(name) = val.parse::<ProviderName>() {
                self.provider.name = name;
            } else {
                eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    crate::constants::ENV_PROVIDER
                );
            }
        }
        if let Ok(val) = env.var(crate::constants::ENV_MODEL) {
            self.provider.model = val;
        }
        if let Ok(val) = env.var(crate::constants::ENV_BASE_URL) {
            self.provider.base_url = Some(val);
        }

        // Provider-specific API key resolution
        let api_key = env
            .var(crate::constants::ENV_API_KEY)
            .or_else(|_| env.var(self.provider.name.api_key_env_var()))
            .ok();
        if api_key.is_some() {
            self.provider.api_key = api_key;
        }

        // Tracker credentials, with the Linear-native names as fallback
        let tracker_key = env
            .var(crate::constants::ENV_TRACKER_API_KEY)
            .or_else(|_| env.var(crate::constants::ENV_TRACKER_API_KEY_FALLBACK))
            .ok();
        if tracker_key.is_some() {
            self.tracker.api_key = tracker_key;
        }

        let team = env
            .var(crate::constants::ENV_TEAM)
            .or_else(|_| env.var(crate::constants::ENV_TEAM_FALLBACK))
            .ok();
        if team.is_some() {
            self.tracker.team = team;
        }
    }
}
