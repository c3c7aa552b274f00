//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.roster.toml` in the working directory
//! 4. `~/.config/roster/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::models::Resource;

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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Remote service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the mock service, without a trailing slash.
    pub base_url: String,
    /// Collection the client is pointed at.
    pub resource: Resource,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            resource: Resource::default(),
        }
    }
}

impl ApiConfig {
    /// Full resource URL, e.g. `https://jsonplaceholder.typicode.com/users`.
    pub fn resource_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.resource.path())
    }
}

/// Terminal behaviour configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether the loading spinner is shown on interactive terminals.
    pub spinner: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { spinner: true }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then local config in `local_dir`, then
    /// applies environment variable overrides.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = local_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
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
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        let default_api = ApiConfig::default();
        if other.api.base_url != default_api.base_url {
            self.api.base_url = other.api.base_url;
        }
        if other.api.resource != default_api.resource {
            self.api.resource = other.api.resource;
        }

        // A disabled spinner overrides an enabled one.
        if !other.ui.spinner {
            self.ui.spinner = false;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_API_URL) {
            self.api.base_url = val;
        }
        if let Ok(val) = env.var(constants::ENV_RESOURCE) {
            if let Ok(resource) = val.parse::<Resource>() {
                self.api.resource = resource;
            } else {
                eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    constants::ENV_RESOURCE
                );
            }
        }
        if let Ok(val) = env.var(constants::ENV_SPINNER) {
            match val.to_lowercase().as_str() {
                "0" | "false" | "off" => self.ui.spinner = false,
                "1" | "true" | "on" => self.ui.spinner = true,
                other => eprintln!(
                    "Warning: ignoring invalid {} value: {other}",
                    constants::ENV_SPINNER
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(config.api.resource, Resource::Users);
        assert!(config.ui.spinner);
    }

    #[test]
    fn resource_url_joins_without_double_slash() {
        let api = ApiConfig {
            base_url: "http://localhost:9000/".to_string(),
            resource: Resource::Users,
        };
        assert_eq!(api.resource_url(), "http://localhost:9000/users");

        let api = ApiConfig {
            resource: Resource::Todos,
            ..api
        };
        assert_eq!(api.resource_url(), "http://localhost:9000/todos");
    }

    #[test]
    fn local_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILENAME),
            "[api]\nbase_url = \"http://localhost:9000\"\nresource = \"todos\"\n",
        )
        .unwrap();

        let env = Env::mock(Vec::<(&str, &str)>::new());
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.resource, Resource::Todos);
    }

    #[test]
    fn env_overrides_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILENAME),
            "[api]\nbase_url = \"http://localhost:9000\"\n",
        )
        .unwrap();

        let env = Env::mock([(constants::ENV_API_URL, "http://override:1234")]);
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.api.base_url, "http://override:1234");
    }

    #[test]
    fn env_can_disable_the_spinner() {
        let env = Env::mock([(constants::ENV_SPINNER, "0")]);
        let config = Config::load(None, &env).unwrap();
        assert!(!config.ui.spinner);
    }

    #[test]
    fn invalid_resource_env_is_ignored() {
        let env = Env::mock([(constants::ENV_RESOURCE, "accounts")]);
        let config = Config::load(None, &env).unwrap();
        assert_eq!(config.api.resource, Resource::Users);
    }

    #[test]
    fn parse_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILENAME), "api = nonsense").unwrap();

        let env = Env::mock(Vec::<(&str, &str)>::new());
        let result = Config::load(Some(dir.path()), &env);
        assert!(matches!(result, Err(ConfigError::ParseFile { .. })));
    }

    #[test]
    fn merge_keeps_spinner_disabled() {
        let mut base = Config::default();
        base.ui.spinner = false;
        base.merge(Config::default());
        assert!(!base.ui.spinner);
    }
}
