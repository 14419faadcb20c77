/*
[INPUT]:  Optional YAML config file, TASK_APP_* environment variables
[OUTPUT]: Validated application configuration
[POS]:    Configuration layer - startup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use task_app_adapter::{ClientConfig, TaskAppClient};

use crate::theme::ThemeMode;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "task-app.yaml";
/// Prefix for environment overrides, e.g. `TASK_APP_API__BASE_URL`
pub const ENV_PREFIX: &str = "TASK_APP";

const SESSION_DIR_NAME: &str = "task-app";

/// Top-level configuration for the task client
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the task API
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Session marker settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the session marker; defaults to the user data dir
    pub dir: Option<PathBuf>,
    /// Skip the login screen when a marker is present
    pub restore_on_start: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeMode,
    /// Prefilled into the login form
    pub default_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Enables the daily rolling file log when set
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `task-app.yaml` in the working
    /// directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, env_source())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Yaml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false),
        };
        let config: Self = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file without environment overrides
    #[cfg(test)]
    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be greater than zero");
        }
        if self.api.connect_timeout_secs == 0 {
            bail!("api.connect_timeout_secs must be greater than zero");
        }
        if self
            .ui
            .default_email
            .as_deref()
            .is_some_and(|email| email.trim().is_empty())
        {
            bail!("ui.default_email must not be blank when set");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.api.timeout_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }

    /// Build the HTTP client, rejecting malformed base URLs
    pub fn build_client(&self) -> Result<TaskAppClient> {
        TaskAppClient::with_config(self.client_config(), &self.api.base_url)
            .with_context(|| format!("invalid api.base_url {}", self.api.base_url))
    }

    /// Directory for the session marker
    pub fn session_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.session.dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(SESSION_DIR_NAME))
            .context("no user data directory; set session.dir")
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_yaml(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("task-app-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(!config.session.restore_on_start);
        assert_eq!(config.ui.theme, ThemeMode::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let path = temp_yaml("api:\n  base_url: http://tasks.local:8080\nui:\n  theme: light\n");
        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "http://tasks.local:8080");
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.ui.theme, ThemeMode::Light);
    }

    #[test]
    fn test_env_overrides_file() {
        let path = temp_yaml("api:\n  base_url: http://from-file:1\n");
        let env = env_with(&[
            ("TASK_APP_API__BASE_URL", "http://from-env:2"),
            ("TASK_APP_SESSION__RESTORE_ON_START", "true"),
        ]);
        let config = AppConfig::load_with_env(Some(&path), env).unwrap();
        assert_eq!(config.api.base_url, "http://from-env:2");
        assert!(config.session.restore_on_start);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let missing = std::env::temp_dir().join("task-app-definitely-missing.yaml");
        assert!(AppConfig::load_with_env(Some(&missing), env_with(&[])).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_client_rejects_bad_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "ftp://nope".to_string();
        assert!(config.build_client().is_err());
    }

    #[test]
    fn test_session_dir_override() {
        let mut config = AppConfig::default();
        config.session.dir = Some(PathBuf::from("/tmp/task-app-test"));
        assert_eq!(config.session_dir().unwrap(), PathBuf::from("/tmp/task-app-test"));
    }
}
