use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use tracing::{info, warn};

use crate::infra::carbon_api::{ApiConfig, CarbonApiError, DEFAULT_BASE_URL};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CarbonScore";
const APP_NAME: &str = "CarbonScore";

pub const BASE_URL_ENV: &str = "CARBON_SCORE_API_URL";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Environment,
    File(PathBuf),
    Default,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

impl AppConfig {
    /// Resolves the configuration: environment, then config file, then defaults.
    pub fn load() -> Self {
        let from_env = env::var(BASE_URL_ENV).ok();
        let (config, source) = resolve(from_env, config_file().as_deref());
        info!("Using scoring service at {} ({source:?})", config.api_base_url);
        config
    }

    pub fn api_config(&self) -> Result<ApiConfig, CarbonApiError> {
        ApiConfig::new(&self.api_base_url)
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

fn resolve(from_env: Option<String>, file: Option<&Path>) -> (AppConfig, ConfigSource) {
    if let Some(url) = from_env.filter(|value| !value.trim().is_empty()) {
        return (
            AppConfig {
                api_base_url: url.trim().to_string(),
            },
            ConfigSource::Environment,
        );
    }

    if let Some(path) = file.filter(|path| path.exists()) {
        match read_config_file(path) {
            Ok(config) => return (config, ConfigSource::File(path.to_path_buf())),
            Err(err) => warn!("Ignoring config file {}: {err}", path.display()),
        }
    }

    (AppConfig::default(), ConfigSource::Default)
}

pub fn read_config_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("carbon-score-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn environment_wins_over_file() {
        let path = scratch_file("env.json", r#"{"api_base_url":"http://file:1/api"}"#);
        let (config, source) = resolve(Some(" http://env:2/api ".to_string()), Some(&path));
        assert_eq!(config.api_base_url, "http://env:2/api");
        assert_eq!(source, ConfigSource::Environment);
    }

    #[test]
    fn file_is_used_when_environment_is_blank() {
        let path = scratch_file("file.json", r#"{"api_base_url":"http://scores.internal/api"}"#);
        let (config, source) = resolve(Some("  ".to_string()), Some(&path));
        assert_eq!(config.api_base_url, "http://scores.internal/api");
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn broken_or_missing_file_falls_back_to_default() {
        let path = scratch_file("broken.json", "{ not json");
        assert_eq!(resolve(None, Some(&path)).1, ConfigSource::Default);

        let missing = env::temp_dir().join("carbon-score-config-does-not-exist.json");
        let (config, source) = resolve(None, Some(&missing));
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Default);
    }

    #[test]
    fn empty_file_object_uses_default_url() {
        let path = scratch_file("empty.json", "{}");
        assert_eq!(read_config_file(&path).unwrap().api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn default_config_yields_default_api_config() {
        assert_eq!(AppConfig::default().api_config().unwrap(), ApiConfig::default());
    }
}
