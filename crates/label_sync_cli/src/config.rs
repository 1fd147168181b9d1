//! Configuration management for the label-sync CLI.
//!
//! Settings are read from an optional TOML file. When no file is named on
//! the command line, `label-sync.toml` in the current directory is used if
//! it exists and built-in defaults otherwise.

use std::{
    fs,
    path::{Path, PathBuf},
};

use github_client::DEFAULT_API_BASE_URL;
use label_sync_core::{StateStore, DEFAULT_LABEL_LIST_FILE, DEFAULT_REPO_LIST_FILE};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "label-sync.toml";

/// Organization bare repository names belong to when nothing else is configured
pub const DEFAULT_ORGANIZATION: &str = "equinor";

/// Environment variable that overrides the configured organization
pub const ORGANIZATION_ENV_VAR: &str = "LABEL_SYNC_ORG";

/// Environment variable holding the personal access token
pub const TOKEN_ENV_VAR: &str = "PAT";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the label-sync CLI application.
///
/// # Example TOML Configuration
///
/// ```toml
/// organization = "my-org"
/// api_base_url = "https://api.github.com"
/// state_dir = "./state"
/// repo_list_file = "repo_list.json"
/// label_list_file = "label_list.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Owner of repositories tracked by bare name
    #[serde(default = "AppConfig::default_organization")]
    pub organization: String,

    /// Root of the GitHub REST API
    #[serde(default = "AppConfig::default_api_base_url")]
    pub api_base_url: String,

    /// Directory holding the two state files
    #[serde(default = "AppConfig::default_state_dir")]
    pub state_dir: PathBuf,

    #[serde(default = "AppConfig::default_repo_list_file")]
    pub repo_list_file: String,

    #[serde(default = "AppConfig::default_label_list_file")]
    pub label_list_file: String,
}

impl AppConfig {
    fn default_organization() -> String {
        DEFAULT_ORGANIZATION.to_string()
    }

    fn default_api_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    fn default_state_dir() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_repo_list_file() -> String {
        DEFAULT_REPO_LIST_FILE.to_string()
    }

    fn default_label_list_file() -> String {
        DEFAULT_LABEL_LIST_FILE.to_string()
    }

    /// Loads configuration from a TOML file at the specified path.
    ///
    /// Fields missing from the file take their default values.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or
    /// is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration the command line points at.
    ///
    /// An explicit `config_path` must exist. Without one, the default file is
    /// loaded when present and the built-in defaults are used when it is not.
    pub fn resolve(config_path: Option<&str>) -> Result<Self, Error> {
        let path = get_config_path(config_path);
        if config_path.is_none() && !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let config = Self::load(&path)?;
        info!(path = ?path, organization = config.organization, "Loaded configuration");
        Ok(config)
    }

    /// Replaces the organization when an override is set and not empty.
    pub fn with_organization_override(mut self, organization: Option<String>) -> Self {
        if let Some(organization) = organization.filter(|o| !o.is_empty()) {
            debug!(organization = organization, "Organization overridden from the environment");
            self.organization = organization;
        }
        self
    }

    /// The state store described by this configuration.
    pub fn state_store(&self) -> StateStore {
        StateStore::with_file_names(&self.state_dir, &self.repo_list_file, &self.label_list_file)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization: Self::default_organization(),
            api_base_url: Self::default_api_base_url(),
            state_dir: Self::default_state_dir(),
            repo_list_file: Self::default_repo_list_file(),
            label_list_file: Self::default_label_list_file(),
        }
    }
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./label-sync.toml` in the current directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}

/// Wraps the raw token value read from [`TOKEN_ENV_VAR`].
///
/// # Errors
///
/// Returns `Error::MissingToken` if the value is absent or blank.
pub fn token_from(value: Option<String>) -> Result<SecretString, Error> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(SecretString::from(token)),
        _ => Err(Error::MissingToken(TOKEN_ENV_VAR)),
    }
}
