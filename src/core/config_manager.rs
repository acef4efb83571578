// src/core/config_manager.rs
//! Layered client configuration: config.yaml, then environment, then CLI flags

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// No timeout when absent
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
    pub output_dir: PathBuf,
    /// JSON log file; logs go to stderr when unset
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: None,
            headers: BTreeMap::new(),
            output_dir: PathBuf::from("."),
            log_file: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ClientConfig,
    production: Option<ClientConfig>,
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub client: ClientConfig,
}

impl ConfigManager {
    /// Load configuration for the current environment.
    ///
    /// A missing default `config.yaml` falls back to built-in defaults; a
    /// missing file passed explicitly is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        let path = explicit_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if explicit_path.is_some() && !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        Self::load_with(&path, &environment, |key| std::env::var(key).ok())
    }

    /// Load from `path` for `environment`, reading overrides through `lookup`
    pub fn load_with(
        path: &Path,
        environment: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        info!("Loading configuration for environment: {}", environment);

        let mut client = if path.exists() {
            Self::load_from_file(path, environment)?
        } else {
            warn!(
                "{} not found, using built-in defaults",
                path.display()
            );
            ClientConfig::default()
        };

        Self::apply_env_overrides(&mut client, lookup)?;

        let manager = Self {
            environment: environment.to_string(),
            client,
        };
        manager.with_api_url(None)
    }

    fn get_environment() -> String {
        std::env::var("RESUME_PORTAL_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<ClientConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => file.production.unwrap_or(file.local),
            _ => file.local,
        })
    }

    fn apply_env_overrides(
        client: &mut ClientConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(url) = lookup("RESUME_API_URL") {
            client.api_base_url = url;
        }

        if let Some(timeout) = lookup("RESUME_API_TIMEOUT") {
            let seconds = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("RESUME_API_TIMEOUT must be a number of seconds"))?;
            client.timeout_seconds = Some(seconds);
        }

        Ok(())
    }

    /// Apply a CLI base-URL override and normalise the result
    pub fn with_api_url(mut self, api_url: Option<String>) -> Result<Self> {
        if let Some(url) = api_url {
            self.client.api_base_url = url;
        }

        let url = self.client.api_base_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!(
                "API base URL must start with http:// or https://, got: {}",
                self.client.api_base_url
            );
        }
        self.client.api_base_url = url.to_string();

        Ok(self)
    }

    /// Apply a CLI output-directory override
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.client.output_dir = dir;
        }
        self
    }
}
