use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::RetryPolicy;
use crate::api::retry::{DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS};
use crate::documents::SampleCatalog;
use crate::paths;

/// Backend URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend URL.
pub const API_URL_ENV: &str = "API_URL";

/// The `[backend]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the question-answering backend.
    pub url: Option<String>,
}

/// The `[retry]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per request while the backend is unreachable.
    pub max_attempts: Option<u32>,
    /// Seconds to wait between attempts.
    pub backoff_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/docqa/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    /// Sample documents keyed by label. Empty means the bundled defaults.
    #[serde(default)]
    pub samples: BTreeMap<String, String>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The backend base URL.
    pub api_url: String,
    /// Retry behaviour for unreachable backends.
    pub retry: RetryPolicy,
    /// Sample documents offered to the user.
    pub samples: SampleCatalog,
}

/// Options for resolving configuration.
///
/// Contains CLI (or environment) overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Backend URL override.
    pub api_url: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns an error if the backend URL is blank or the retry settings are invalid.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let api_url = options
        .api_url
        .as_ref()
        .or(config_file.backend.url.as_ref())
        .map_or(DEFAULT_API_URL, String::as_str)
        .trim()
        .to_string();

    if api_url.is_empty() {
        bail!(
            "Backend URL is empty\n\n\
             Please provide it via:\n  \
             - CLI option: docqa --api-url <url>\n  \
             - Environment: {API_URL_ENV}=<url>\n  \
             - Config file: [backend] url in ~/.config/docqa/config.toml"
        );
    }

    let max_attempts = config_file
        .retry
        .max_attempts
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);
    if max_attempts == 0 {
        bail!("Invalid configuration: 'retry.max_attempts' must be at least 1");
    }

    let backoff = config_file
        .retry
        .backoff_secs
        .map_or(DEFAULT_BACKOFF, Duration::from_secs);

    Ok(ResolvedConfig {
        api_url,
        retry: RetryPolicy::new(max_attempts, backoff),
        samples: SampleCatalog::from_config(&config_file.samples),
    })
}

/// Manages loading configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/docqa/config.toml`
    /// or `~/.config/docqa/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, or the defaults if it does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            log::debug!(
                "No config file at {}, using defaults",
                self.config_path.display()
            );
            Ok(ConfigFile::default())
        }
    }
}
