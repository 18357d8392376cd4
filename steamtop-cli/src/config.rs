//! Configuration file loading.
//!
//! The configuration is a JSON document at
//! `<config dir>/steamtop/config.json` (or the path given with `--config`).
//! Every field has a default, so an absent file or a partial document is
//! fine:
//!
//! ```json
//! {
//!   "server": { "bind_address": "0.0.0.0:8000" },
//!   "fetch": { "language": "german", "timeout_secs": 30 },
//!   "query": { "default_concurrency": 10 },
//!   "log_level": "steamtop=debug,info"
//! }
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use steamtop_core::{CONCURRENCY_RANGE, DEFAULT_CONCURRENCY};
use steamtop_fetch::FetchSettings;
use steamtop_fetch::context::{DEFAULT_LANGUAGE, DEFAULT_STORE_BASE_URL, DEFAULT_TOP_LIST_URL};
use steamtop_fetch::http::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use thiserror::Error;
use tracing::debug;

/// Default port of the HTTP service.
pub const DEFAULT_PORT: u16 = 8000;

/// Default log filter when neither `--verbose` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "steamtop=info,warn";

// ============================================================================
// Errors
// ============================================================================

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A value is out of range or malformed.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// Sections
// ============================================================================

/// HTTP service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the service listens on.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

/// Upstream endpoints and request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Ranked top-list endpoint.
    pub top_list_url: String,
    /// Storefront base URL.
    pub store_base_url: String,
    /// Storefront language (`l` query parameter).
    pub language: String,
    /// User agent for every request.
    pub user_agent: String,
    /// Per-request deadline in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            top_list_url: DEFAULT_TOP_LIST_URL.to_string(),
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Defaults applied to games queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Concurrency used when a query does not name one.
    pub default_concurrency: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP service.
    pub server: ServerConfig,
    /// Upstream fetching.
    pub fetch: FetchConfig,
    /// Query defaults.
    pub query: QueryConfig,
    /// Log filter directive (`EnvFilter` syntax).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            fetch: FetchConfig::default(),
            query: QueryConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("steamtop").join("config.json"))
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. The default path is optional; when it
    /// is absent the defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Checks value ranges and URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !CONCURRENCY_RANGE.contains(&self.query.default_concurrency) {
            return Err(ConfigError::Invalid(format!(
                "query.default_concurrency must be between {} and {}, got {}",
                CONCURRENCY_RANGE.start(),
                CONCURRENCY_RANGE.end(),
                self.query.default_concurrency
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "fetch.timeout_secs must be positive".to_string(),
            ));
        }
        self.fetch_settings()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Converts the fetch section into client settings.
    pub fn fetch_settings(&self) -> FetchSettings {
        let mut settings = FetchSettings::default()
            .with_top_list_url(&self.fetch.top_list_url)
            .with_store_base_url(&self.fetch.store_base_url)
            .with_language(&self.fetch.language)
            .with_timeout(Duration::from_secs(self.fetch.timeout_secs));
        settings.user_agent.clone_from(&self.fetch.user_agent);
        settings
    }
}

// ============================================================================
// Tests
// ============================================================================
