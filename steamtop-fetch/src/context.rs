//! Fetch context shared by every source.
//!
//! The context bundles the HTTP client (with its static headers and
//! cookies, computed once) and the endpoint settings. It is built once and
//! handed to sources by `Arc`.

use std::sync::Arc;
use std::time::Duration;

use steamtop_core::AppId;
use url::Url;

use crate::error::HttpError;
use crate::http::{AgeGate, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpClient};

/// SteamSpy ranking of the top 100 titles over the last two weeks.
pub const DEFAULT_TOP_LIST_URL: &str = "https://steamspy.com/api.php?request=top100in2weeks";

/// Steam storefront base URL.
pub const DEFAULT_STORE_BASE_URL: &str = "https://store.steampowered.com";

/// Storefront language requested for every page.
pub const DEFAULT_LANGUAGE: &str = "english";

// ============================================================================
// Fetch Settings
// ============================================================================

/// Endpoint and client settings for fetch operations.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    /// Aggregation endpoint returning the ranked id map.
    pub top_list_url: String,
    /// Storefront base; pages live at `{base}/app/{id}`.
    pub store_base_url: String,
    /// Value of the `l` query parameter.
    pub language: String,
    /// User agent for every request.
    pub user_agent: String,
    /// Per-request deadline.
    pub timeout: Duration,
    /// Age-gate cookies.
    pub age_gate: AgeGate,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            top_list_url: DEFAULT_TOP_LIST_URL.to_string(),
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            age_gate: AgeGate::default(),
        }
    }
}

impl FetchSettings {
    /// Sets a custom timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the top-list endpoint.
    pub fn with_top_list_url(mut self, url: impl Into<String>) -> Self {
        self.top_list_url = url.into();
        self
    }

    /// Sets the storefront base URL.
    pub fn with_store_base_url(mut self, url: impl Into<String>) -> Self {
        self.store_base_url = url.into();
        self
    }

    /// Sets the storefront language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Storefront page URL for an app.
    pub fn app_url(&self, app_id: AppId) -> String {
        format!("{}/app/{app_id}", self.store_base_url.trim_end_matches('/'))
    }

    /// Checks that both endpoint URLs parse.
    pub fn validate(&self) -> Result<(), HttpError> {
        for url in [&self.top_list_url, &self.store_base_url] {
            Url::parse(url).map_err(|e| HttpError::InvalidUrl {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context provided to sources: the shared HTTP client and settings.
#[derive(Debug, Clone)]
pub struct FetchContext {
    /// HTTP client with the static headers.
    pub http: Arc<HttpClient>,
    /// Fetch settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a context with default settings.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_settings(FetchSettings::default())
    }

    /// Creates a context, building the client from the settings.
    pub fn with_settings(settings: FetchSettings) -> Result<Self, HttpError> {
        Self::builder().settings(settings).build()
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for constructing a [`FetchContext`].
#[derive(Debug, Default)]
pub struct FetchContextBuilder {
    settings: FetchSettings,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all fetch settings.
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// Fails if a configured URL does not parse or the client cannot be
    /// built.
    pub fn build(self) -> Result<FetchContext, HttpError> {
        self.settings.validate()?;

        let http = Arc::new(
            HttpClient::builder()
                .user_agent(self.settings.user_agent.clone())
                .timeout(self.settings.timeout)
                .age_gate(Some(self.settings.age_gate))
                .build()?,
        );

        Ok(FetchContext {
            http,
            settings: self.settings,
        })
    }
}
