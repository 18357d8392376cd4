//! HTTP client with static storefront headers and cookies.
//!
//! This module provides a wrapped HTTP client that adds:
//! - A fixed user agent
//! - Age-gate cookies sent with every request
//! - A per-request deadline
//! - Request/response tracing

use chrono::NaiveDate;
use reqwest::{
    Client, Response,
    header::{self, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::HttpError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// User agent sent by the scraper.
pub const DEFAULT_USER_AGENT: &str = "SteamScraper v1.0";

// ============================================================================
// Age Gate
// ============================================================================

/// Cookies that satisfy the storefront's age interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeGate {
    /// Birth date claimed to the storefront.
    pub birth_date: NaiveDate,
    /// Opt into mature content pages.
    pub mature_content: bool,
}

impl Default for AgeGate {
    fn default() -> Self {
        Self {
            birth_date: NaiveDate::from_ymd_opt(1995, 1, 1).unwrap_or_default(),
            mature_content: true,
        }
    }
}

impl AgeGate {
    /// Unix timestamp of the birth date at midnight UTC.
    pub fn birthtime(&self) -> i64 {
        self.birth_date
            .and_hms_opt(0, 0, 0)
            .map_or(0, |dt| dt.and_utc().timestamp())
    }

    /// Birth date in the storefront's `1-January-1995` form.
    pub fn last_age_check(&self) -> String {
        self.birth_date.format("%-d-%B-%Y").to_string()
    }

    /// The `Cookie` header value.
    pub fn cookie_header(&self) -> String {
        format!(
            "birthtime={}; lastagecheckage={}; wants_mature_content={}",
            self.birthtime(),
            self.last_age_check(),
            u8::from(self.mature_content)
        )
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper carrying the shared static headers.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a client with the default user agent, age gate and timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::builder().build()
    }

    /// Creates a builder for customizing the client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Performs a GET request.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get(&self, url: &str) -> Result<Response, reqwest::Error> {
        debug!("GET request");

        let response = self.inner.get(url).send().await?;
        debug!(status = %response.status(), "Response received");
        Ok(response)
    }

    /// Performs a GET request with query parameters.
    #[instrument(skip(self, query), fields(url = %url))]
    pub async fn get_with_query(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        debug!(?query, "GET request with query");

        let response = self.inner.get(url).query(query).send().await?;
        debug!(status = %response.status(), "Response received");
        Ok(response)
    }
}

// ============================================================================
// HTTP Client Builder
// ============================================================================

/// Builder for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    user_agent: String,
    timeout: Duration,
    age_gate: Option<AgeGate>,
}

impl HttpClientBuilder {
    /// Creates a builder with the scraper defaults.
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            age_gate: Some(AgeGate::default()),
        }
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the per-request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the age-gate cookies; `None` sends no cookies.
    pub fn age_gate(mut self, age_gate: Option<AgeGate>) -> Self {
        self.age_gate = age_gate;
        self
    }

    /// Builds the default header map.
    fn default_headers(&self) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        if let Some(gate) = &self.age_gate {
            let cookie = HeaderValue::from_str(&gate.cookie_header())
                .map_err(|e| HttpError::InvalidHeader(format!("cookie: {e}")))?;
            headers.insert(header::COOKIE, cookie);
        }
        Ok(headers)
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::InvalidHeader` for a user agent that is not a
    /// valid header value, or `HttpError::Build` if reqwest rejects the
    /// configuration.
    pub fn build(self) -> Result<HttpClient, HttpError> {
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| HttpError::InvalidHeader(format!("user agent: {e}")))?;

        let inner = Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent)
            .default_headers(self.default_headers()?)
            .build()?;

        Ok(HttpClient { inner })
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_gate_cookie_header() {
        let gate = AgeGate::default();
        assert_eq!(gate.birthtime(), 788_918_400);
        assert_eq!(gate.last_age_check(), "1-January-1995");
        assert_eq!(
            gate.cookie_header(),
            "birthtime=788918400; lastagecheckage=1-January-1995; wants_mature_content=1"
        );
    }

    #[test]
    fn test_age_gate_without_mature_content() {
        let gate = AgeGate {
            mature_content: false,
            ..AgeGate::default()
        };
        assert!(gate.cookie_header().ends_with("wants_mature_content=0"));
    }

    #[test]
    fn test_builder_rejects_bad_user_agent() {
        let result = HttpClient::builder().user_agent("bad\nagent").build();
        assert!(matches!(result, Err(HttpError::InvalidHeader(_))));
    }

    #[test]
    fn test_default_headers_carry_cookie() {
        let headers = HttpClientBuilder::new().default_headers().unwrap();
        assert!(headers.contains_key(header::COOKIE));

        let headers = HttpClientBuilder::new().age_gate(None).default_headers().unwrap();
        assert!(headers.is_empty());
    }
}
