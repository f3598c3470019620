//! Public configuration for the API client.

use std::time::Duration;

use url::Url;

use crate::error::ApiResult;

/// Configuration for the survey-platform API client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use opine_api::ApiConfig;
/// use std::time::Duration;
///
/// let config = ApiConfig::new()
///     .with_base_url("https://api.example.com/api")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the survey-platform API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5050/api".to_string(),
            user_agent: concat!("opine/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `http://localhost:5050/api`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// The base URL's path is preserved: with the default base,
    /// `endpoint("login")` resolves to `http://localhost:5050/api/login`.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)?.join(path.trim_start_matches('/'))?;
        Ok(url)
    }
}
