//! Client configuration options.

use std::time::Duration;

/// Configuration for the PayPal client.
///
/// # Example
///
/// ```
/// use paypal_rest::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-shop/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout applied to every HTTP call, including the token
    /// grant. This is the only cancellation surface the crate has.
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Override for the API base URL. When unset, the URL follows the
    /// credentials' environment. Mainly useful for pointing the client
    /// at a mock server in tests.
    pub base_url: Option<String>,
    /// Seconds before nominal expiry at which a cached token is
    /// already treated as stale and refreshed
    pub refresh_buffer_secs: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("paypal-rest/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: None,
            refresh_buffer_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API base URL (token endpoint included).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the buffer time before expiry at which tokens are refreshed.
    pub fn with_refresh_buffer(mut self, secs: i64) -> Self {
        self.refresh_buffer_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.refresh_buffer_secs, 60);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("shop/2.0")
            .with_base_url("http://localhost:8080")
            .with_refresh_buffer(0);

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "shop/2.0");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.refresh_buffer_secs, 0);
    }
}
