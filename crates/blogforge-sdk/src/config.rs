//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Configuration for a [`crate::BlogClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway.
    pub base_url: Url,
    /// Total request timeout.
    ///
    /// Slightly above the gateway's own 120 s upstream bound so the
    /// server-side error arrives before the client gives up.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| Error::configuration(format!("Invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(130),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("blogforge-sdk/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
