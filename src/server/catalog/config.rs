use std::time::Duration;

/// Base URL of the public Dragon Ball character catalog.
pub static DEFAULT_CATALOG_URL: &str = "https://dragonball-api.com/api";

/// Default timeout applied to every catalog request.
pub const DEFAULT_CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`HttpCatalogClient`](super::HttpCatalogClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL the endpoint paths are appended to, e.g. `https://dragonball-api.com/api`
    pub base_url: String,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
    /// Timeout for a whole request, including reading the body
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Creates a configuration for the catalog at `base_url` with default user agent and timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: default_user_agent(),
            timeout: DEFAULT_CATALOG_TIMEOUT,
        }
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

/// `capsule/<version>`
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
