//! API endpoint configuration

use crate::error::ApiError;
use std::time::Duration;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default libpod API version
pub const DEFAULT_API_VERSION: &str = "4.0.0";

/// Environment variable naming the service address
pub const CONTAINER_HOST_ENV: &str = "CONTAINER_HOST";

/// Where and how to reach the container service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Service base URL
    pub base_url: String,
    /// API version, prefixes paths with `/v{version}/libpod` when set
    pub api_version: Option<String>,
    /// Whole-request timeout
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: Some(DEFAULT_API_VERSION.to_string()),
            timeout: None,
            user_agent: format!("rune-network-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Read the service address from `CONTAINER_HOST`, falling back to defaults
    pub fn from_env() -> Result<Self, ApiError> {
        match std::env::var(CONTAINER_HOST_ENV) {
            Ok(host) if !host.trim().is_empty() => Self::with_host(&host),
            _ => Ok(Self::default()),
        }
    }

    /// Build a configuration from a host URL, accepting only http(s)
    pub fn with_host(host: &str) -> Result<Self, ApiError> {
        let host = host.trim();
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(ApiError::InvalidConfig(format!(
                "unsupported service address: {}",
                host
            )));
        }
        reqwest::Url::parse(host)
            .map_err(|e| ApiError::InvalidConfig(format!("{}: {}", host, e)))?;

        Ok(Self::new(host))
    }

    /// Set the API version
    pub fn api_version(mut self, version: Option<&str>) -> Self {
        self.api_version = version.map(str::to_string);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Full URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        match &self.api_version {
            Some(version) => format!("{}/v{}/libpod{}", base, version, path),
            None => format!("{}{}", base, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_version.as_deref(), Some(DEFAULT_API_VERSION));
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("rune-network-client/"));
    }

    #[test]
    fn test_endpoint() {
        let config = ApiConfig::new("http://127.0.0.1:8888/");
        assert_eq!(
            config.endpoint("/networks/json"),
            "http://127.0.0.1:8888/v4.0.0/libpod/networks/json"
        );

        let config = config.api_version(None);
        assert_eq!(
            config.endpoint("/networks/prune"),
            "http://127.0.0.1:8888/networks/prune"
        );
    }

    #[test]
    fn test_with_host() {
        let config = ApiConfig::with_host("https://podman.example.com:8443").unwrap();
        assert_eq!(config.base_url, "https://podman.example.com:8443");

        assert!(matches!(
            ApiConfig::with_host("unix:///run/podman/podman.sock"),
            Err(ApiError::InvalidConfig(_))
        ));
        assert!(matches!(
            ApiConfig::with_host("ssh://core@host/run/podman.sock"),
            Err(ApiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = ApiConfig::new("http://localhost:9000")
            .api_version(Some("5.0.0"))
            .timeout(Duration::from_secs(30))
            .user_agent("tests");

        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent, "tests");
        assert_eq!(
            config.endpoint("/networks/net1"),
            "http://localhost:9000/v5.0.0/libpod/networks/net1"
        );
    }
}
