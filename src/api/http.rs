//! HTTP transport over reqwest

use super::{ApiConfig, ApiHandle, ApiRequest, ApiResponse};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

/// [`ApiHandle`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpApi {
    /// Endpoint configuration
    config: ApiConfig,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpApi {
    /// Create a new HTTP transport
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Create a transport configured from the environment
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Endpoint configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl ApiHandle for HttpApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.endpoint(&request.path);
        debug!("API request: {} {}", request.method, url);

        let mut builder = self.client.request(request.method.into(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let response = ApiResponse::new(status.as_u16(), body.to_vec());

        debug!("API response: {} {}", status, url);

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(response));
        }
        if !status.is_success() {
            return Err(ApiError::Status(response));
        }

        Ok(response)
    }
}
