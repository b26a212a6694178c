//! Network operations against the container service

use super::spec::{Filters, NetworkSpec};
use crate::api::{ApiHandle, ApiRequest, ApiResponse, HttpApi};
use crate::error::{NetworkError, Result};
use serde_json::Value;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for creating, inspecting, listing, removing and pruning networks
#[derive(Debug, Clone)]
pub struct NetworkClient<A = HttpApi> {
    api: A,
}

impl<A: ApiHandle> NetworkClient<A> {
    /// Create a new network client over an API handle
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying API handle
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Create a network
    pub async fn create(&self, name: &str, spec: impl Into<NetworkSpec>) -> Result<Value> {
        debug!("Creating network: {}", name);
        check_name(name)?;

        let spec: NetworkSpec = spec.into();
        let path = format!("/networks/create?name={}", self.api.quote(name));
        let request = ApiRequest::post(path)
            .header("content-type", JSON_CONTENT_TYPE)
            .body(spec.into_body());

        let response = self.api.send(request).await?;
        decode(&response)
    }

    /// Inspect a network
    pub async fn inspect(&self, name: &str) -> Result<Value> {
        debug!("Inspecting network: {}", name);
        check_name(name)?;

        let path = format!("/networks/{}/json", self.api.quote(name));
        let response = self
            .api
            .send(ApiRequest::get(path))
            .await
            .map_err(|e| NetworkError::from_lookup(name, e))?;
        decode(&response)
    }

    /// List networks, optionally narrowed by filters
    pub async fn list_networks(&self, filters: Option<&Filters>) -> Result<Value> {
        debug!("Listing networks");

        let mut request = ApiRequest::get("/networks/json");
        if let Some(filters) = filters.filter(|f| !f.is_empty()) {
            request = request.query("filter", filters.to_query_value());
        }

        let response = self.api.send(request).await?;
        decode(&response)
    }

    /// Remove a network. `force` is sent only when given, even if false.
    pub async fn remove(&self, name: &str, force: Option<bool>) -> Result<Value> {
        debug!("Removing network: {}", name);
        check_name(name)?;

        let path = format!("/networks/{}", self.api.quote(name));
        let mut request = ApiRequest::delete(path);
        if let Some(force) = force {
            request = request.query("force", force.to_string());
        }

        let response = self
            .api
            .send(request)
            .await
            .map_err(|e| NetworkError::from_lookup(name, e))?;
        decode(&response)
    }

    /// Prune unused networks
    pub async fn prune(&self) -> Result<Value> {
        debug!("Pruning networks");

        let request = ApiRequest::post("/networks/prune").header("content-type", JSON_CONTENT_TYPE);
        let response = self.api.send(request).await?;
        decode(&response)
    }
}

/// Dot segments are collapsed by URL parsing even when escaped, so they
/// would address a different endpoint.
fn check_name(name: &str) -> Result<()> {
    if matches!(name, "" | "." | "..") {
        return Err(NetworkError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn decode(response: &ApiResponse) -> Result<Value> {
    Ok(response.json()?)
}
