//! API transport
//!
//! The [`ApiHandle`] trait is the seam between request shaping and the wire.
//! [`HttpApi`] talks to a real service; tests plug in their own handle.

pub mod config;
pub mod http;

pub use config::ApiConfig;
pub use http::HttpApi;

use crate::error::ApiError;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::sync::Arc;

/// Bytes escaped in a path segment: everything but RFC 3986 unreserved
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-escape a value for use inside a URL path or query string
pub fn quote(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single request against the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, may carry a pre-escaped query string
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Add a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value, ignoring case of the name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A fully read response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Raw response body
    pub fn read(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, for messages
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport used by the clients to reach the service.
///
/// Implementations must return [`ApiError::NotFound`] for HTTP 404 and
/// [`ApiError::Status`] for any other non-success status.
#[async_trait]
pub trait ApiHandle: Send + Sync {
    /// Send a request and read the whole response
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;

    /// Escape a value for inclusion in a path
    fn quote(&self, segment: &str) -> String {
        quote(segment)
    }
}

#[async_trait]
impl<T: ApiHandle + ?Sized> ApiHandle for Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }

    fn quote(&self, segment: &str) -> String {
        (**self).quote(segment)
    }
}

#[async_trait]
impl<T: ApiHandle + ?Sized> ApiHandle for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }

    fn quote(&self, segment: &str) -> String {
        (**self).quote(segment)
    }
}
