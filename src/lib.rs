//! Rune network client
//!
//! Thin client for the network endpoints of a Docker/Podman-compatible
//! container service. Each operation shapes one HTTP request, sends it
//! through an [`api::ApiHandle`] and hands back the decoded JSON response:
//!
//! - create a network
//! - inspect a network
//! - list networks, optionally filtered
//! - remove a network
//! - prune unused networks

pub mod api;
pub mod error;
pub mod network;

pub use api::{ApiConfig, ApiHandle, HttpApi};
pub use error::{ApiError, NetworkError, Result};
pub use network::{Filters, NetworkClient, NetworkCreateOptions, NetworkDriver, NetworkSpec};
