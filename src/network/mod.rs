//! Network management module
//!
//! Client for the network endpoints of the container service.

pub mod client;
pub mod options;
pub mod spec;

pub use client::NetworkClient;
pub use options::{NetworkCreateOptions, NetworkDriver, Subnet};
pub use spec::{Filters, NetworkSpec};
