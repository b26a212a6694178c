//! Typed network creation options

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Network driver types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkDriver {
    /// Bridge network (default)
    #[default]
    Bridge,
    /// Macvlan network
    Macvlan,
    /// IPvlan network
    Ipvlan,
}

impl std::fmt::Display for NetworkDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkDriver::Bridge => write!(f, "bridge"),
            NetworkDriver::Macvlan => write!(f, "macvlan"),
            NetworkDriver::Ipvlan => write!(f, "ipvlan"),
        }
    }
}

/// Subnet of a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    /// Subnet in CIDR format
    pub subnet: String,
    /// Gateway address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

/// Body of a network create request.
///
/// Only fields that were set are sent; the service fills in the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkCreateOptions {
    /// Network driver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<NetworkDriver>,
    /// Subnets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,
    /// Driver options
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
    /// Network labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Internal network (no external access)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<bool>,
    /// Enable IPv6
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_enabled: Option<bool>,
    /// Enable DNS on the network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_enabled: Option<bool>,
}

impl NetworkCreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set network driver
    pub fn driver(mut self, driver: NetworkDriver) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Add a subnet
    pub fn subnet(mut self, subnet: &str) -> Self {
        self.subnets.push(Subnet {
            subnet: subnet.to_string(),
            gateway: None,
        });
        self
    }

    /// Set gateway of the last added subnet
    pub fn gateway(mut self, gateway: &str) -> Self {
        if let Some(subnet) = self.subnets.last_mut() {
            subnet.gateway = Some(gateway.to_string());
        }
        self
    }

    /// Add driver option
    pub fn option(mut self, key: &str, value: &str) -> Self {
        self.options.insert(key.to_string(), value.to_string());
        self
    }

    /// Add label
    pub fn label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    /// Set internal
    pub fn internal(mut self, internal: bool) -> Self {
        self.internal = Some(internal);
        self
    }

    /// Set IPv6
    pub fn ipv6(mut self, enabled: bool) -> Self {
        self.ipv6_enabled = Some(enabled);
        self
    }

    /// Set DNS
    pub fn dns(mut self, enabled: bool) -> Self {
        self.dns_enabled = Some(enabled);
        self
    }
}
