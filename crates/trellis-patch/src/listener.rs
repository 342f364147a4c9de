//! Listener runtime context supplied by the configuration pipeline.

use serde::{Deserialize, Serialize};

/// Role the proxy plays in the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProxyRole {
    /// Sidecar attached to a workload; sees both inbound and outbound traffic.
    Sidecar,
    /// Standalone gateway at the mesh edge.
    Gateway,
}

/// Direction of the traffic a listener handles, relative to the proxy.
///
/// Only meaningful for sidecars; gateway listeners have no inbound/outbound
/// split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrafficDirection {
    Inbound,
    Outbound,
}

/// Application protocol the listener was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListenerProtocol {
    Http,
    Tcp,
    /// Protocol is sniffed at runtime rather than declared.
    #[default]
    Auto,
}

/// Service port a listener is bound for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Port {
    pub number: u16,
    /// Service port name, e.g. `"http-foo"`. Conventionally protocol-prefixed.
    pub name: String,
}

/// Runtime context of a listener being configured.
///
/// Built by the listener generation pipeline and handed to
/// [`listener_match`](crate::matcher::listener_match) read-only; nothing in
/// this crate constructs or mutates one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListenerContext {
    pub role: ProxyRole,
    pub direction: TrafficDirection,
    pub protocol: ListenerProtocol,
    pub port: Port,
}

/// Category a match condition selects listeners by.
///
/// Not stored on the context; always derived from the role and direction so
/// the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListenerCategory {
    SidecarInbound,
    SidecarOutbound,
    Gateway,
}

impl ListenerCategory {
    /// Classify a listener from proxy role and traffic direction.
    ///
    /// Gateways collapse both directions into [`ListenerCategory::Gateway`].
    pub fn derive(role: ProxyRole, direction: TrafficDirection) -> Self {
        match (role, direction) {
            (ProxyRole::Gateway, _) => ListenerCategory::Gateway,
            (ProxyRole::Sidecar, TrafficDirection::Inbound) => ListenerCategory::SidecarInbound,
            (ProxyRole::Sidecar, TrafficDirection::Outbound) => ListenerCategory::SidecarOutbound,
        }
    }
}
