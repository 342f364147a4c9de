//! Declarative match condition carried by a configuration patch.

use serde::{Deserialize, Serialize};

use crate::listener::{ListenerCategory, ListenerProtocol};

/// Selects the listeners a patch applies to.
///
/// Every field is optional and unset fields never reject a listener, so the
/// empty condition matches everything. The condition arrives already decoded
/// from the surrounding system's configuration format; this crate only reads
/// its fields.
///
/// Fields combine with AND; the `addresses` list combines internally with OR.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListenerMatch {
    /// Exact listener port to select.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_number: Option<u16>,

    /// Case-sensitive prefix of the service port name: `"http"` selects a
    /// listener whose port is named `"http-foo"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name_prefix: Option<String>,

    /// Listener category to select, derived from proxy role and traffic
    /// direction at evaluation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_type: Option<ListenerCategory>,

    /// Application protocol the listener must have been built for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_protocol: Option<ListenerProtocol>,

    /// CIDR ranges the listener bind address must fall in (any one suffices).
    /// An entry without a prefix length is a host route.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
}

impl ListenerMatch {
    /// True when no field is set, i.e. the condition selects every listener.
    pub fn is_wildcard(&self) -> bool {
        *self == ListenerMatch::default()
    }
}
