//! The listener-match evaluator.

use std::net::IpAddr;

use tracing::warn;

use crate::cidr;
use crate::condition::ListenerMatch;
use crate::listener::{ListenerCategory, ListenerContext};

/// Decide whether a listener is selected by a match condition.
///
/// Pure and total: no I/O, no shared state, never panics on well-typed
/// input, so callers may evaluate many listener/condition pairs in parallel
/// without coordination.
///
/// The five condition fields are independent and combine with AND,
/// short-circuiting on the first failure; the address list combines with OR.
/// An absent condition matches everything. An absent `listener_addr` with a
/// non-empty address list is a definitive non-match. A malformed address
/// entry is logged and counted as non-matching without aborting the scan of
/// the remaining entries.
pub fn listener_match(
    ctx: &ListenerContext,
    listener_addr: Option<IpAddr>,
    condition: Option<&ListenerMatch>,
) -> bool {
    let Some(cond) = condition else {
        return true;
    };

    if let Some(port) = cond.port_number {
        if port != ctx.port.number {
            return false;
        }
    }

    if let Some(prefix) = &cond.port_name_prefix {
        if !ctx.port.name.starts_with(prefix.as_str()) {
            return false;
        }
    }

    if let Some(category) = cond.listener_type {
        if category != ListenerCategory::derive(ctx.role, ctx.direction) {
            return false;
        }
    }

    if let Some(protocol) = cond.listener_protocol {
        if protocol != ctx.protocol {
            return false;
        }
    }

    if cond.addresses.is_empty() {
        return true;
    }
    let Some(addr) = listener_addr else {
        return false;
    };
    cond.addresses
        .iter()
        .any(|entry| match cidr::contains(entry, addr) {
            Ok(inside) => inside,
            Err(err) => {
                warn!(%err, entry = %entry, "skipping malformed address entry in listener match");
                false
            }
        })
}
