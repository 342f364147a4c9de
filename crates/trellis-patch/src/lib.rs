//! Listener selection predicates for Trellis configuration patches.
//!
//! A Trellis patch carries an optional [`ListenerMatch`] condition that
//! decides which listeners the patch applies to. This crate owns that
//! decision: a pure, stateless predicate over the listener's runtime
//! context, its bind address, and the decoded condition. It never builds
//! listeners, never applies patches, and never touches the network.
//!
//! Matching is deliberately forgiving: every condition field is optional,
//! and an unset field never rejects a listener. A mis-evaluation here
//! either patches unrelated traffic or silently drops an intended
//! override, so the semantics are pinned down by an exhaustive scenario
//! table in `tests/listener_match.rs`.

pub mod cidr;
pub mod condition;
pub mod listener;
pub mod matcher;

pub use cidr::CidrError;
pub use condition::ListenerMatch;
pub use listener::{
    ListenerCategory, ListenerContext, ListenerProtocol, Port, ProxyRole, TrafficDirection,
};
pub use matcher::listener_match;
