//! CIDR containment, the one leaf utility under the listener matcher.
//!
//! Kept behind its own function so the evaluator never sees the parsing
//! library. Entries are `ip/len` or a bare IP, which is treated as a host
//! route (`/32` or `/128`).

use std::net::IpAddr;

use ipnet::IpNet;
use thiserror::Error;

/// A condition address entry that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid IP address '{0}'")]
    InvalidAddress(String),
    #[error("invalid CIDR range '{0}'")]
    InvalidRange(String),
}

/// Check whether `addr` falls inside the range denoted by `entry`.
///
/// An address from a different family than the range is outside it, not an
/// error; only a malformed entry produces [`CidrError`].
pub fn contains(entry: &str, addr: IpAddr) -> Result<bool, CidrError> {
    Ok(parse_entry(entry)?.contains(&addr))
}

fn parse_entry(entry: &str) -> Result<IpNet, CidrError> {
    if entry.contains('/') {
        entry
            .parse::<IpNet>()
            .map_err(|_| CidrError::InvalidRange(entry.to_string()))
    } else {
        let ip: IpAddr = entry
            .parse()
            .map_err(|_| CidrError::InvalidAddress(entry.to_string()))?;
        Ok(IpNet::from(ip))
    }
}
