//! Client IP resolution: `X-Forwarded-For` first, then the peer address.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderMap;

pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Resolve the client IP as text.
///
/// The forwarded header is taken whole; a proxy chain (`a, b`) is not a valid
/// IP and falls through to the peer address. Returns `None` when neither
/// source yields a valid IP.
pub fn resolve_client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded_for: bool,
) -> Option<String> {
    if trust_forwarded_for {
        let forwarded = headers
            .get(FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.parse::<IpAddr>().is_ok());
        if let Some(ip) = forwarded {
            return Some(ip.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_string())
}
