//! Client identity resolution.
//!
//! A reverse proxy in front of this server can report the true client address
//! via the `X-Real-IP` header. The value is taken as-is, with no validation
//! and no trust boundary: a direct client can spoof it.

use std::net::SocketAddr;

const REAL_IP_HEADER: &str = "X-Real-IP";

/// Returns the client address to report for a request.
///
/// The first header line carrying the literal, case-sensitive prefix
/// `X-Real-IP:` wins; its value is returned trimmed. Otherwise the
/// transport-layer peer address is used in its standard text form.
pub fn resolve_client_ip(header_lines: &[String], peer: SocketAddr) -> String {
    for line in header_lines {
        if let Some(value) = line.strip_prefix(REAL_IP_HEADER) {
            if let Some(value) = value.strip_prefix(':') {
                return value.trim().to_string();
            }
        }
    }

    peer.ip().to_string()
}
