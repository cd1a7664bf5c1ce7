//! Well-known service names for a handful of common ports.
//!
//! The table is built once on first use and never mutated afterwards, so it can
//! be read from any number of probe tasks without synchronization.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Placeholder for ports without a known service, and for closed ports.
pub const UNKNOWN_SERVICE: &str = "-";

static SERVICES: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (20, "ftp"),
        (21, "ftp"),
        (22, "ssh"),
        (23, "telnet"),
        (25, "smtp"),
        (53, "dns"),
        (80, "http"),
        (110, "pop3"),
        (443, "https"),
    ])
});

pub fn service_name(port: u16) -> Option<&'static str> {
    SERVICES.get(&port).copied()
}

pub fn service_or_default(port: u16) -> &'static str {
    service_name(port).unwrap_or(UNKNOWN_SERVICE)
}
