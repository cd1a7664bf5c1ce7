use std::fmt;

use crate::network::protocol::Protocol;
use crate::network::services::{self, UNKNOWN_SERVICE};

/// Outcome of a single probe.
///
/// `Closed` covers every failure mode: refused, unreachable, unresolvable,
/// timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortState {
    Open,
    Closed,
}

impl PortState {
    pub fn is_open(self) -> bool {
        self == PortState::Open
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortState::Open => f.write_str("open"),
            PortState::Closed => f.write_str("closed"),
        }
    }
}

/// The single, final result reported for one port of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub port: u16,
    pub state: PortState,
    pub protocol: Protocol,
    pub service: String,
}

impl ProbeResult {
    /// An established connection; the service name comes from the static table.
    pub fn open(port: u16, protocol: Protocol) -> Self {
        Self {
            port,
            state: PortState::Open,
            protocol,
            service: services::service_or_default(port).to_string(),
        }
    }

    pub fn closed(port: u16, protocol: Protocol) -> Self {
        Self {
            port,
            state: PortState::Closed,
            protocol,
            service: UNKNOWN_SERVICE.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}
