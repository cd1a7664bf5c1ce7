//! Classification of a single `(host, port)` connection attempt.

use std::time::Duration;

use async_trait::async_trait;
use pscan_common::network::{port::ProbeResult, protocol::Protocol};

use crate::network::{tcp, udp};

/// Defines the strategy for probing one transport-layer port.
///
/// Implementations never fail: every failure mode is folded into a closed
/// [`ProbeResult`], so a probe can never abort a scan.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(
        &self,
        protocol: Protocol,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> ProbeResult;
}

/// Dials the target with the operating system's socket API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectProber;

#[async_trait]
impl Prober for ConnectProber {
    async fn probe(
        &self,
        protocol: Protocol,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> ProbeResult {
        let established: bool = match protocol {
            Protocol::Tcp => tcp::handshake_probe(host, port, timeout).await,
            Protocol::Udp => udp::association_probe(host, port, timeout).await,
        };

        if established {
            ProbeResult::open(port, protocol)
        } else {
            ProbeResult::closed(port, protocol)
        }
    }
}

/// Probes one port with [`ConnectProber`].
pub async fn probe(protocol: Protocol, host: &str, port: u16, timeout: Duration) -> ProbeResult {
    ConnectProber.probe(protocol, host, port, timeout).await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
