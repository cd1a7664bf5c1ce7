use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use pscan_common::network::{port::ProbeResult, protocol::Protocol};
use pscan_core::prober::{self, Prober};
use pscan_core::report::ReportSink;
use tokio::net::TcpListener;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

pub async fn listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback port with nothing bound to it (at the time of the call).
pub async fn free_port() -> u16 {
    let (_listener, port) = listener().await;
    port
}

/// Dials real loopback ports on behalf of well-known ones.
///
/// Lets a test bind an unprivileged listener and have the scan see it as,
/// say, port 22. Unmapped ports are sent to a port with no listener.
pub struct RemappedProber {
    pub map: HashMap<u16, u16>,
    pub dead_port: u16,
}

#[async_trait]
impl Prober for RemappedProber {
    async fn probe(
        &self,
        protocol: Protocol,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> ProbeResult {
        let physical: u16 = self.map.get(&port).copied().unwrap_or(self.dead_port);
        let dialed = prober::probe(protocol, host, physical, timeout).await;

        if dialed.is_open() {
            ProbeResult::open(port, protocol)
        } else {
            ProbeResult::closed(port, protocol)
        }
    }
}

#[derive(Default)]
pub struct CollectingSink {
    pub open: Vec<ProbeResult>,
    pub seen: usize,
}

impl ReportSink for CollectingSink {
    fn on_open(&mut self, result: &ProbeResult) {
        self.open.push(result.clone());
    }

    fn on_progress(&mut self, done: usize, _total: usize) {
        self.seen = done;
    }
}
