//! Fan-out/fan-in port scanning.
//!
//! [`ScanCoordinator::run`] spawns one task per port, with no cap on how many
//! are in flight. Every task pushes its [`ProbeResult`] into one shared channel
//! of capacity one, so a producer waits until the consumer takes the previous
//! result. A supervisor joins every task and drops the last sender once all of
//! them have reported; the closed channel is the only completion signal.
//!
//! Results arrive in completion order, not port order.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use pscan_common::config::{DEFAULT_HOST, DEFAULT_TIMEOUT};
use pscan_common::network::{port::ProbeResult, protocol::Protocol, range::PortRange};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::prober::{ConnectProber, Prober};

/// Closest tokio gets to an unbuffered channel.
pub const RESULT_CHANNEL_CAPACITY: usize = 1;

/// Parameters of one scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanJob {
    pub host: String,
    pub protocol: Protocol,
    pub range: PortRange,
    pub timeout: Duration,
}

impl Default for ScanJob {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            protocol: Protocol::default(),
            range: PortRange::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct ScanCoordinator<P = ConnectProber> {
    prober: Arc<P>,
}

impl ScanCoordinator<ConnectProber> {
    pub fn new() -> Self {
        Self::with_prober(ConnectProber)
    }
}

impl Default for ScanCoordinator<ConnectProber> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Prober + 'static> ScanCoordinator<P> {
    pub fn with_prober(prober: P) -> Self {
        Self {
            prober: Arc::new(prober),
        }
    }

    /// Starts probing every port of `job.range` and returns the result stream.
    ///
    /// The receiver yields exactly `job.range.width()` results and then
    /// reports closure. It must be drained: producers block on a full channel.
    ///
    /// Must be called from within a tokio runtime.
    pub fn run(&self, job: ScanJob) -> mpsc::Receiver<ProbeResult> {
        let (tx, rx) = mpsc::channel::<ProbeResult>(RESULT_CHANNEL_CAPACITY);
        let ScanJob {
            host,
            protocol,
            range,
            timeout,
        } = job;
        let host: Arc<str> = Arc::from(host);

        info!(
            "Launching {} {} probes against {} (ports {})",
            range.width(),
            protocol,
            host,
            range
        );

        let mut tasks: JoinSet<u16> = JoinSet::new();
        for port in range {
            let tx = tx.clone();
            let prober = Arc::clone(&self.prober);
            let host = Arc::clone(&host);

            tasks.spawn(async move {
                let result: ProbeResult = prober.probe(protocol, &host, port, timeout).await;
                if tx.send(result).await.is_err() {
                    debug!(port, "result receiver dropped before delivery");
                }
                port
            });
        }

        tokio::spawn(supervise(tasks, range, protocol, tx));
        rx
    }
}

/// Waits for every probe task, then closes the channel by dropping `tx`.
///
/// A task that panicked never sent its result; a closed result is sent on its
/// behalf so each port still reports exactly once.
async fn supervise(
    mut tasks: JoinSet<u16>,
    range: PortRange,
    protocol: Protocol,
    tx: mpsc::Sender<ProbeResult>,
) {
    let mut outstanding: BTreeSet<u16> = range.iter().collect();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(port) => {
                outstanding.remove(&port);
            }
            Err(e) => error!("Probe task failed: {e}"),
        }
    }

    for port in outstanding {
        if tx.send(ProbeResult::closed(port, protocol)).await.is_err() {
            break;
        }
    }

    debug!(total = range.width(), "all probes reported, closing result channel");
    drop(tx);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
