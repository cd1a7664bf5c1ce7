//! Consumption side of a scan.
//!
//! [`drain`] pulls every result off the channel in arrival order until the
//! coordinator closes it. Only open results reach [`ReportSink::on_open`], but
//! closed ones are still received, otherwise the producers would stall.

use std::time::{Duration, Instant};

use pscan_common::network::port::ProbeResult;
use tokio::sync::mpsc;
use tracing::debug;

pub trait ReportSink {
    /// Called once for each open port, in arrival order.
    fn on_open(&mut self, result: &ProbeResult);

    /// Called after every received result, open or closed.
    fn on_progress(&mut self, _done: usize, _total: usize) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub open: usize,
    pub elapsed: Duration,
}

/// Drains `rx` into `sink` until the channel closes, timing from now.
///
/// `expected` is only used for progress reporting.
pub async fn drain<S: ReportSink + ?Sized>(
    rx: mpsc::Receiver<ProbeResult>,
    expected: usize,
    sink: &mut S,
) -> ScanSummary {
    drain_since(rx, expected, Instant::now(), sink).await
}

/// Like [`drain`], with `elapsed` measured from `started`.
pub async fn drain_since<S: ReportSink + ?Sized>(
    mut rx: mpsc::Receiver<ProbeResult>,
    expected: usize,
    started: Instant,
    sink: &mut S,
) -> ScanSummary {
    let mut total = 0usize;
    let mut open = 0usize;

    while let Some(result) = rx.recv().await {
        total += 1;
        if result.is_open() {
            open += 1;
            sink.on_open(&result);
        }
        sink.on_progress(total, expected);
    }

    debug!(total, open, "result channel closed");
    ScanSummary {
        total,
        open,
        elapsed: started.elapsed(),
    }
}
