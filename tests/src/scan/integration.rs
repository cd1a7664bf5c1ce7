#![cfg(test)]
use std::collections::HashMap;

use pscan_common::network::port::{PortState, ProbeResult};
use pscan_common::network::protocol::Protocol;
use pscan_common::network::range::PortRange;
use pscan_core::report;
use pscan_core::scanner::{ScanCoordinator, ScanJob};

use crate::utils::{self, CollectingSink, PROBE_TIMEOUT, RemappedProber};

fn loopback_job(protocol: Protocol, range: PortRange) -> ScanJob {
    ScanJob {
        host: "127.0.0.1".to_string(),
        protocol,
        range,
        timeout: PROBE_TIMEOUT,
    }
}

#[tokio::test]
async fn tcp_scan_finds_loopback_listener() {
    let (_listener, port) = utils::listener().await;
    let range = PortRange::new(port.saturating_sub(2).max(1), port.saturating_add(2)).unwrap();

    let coordinator = ScanCoordinator::new();
    let mut sink = CollectingSink::default();
    let summary = report::drain(
        coordinator.run(loopback_job(Protocol::Tcp, range)),
        range.width(),
        &mut sink,
    )
    .await;

    assert_eq!(summary.total, range.width());
    assert_eq!(sink.seen, range.width());
    assert!(
        sink.open.iter().any(|r| r.port == port),
        "listener on {port} was not reported open"
    );
    assert!(sink.open.iter().all(|r| r.state == PortState::Open));
}

#[tokio::test]
async fn ssh_scenario_reports_only_port_22() {
    let (_listener, physical) = utils::listener().await;
    let prober = RemappedProber {
        map: HashMap::from([(22, physical)]),
        dead_port: utils::free_port().await,
    };

    let coordinator = ScanCoordinator::with_prober(prober);
    let job = loopback_job(Protocol::Tcp, "20-25".parse().unwrap());
    let mut sink = CollectingSink::default();
    let summary = report::drain(coordinator.run(job), 6, &mut sink).await;

    assert_eq!(summary.total, 6);
    assert_eq!(sink.open, vec![ProbeResult::open(22, Protocol::Tcp)]);
    assert_eq!(sink.open[0].service, "ssh");
}

#[tokio::test]
async fn single_free_port_closes_after_one_result() {
    let port = utils::free_port().await;
    let range = PortRange::single(port).unwrap();

    let coordinator = ScanCoordinator::new();
    let mut rx = coordinator.run(loopback_job(Protocol::Tcp, range));

    assert_eq!(rx.recv().await, Some(ProbeResult::closed(port, Protocol::Tcp)));
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn reversed_range_matches_forward_range() {
    let (_listener, physical) = utils::listener().await;
    let dead_port = utils::free_port().await;
    let mut outcomes = Vec::new();

    for spec in ["20-100", "100-20"] {
        let prober = RemappedProber {
            map: HashMap::from([(80, physical)]),
            dead_port,
        };
        let coordinator = ScanCoordinator::with_prober(prober);
        let job = loopback_job(Protocol::Tcp, spec.parse().unwrap());

        let mut sink = CollectingSink::default();
        let summary = report::drain(coordinator.run(job), 81, &mut sink).await;
        outcomes.push((summary.total, sink.open));
    }

    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[0].0, 81);
}

#[tokio::test]
async fn udp_scan_on_loopback_associates_every_port() {
    let range: PortRange = "52-54".parse().unwrap();

    let coordinator = ScanCoordinator::new();
    let mut sink = CollectingSink::default();
    let summary = report::drain(
        coordinator.run(loopback_job(Protocol::Udp, range)),
        range.width(),
        &mut sink,
    )
    .await;

    assert_eq!(summary.total, 3);
    assert_eq!(summary.open, 3);
    let dns = sink.open.iter().find(|r| r.port == 53).unwrap();
    assert_eq!(dns.service, "dns");
    assert_eq!(dns.protocol, Protocol::Udp);
}

#[tokio::test]
async fn unresolvable_host_reports_every_port_closed() {
    let coordinator = ScanCoordinator::new();
    let job = ScanJob {
        host: "host.invalid".to_string(),
        protocol: Protocol::Tcp,
        range: "79-81".parse().unwrap(),
        timeout: PROBE_TIMEOUT,
    };

    let mut sink = CollectingSink::default();
    let summary = report::drain(coordinator.run(job), 3, &mut sink).await;

    assert_eq!(summary.total, 3);
    assert_eq!(summary.open, 0);
    assert!(sink.open.is_empty());
}
