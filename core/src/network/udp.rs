use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{UdpSocket, lookup_host};
use tokio::time::timeout;
use tracing::trace;

/// Associates a local UDP socket with `host:port`.
///
/// UDP has no handshake: success only means the address resolved and the
/// local `connect` raised no error. It says nothing about a remote listener.
pub async fn association_probe(host: &str, port: u16, probe_timeout: Duration) -> bool {
    match timeout(probe_timeout, associate(host, port)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            trace!(port, error = %e, "udp association failed");
            false
        }
        Err(_elapsed) => {
            trace!(port, "udp association timed out");
            false
        }
    }
}

async fn associate(host: &str, port: u16) -> io::Result<()> {
    let mut last_err: Option<io::Error> = None;

    for remote in lookup_host((host, port)).await? {
        match connect(remote).await {
            Ok(()) => return Ok(()),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "host resolved to no addresses")
    }))
}

async fn connect(remote: SocketAddr) -> io::Result<()> {
    let local: SocketAddr = match remote {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };
    let socket = UdpSocket::bind(local).await?;
    socket.connect(remote).await
}
