//! Connectionless datagram adapter
//!
//! One socket, bound at startup. Sends are best-effort fire-and-forget:
//! failure is logged and swallowed, the caller never sees it.

use anyhow::Result;
use tokio::net::UdpSocket;
use tracing::debug;

/// Largest inbound payload we care to display
const RECV_BUF_SIZE: usize = 256;

pub struct DatagramAdapter {
    socket: UdpSocket,
}

impl DatagramAdapter {
    /// Bind the local datagram socket once at startup
    pub async fn bind(port: u16) -> Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", port)).await?;
        Ok(Self { socket })
    }

    /// Best-effort send to `host:port`
    pub async fn send(&self, host: &str, port: u16, payload: &[u8]) {
        if let Err(e) = self.socket.send_to(payload, (host, port)).await {
            debug!("[UDP] send to {}:{} failed: {}", host, port, e);
        }
    }

    /// Await the next inbound datagram, decoded lossily as UTF-8
    pub async fn recv(&self) -> Result<String> {
        let mut buf = [0u8; RECV_BUF_SIZE];
        let (n, _peer) = self.socket.recv_from(&mut buf).await?;
        Ok(String::from_utf8_lossy(&buf[..n]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_and_recv() {
        let receiver = DatagramAdapter::bind(0).await.unwrap();
        let port = receiver.socket.local_addr().unwrap().port();

        let sender = DatagramAdapter::bind(0).await.unwrap();
        sender.send("127.0.0.1", port, b"hello").await;

        let payload = receiver.recv().await.unwrap();
        assert_eq!(payload, "hello");
    }

    #[tokio::test]
    async fn test_send_to_unresolvable_host_is_swallowed() {
        let sender = DatagramAdapter::bind(0).await.unwrap();
        // Must not panic or return an error to the caller
        sender.send("host.invalid", 9, b"payload").await;
    }
}
