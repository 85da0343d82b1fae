//! Connection-oriented stream adapter
//!
//! Synchronous-feeling connect/write/read-lines/close with short bounded
//! timeouts. No retry here: callers decide what a failed connect means.

use anyhow::{anyhow, Result};
use bytes::BytesMut;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Timeouts applied to every stream operation
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Bound on connection establishment
    pub connect_timeout: Duration,
    /// How long to keep draining response data after the last read
    pub read_timeout: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_millis(500),
        }
    }
}

/// Factory for outbound stream connections
#[derive(Debug, Clone, Default)]
pub struct StreamAdapter {
    config: StreamConfig,
}

impl StreamAdapter {
    pub fn new(config: StreamConfig) -> Self {
        Self { config }
    }

    /// Connect to `host:port`, bounded by the connect timeout
    pub async fn connect(&self, host: &str, port: u16) -> Result<StreamHandle> {
        let stream = timeout(self.config.connect_timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| anyhow!("connect to {}:{} timed out", host, port))??;

        Ok(StreamHandle {
            stream,
            read_timeout: self.config.read_timeout,
        })
    }
}

/// An open stream connection
pub struct StreamHandle {
    stream: TcpStream,
    read_timeout: Duration,
}

impl StreamHandle {
    pub async fn write(&mut self, payload: &[u8]) -> Result<()> {
        self.stream.write_all(payload).await?;
        Ok(())
    }

    /// Drain whatever response lines arrive before the read timeout or EOF.
    ///
    /// A trailing fragment without a newline is returned as a final line.
    pub async fn read_available_lines(&mut self) -> Vec<String> {
        let mut pending = BytesMut::with_capacity(1024);
        let mut lines = Vec::new();
        let mut buf = [0u8; 1024];

        loop {
            match timeout(self.read_timeout, self.stream.read(&mut buf)).await {
                Ok(Ok(0)) => break,
                Ok(Ok(n)) => {
                    pending.extend_from_slice(&buf[..n]);
                    drain_lines(&mut pending, &mut lines);
                }
                // Read error or timeout both mean the response is over
                Ok(Err(_)) | Err(_) => break,
            }
        }

        if !pending.is_empty() {
            lines.push(String::from_utf8_lossy(&pending).into_owned());
        }
        lines
    }

    pub async fn close(mut self) {
        let _ = self.stream.shutdown().await;
    }
}

/// Split complete `\n`-terminated lines off the front of `pending`
fn drain_lines(pending: &mut BytesMut, lines: &mut Vec<String>) {
    while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
        let raw = pending.split_to(pos + 1);
        let line = String::from_utf8_lossy(&raw[..pos]);
        lines.push(line.trim_end_matches('\r').to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_connect_write_read_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 64];
            let n = socket.read(&mut buf).await.unwrap();
            assert_eq!(&buf[..n], b"ping");
            socket.write_all(b"pong\r\nbye\n").await.unwrap();
            socket.shutdown().await.unwrap();
        });

        let adapter = StreamAdapter::default();
        let mut handle = adapter.connect("127.0.0.1", addr.port()).await.unwrap();
        handle.write(b"ping").await.unwrap();
        let lines = handle.read_available_lines().await;
        handle.close().await;

        assert_eq!(lines, vec!["pong", "bye"]);
    }

    #[tokio::test]
    async fn test_trailing_fragment_is_returned() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            socket.write_all(b"no newline here").await.unwrap();
            socket.shutdown().await.unwrap();
        });

        let adapter = StreamAdapter::default();
        let mut handle = adapter.connect("127.0.0.1", addr.port()).await.unwrap();
        let lines = handle.read_available_lines().await;
        assert_eq!(lines, vec!["no newline here"]);
    }

    #[tokio::test]
    async fn test_connect_refused_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let adapter = StreamAdapter::default();
        assert!(adapter.connect("127.0.0.1", port).await.is_err());
    }
}
