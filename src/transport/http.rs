//! Minimal one-shot HTTP client over the stream adapter
//!
//! Builds a raw request, sends it, and hands back the response lines
//! without interpreting status codes; the display shows them as-is. The
//! host token is taken literally, no scheme or path parsing.

use super::{StreamAdapter, StreamHandle};
use anyhow::Result;

/// Fixed port for `get`/`post` commands
const HTTP_PORT: u16 = 80;

#[derive(Debug, Clone)]
pub struct HttpClient {
    stream: StreamAdapter,
    port: u16,
}

impl HttpClient {
    pub fn new(stream: StreamAdapter) -> Self {
        Self {
            stream,
            port: HTTP_PORT,
        }
    }

    #[cfg(test)]
    fn with_port(stream: StreamAdapter, port: u16) -> Self {
        Self { stream, port }
    }

    /// GET / from `host`, returning the raw response lines
    pub async fn get(&self, host: &str) -> Result<Vec<String>> {
        let request = format!("GET / HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n");
        self.exchange(host, request.as_bytes()).await
    }

    /// POST `data` to / on `host` with a literal Content-Length
    pub async fn post(&self, host: &str, data: &str) -> Result<Vec<String>> {
        let request = format!(
            "POST / HTTP/1.1\r\nHost: {host}\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\n\r\n{data}",
            data.len()
        );
        self.exchange(host, request.as_bytes()).await
    }

    async fn exchange(&self, host: &str, request: &[u8]) -> Result<Vec<String>> {
        let mut handle: StreamHandle = self.stream.connect(host, self.port).await?;
        handle.write(request).await?;
        let lines = handle.read_available_lines().await;
        handle.close().await;
        Ok(lines)
    }
}
