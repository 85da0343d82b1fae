//! Inbound HTTP command surface
//!
//! A deliberately small GET endpoint: `/?cmd=<command>` queues the decoded
//! command to the control loop exactly as if it had arrived on the control
//! channel, and the response acknowledges the original command string. The
//! command itself executes after the ack, serialized with everything else.

use anyhow::Result;
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// Bound on the request head we are willing to buffer
const MAX_REQUEST_HEAD: usize = 1024;

pub struct WebSurface {
    listen: String,
    cmd_tx: mpsc::Sender<String>,
    bound: Option<SocketAddr>,
    task: Option<JoinHandle<()>>,
}

impl WebSurface {
    pub fn new(listen: impl Into<String>, cmd_tx: mpsc::Sender<String>) -> Self {
        Self {
            listen: listen.into(),
            cmd_tx,
            bound: None,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start the accept loop. Idempotent: a running surface is left alone.
    pub async fn start(&mut self) -> Result<SocketAddr> {
        if self.is_running() {
            if let Some(addr) = self.bound {
                return Ok(addr);
            }
        }

        let listener = TcpListener::bind(&self.listen).await?;
        let addr = listener.local_addr()?;
        info!("[WEB] command surface listening on {}", addr);

        let cmd_tx = self.cmd_tx.clone();
        self.task = Some(tokio::spawn(async move {
            accept_loop(listener, cmd_tx).await;
        }));
        self.bound = Some(addr);
        Ok(addr)
    }
}

async fn accept_loop(listener: TcpListener, cmd_tx: mpsc::Sender<String>) {
    loop {
        match listener.accept().await {
            Ok((socket, _peer)) => {
                let tx = cmd_tx.clone();
                tokio::spawn(async move {
                    handle_client(socket, tx).await;
                });
            }
            Err(e) => {
                info!("[WEB] accept failed: {}", e);
            }
        }
    }
}

async fn handle_client(mut socket: TcpStream, cmd_tx: mpsc::Sender<String>) {
    let mut buf = vec![0u8; MAX_REQUEST_HEAD];
    let mut read = 0;

    while read < buf.len() {
        match socket.read(&mut buf[read..]).await {
            Ok(0) => break,
            Ok(n) => {
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let head = String::from_utf8_lossy(&buf[..read]);
    let request_line = head.lines().next().unwrap_or("");
    let target = request_line.split_whitespace().nth(1).unwrap_or("");

    match query_param(target, "cmd") {
        Some(cmd) if !cmd.is_empty() => {
            let body = format!("Command received: {cmd}");
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = cmd_tx.send(cmd).await;
        }
        _ => {
            let _ = socket
                .write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await;
        }
    }
    let _ = socket.shutdown().await;
}

/// Extract and decode one query parameter from a request target
fn query_param(target: &str, key: &str) -> Option<String> {
    let (_, query) = target.split_once('?')?;
    for pair in query.split('&') {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if k == key {
            let decoded = percent_decode_str(&v.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned();
            return Some(decoded);
        }
    }
    None
}
