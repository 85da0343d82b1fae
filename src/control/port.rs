//! Line port for the control channel
//!
//! Serves one remote terminal at a time over RFCOMM or a TCP stand-in,
//! pumping newline-terminated lines both ways. `toggle_bt` closes and
//! reopens the port; outbound lines queue across the gap.

use anyhow::Result;
use bluer::rfcomm::{Listener, SocketAddr as RfcommAddr};
use bluer::Address;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Transport behind the control channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// Real RFCOMM Bluetooth (requires BlueZ)
    Rfcomm,
    /// TCP stand-in (for development)
    #[default]
    TcpSimulation,
}

/// Control port configuration
#[derive(Debug, Clone)]
pub struct ControlConfig {
    pub mode: ControlMode,
    /// Name the device announces itself under
    pub device_name: String,
    /// RFCOMM channel number
    pub channel: u8,
    /// Listen address in TCP simulation mode
    pub tcp_listen: String,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            mode: ControlMode::TcpSimulation,
            device_name: "DT-FOS".into(),
            channel: 1,
            tcp_listen: "127.0.0.1:3535".into(),
        }
    }
}

/// Owns the io task serving the remote terminal
pub struct ControlPort {
    config: ControlConfig,
    line_tx: mpsc::Sender<String>,
    outbound_rx: Arc<Mutex<mpsc::Receiver<String>>>,
    task: Option<JoinHandle<()>>,
}

impl ControlPort {
    pub fn new(
        config: ControlConfig,
        line_tx: mpsc::Sender<String>,
        outbound_rx: mpsc::Receiver<String>,
    ) -> Self {
        Self {
            config,
            line_tx,
            outbound_rx: Arc::new(Mutex::new(outbound_rx)),
            task: None,
        }
    }

    /// Start serving. Reopening an open port restarts the io task.
    pub fn open(&mut self) {
        self.close();
        let config = self.config.clone();
        let line_tx = self.line_tx.clone();
        let outbound_rx = self.outbound_rx.clone();
        self.task = Some(tokio::spawn(async move {
            run_port(config, line_tx, outbound_rx).await;
        }));
    }

    /// Stop serving. Outbound lines keep queueing until the next open.
    pub fn close(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_open(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

async fn run_port(
    config: ControlConfig,
    line_tx: mpsc::Sender<String>,
    outbound_rx: Arc<Mutex<mpsc::Receiver<String>>>,
) {
    loop {
        let result = match config.mode {
            ControlMode::TcpSimulation => serve_tcp(&config, &line_tx, &outbound_rx).await,
            ControlMode::Rfcomm => serve_rfcomm(&config, &line_tx, &outbound_rx).await,
        };
        if let Err(e) = result {
            warn!("[CTRL] port error: {}", e);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

async fn serve_tcp(
    config: &ControlConfig,
    line_tx: &mpsc::Sender<String>,
    outbound_rx: &Arc<Mutex<mpsc::Receiver<String>>>,
) -> Result<()> {
    let listener = TcpListener::bind(&config.tcp_listen).await?;
    info!("[CTRL] terminal listening on {}", config.tcp_listen);

    loop {
        let (stream, peer) = listener.accept().await?;
        info!("[CTRL] terminal connected: {}", peer);
        serve_stream(stream, line_tx, outbound_rx).await;
        info!("[CTRL] terminal disconnected: {}", peer);
    }
}

async fn serve_rfcomm(
    config: &ControlConfig,
    line_tx: &mpsc::Sender<String>,
    outbound_rx: &Arc<Mutex<mpsc::Receiver<String>>>,
) -> Result<()> {
    let local = RfcommAddr::new(Address::any(), config.channel);
    let listener = Listener::bind(local).await?;
    info!(
        "[CTRL] {} listening on RFCOMM channel {}",
        config.device_name, config.channel
    );

    loop {
        let (stream, peer) = listener.accept().await?;
        info!("[CTRL] terminal connected: {}", peer.addr);
        serve_stream(stream, line_tx, outbound_rx).await;
        info!("[CTRL] terminal disconnected: {}", peer.addr);
    }
}

/// Pump lines both ways until the peer hangs up
async fn serve_stream<S>(
    stream: S,
    line_tx: &mpsc::Sender<String>,
    outbound_rx: &Arc<Mutex<mpsc::Receiver<String>>>,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut lines = BufReader::new(reader).lines();
    let mut rx = outbound_rx.lock().await;

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let _ = line_tx.send(line).await;
                }
                Ok(None) | Err(_) => break,
            },
            Some(out) = rx.recv() => {
                if writer.write_all(format!("{out}\n").as_bytes()).await.is_err() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_tcp_port_round_trip() {
        let config = ControlConfig {
            tcp_listen: "127.0.0.1:13535".into(),
            ..Default::default()
        };
        let (line_tx, mut line_rx) = mpsc::channel(16);
        let (out_tx, out_rx) = mpsc::channel(16);
        let mut port = ControlPort::new(config, line_tx, out_rx);
        port.open();
        assert!(port.is_open());

        // Give the listener a moment to bind
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mut client = TcpStream::connect("127.0.0.1:13535").await.unwrap();
        client.write_all(b"info\n").await.unwrap();
        assert_eq!(line_rx.recv().await.unwrap(), "info");

        out_tx.send("DT-FOS V0.2".to_string()).await.unwrap();
        let mut buf = vec![0u8; 64];
        let n = client.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"DT-FOS V0.2\n");

        port.close();
        assert!(!port.is_open());
    }

    #[test]
    fn test_default_config() {
        let config = ControlConfig::default();
        assert_eq!(config.mode, ControlMode::TcpSimulation);
        assert_eq!(config.device_name, "DT-FOS");
        assert_eq!(config.channel, 1);
    }
}
