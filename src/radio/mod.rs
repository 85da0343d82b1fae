//! Wireless link collaborator interface
//!
//! The radio stack (association, scanning, addressing) lives outside this
//! crate; commands and the link manager reach it through this narrow seam.

mod sim;

pub use sim::SimRadio;

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::net::IpAddr;

/// Association state of the wireless link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Disconnected,
    Connecting,
    Connected,
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkState::Disconnected => write!(f, "Disconnected"),
            LinkState::Connecting => write!(f, "Connecting"),
            LinkState::Connected => write!(f, "Connected"),
        }
    }
}

/// One network found by a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub ssid: String,
    /// Signal strength in dBm
    pub rssi: i32,
}

/// Narrow interface to the wireless stack
#[async_trait]
pub trait Radio: Send + Sync {
    /// Current association state
    async fn state(&self) -> LinkState;

    /// Begin associating with the given credentials. Fire-and-forget: the
    /// result of the association shows up in `state`, not here.
    async fn begin_association(&self, ssid: &str, secret: &str) -> Result<()>;

    /// Tear down the current association
    async fn disconnect(&self) -> Result<()>;

    /// Scan for nearby networks. `Err` maps the driver's failure sentinel.
    async fn scan(&self) -> Result<Vec<ScanEntry>>;

    /// Local address, once associated
    async fn local_address(&self) -> Option<IpAddr>;
}
