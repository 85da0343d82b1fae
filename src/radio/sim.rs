//! Simulated radio for development off-device
//!
//! Associations always succeed after a short delay and the scan returns a
//! canned neighborhood, so the command surface can be exercised without a
//! wireless stack underneath.

use super::{LinkState, Radio, ScanEntry};
use anyhow::Result;
use async_trait::async_trait;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Delay between `begin_association` and reaching `Connected`
const ASSOCIATION_DELAY: Duration = Duration::from_millis(500);

pub struct SimRadio {
    state: Arc<RwLock<LinkState>>,
}

impl SimRadio {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LinkState::Disconnected)),
        }
    }
}

impl Default for SimRadio {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Radio for SimRadio {
    async fn state(&self) -> LinkState {
        *self.state.read().await
    }

    async fn begin_association(&self, ssid: &str, _secret: &str) -> Result<()> {
        debug!("[RADIO] association requested: {}", ssid);
        *self.state.write().await = LinkState::Connecting;

        // Complete the association off to the side, like a real driver would
        let state = self.state.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ASSOCIATION_DELAY).await;
            *state.write().await = LinkState::Connected;
        });
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        *self.state.write().await = LinkState::Disconnected;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<ScanEntry>> {
        Ok(vec![
            ScanEntry {
                ssid: "dtfos-net".into(),
                rssi: -42,
            },
            ScanEntry {
                ssid: "guest".into(),
                rssi: -67,
            },
        ])
    }

    async fn local_address(&self) -> Option<IpAddr> {
        match *self.state.read().await {
            LinkState::Connected => Some(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_association_reaches_connected() {
        let radio = SimRadio::new();
        assert_eq!(radio.state().await, LinkState::Disconnected);

        radio.begin_association("dtfos-net", "changeme").await.unwrap();
        assert_eq!(radio.state().await, LinkState::Connecting);

        tokio::time::sleep(ASSOCIATION_DELAY * 2).await;
        assert_eq!(radio.state().await, LinkState::Connected);
        assert!(radio.local_address().await.is_some());
    }

    #[tokio::test]
    async fn test_disconnect_drops_address() {
        let radio = SimRadio::new();
        radio.begin_association("dtfos-net", "changeme").await.unwrap();
        tokio::time::sleep(ASSOCIATION_DELAY * 2).await;

        radio.disconnect().await.unwrap();
        assert_eq!(radio.state().await, LinkState::Disconnected);
        assert!(radio.local_address().await.is_none());
    }
}
