//! Periodic link check with an injectable clock
//!
//! The control loop feeds ticks in; the manager decides whether the 5s
//! period has elapsed and, when the link is down, requests reassociation
//! with the current credentials. Retries indefinitely, no backoff.

use crate::config::Credentials;
use crate::radio::{LinkState, Radio};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

/// Period between liveness checks
pub const LINK_CHECK_INTERVAL: Duration = Duration::from_secs(5);

pub struct LinkManager {
    radio: Arc<dyn Radio>,
    last_check: Option<Instant>,
    /// Advisory reentrancy guard; association requests are fire-and-forget
    /// so this is only observable if a future implementation suspends here.
    check_in_flight: bool,
}

impl LinkManager {
    pub fn new(radio: Arc<dyn Radio>) -> Self {
        Self {
            radio,
            last_check: None,
            check_in_flight: false,
        }
    }

    /// Run one tick. Returns the reconnect notice to display when a
    /// reassociation was requested, `None` otherwise.
    pub async fn check(&mut self, now: Instant, credentials: &Credentials) -> Option<String> {
        if self.check_in_flight {
            return None;
        }
        if let Some(last) = self.last_check {
            if now.duration_since(last) < LINK_CHECK_INTERVAL {
                return None;
            }
        }
        self.last_check = Some(now);

        if self.radio.state().await == LinkState::Connected {
            return None;
        }

        self.check_in_flight = true;
        let result = self
            .radio
            .begin_association(&credentials.ssid, &credentials.secret)
            .await;
        self.check_in_flight = false;

        if let Err(e) = result {
            warn!("[LINK] reassociation request failed: {}", e);
        }
        Some("Attempting WiFi reconnect...".to_string())
    }
}
