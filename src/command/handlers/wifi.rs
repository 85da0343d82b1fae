//! Wireless-link command handlers

use crate::config::Credentials;
use crate::device::Device;
use crate::display::Panel;
use crate::error::{CommandError, CommandResult};
use crate::radio::LinkState;
use tracing::warn;

/// `wifi <ssid> <secret>` — replace credentials, tear down, reassociate
pub async fn handle_wifi<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let usage = || CommandError::Validation("usage: wifi <ssid> <secret>".into());
    let (ssid, secret) = args.trim().split_once(' ').ok_or_else(usage)?;

    dev.config.link_credentials = Credentials {
        ssid: ssid.to_string(),
        secret: secret.to_string(),
    };

    if let Err(e) = dev.radio.disconnect().await {
        warn!("[WIFI] disconnect failed: {}", e);
    }
    if let Err(e) = dev.radio.begin_association(ssid, secret).await {
        warn!("[WIFI] association request failed: {}", e);
    }
    dev.display(format!("Connecting to {ssid}..."));
    Ok(())
}

/// `scan` — list nearby networks with signal strength
pub async fn handle_scan<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    let entries = dev.radio.scan().await.map_err(|_| CommandError::Scan)?;

    dev.display(format!("Networks found ({}):", entries.len()));
    for (i, entry) in entries.iter().enumerate() {
        dev.display(format!("{}. {} ({}dBm)", i + 1, entry.ssid, entry.rssi));
    }
    Ok(())
}

/// `wifi_status` — Connected or Disconnected, nothing in between
pub async fn handle_wifi_status<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    let status = if dev.radio.state().await == LinkState::Connected {
        "Connected"
    } else {
        "Disconnected"
    };
    dev.display(format!("WiFi: {status}"));
    Ok(())
}

/// `ip` — assigned address while connected
pub async fn handle_ip<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    if dev.radio.state().await == LinkState::Connected {
        match dev.radio.local_address().await {
            Some(addr) => dev.display(format!("IP: {addr}")),
            None => dev.display("not connected"),
        }
    } else {
        dev.display("not connected");
    }
    Ok(())
}
