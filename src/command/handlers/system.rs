//! Device and session command handlers

use crate::device::{Device, DEVICE_NAME, DEVICE_VERSION};
use crate::display::Panel;
use crate::error::CommandResult;
use crate::radio::LinkState;
use tracing::warn;

const HELP_TEXT: &str = "\
Available commands:
help - Show this message
clear - Clear the screen
info - Show device info
text <message> - Display text on screen
brightness <value> - Set screen brightness (0-255)
toggle_bt - Toggle Bluetooth
size <value> - Set text size (1-4)
scan - Scan available WiFi networks
udp <message> - Send UDP message
udp_set <host> <port> - Set UDP endpoint
tcp <host> <port> <message> - Send TCP message
post <url> <data> - Send HTTP POST request
get <url> - Send HTTP GET request
wifi <ssid> <secret> - Join a WiFi network
ip - Show assigned IP address
wifi_status - Check WiFi connection status
start_web - Start the web command interface";

/// `help` — static help text, control channel only
pub async fn handle_help<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    dev.control_reply(HELP_TEXT);
    Ok(())
}

/// `info` — device identity plus channel and link state
pub async fn handle_info<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    let bluetooth = if dev.config.control_channel_enabled {
        "Connected"
    } else {
        "Disconnected"
    };
    let wifi = if dev.radio.state().await == LinkState::Connected {
        "Connected"
    } else {
        "Disconnected"
    };

    dev.display(format!("{DEVICE_NAME} {DEVICE_VERSION}"));
    dev.display(format!("Bluetooth: {bluetooth}"));
    dev.display(format!("WiFi Status: {wifi}"));
    Ok(())
}

/// `toggle_bt` — flip the control channel; reopen or close the port to match
pub async fn handle_toggle_bt<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    dev.config.control_channel_enabled = !dev.config.control_channel_enabled;

    if dev.config.control_channel_enabled {
        dev.port.open();
        dev.display("Bluetooth enabled.");
    } else {
        // The screen still shows the notice; the mirror is already off
        dev.display("Bluetooth disabled.");
        dev.port.close();
    }
    Ok(())
}

/// `start_web` — idempotently bring up the inbound HTTP command surface
pub async fn handle_start_web<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    if dev.web.is_running() {
        dev.display("Web interface already running");
        return Ok(());
    }

    match dev.web.start().await {
        Ok(addr) => dev.display(format!("Web interface on {addr}")),
        Err(e) => {
            warn!("[WEB] start failed: {}", e);
            dev.display("Web interface failed to start");
        }
    }
    Ok(())
}
