//! Network-facing command handlers

use crate::config::Endpoint;
use crate::device::Device;
use crate::display::Panel;
use crate::error::{CommandError, CommandResult};
use crate::radio::LinkState;
use tracing::debug;

/// `udp <message>` — fire-and-forget datagram to the configured endpoint
pub async fn handle_udp<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let endpoint = dev.config.datagram_endpoint.clone();
    dev.datagram
        .send(&endpoint.host, endpoint.port, args.as_bytes())
        .await;
    dev.display(format!("{args} → {endpoint}"));
    Ok(())
}

/// `udp_set <host> <port>` — retarget the datagram transport
pub async fn handle_udp_set<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let usage = || CommandError::Validation("usage: udp_set <host> <port>".into());
    let (host, port) = args.trim().split_once(' ').ok_or_else(usage)?;
    let port: u16 = port.trim().parse().map_err(|_| usage())?;

    dev.config.datagram_endpoint = Endpoint {
        host: host.to_string(),
        port,
    };
    dev.display(format!("UDP endpoint set to {host}:{port}"));
    Ok(())
}

/// `tcp <host> <port> <message>` — one-shot exchange; the message is the
/// remainder after the second token and may contain spaces
pub async fn handle_tcp<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let usage = || CommandError::Validation("usage: tcp <host> <port> <message>".into());
    let (host, rest) = args.trim_start().split_once(' ').ok_or_else(usage)?;
    let (port, message) = rest.split_once(' ').ok_or_else(usage)?;
    let port: u16 = port.parse().map_err(|_| usage())?;

    let mut handle = dev
        .stream
        .connect(host, port)
        .await
        .map_err(|_| CommandError::Connect {
            host: host.to_string(),
        })?;

    if let Err(e) = handle.write(message.as_bytes()).await {
        debug!("[TCP] write to {}:{} failed: {}", host, port, e);
    }
    let lines = handle.read_available_lines().await;
    handle.close().await;

    for line in lines {
        dev.display(line);
    }
    Ok(())
}

/// `post <url> <data>` — minimal HTTP POST to port 80, response shown raw
pub async fn handle_post<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let usage = || CommandError::Validation("usage: post <url> <data>".into());
    let (url, data) = args.trim_start().split_once(' ').ok_or_else(usage)?;

    if dev.radio.state().await != LinkState::Connected {
        return Ok(());
    }

    let lines = dev
        .http
        .post(url, data)
        .await
        .map_err(|_| CommandError::Connect {
            host: url.to_string(),
        })?;
    for line in lines {
        dev.display(line);
    }
    Ok(())
}

/// `get <url>` — minimal HTTP GET to port 80; no-op while the link is down
pub async fn handle_get<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let url = args.trim();
    if url.is_empty() {
        return Err(CommandError::Validation("usage: get <url>".into()));
    }

    if dev.radio.state().await != LinkState::Connected {
        return Ok(());
    }

    let lines = dev
        .http
        .get(url)
        .await
        .map_err(|_| CommandError::Connect {
            host: url.to_string(),
        })?;
    for line in lines {
        dev.display(line);
    }
    Ok(())
}
