//! Verb routing and error policy
//!
//! One implicit state: idle. A new line is only dispatched after the
//! previous handler returned, so handlers never overlap and the config
//! has one writer at a time.

use super::handlers;
use super::parser;
use super::verb::Verb;
use crate::device::Device;
use crate::display::Panel;
use crate::error::CommandError;

/// Route one inbound line. Never fails; every error path reports and
/// hands control back to the loop.
pub async fn dispatch<P: Panel>(dev: &mut Device<P>, line: &str) {
    let cmd = parser::parse(line);
    if cmd.verb.is_empty() {
        return;
    }

    let Some(verb) = Verb::lookup(&cmd.verb) else {
        dev.control_reply(format!("Unknown command: {}", line.trim()));
        return;
    };

    let result = match verb {
        Verb::Help => handlers::handle_help(dev).await,
        Verb::Clear => handlers::handle_clear(dev).await,
        Verb::Info => handlers::handle_info(dev).await,
        Verb::Text => handlers::handle_text(dev, &cmd.args).await,
        Verb::Brightness => handlers::handle_brightness(dev, &cmd.args).await,
        Verb::ToggleBt => handlers::handle_toggle_bt(dev).await,
        Verb::Size => handlers::handle_size(dev, &cmd.args).await,
        Verb::Scan => handlers::handle_scan(dev).await,
        Verb::Udp => handlers::handle_udp(dev, &cmd.args).await,
        Verb::UdpSet => handlers::handle_udp_set(dev, &cmd.args).await,
        Verb::Tcp => handlers::handle_tcp(dev, &cmd.args).await,
        Verb::Post => handlers::handle_post(dev, &cmd.args).await,
        Verb::Get => handlers::handle_get(dev, &cmd.args).await,
        Verb::Wifi => handlers::handle_wifi(dev, &cmd.args).await,
        Verb::Ip => handlers::handle_ip(dev).await,
        Verb::WifiStatus => handlers::handle_wifi_status(dev).await,
        Verb::StartWeb => handlers::handle_start_web(dev).await,
    };

    if let Err(err) = result {
        match err {
            // Out-of-range and malformed input stays off the small screen
            CommandError::Validation(_) => dev.control_reply(err.to_string()),
            // Transport and scan failures name the problem on-screen
            CommandError::Connect { .. } | CommandError::Scan => dev.display(err.to_string()),
        }
    }
}
