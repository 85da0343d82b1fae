//! Device configuration owned by the control loop
//!
//! There is exactly one writer: the command dispatcher. Everything else
//! (display sink, transport adapters) reads the fields it needs per call.

use std::fmt;

/// RGB565 white, the panel's default foreground
pub const COLOR_WHITE: u16 = 0xFFFF;
/// RGB565 black, the panel's default background
pub const COLOR_BLACK: u16 = 0x0000;

/// Valid text size range accepted by `size`
pub const TEXT_SIZE_MIN: u8 = 1;
pub const TEXT_SIZE_MAX: u8 = 4;

/// Pixel height of one text row at size 1 (panel font height)
pub const ROW_HEIGHT_PX: i32 = 8;

/// Destination for the datagram transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Wireless link credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub ssid: String,
    pub secret: String,
}

/// Mutable device state shared across command handlers
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Whether the wireless serial control channel is up
    pub control_channel_enabled: bool,
    /// Display text size, always within [TEXT_SIZE_MIN, TEXT_SIZE_MAX]
    pub text_size: u8,
    /// Backlight level
    pub brightness: u8,
    /// RGB565 text color
    pub foreground: u16,
    /// RGB565 background color
    pub background: u16,
    /// Current target for `udp` sends
    pub datagram_endpoint: Endpoint,
    /// Local port the datagram socket is bound to at startup
    pub datagram_listen_port: u16,
    /// Credentials used for (re)association
    pub link_credentials: Credentials,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            control_channel_enabled: true,
            text_size: 1,
            brightness: 128,
            foreground: COLOR_WHITE,
            background: COLOR_BLACK,
            datagram_endpoint: Endpoint {
                host: "192.168.0.100".into(),
                port: 12345,
            },
            datagram_listen_port: 12345,
            link_credentials: Credentials {
                ssid: "dtfos-net".into(),
                secret: "changeme".into(),
            },
        }
    }
}
