//! Command handlers grouped by concern
//!
//! Handlers emit their own success text and return a `CommandError` for
//! anything that must be reported; the dispatcher owns where each error
//! kind lands.

mod display;
mod net;
mod system;
mod wifi;

pub use display::{handle_brightness, handle_clear, handle_size, handle_text};
pub use net::{handle_get, handle_post, handle_tcp, handle_udp, handle_udp_set};
pub use system::{handle_help, handle_info, handle_start_web, handle_toggle_bt};
pub use wifi::{handle_ip, handle_scan, handle_wifi, handle_wifi_status};
