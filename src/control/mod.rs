//! Wireless serial control channel
//!
//! Inbound command lines and outbound echoes travel over one bidirectional
//! text link: Bluetooth RFCOMM on the device, a TCP stand-in during
//! development. The port owns the io task; the rest of the crate only sees
//! mpsc endpoints.

mod channel;
mod port;

pub use channel::ControlSender;
pub use port::{ControlConfig, ControlMode, ControlPort};
