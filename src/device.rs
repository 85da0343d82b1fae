//! Aggregate device context
//!
//! One instance, owned by the control loop task. All command handlers get
//! `&mut Device`, which makes the loop the single writer of DeviceConfig
//! by construction.

use crate::config::DeviceConfig;
use crate::control::{ControlPort, ControlSender};
use crate::display::{DisplaySink, Panel};
use crate::link::LinkManager;
use crate::radio::Radio;
use crate::transport::{DatagramAdapter, HttpClient, StreamAdapter};
use crate::web::WebSurface;
use std::sync::Arc;

pub const DEVICE_NAME: &str = "DT-FOS";
pub const DEVICE_VERSION: &str = "V0.2";

pub struct Device<P: Panel> {
    pub config: DeviceConfig,
    pub sink: DisplaySink<P>,
    pub control: ControlSender,
    pub port: ControlPort,
    pub datagram: DatagramAdapter,
    pub stream: StreamAdapter,
    pub http: HttpClient,
    pub radio: Arc<dyn Radio>,
    pub link: LinkManager,
    pub web: WebSurface,
}

impl<P: Panel> Device<P> {
    /// Write through the display sink; mirrored to the control channel
    pub fn display(&mut self, line: impl AsRef<str>) {
        self.sink.write(&self.config, line.as_ref());
    }

    /// Control-channel-only output: help, unknown commands, validation
    /// errors. Bypasses the display to keep static and error text off the
    /// small screen.
    pub fn control_reply(&self, line: impl Into<String>) {
        if self.config.control_channel_enabled {
            self.control.send(line);
        }
    }

    /// Boot banner, as the firmware has always printed it
    pub fn announce_boot(&mut self) {
        self.display(format!("Bluetooth: {DEVICE_NAME}"));
        self.display("OS Initialized");
        self.display(format!("OS Version: {DEVICE_VERSION}"));
    }
}
