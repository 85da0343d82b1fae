mod command;
mod config;
mod control;
mod device;
mod display;
mod error;
mod link;
mod radio;
mod transport;
mod web;

use command::dispatch;
use config::DeviceConfig;
use control::{ControlConfig, ControlPort, ControlSender};
use device::{Device, DEVICE_NAME, DEVICE_VERSION};
use display::{DisplaySink, SimPanel};
use link::LinkManager;
use radio::{LinkState, Radio, SimRadio};
use transport::{DatagramAdapter, HttpClient, StreamAdapter, StreamConfig};
use web::WebSurface;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bound on the boot-time association wait; the link manager keeps
/// retrying on its own interval afterwards either way.
const BOOT_ASSOCIATION_TIMEOUT: Duration = Duration::from_secs(20);

/// Where the inbound HTTP command surface binds once `start_web` runs
const WEB_LISTEN: &str = "0.0.0.0:8080";

/// One unit of work for a control loop iteration
enum Event {
    /// A command line, from the control channel or the web surface
    Line(String),
    /// An inbound datagram payload
    Datagram(String),
    /// Periodic link supervision tick
    Tick,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = DeviceConfig::default();
    let control_config = ControlConfig::default();

    info!("{} {} starting", DEVICE_NAME, DEVICE_VERSION);
    info!(
        "  control channel: {:?} ({})",
        control_config.mode, control_config.tcp_listen
    );
    info!("  datagram endpoint: {}", config.datagram_endpoint);

    // Control channel plumbing: inbound command lines, outbound mirror
    let (line_tx, mut line_rx) = mpsc::channel::<String>(16);
    let (out_tx, out_rx) = mpsc::channel::<String>(100);
    let control = ControlSender::new(out_tx);
    let port = ControlPort::new(control_config, line_tx, out_rx);

    // The web surface queues commands into the same loop
    let (web_tx, mut web_rx) = mpsc::channel::<String>(16);
    let web = WebSurface::new(WEB_LISTEN, web_tx);

    let radio: Arc<dyn Radio> = Arc::new(SimRadio::new());
    let stream = StreamAdapter::new(StreamConfig::default());
    let datagram = DatagramAdapter::bind(config.datagram_listen_port).await?;

    let mut dev = Device {
        sink: DisplaySink::new(SimPanel::new(), control.clone()),
        control,
        port,
        datagram,
        http: HttpClient::new(stream.clone()),
        stream,
        radio: radio.clone(),
        link: LinkManager::new(radio),
        web,
        config,
    };

    boot(&mut dev).await;

    // Main control loop: one event fully handled per iteration, so command
    // execution and the link check never overlap.
    let mut ticker = interval(Duration::from_secs(1));
    loop {
        let event = tokio::select! {
            Some(line) = line_rx.recv() => Event::Line(line),
            Some(line) = web_rx.recv() => Event::Line(line),
            packet = dev.datagram.recv() => match packet {
                Ok(payload) => Event::Datagram(payload),
                Err(e) => {
                    warn!("[UDP] receive failed: {}", e);
                    continue;
                }
            },
            _ = ticker.tick() => Event::Tick,
        };

        match event {
            Event::Line(line) => {
                dev.display(format!("> {}", line.trim()));
                dispatch(&mut dev, &line).await;
            }
            Event::Datagram(payload) => {
                dev.display(format!("UDP received: {payload}"));
            }
            Event::Tick => {
                let notice = dev
                    .link
                    .check(Instant::now(), &dev.config.link_credentials)
                    .await;
                if let Some(notice) = notice {
                    dev.display(notice);
                }
            }
        }
    }
}

/// Startup sequence: join the network, then bring up the control channel
async fn boot(dev: &mut Device<SimPanel>) {
    dev.sink
        .set_text_color(dev.config.foreground, dev.config.background);
    dev.sink.set_text_size(dev.config.text_size);
    dev.sink.set_brightness(dev.config.brightness);
    dev.sink.clear(&dev.config);
    dev.display("Connecting to WiFi...");

    let credentials = dev.config.link_credentials.clone();
    if let Err(e) = dev
        .radio
        .begin_association(&credentials.ssid, &credentials.secret)
        .await
    {
        warn!("[BOOT] association request failed: {}", e);
    }

    let deadline = Instant::now() + BOOT_ASSOCIATION_TIMEOUT;
    while dev.radio.state().await != LinkState::Connected {
        if Instant::now() >= deadline {
            break;
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    if dev.radio.state().await == LinkState::Connected {
        dev.display("WiFi Connected!");
    } else {
        dev.display("WiFi not connected, retrying in background");
    }

    if dev.config.control_channel_enabled {
        dev.port.open();
    }
    dev.announce_boot();
}
