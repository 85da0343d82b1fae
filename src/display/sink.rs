//! Append-only text sink over the panel

use super::Panel;
use crate::config::{DeviceConfig, ROW_HEIGHT_PX};
use crate::control::ControlSender;

/// Owns the append/scroll policy for the text surface.
///
/// Every write is duplicated verbatim to the control channel while it is
/// enabled, so a remote terminal stays in sync with the on-device screen.
pub struct DisplaySink<P: Panel> {
    pub panel: P,
    control: ControlSender,
}

impl<P: Panel> DisplaySink<P> {
    pub fn new(panel: P, control: ControlSender) -> Self {
        Self { panel, control }
    }

    /// Write one line, scrolling first when it would run off the bottom.
    pub fn write(&mut self, config: &DeviceConfig, line: &str) {
        let row = i32::from(config.text_size) * ROW_HEIGHT_PX;
        if self.panel.cursor_y() + row > self.panel.height() {
            self.panel.scroll_up(row, config.background);
            let bottom = self.panel.height() - row;
            self.panel.set_cursor(0, bottom);
        }
        self.panel.write_line(line);

        if config.control_channel_enabled {
            self.control.send(line);
        }
    }

    /// Repaint the background and park the cursor at the origin
    pub fn clear(&mut self, config: &DeviceConfig) {
        self.panel.fill_screen(config.background);
        self.panel.set_cursor(0, 0);
    }

    pub fn set_text_size(&mut self, size: u8) {
        self.panel.set_text_size(size);
    }

    pub fn set_text_color(&mut self, fg: u16, bg: u16) {
        self.panel.set_text_color(fg, bg);
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.panel.set_brightness(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::SimPanel;
    use tokio::sync::mpsc;

    fn sink() -> (DisplaySink<SimPanel>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(64);
        (
            DisplaySink::new(SimPanel::with_size(240, 32), ControlSender::new(tx)),
            rx,
        )
    }

    #[test]
    fn test_write_mirrors_to_control_channel() {
        let (mut sink, mut rx) = sink();
        let config = DeviceConfig::default();

        sink.write(&config, "hello");
        assert_eq!(sink.panel.lines, vec!["hello"]);
        assert_eq!(rx.try_recv().unwrap(), "hello");
    }

    #[test]
    fn test_mirror_gated_on_enabled_flag() {
        let (mut sink, mut rx) = sink();
        let config = DeviceConfig {
            control_channel_enabled: false,
            ..Default::default()
        };

        sink.write(&config, "hello");
        assert_eq!(sink.panel.lines, vec!["hello"]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_overflow_scrolls_once_per_line_and_bounds_cursor() {
        let (mut sink, _rx) = sink();
        let config = DeviceConfig::default(); // text_size 1 => 8px rows, 32px tall

        // Four rows fit exactly; each further write scrolls exactly once
        for i in 0..4 {
            sink.write(&config, &format!("line {i}"));
        }
        assert_eq!(sink.panel.scrolls, 0);

        sink.write(&config, "line 4");
        assert_eq!(sink.panel.scrolls, 1);

        sink.write(&config, "line 5");
        assert_eq!(sink.panel.scrolls, 2);

        assert!(sink.panel.cursor_y() <= sink.panel.height());
    }

    #[test]
    fn test_clear_resets_cursor() {
        let (mut sink, _rx) = sink();
        let config = DeviceConfig::default();

        sink.write(&config, "something");
        sink.clear(&config);
        assert_eq!(sink.panel.cursor_y(), 0);
        assert_eq!(sink.panel.fills, 1);
    }
}
