//! Panel collaborator trait and the development stand-in

use tracing::debug;

/// Raw display driver seam.
///
/// Units are pixels; one text row is `text_size * 8` pixels tall. The sink
/// owns overflow policy, the panel owns rendering.
pub trait Panel: Send {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn cursor_y(&self) -> i32;
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Print a line at the cursor and advance it one text row
    fn write_line(&mut self, line: &str);

    fn fill_screen(&mut self, color: u16);

    /// Shift contents up by `px` and clear the vacated strip to `color`
    fn scroll_up(&mut self, px: i32, color: u16);

    fn set_text_size(&mut self, size: u8);
    fn set_text_color(&mut self, fg: u16, bg: u16);
    fn set_brightness(&mut self, level: u8);
}

/// In-memory panel used off-device and in tests.
///
/// Tracks the same cursor geometry as the 240x135 LCD and records what was
/// rendered instead of pushing pixels.
pub struct SimPanel {
    width: i32,
    height: i32,
    cursor_y: i32,
    text_size: u8,
    pub lines: Vec<String>,
    pub scrolls: u32,
    pub fills: u32,
    pub brightness: u8,
}

impl SimPanel {
    pub fn new() -> Self {
        Self::with_size(240, 135)
    }

    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cursor_y: 0,
            text_size: 1,
            lines: Vec::new(),
            scrolls: 0,
            fills: 0,
            brightness: 128,
        }
    }
}

impl Default for SimPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for SimPanel {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn cursor_y(&self) -> i32 {
        self.cursor_y
    }

    fn set_cursor(&mut self, _x: i32, y: i32) {
        self.cursor_y = y;
    }

    fn write_line(&mut self, line: &str) {
        debug!("[LCD] {}", line);
        self.lines.push(line.to_string());
        self.cursor_y += i32::from(self.text_size) * 8;
    }

    fn fill_screen(&mut self, _color: u16) {
        self.fills += 1;
    }

    fn scroll_up(&mut self, _px: i32, _color: u16) {
        self.scrolls += 1;
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size;
    }

    fn set_text_color(&mut self, _fg: u16, _bg: u16) {}

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}
