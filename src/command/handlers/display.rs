//! Display-facing command handlers

use crate::config::{TEXT_SIZE_MAX, TEXT_SIZE_MIN};
use crate::device::Device;
use crate::display::Panel;
use crate::error::{CommandError, CommandResult};

/// `text <message>` — put a line on the screen
pub async fn handle_text<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    dev.display(args);
    Ok(())
}

/// `clear` — repaint the background and reset the cursor
pub async fn handle_clear<P: Panel>(dev: &mut Device<P>) -> CommandResult {
    dev.sink.clear(&dev.config);
    Ok(())
}

/// `size <n>` — set the text size, range-checked before any mutation
pub async fn handle_size<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let value: i64 = args.trim().parse().map_err(|_| size_range_error())?;
    if !(i64::from(TEXT_SIZE_MIN)..=i64::from(TEXT_SIZE_MAX)).contains(&value) {
        return Err(size_range_error());
    }

    dev.config.text_size = value as u8;
    dev.sink.set_text_size(dev.config.text_size);
    dev.display(format!("Text size set to: {value}"));
    Ok(())
}

/// `brightness <n>` — set the backlight level, range-checked
pub async fn handle_brightness<P: Panel>(dev: &mut Device<P>, args: &str) -> CommandResult {
    let value: i64 = args.trim().parse().map_err(|_| brightness_range_error())?;
    if !(0..=255).contains(&value) {
        return Err(brightness_range_error());
    }

    dev.config.brightness = value as u8;
    dev.sink.set_brightness(dev.config.brightness);
    dev.display(format!("Brightness set to: {value}"));
    Ok(())
}

fn size_range_error() -> CommandError {
    CommandError::Validation(format!(
        "Text size must be between {TEXT_SIZE_MIN} and {TEXT_SIZE_MAX}."
    ))
}

fn brightness_range_error() -> CommandError {
    CommandError::Validation("Brightness value must be between 0 and 255.".into())
}
