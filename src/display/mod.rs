//! Display surface
//!
//! The panel trait is the seam to the real LCD driver; the sink owns the
//! append/scroll policy and mirrors every write to the control channel.

mod panel;
mod sink;

pub use panel::{Panel, SimPanel};
pub use sink::DisplaySink;
