//! Link supervision
//!
//! Keeps the wireless association alive independently of command
//! processing: a periodic poll that requests reassociation whenever the
//! link is down.

mod manager;

pub use manager::{LinkManager, LINK_CHECK_INTERVAL};
