//! Command error taxonomy
//!
//! Handlers return these instead of writing failure text themselves; the
//! dispatcher owns the routing policy. Validation errors go to the control
//! channel only, transport and scan errors go through the display sink.
//! Nothing here is fatal to the control loop.

use thiserror::Error;

/// Failures a command handler can report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Argument out of its declared range or malformed token count
    #[error("Error: {0}")]
    Validation(String),

    /// Stream connect failure naming the remote endpoint
    #[error("could not connect to {host}")]
    Connect { host: String },

    /// The network collaborator returned its scan failure sentinel
    #[error("Scan failed")]
    Scan,
}

pub type CommandResult = Result<(), CommandError>;
