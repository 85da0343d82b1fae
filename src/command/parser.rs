//! Free-form line parsing
//!
//! One split at the first space: verb plus raw argument remainder.
//! Handlers own any further tokenization of their arguments.

/// A parsed command line. Transient: produced per inbound line, consumed
/// immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub args: String,
}

/// Parse a raw line. Never fails; an empty line yields an empty verb.
pub fn parse(line: &str) -> Command {
    let line = line.trim();
    match line.split_once(' ') {
        Some((verb, rest)) => Command {
            verb: verb.to_string(),
            args: rest.to_string(),
        },
        None => Command {
            verb: line.to_string(),
            args: String::new(),
        },
    }
}
