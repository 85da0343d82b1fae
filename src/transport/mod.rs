//! Outbound message transports
//!
//! Three channel kinds with uniform, timeout-bounded contracts: a
//! connectionless datagram adapter, a connection-oriented stream adapter,
//! and a minimal one-shot HTTP client layered on the stream adapter.

mod datagram;
mod http;
mod stream;

pub use datagram::DatagramAdapter;
pub use http::HttpClient;
pub use stream::{StreamAdapter, StreamConfig, StreamHandle};
