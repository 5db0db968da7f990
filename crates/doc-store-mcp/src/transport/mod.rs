//! Transports carrying JSON-RPC messages to and from the protocol handler.

pub mod sse;
pub mod stdio;

#[cfg(feature = "sse")]
pub use sse::SseTransport;
pub use stdio::StdioTransport;
