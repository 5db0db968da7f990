//! MCP protocol layer: dispatch, request validation, and the initialize handshake.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
