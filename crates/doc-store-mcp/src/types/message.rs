//! Wire envelopes. Every line on the transport is exactly one of these.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{error_codes, McpError};

pub const JSONRPC_VERSION: &str = "2.0";

/// Correlates a reply with its request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
    /// Used when replying to a message whose id could not be read.
    Null,
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_owned())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::String(s) => f.write_str(s),
            RequestId::Number(n) => n.fmt(f),
            RequestId::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<RequestId>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// Fire-and-forget message: carries a method but no id and gets no reply.
///
/// Unknown fields are refused so that a request with an unreadable `id`
/// is never mistaken for a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn new(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub jsonrpc: String,
    pub id: RequestId,
    pub error: JsonRpcErrorObject,
}

/// The `error` member of a failed reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(id: RequestId, code: i32, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            error: JsonRpcErrorObject {
                code,
                message,
                data: None,
            },
        }
    }

    /// Reply to a line that could not be decoded; its id is unknown.
    pub fn parse_error(message: String) -> Self {
        Self::new(RequestId::Null, error_codes::PARSE_ERROR, message)
    }
}

/// Any message read off the wire.
///
/// Variant order matters: `Request` needs both `id` and `method`, so it must
/// be tried before `Notification`, which only needs `method`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    Request(JsonRpcRequest),
    Response(JsonRpcResponse),
    Error(JsonRpcError),
    Notification(JsonRpcNotification),
}

impl JsonRpcMessage {
    /// Decode one wire line.
    ///
    /// Text that is not JSON is a parse error; JSON that is not a valid
    /// message is an invalid request. Both are answered with a null id.
    pub fn decode(line: &str) -> Result<Self, JsonRpcError> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| JsonRpcError::parse_error(format!("Parse error: {e}")))?;
        Self::from_value(value)
    }

    /// Decode an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, JsonRpcError> {
        serde_json::from_value(value).map_err(|e| {
            McpError::InvalidRequest(format!("Not a JSON-RPC 2.0 message: {e}"))
                .to_json_rpc_error(RequestId::Null)
        })
    }

    pub fn method(&self) -> Option<&str> {
        match self {
            JsonRpcMessage::Request(r) => Some(&r.method),
            JsonRpcMessage::Notification(n) => Some(&n.method),
            JsonRpcMessage::Response(_) | JsonRpcMessage::Error(_) => None,
        }
    }
}
