//! Structural checks on incoming JSON-RPC requests.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{JsonRpcRequest, McpError, McpResult, JSONRPC_VERSION};

/// Reject requests that are not well-formed JSON-RPC 2.0.
pub fn validate_request(request: &JsonRpcRequest) -> McpResult<()> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(McpError::InvalidRequest(format!(
            "Unsupported jsonrpc version '{}', expected '{JSONRPC_VERSION}'",
            request.jsonrpc
        )));
    }
    if request.method.is_empty() {
        return Err(McpError::InvalidRequest("Method must not be empty".to_string()));
    }
    Ok(())
}

/// Decode required request params into `T`.
pub fn required_params<T: DeserializeOwned>(params: Option<Value>) -> McpResult<T> {
    let params = params.ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))?;
    serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Decode optional request params into `T`, falling back to `T::default()`.
pub fn optional_params<T: DeserializeOwned + Default>(params: Option<Value>) -> McpResult<T> {
    match params {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_json::from_value(value).map_err(|e| McpError::InvalidParams(e.to_string()))
        }
    }
}
