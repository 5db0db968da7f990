//! MCP error types and JSON-RPC error code mapping.

use doc_store::StoreError;

use super::message::{JsonRpcError, RequestId};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters.
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Server-defined error codes for MCP-level failures.
pub mod mcp_error_codes {
    /// Resource URI did not match any resource or template.
    pub const RESOURCE_NOT_FOUND: i32 = -32002;
    /// Unknown tool name.
    pub const TOOL_NOT_FOUND: i32 = -32803;
    /// Unknown prompt name.
    pub const PROMPT_NOT_FOUND: i32 = -32804;
    /// Document id is not in the store.
    pub const DOCUMENT_NOT_FOUND: i32 = -32850;
}

/// Errors raised while handling MCP requests.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Same message as [`StoreError::NotFound`].
    #[error("Document with ID '{0}' not found.")]
    DocumentNotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

impl From<StoreError> for McpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => McpError::DocumentNotFound(id),
        }
    }
}

impl McpError {
    /// JSON-RPC error code for this error.
    pub fn code(&self) -> i32 {
        match self {
            McpError::ParseError(_) => error_codes::PARSE_ERROR,
            McpError::InvalidRequest(_) => error_codes::INVALID_REQUEST,
            McpError::MethodNotFound(_) => error_codes::METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => error_codes::INVALID_PARAMS,
            McpError::InternalError(_)
            | McpError::Transport(_)
            | McpError::Config(_)
            | McpError::Io(_)
            | McpError::Json(_) => error_codes::INTERNAL_ERROR,
            McpError::ToolNotFound(_) => mcp_error_codes::TOOL_NOT_FOUND,
            McpError::PromptNotFound(_) => mcp_error_codes::PROMPT_NOT_FOUND,
            McpError::ResourceNotFound(_) => mcp_error_codes::RESOURCE_NOT_FOUND,
            McpError::DocumentNotFound(_) => mcp_error_codes::DOCUMENT_NOT_FOUND,
        }
    }

    /// Whether a `tools/call` should report this as a tool-level failure
    /// (`isError: true`) rather than a JSON-RPC error.
    pub fn is_tool_error(&self) -> bool {
        matches!(self, McpError::DocumentNotFound(_))
    }

    /// Build the JSON-RPC error response for a request.
    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        JsonRpcError::new(id, self.code(), self.to_string())
    }
}
