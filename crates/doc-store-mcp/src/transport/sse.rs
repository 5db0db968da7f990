//! JSON-RPC over `POST /mcp`, for clients that cannot spawn a subprocess.

#[cfg(feature = "sse")]
use std::sync::Arc;

#[cfg(feature = "sse")]
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

#[cfg(feature = "sse")]
use crate::protocol::ProtocolHandler;
#[cfg(feature = "sse")]
use crate::types::{JsonRpcMessage, McpError, McpResult};

/// HTTP transport for web-based MCP clients.
#[cfg(feature = "sse")]
pub struct SseTransport {
    handler: Arc<ProtocolHandler>,
}

#[cfg(feature = "sse")]
impl SseTransport {
    /// Create a new HTTP transport.
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the router: `POST /mcp` for messages, `GET /health` for liveness checks.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/mcp", post(Self::handle_request))
            .route("/health", get(|| async { "ok" }))
            .layer(tower_http::cors::CorsLayer::permissive())
            .with_state(self.handler.clone())
    }

    /// Run the server on the given address.
    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("HTTP transport listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| McpError::Transport(e.to_string()))?;

        Ok(())
    }

    async fn handle_request(
        State(handler): State<Arc<ProtocolHandler>>,
        Json(body): Json<serde_json::Value>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let msg = match JsonRpcMessage::from_value(body) {
            Ok(msg) => msg,
            Err(error) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::to_value(error).unwrap_or_default()),
                );
            }
        };

        match handler.handle_message(msg).await {
            Some(response) => (StatusCode::OK, Json(response)),
            None => (StatusCode::ACCEPTED, Json(serde_json::Value::Null)),
        }
    }
}
