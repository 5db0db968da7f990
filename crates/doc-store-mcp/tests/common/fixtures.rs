//! Test data fixtures for MCP server tests.
#![allow(dead_code)]

use serde_json::{json, Value};

use doc_store::DocumentStore;
use doc_store_mcp::types::{JsonRpcMessage, JsonRpcNotification, JsonRpcRequest, RequestId};
use doc_store_mcp::{share, ProtocolHandler, SharedStore};

/// A store holding the built-in seed documents.
pub fn create_test_store() -> SharedStore {
    share(DocumentStore::seeded())
}

/// A store holding the single document `a.md` = "hello world".
pub fn hello_store() -> SharedStore {
    share(DocumentStore::from_documents([("a.md", "hello world")]))
}

/// A handler over `store` that has completed the initialize handshake.
pub async fn initialized_handler(store: SharedStore) -> ProtocolHandler {
    let handler = ProtocolHandler::new(store);
    let init = JsonRpcRequest::new(
        RequestId::Number(0),
        "initialize",
        Some(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test", "version": "1.0"}
        })),
    );
    handler.handle_message(JsonRpcMessage::Request(init)).await;
    handler
        .handle_message(JsonRpcMessage::Notification(JsonRpcNotification::new(
            "notifications/initialized",
            None,
        )))
        .await;
    handler
}

/// Send a request and return the reply.
pub async fn request(handler: &ProtocolHandler, method: &str, params: Value) -> Value {
    let req = JsonRpcRequest::new(RequestId::Number(1), method, Some(params));
    handler
        .handle_message(JsonRpcMessage::Request(req))
        .await
        .expect("requests always get a reply")
}
