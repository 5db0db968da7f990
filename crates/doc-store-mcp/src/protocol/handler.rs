//! Request dispatcher: routes JSON-RPC methods to tools, resources, and prompts.

use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::prompts::PromptRegistry;
use crate::resources::ResourceRegistry;
use crate::tools::ToolRegistry;
use crate::types::{
    InitializeParams, JsonRpcMessage, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
    ListParams, McpError, McpResult, PromptGetParams, PromptListResult, ResourceListResult,
    ResourceReadParams, ResourceTemplateListResult, ToolCallParams, ToolCallResult,
    ToolListResult,
};
use crate::SharedStore;

use super::negotiation::Handshake;
use super::validator::{optional_params, required_params, validate_request};

/// Handles one JSON-RPC message at a time against the owned document store.
pub struct ProtocolHandler {
    store: SharedStore,
    handshake: Mutex<Handshake>,
}

impl ProtocolHandler {
    /// Create a handler that owns `store` for the rest of the process.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            handshake: Mutex::new(Handshake::default()),
        }
    }

    /// Handle an incoming message. Returns the serialized reply, or `None`
    /// for notifications and stray responses.
    pub async fn handle_message(&self, msg: JsonRpcMessage) -> Option<Value> {
        match msg {
            JsonRpcMessage::Request(request) => Some(self.handle_request(request).await),
            JsonRpcMessage::Notification(notification) => {
                self.handle_notification(notification).await;
                None
            }
            JsonRpcMessage::Response(_) | JsonRpcMessage::Error(_) => {
                tracing::debug!("Ignoring client response message");
                None
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();
        tracing::debug!(id = %id, method = %request.method, "Handling request");

        let outcome = match validate_request(&request) {
            Ok(()) => self.dispatch(&request.method, request.params).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => serde_json::to_value(JsonRpcResponse::new(id, result))
                .unwrap_or_default(),
            Err(e) => {
                tracing::warn!(method = %request.method, code = e.code(), "Request failed: {e}");
                serde_json::to_value(e.to_json_rpc_error(id)).unwrap_or_default()
            }
        }
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> McpResult<Value> {
        match method {
            "initialize" => {
                let params: InitializeParams = required_params(params)?;
                let result = self.handshake.lock().await.negotiate(params)?;
                Ok(serde_json::to_value(result)?)
            }
            "ping" => Ok(json!({})),
            _ => {
                self.handshake.lock().await.ensure_ready()?;
                self.dispatch_initialized(method, params).await
            }
        }
    }

    async fn dispatch_initialized(&self, method: &str, params: Option<Value>) -> McpResult<Value> {
        match method {
            "tools/list" => {
                let _: ListParams = optional_params(params)?;
                Ok(serde_json::to_value(ToolListResult {
                    tools: ToolRegistry::list_tools(),
                })?)
            }
            "tools/call" => {
                let params: ToolCallParams = required_params(params)?;
                let result = match ToolRegistry::call(&params.name, params.arguments, &self.store)
                    .await
                {
                    Ok(result) => result,
                    Err(e) if e.is_tool_error() => {
                        tracing::info!(tool = %params.name, "Tool reported error: {e}");
                        ToolCallResult::error(e.to_string())
                    }
                    Err(e) => return Err(e),
                };
                Ok(serde_json::to_value(result)?)
            }
            "resources/list" => {
                let _: ListParams = optional_params(params)?;
                Ok(serde_json::to_value(ResourceListResult {
                    resources: ResourceRegistry::list_resources(),
                })?)
            }
            "resources/templates/list" => {
                let _: ListParams = optional_params(params)?;
                Ok(serde_json::to_value(ResourceTemplateListResult {
                    resource_templates: ResourceRegistry::list_templates(),
                })?)
            }
            "resources/read" => {
                let params: ResourceReadParams = required_params(params)?;
                let result = ResourceRegistry::read(&params.uri, &self.store).await?;
                Ok(serde_json::to_value(result)?)
            }
            "prompts/list" => {
                let _: ListParams = optional_params(params)?;
                Ok(serde_json::to_value(PromptListResult {
                    prompts: PromptRegistry::list_prompts(),
                })?)
            }
            "prompts/get" => {
                let params: PromptGetParams = required_params(params)?;
                let result = PromptRegistry::get(&params.name, params.arguments, &self.store).await?;
                Ok(serde_json::to_value(result)?)
            }
            _ => Err(McpError::MethodNotFound(method.to_string())),
        }
    }

    async fn handle_notification(&self, notification: JsonRpcNotification) {
        match notification.method.as_str() {
            "initialized" | "notifications/initialized" => {
                self.handshake.lock().await.confirm();
            }
            // Every request runs to completion; cancellation is acknowledged only.
            "notifications/cancelled" | "$/cancelRequest" => {
                tracing::debug!("Ignoring cancellation: {:?}", notification.params);
            }
            other => tracing::debug!("Unhandled notification: {other}"),
        }
    }
}
