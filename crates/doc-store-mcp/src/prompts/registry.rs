//! Prompt registration and dispatch for MCP prompt templates.

use serde_json::Value;

use crate::types::{McpError, McpResult, PromptDefinition, PromptGetResult};
use crate::SharedStore;

use super::{rewrite_doc_markdown, summarize_doc};

/// Registry of all available MCP prompts.
pub struct PromptRegistry;

impl PromptRegistry {
    /// List all available prompt definitions.
    pub fn list_prompts() -> Vec<PromptDefinition> {
        vec![
            rewrite_doc_markdown::definition(),
            summarize_doc::definition(),
        ]
    }

    /// Expand a prompt with the given arguments, dispatching to the appropriate handler.
    pub async fn get(
        name: &str,
        arguments: Option<Value>,
        store: &SharedStore,
    ) -> McpResult<PromptGetResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "rewrite_doc_markdown" => rewrite_doc_markdown::expand(args, store).await,
            "summarize_doc" => summarize_doc::expand(args, store).await,
            _ => Err(McpError::PromptNotFound(name.to_string())),
        }
    }
}
