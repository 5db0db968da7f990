//! MCP prompt templates rendered over a single document.

pub mod registry;
pub mod rewrite_doc_markdown;
pub mod summarize_doc;

pub use registry::PromptRegistry;

use serde_json::Value;

use doc_store::{Message, Role, TemplateKind};

use crate::types::{
    DocIdArgs, McpError, McpResult, PromptArgument, PromptGetResult, PromptMessage, ToolContent,
};
use crate::SharedStore;

/// The single `doc_id` argument every prompt takes.
fn doc_id_argument(description: &str) -> Vec<PromptArgument> {
    vec![PromptArgument {
        name: "doc_id".to_string(),
        description: Some(description.to_string()),
        required: true,
    }]
}

/// Render `kind` over the document named in `args`.
async fn render(
    kind: TemplateKind,
    description: &str,
    args: Value,
    store: &SharedStore,
) -> McpResult<PromptGetResult> {
    let params: DocIdArgs = serde_json::from_value(args)
        .map_err(|_| McpError::InvalidParams("'doc_id' argument is required".to_string()))?;

    let store = store.lock().await;
    let messages = store.render_template(&params.doc_id, kind)?;

    Ok(PromptGetResult {
        description: Some(description.to_string()),
        messages: messages.into_iter().map(to_prompt_message).collect(),
    })
}

/// MCP prompt messages only carry `user` or `assistant`; the instruction
/// message goes out as `user`, ahead of the document message.
fn to_prompt_message(message: Message) -> PromptMessage {
    let role = match message.role {
        Role::System | Role::User => "user",
    };
    PromptMessage {
        role: role.to_string(),
        content: ToolContent::Text { text: message.text },
    }
}
