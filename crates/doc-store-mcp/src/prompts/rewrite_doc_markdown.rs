//! Prompt template: rewrite a document as Markdown.

use serde_json::Value;

use doc_store::TemplateKind;

use crate::types::{McpResult, PromptDefinition, PromptGetResult};
use crate::SharedStore;

const DESCRIPTION: &str = "Rewrite the contents of a document in well-structured Markdown format.";

/// Return the prompt definition for rewrite_doc_markdown.
pub fn definition() -> PromptDefinition {
    PromptDefinition {
        name: "rewrite_doc_markdown".to_string(),
        description: Some(DESCRIPTION.to_string()),
        arguments: Some(super::doc_id_argument(
            "The ID of the document whose content should be rewritten in Markdown.",
        )),
    }
}

/// Expand the `rewrite_doc_markdown` prompt with the given arguments.
pub async fn expand(args: Value, store: &SharedStore) -> McpResult<PromptGetResult> {
    super::render(TemplateKind::RewriteAsMarkdown, DESCRIPTION, args, store).await
}
