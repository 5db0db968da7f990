//! Prompt template: summarize a document.

use serde_json::Value;

use doc_store::TemplateKind;

use crate::types::{McpResult, PromptDefinition, PromptGetResult};
use crate::SharedStore;

const DESCRIPTION: &str = "Produce a concise, actionable summary of a document's contents.";

/// Return the prompt definition for summarize_doc.
pub fn definition() -> PromptDefinition {
    PromptDefinition {
        name: "summarize_doc".to_string(),
        description: Some(DESCRIPTION.to_string()),
        arguments: Some(super::doc_id_argument(
            "The ID of the document whose content should be summarized.",
        )),
    }
}

/// Expand the `summarize_doc` prompt with the given arguments.
pub async fn expand(args: Value, store: &SharedStore) -> McpResult<PromptGetResult> {
    super::render(TemplateKind::Summarize, DESCRIPTION, args, store).await
}
