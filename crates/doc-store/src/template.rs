//! Prompt templates rendered over a single document.

use crate::document::{Message, Role};

/// Which instructional template to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Rewrite the document as well-structured Markdown.
    RewriteAsMarkdown,
    /// Produce a concise, actionable summary.
    Summarize,
}

impl TemplateKind {
    fn instructions(self) -> &'static str {
        match self {
            TemplateKind::RewriteAsMarkdown => {
                "You are an expert technical writer. Rewrite the provided document so it is clear, \
                 concise, and formatted as Markdown. Preserve all factual details and organize the \
                 content with appropriate headings, lists, and tables when they improve readability."
            }
            TemplateKind::Summarize => {
                "You are a precise analyst. Read the provided document and return a concise summary that \
                 captures the main objective, critical details, and any notable risks or open questions. \
                 Use neutral tone and be brief."
            }
        }
    }

    fn request(self) -> &'static str {
        match self {
            TemplateKind::RewriteAsMarkdown => {
                "Rewrite the following document in Markdown. Use the document ID as the top-level heading \
                 when helpful."
            }
            TemplateKind::Summarize => {
                "Summarize the following document. Highlight the primary purpose, key points, and any \
                 important follow-up items."
            }
        }
    }

    /// Render the two-message sequence for a document.
    ///
    /// The first message holds the fixed instructions; the second embeds the
    /// document id and its full content after the kind-specific request.
    pub fn render(self, id: &str, content: &str) -> Vec<Message> {
        vec![
            Message::new(Role::System, self.instructions()),
            Message::new(
                Role::User,
                format!(
                    "{}\n\nDocument ID: {id}\nContent:\n{content}",
                    self.request()
                ),
            ),
        ]
    }
}
