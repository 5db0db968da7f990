//! Document and message views handed out by the store.

use serde::{Deserialize, Serialize};

/// A borrowed view of one stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Document<'a> {
    /// Unique document id (e.g. `"plan.md"`).
    pub id: &'a str,
    /// Current document text.
    pub content: &'a str,
}

/// Author role of a rendered prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instructions framing the task.
    System,
    /// The request carrying the document itself.
    User,
}

/// One message of a rendered prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who the message is attributed to.
    pub role: Role,
    /// Message body.
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}
