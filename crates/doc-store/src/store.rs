//! The document table.

use std::collections::BTreeMap;

use crate::document::{Document, Message};
use crate::error::{StoreError, StoreResult};
use crate::seed::DEFAULT_DOCUMENTS;
use crate::template::TemplateKind;

/// Mapping from document id to document text.
///
/// The set of ids is fixed at construction; only content is mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStore {
    docs: BTreeMap<String, String>,
}

impl DocumentStore {
    /// Build a store from the built-in seed table.
    pub fn seeded() -> Self {
        Self::from_documents(DEFAULT_DOCUMENTS.iter().copied())
    }

    /// Build a store from `(id, content)` pairs. A repeated id keeps its last content.
    pub fn from_documents<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let docs: BTreeMap<String, String> = documents
            .into_iter()
            .map(|(id, content)| (id.into(), content.into()))
            .collect();
        log::debug!("Seeded document store with {} documents", docs.len());
        Self { docs }
    }

    /// Current content of a document.
    pub fn get(&self, id: &str) -> StoreResult<&str> {
        self.docs
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// All ids in ascending order.
    pub fn list_ids(&self) -> Vec<&str> {
        self.docs.keys().map(String::as_str).collect()
    }

    /// Replace every non-overlapping occurrence of `old` with `new`.
    ///
    /// Returns how many occurrences were replaced; zero leaves the content
    /// untouched and is not an error.
    pub fn replace(&mut self, id: &str, old: &str, new: &str) -> StoreResult<usize> {
        let content = self
            .docs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let count = content.matches(old).count();
        if count > 0 && old != new {
            *content = content.replace(old, new);
        }
        log::debug!("Replaced {count} occurrence(s) in {id}");
        Ok(count)
    }

    /// Render a prompt template over a document.
    pub fn render_template(&self, id: &str, kind: TemplateKind) -> StoreResult<Vec<Message>> {
        let content = self.get(id)?;
        Ok(kind.render(id, content))
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate over all documents in id order.
    pub fn documents(&self) -> impl Iterator<Item = Document<'_>> {
        self.docs.iter().map(|(id, content)| Document {
            id: id.as_str(),
            content: content.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Role;

    fn hello() -> DocumentStore {
        DocumentStore::from_documents([("a.md", "hello world")])
    }

    #[test]
    fn seeded_ids_are_sorted() {
        let store = DocumentStore::seeded();
        let ids = store.list_ids();
        assert_eq!(
            ids,
            vec![
                "deposition.md",
                "financials.docx",
                "outlook.pdf",
                "plan.md",
                "report.pdf",
                "spec.txt",
            ]
        );
        assert_eq!(store.len(), DEFAULT_DOCUMENTS.len());
    }

    #[test]
    fn get_known_and_missing() {
        let store = DocumentStore::seeded();
        assert_eq!(
            store.get("report.pdf").unwrap(),
            "The report details the state of a 20m condenser tower."
        );
        assert_eq!(
            store.get("missing.md"),
            Err(StoreError::NotFound("missing.md".to_string()))
        );
    }

    #[test]
    fn replace_single_occurrence() {
        let mut store = hello();
        assert_eq!(store.replace("a.md", "world", "there").unwrap(), 1);
        assert_eq!(store.get("a.md").unwrap(), "hello there");
    }

    #[test]
    fn replace_all_occurrences() {
        let mut store = DocumentStore::from_documents([("b.txt", "ab ab ab")]);
        assert_eq!(store.replace("b.txt", "ab", "x").unwrap(), 3);
        assert_eq!(store.get("b.txt").unwrap(), "x x x");
    }

    #[test]
    fn replace_is_non_overlapping() {
        let mut store = DocumentStore::from_documents([("c.txt", "aaaa")]);
        assert_eq!(store.replace("c.txt", "aa", "b").unwrap(), 2);
        assert_eq!(store.get("c.txt").unwrap(), "bb");
    }

    #[test]
    fn replace_absent_substring_is_noop() {
        let mut store = hello();
        assert_eq!(store.replace("a.md", "planet", "moon").unwrap(), 0);
        assert_eq!(store.get("a.md").unwrap(), "hello world");
    }

    #[test]
    fn replace_with_itself_never_changes_content() {
        let mut store = DocumentStore::seeded();
        let before = store.clone();
        for id in before.list_ids() {
            store.replace(id, "the", "the").unwrap();
            store.replace(id, "", "").unwrap();
        }
        assert_eq!(store, before);
    }

    #[test]
    fn replace_empty_needle_inserts_between_chars() {
        let mut store = DocumentStore::from_documents([("d.txt", "ab")]);
        assert_eq!(store.replace("d.txt", "", "-").unwrap(), 3);
        assert_eq!(store.get("d.txt").unwrap(), "-a-b-");
    }

    #[test]
    fn replace_is_case_and_whitespace_exact() {
        let mut store = hello();
        store.replace("a.md", "World", "there").unwrap();
        store.replace("a.md", "hello  world", "x").unwrap();
        assert_eq!(store.get("a.md").unwrap(), "hello world");
    }

    #[test]
    fn replace_missing_document() {
        let mut store = hello();
        assert_eq!(
            store.replace("missing.md", "a", "b"),
            Err(StoreError::NotFound("missing.md".to_string()))
        );
        assert_eq!(store.list_ids(), vec!["a.md"]);
    }

    #[test]
    fn render_template_uses_current_content() {
        let mut store = hello();
        store.replace("a.md", "world", "there").unwrap();
        let messages = store
            .render_template("a.md", TemplateKind::RewriteAsMarkdown)
            .unwrap();
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[1].text.contains("Document ID: a.md"));
        assert!(messages[1].text.ends_with("Content:\nhello there"));
    }

    #[test]
    fn render_template_missing_document() {
        let store = hello();
        assert!(matches!(
            store.render_template("nope", TemplateKind::Summarize),
            Err(StoreError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn duplicate_seed_ids_keep_last() {
        let store = DocumentStore::from_documents([("a", "1"), ("a", "2")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap(), "2");
    }

    #[test]
    fn documents_iterate_in_id_order() {
        let store = DocumentStore::from_documents([("z", "last"), ("a", "first")]);
        let docs: Vec<_> = store.documents().collect();
        assert_eq!(docs[0], Document { id: "a", content: "first" });
        assert_eq!(docs[1].id, "z");
        let json = serde_json::to_value(docs[0]).unwrap();
        assert_eq!(json["content"], "first");
    }

    #[test]
    fn not_found_message() {
        let err = StoreError::NotFound("x.md".to_string());
        assert_eq!(err.to_string(), "Document with ID 'x.md' not found.");
    }
}
