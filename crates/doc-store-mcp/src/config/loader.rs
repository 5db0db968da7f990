//! TOML configuration file loading.
//!
//! ```toml
//! log_level = "debug"
//!
//! [documents]
//! "notes.md" = "Meeting notes for the kickoff."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use doc_store::DocumentStore;

use crate::types::{McpError, McpResult};

/// Environment variable consulted when no `--config` path is given.
pub const CONFIG_ENV_VAR: &str = "DOC_STORE_MCP_CONFIG";

/// Server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Seed table replacing the built-in documents.
    #[serde(default)]
    pub documents: Option<BTreeMap<String, String>>,
}

impl ServerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> McpResult<Self> {
        toml::from_str(text).map_err(|e| McpError::Config(e.to_string()))
    }

    /// Build the document store this configuration describes.
    ///
    /// An empty `[documents]` table is refused: documents cannot be created
    /// later, so such a server could never serve anything.
    pub fn build_store(&self) -> McpResult<DocumentStore> {
        let store = match &self.documents {
            Some(documents) => {
                tracing::info!("Seeding {} documents from config", documents.len());
                DocumentStore::from_documents(documents.clone())
            }
            None => DocumentStore::seeded(),
        };
        if store.is_empty() {
            return Err(McpError::Config(
                "[documents] must contain at least one document".to_string(),
            ));
        }
        Ok(store)
    }
}

/// Load configuration from `path`, then from [`CONFIG_ENV_VAR`], falling
/// back to defaults when neither is set.
pub fn load_config(path: Option<&str>) -> McpResult<ServerConfig> {
    let env_path = std::env::var(CONFIG_ENV_VAR).ok();
    match path.or(env_path.as_deref()) {
        Some(path) => load_config_file(Path::new(path)),
        None => Ok(ServerConfig::default()),
    }
}

fn load_config_file(path: &Path) -> McpResult<ServerConfig> {
    tracing::debug!("Loading config from {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|e| {
        McpError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read config {}: {e}", path.display()),
        ))
    })?;
    ServerConfig::from_toml(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_builtin_seed() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.build_store().unwrap(), DocumentStore::seeded());
    }

    #[test]
    fn documents_table_replaces_seed() {
        let config = ServerConfig::from_toml(
            r#"
            log_level = "debug"

            [documents]
            "a.md" = "hello world"
            "b.txt" = "second"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        let store = config.build_store().unwrap();
        assert_eq!(store.list_ids(), vec!["a.md", "b.txt"]);
        assert_eq!(store.get("a.md").unwrap(), "hello world");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ServerConfig::from_toml("port = 80"),
            Err(McpError::Config(_))
        ));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = ServerConfig::from_toml("[documents\n").unwrap_err();
        assert!(matches!(err, McpError::Config(_)));
        assert_eq!(err.code(), crate::types::error_codes::INTERNAL_ERROR);
        assert!(err.to_string().starts_with("Invalid config: "));
    }

    #[test]
    fn empty_documents_table_is_refused() {
        let config = ServerConfig::from_toml("[documents]\n").unwrap();
        assert_eq!(config.documents.as_ref().map(|d| d.len()), Some(0));
        assert!(matches!(config.build_store(), Err(McpError::Config(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.toml");
        std::fs::write(&path, "[documents]\n\"x.md\" = \"x\"\n").unwrap();

        let config = load_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.build_store().unwrap().list_ids(), vec!["x.md"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load_config(Some(path.to_str().unwrap())),
            Err(McpError::Io(_))
        ));
    }
}
