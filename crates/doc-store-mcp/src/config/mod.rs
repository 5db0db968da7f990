//! Configuration loading and resolution.

pub mod loader;

pub use loader::{load_config, ServerConfig, CONFIG_ENV_VAR};
