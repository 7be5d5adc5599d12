//! Renderer configuration
//!
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! file_name = "mod.d.ts"
//! include_heritage = false
//! ```

use crate::diagnostics::{DocError, DocResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one render call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocConfig {
    /// File name the source is parsed as; its extension selects the syntax
    /// (`.ts`, `.tsx`, `.d.ts`, ...)
    pub file_name: String,
    /// Whether to print `extends` / `implements` clauses under headings
    pub include_heritage: bool,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            file_name: "mod.ts".to_string(),
            include_heritage: true,
        }
    }
}

impl DocConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name used for parsing
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set whether heritage clauses are rendered
    pub fn with_heritage(mut self, include: bool) -> Self {
        self.include_heritage = include;
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> DocResult<Self> {
        let config: DocConfig = toml::from_str(text)?;
        if config.file_name.trim().is_empty() {
            return Err(DocError::config("file_name must not be empty"));
        }
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            DocError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;
        Self::from_toml_str(&text)
    }
}
