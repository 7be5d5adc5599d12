//! Error types
//!
//! Parsing is the only step that can fail. Once a syntax tree exists the
//! renderer treats every missing piece as absent instead of raising.

use thiserror::Error;

/// Result type for tsdoc-md operations
pub type DocResult<T> = Result<T, DocError>;

/// Main error type for tsdoc-md
#[derive(Debug, Error)]
pub enum DocError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TypeScript parse error, carried through unchanged from the parser
    #[error("TypeScript parse error: {0}")]
    TypeScriptParse(String),

    /// Invalid path or file name
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl DocError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        DocError::TypeScriptParse(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        DocError::Config(message.into())
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        DocError::Other(message.into())
    }

    /// Whether this error came from the parser
    pub fn is_parse_error(&self) -> bool {
        matches!(self, DocError::TypeScriptParse(_))
    }
}

impl From<toml::de::Error> for DocError {
    fn from(err: toml::de::Error) -> Self {
        DocError::Config(err.to_string())
    }
}
