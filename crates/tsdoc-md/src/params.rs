//! Parameter definition types
//!
//! This module provides the parameter list shown in method and constructor
//! headings.

/// Parameter definition for methods and constructors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    /// Parameter name as written (patterns keep their source text)
    pub name: String,

    /// Type annotation text, if any
    pub ts_type: Option<String>,
}

impl ParamDef {
    /// Create a new parameter definition
    pub fn new(name: impl Into<String>, ts_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            ts_type,
        }
    }

    /// Create a parameter with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Create a parameter with a name and type
    pub fn typed(name: impl Into<String>, ts_type: impl Into<String>) -> Self {
        Self::new(name, Some(ts_type.into()))
    }

    /// Render as `name: Type`
    ///
    /// A missing annotation leaves nothing after the colon.
    pub fn to_signature(&self) -> String {
        format!("{}: {}", self.name, self.ts_type.as_deref().unwrap_or(""))
    }
}

/// Render a parameter list without the surrounding parentheses
pub fn render_params(params: &[ParamDef]) -> String {
    params
        .iter()
        .map(ParamDef::to_signature)
        .collect::<Vec<_>>()
        .join(", ")
}
