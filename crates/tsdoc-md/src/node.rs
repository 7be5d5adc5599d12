//! Syntax tree consumed by the renderer
//!
//! A `SourceUnit` is the narrow view of one parsed TypeScript module that the
//! Markdown renderer walks: top-level statements tagged by kind, their export
//! state, their leading comments, and pre-sliced source text for the pieces
//! that end up in signatures. [`crate::parser`] builds it from real source
//! with deno_ast; tests build it by hand through [`crate::test`].

use crate::class::ClassDef;
use crate::interface::InterfaceDef;
use crate::js_doc;
use crate::type_alias::TypeAliasDef;
use crate::visibility::ExportState;

/// Source location of a statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Source filename
    pub filename: String,
    /// 1-indexed line number
    pub line: usize,
    /// 0-indexed column number
    pub col: usize,
}

impl Location {
    /// Create a new location
    pub fn new(filename: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
            col,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.col)
    }
}

/// A comment found in the trivia in front of a node
///
/// Holds the raw comment text including its delimiters (`//`, `/*`, `*/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRange {
    pub text: String,
}

impl CommentRange {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whether the comment opens with the `/**` documentation marker
    pub fn is_doc(&self) -> bool {
        self.text.starts_with("/**")
    }
}

/// One parsed source text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceUnit {
    /// File name the source was parsed as
    pub file_name: String,
    /// Top-level statements in source order
    pub nodes: Vec<DocNode>,
}

impl SourceUnit {
    pub fn new(file_name: impl Into<String>, nodes: Vec<DocNode>) -> Self {
        Self {
            file_name: file_name.into(),
            nodes,
        }
    }
}

/// A top-level statement
#[derive(Debug, Clone, PartialEq)]
pub struct DocNode {
    /// Declared name (empty for statements without one)
    pub name: String,
    pub location: Location,
    pub export: ExportState,
    /// Comments between the previous token and this statement, in source order
    pub leading_comments: Vec<CommentRange>,
    pub def: DocNodeDef,
}

impl DocNode {
    pub fn new(name: impl Into<String>, def: DocNodeDef) -> Self {
        Self {
            name: name.into(),
            location: Location::default(),
            export: ExportState::default(),
            leading_comments: Vec::new(),
            def,
        }
    }

    pub fn with_export(mut self, export: ExportState) -> Self {
        self.export = export;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_comment(mut self, comment: CommentRange) -> Self {
        self.leading_comments.push(comment);
        self
    }

    /// Documentation text of this statement, if it has any
    pub fn doc(&self) -> Option<String> {
        js_doc::leading_doc(&self.leading_comments)
    }

    pub fn is_exported(&self) -> bool {
        self.export.is_exported()
    }
}

/// Statement definition, tagged by declaration kind
#[derive(Debug, Clone, PartialEq)]
pub enum DocNodeDef {
    Class { class_def: ClassDef },
    Interface { interface_def: InterfaceDef },
    TypeAlias { type_alias_def: TypeAliasDef },
    /// Any statement the renderer does not document
    Other { kind: String },
}

impl DocNodeDef {
    /// Keyword shown next to the declaration name in headings
    pub fn keyword(&self) -> &str {
        match self {
            DocNodeDef::Class { .. } => "class",
            DocNodeDef::Interface { .. } => "interface",
            DocNodeDef::TypeAlias { .. } => "type",
            DocNodeDef::Other { kind } => kind,
        }
    }
}
