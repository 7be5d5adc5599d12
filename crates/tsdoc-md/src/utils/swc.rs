//! SWC/deno_ast TypeScript parsing utilities
//!
//! This module provides utilities for parsing TypeScript source using deno_ast
//! (which wraps SWC). It handles:
//! - Parsing TypeScript/TSX/declaration sources
//! - Leading comment lookup
//! - Location tracking
//! - Source text extraction

use crate::diagnostics::{DocError, DocResult};
use crate::node::{CommentRange, Location};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::comments::{Comment, CommentKind};
use deno_ast::swc::common::{BytePos, Span};
use deno_ast::{MediaType, ParseParams, ParsedSource, SourcePos, SourceRange, SourceTextInfo};
use std::path::Path;
use std::sync::Arc;

/// Information about the source text
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// File name the source was parsed as
    pub file_name: String,
    /// Media type derived from the file name
    pub media_type: MediaType,
    /// The source text
    pub text: Arc<str>,
    /// Source text info for location lookups
    pub text_info: SourceTextInfo,
}

impl SourceInfo {
    /// Create source info from a file name and content
    pub fn new(file_name: impl Into<String>, text: impl Into<Arc<str>>) -> Self {
        let file_name = file_name.into();
        let text: Arc<str> = text.into();
        let text_info = SourceTextInfo::new(text.clone());
        Self {
            media_type: MediaType::from_path(Path::new(&file_name)),
            file_name,
            text,
            text_info,
        }
    }

    /// Whether the source is an ambient declaration file (`.d.ts`)
    pub fn is_declaration_file(&self) -> bool {
        matches!(
            self.media_type,
            MediaType::Dts | MediaType::Dmts | MediaType::Dcts
        )
    }

    /// Convert a byte position to a line and column
    pub fn line_col(&self, pos: BytePos) -> (usize, usize) {
        // Positions handed out by SWC for this text are valid source positions
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        let line_and_col = self.text_info.line_and_column_index(source_pos);
        (line_and_col.line_index + 1, line_and_col.column_index) // 1-indexed line, 0-indexed column
    }

    /// Convert a span to a Location
    pub fn span_to_location(&self, span: Span) -> Location {
        let (line, col) = self.line_col(span.lo);
        Location::new(self.file_name.clone(), line, col)
    }

    /// Extract source text for a span
    pub fn text_for_span(&self, span: Span) -> &str {
        let range = SourceRange::new(
            SourcePos::unsafely_from_byte_pos(span.lo),
            SourcePos::unsafely_from_byte_pos(span.hi),
        );
        self.text_info.range_text(&range)
    }
}

/// A parsed TypeScript module with source information
#[derive(Debug)]
pub struct ParsedModule {
    /// The parsed source from deno_ast
    pub source: ParsedSource,
    /// Source information for location lookups
    pub source_info: SourceInfo,
}

impl ParsedModule {
    /// Get the module AST
    pub fn module(&self) -> DocResult<&swc_ast::Module> {
        match self.source.program_ref() {
            deno_ast::ProgramRef::Module(m) => Ok(m),
            deno_ast::ProgramRef::Script(_) => Err(DocError::other(format!(
                "{} was parsed as a script, expected a module",
                self.source_info.file_name
            ))),
        }
    }

    /// Get the file name
    pub fn file_name(&self) -> &str {
        &self.source_info.file_name
    }

    pub fn is_declaration_file(&self) -> bool {
        self.source_info.is_declaration_file()
    }

    /// Convert a span to a Location
    pub fn span_to_location(&self, span: Span) -> Location {
        self.source_info.span_to_location(span)
    }

    /// Extract source text for a span
    pub fn text_for_span(&self, span: Span) -> &str {
        self.source_info.text_for_span(span)
    }

    /// Get leading comments for a position
    pub fn leading_comments(&self, pos: BytePos) -> Vec<Comment> {
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        self.source
            .comments()
            .get_leading(source_pos)
            .map(|v| v.to_vec())
            .unwrap_or_default()
    }

    /// Leading comments of the node starting at `span`, as raw comment ranges
    pub fn leading_comment_ranges(&self, span: Span) -> Vec<CommentRange> {
        self.leading_comments(span.lo)
            .iter()
            .map(comment_range)
            .collect()
    }
}

/// Rebuild the raw text of a comment, delimiters included
pub fn comment_range(comment: &Comment) -> CommentRange {
    match comment.kind {
        CommentKind::Block => CommentRange::new(format!("/*{}*/", comment.text)),
        CommentKind::Line => CommentRange::new(format!("//{}", comment.text)),
    }
}

/// Parse TypeScript source code from a string
///
/// `file_name` only selects the syntax through its extension; nothing is
/// read from disk.
pub fn parse_typescript_source(
    file_name: &str,
    source: impl Into<Arc<str>>,
) -> DocResult<ParsedModule> {
    let source: Arc<str> = source.into();
    let source_info = SourceInfo::new(file_name, source.clone());

    let specifier = deno_ast::ModuleSpecifier::parse(&format!(
        "file:///{}",
        file_name.trim_start_matches('/')
    ))
    .map_err(|_| DocError::InvalidPath(file_name.to_string()))?;

    let parsed = deno_ast::parse_module(ParseParams {
        specifier,
        text: source,
        media_type: source_info.media_type,
        capture_tokens: true,
        scope_analysis: false,
        maybe_syntax: None,
    })
    .map_err(|e| DocError::parse(format!("{}", e)))?;

    Ok(ParsedModule {
        source: parsed,
        source_info,
    })
}
