//! tsdoc-md: Markdown API reference generator for TypeScript
//!
//! This crate documents one TypeScript source unit at a time by:
//! - Parsing the source with deno_ast/SWC
//! - Lowering the module into a neutral [`SourceUnit`] tree
//! - Selecting exported classes, interfaces and type aliases
//! - Extracting `/** ... */` doc comments
//! - Rendering grouped member sections as Markdown
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ mod.ts source   │
//! │ (SWC parse)     │
//! └────────┬────────┘
//!          ▼
//!   ┌──────────────┐    ┌──────────────┐
//!   │  SourceUnit  │───▶│ Declarations │
//!   └──────────────┘    └──────┬───────┘
//!                              ▼
//!                       ┌──────────────┐
//!                       │   Markdown   │
//!                       └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! let md = tsdoc_md::render_markdown("export type T = 'a' | 'b';").unwrap();
//! assert_eq!(md, "# T `type`\n\n## Value\n\n### `'a' | 'b'`\n");
//! ```

// Core types
pub mod js_doc;
pub mod node;
pub mod params;

// TypeScript construct types
pub mod class;
pub mod interface;
pub mod ts_type_params;
pub mod type_alias;

// Parsing and utilities
pub mod diagnostics;
pub mod parser;
pub mod visibility;

// Submodules
pub mod docgen;
pub mod utils;

// Re-exports for convenience
pub use class::{ClassDef, ClassMemberDef, ClassMemberKind, ClassSections};
pub use diagnostics::{DocError, DocResult};
pub use interface::{InterfaceDef, TsTypeMemberDef};
pub use node::{CommentRange, DocNode, DocNodeDef, Location, SourceUnit};
pub use params::ParamDef;
pub use ts_type_params::TsTypeParamDef;
pub use type_alias::{TypeAliasBody, TypeAliasDef};
pub use visibility::{select_declarations, Declaration, DeclarationKind, ExportState};

// Documentation generation
pub use docgen::{DocConfig, MarkdownRenderer};
pub use parser::parse_source_unit;

/// Render the Markdown reference for TypeScript source with default settings
pub fn render_markdown(source: &str) -> DocResult<String> {
    render_markdown_with(source, &DocConfig::default())
}

/// Render the Markdown reference for TypeScript source
///
/// A fatal parse error is returned as [`DocError::TypeScriptParse`]; no
/// partial document is produced.
pub fn render_markdown_with(source: &str, config: &DocConfig) -> DocResult<String> {
    let unit = parse_source_unit(&config.file_name, source)?;
    tracing::debug!(
        file = %unit.file_name,
        statements = unit.nodes.len(),
        "parsed source unit"
    );
    Ok(MarkdownRenderer::from_config(config).render(&unit))
}
