//! Export handling
//!
//! Decides which top-level statements are documented. A statement is
//! documented when it is a class, interface or type alias and is exported,
//! either through an `export` modifier or implicitly from the module root.

use crate::class::ClassDef;
use crate::interface::InterfaceDef;
use crate::node::{DocNode, DocNodeDef, SourceUnit};
use crate::type_alias::TypeAliasDef;

/// Export state of a top-level statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExportState {
    /// Declared with `export` or `export default`
    pub has_export_modifier: bool,

    /// Exported from the module root without a modifier on the declaration
    /// itself: named in a local `export { .. }` clause or `export default`
    /// expression, or declared at the top level of a `.d.ts` file
    pub implicit: bool,
}

impl ExportState {
    /// Not exported
    pub fn local() -> Self {
        Self::default()
    }

    /// Carries an `export` modifier
    pub fn explicit() -> Self {
        Self {
            has_export_modifier: true,
            implicit: false,
        }
    }

    /// Exported from the module root
    pub fn implicit() -> Self {
        Self {
            has_export_modifier: false,
            implicit: true,
        }
    }

    pub fn is_exported(&self) -> bool {
        self.has_export_modifier || self.implicit
    }
}

/// A documentable declaration selected from a source unit
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    pub node: &'a DocNode,
    pub kind: DeclarationKind<'a>,
}

impl Declaration<'_> {
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// Heading keyword for the declaration kind
    pub fn keyword(&self) -> &'static str {
        match self.kind {
            DeclarationKind::Class(_) => "class",
            DeclarationKind::Interface(_) => "interface",
            DeclarationKind::TypeAlias(_) => "type",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum DeclarationKind<'a> {
    Class(&'a ClassDef),
    Interface(&'a InterfaceDef),
    TypeAlias(&'a TypeAliasDef),
}

/// Select the exported classes, interfaces and type aliases in source order
pub fn select_declarations(unit: &SourceUnit) -> Vec<Declaration<'_>> {
    unit.nodes
        .iter()
        .filter_map(|node| {
            let kind = match &node.def {
                DocNodeDef::Class { class_def } => DeclarationKind::Class(class_def),
                DocNodeDef::Interface { interface_def } => DeclarationKind::Interface(interface_def),
                DocNodeDef::TypeAlias { type_alias_def } => {
                    DeclarationKind::TypeAlias(type_alias_def)
                }
                DocNodeDef::Other { kind } => {
                    tracing::debug!(kind = %kind, name = %node.name, "skipping unsupported statement");
                    return None;
                }
            };
            if !node.is_exported() {
                tracing::debug!(name = %node.name, location = %node.location, "skipping local declaration");
                return None;
            }
            Some(Declaration { node, kind })
        })
        .collect()
}
