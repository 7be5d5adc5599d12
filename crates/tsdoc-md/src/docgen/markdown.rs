//! Markdown rendering for documentation
//!
//! This module assembles the final document: one block per exported
//! declaration, in source order, each made of a `# Name `kind`` heading, the
//! optional heritage line and doc comment, and the member sections.

use crate::docgen::config::DocConfig;
use crate::docgen::fragment::{code_span, Fragment};
use crate::node::SourceUnit;
use crate::visibility::{select_declarations, Declaration, DeclarationKind};

/// Markdown renderer for documentation
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    /// Whether to print `extends` / `implements` clauses
    pub include_heritage: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            include_heritage: true,
        }
    }
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer honouring a configuration
    pub fn from_config(config: &DocConfig) -> Self {
        Self {
            include_heritage: config.include_heritage,
        }
    }

    /// Set whether to include heritage clauses
    pub fn with_heritage(mut self, include: bool) -> Self {
        self.include_heritage = include;
        self
    }

    /// Render a whole source unit
    ///
    /// Returns an empty string when nothing is exported.
    pub fn render(&self, unit: &SourceUnit) -> String {
        let declarations = select_declarations(unit);
        if declarations.is_empty() {
            return String::new();
        }

        let mut md = declarations
            .iter()
            .map(|decl| self.render_declaration(decl))
            .collect::<Vec<_>>()
            .join("\n\n");
        md.push('\n');
        md
    }

    /// Render one declaration block
    pub fn render_declaration(&self, decl: &Declaration<'_>) -> String {
        self.declaration_fragments(decl)
            .iter()
            .map(Fragment::to_markdown)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn declaration_fragments(&self, decl: &Declaration<'_>) -> Vec<Fragment> {
        let name = decl.name();
        let mut fragments = vec![Fragment::heading(
            1,
            format!("{} `{}`", name, decl.keyword()),
        )];

        let heritage = match decl.kind {
            DeclarationKind::Class(class_def) => class_def.heritage.as_deref(),
            DeclarationKind::Interface(interface_def) => interface_def.heritage.as_deref(),
            DeclarationKind::TypeAlias(_) => None,
        };
        if let Some(heritage) = heritage.filter(|_| self.include_heritage) {
            fragments.push(Fragment::text(code_span(heritage)));
        }

        if let Some(doc) = decl.node.doc() {
            fragments.push(Fragment::text(doc));
        }

        let members = match decl.kind {
            DeclarationKind::Class(class_def) => class_def.sections(name).into_fragments(),
            DeclarationKind::Interface(interface_def) => {
                interface_def.properties_section(name).into_fragments()
            }
            DeclarationKind::TypeAlias(type_alias_def) => {
                type_alias_def.section(name).into_fragments()
            }
        };
        fragments.extend(members);
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::TsTypeMemberDef;
    use crate::params::ParamDef;
    use crate::test::{
        doc_comment, mock_class_node, mock_constructor, mock_interface_node, mock_method,
        mock_property, mock_type_alias_node, mock_unit,
    };
    use crate::type_alias::TypeAliasDef;
    use crate::visibility::ExportState;
    use pretty_assertions::assert_eq;

    fn sample_unit() -> crate::node::SourceUnit {
        let mut class = mock_class_node(
            "AClass",
            vec![
                mock_property("instancePropertyThing", None, Some("'thing'"), &[]),
                mock_property("instancePropertyNumberType", Some("number"), None, &[]),
                mock_method("staticMethod", &["static"]),
                mock_property("staticPropertyThing", None, Some("'thing'"), &["static"]),
                mock_constructor(vec![ParamDef::typed("param", "any")])
                    .with_comment(doc_comment("Constructor markdown comment.")),
            ],
        )
        .with_comment(doc_comment("AClass markdown comment."));
        if let crate::node::DocNodeDef::Class { class_def } = &mut class.def {
            class_def.heritage = Some("extends Map".to_string());
        }

        mock_unit(vec![
            class,
            mock_type_alias_node("St", TypeAliasDef::value("'st'")),
            mock_interface_node(
                "MyInterface",
                vec![
                    TsTypeMemberDef::new("a: string;"),
                    TsTypeMemberDef::new("b?: number;"),
                ],
            ),
        ])
    }

    #[test]
    fn test_render_document() {
        let md = MarkdownRenderer::new().render(&sample_unit());
        let expected = "\
# AClass `class`

`extends Map`

AClass markdown comment.

## Constructor

### AClass.constructor(param: any)
Constructor markdown comment.

## Static Properties

### static AClass.staticPropertyThing = 'thing'

## Static Methods

### static AClass.staticMethod()

## Instance Properties

### AClass.instancePropertyThing = 'thing'

### AClass.instancePropertyNumberType: number

# St `type`

## Value

### `'st'`

# MyInterface `interface`

## Properties

### `MyInterface.a: string`

### `MyInterface.b?: number`
";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_without_heritage() {
        let md = MarkdownRenderer::new()
            .with_heritage(false)
            .render(&sample_unit());
        assert!(!md.contains("extends Map"));
        assert!(md.starts_with("# AClass `class`\n\nAClass markdown comment.\n"));
    }

    #[test]
    fn test_from_config() {
        let config = DocConfig::new().with_heritage(false);
        assert!(!MarkdownRenderer::from_config(&config).include_heritage);
    }

    #[test]
    fn test_empty_unit_renders_nothing() {
        assert_eq!(MarkdownRenderer::new().render(&mock_unit(vec![])), "");

        let unit = mock_unit(vec![
            mock_class_node("Local", vec![]).with_export(ExportState::local())
        ]);
        assert_eq!(MarkdownRenderer::new().render(&unit), "");
    }

    #[test]
    fn test_declaration_without_members() {
        let unit = mock_unit(vec![mock_class_node("Empty", vec![])]);
        assert_eq!(MarkdownRenderer::new().render(&unit), "# Empty `class`\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = MarkdownRenderer::new();
        let unit = sample_unit();
        assert_eq!(renderer.render(&unit), renderer.render(&unit));
    }

    #[test]
    fn test_render_declaration() {
        let unit = mock_unit(vec![mock_class_node(
            "Queue",
            vec![mock_method("push", &[])],
        )]);
        let decls = select_declarations(&unit);
        assert_eq!(
            MarkdownRenderer::new().render_declaration(&decls[0]),
            "# Queue `class`\n\n## Instance Methods\n\n### Queue.push()"
        );
    }
}
