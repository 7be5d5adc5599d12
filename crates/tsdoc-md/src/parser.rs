//! Lowering of the SWC module into a [`SourceUnit`]
//!
//! Every top-level module item becomes one [`DocNode`]. Classes, interfaces
//! and type aliases carry their members; everything else is kept as
//! [`DocNodeDef::Other`] so the declaration filter can report what it skips.

use crate::class::{
    modifiers_from_source, ClassConstructorDef, ClassDef, ClassMemberDef, ClassMemberKind,
    ClassMethodDef, ClassPropertyDef, MemberName,
};
use crate::diagnostics::DocResult;
use crate::interface::{single_line, InterfaceDef, TsTypeMemberDef};
use crate::node::{DocNode, DocNodeDef, SourceUnit};
use crate::params::ParamDef;
use crate::ts_type_params::TsTypeParamDef;
use crate::type_alias::TypeAliasDef;
use crate::utils::swc::{parse_typescript_source, ParsedModule};
use crate::visibility::ExportState;
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::{Span, Spanned};
use std::collections::HashSet;

/// Parse TypeScript source code into a source unit
pub fn parse_source_unit(file_name: &str, source: &str) -> DocResult<SourceUnit> {
    let parsed = parse_typescript_source(file_name, source)?;
    extract_source_unit(&parsed)
}

/// Build the source unit for an already parsed module
pub fn extract_source_unit(parsed: &ParsedModule) -> DocResult<SourceUnit> {
    let module = parsed.module()?;
    let local_exports = collect_local_exports(module);
    let declaration_file = parsed.is_declaration_file();

    let nodes = module
        .body
        .iter()
        .map(|item| {
            let node = extract_node_from_item(parsed, item, &local_exports, declaration_file);
            tracing::debug!(
                kind = node.def.keyword(),
                name = %node.name,
                line = node.location.line,
                exported = node.is_exported(),
                "top-level statement"
            );
            node
        })
        .collect();

    Ok(SourceUnit::new(parsed.file_name(), nodes))
}

/// Names exported through `export { A, B }` or `export default A;`
fn collect_local_exports(module: &swc_ast::Module) -> HashSet<String> {
    let mut names = HashSet::new();
    for item in &module.body {
        match item {
            swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportNamed(named))
                if named.src.is_none() =>
            {
                for specifier in &named.specifiers {
                    if let swc_ast::ExportSpecifier::Named(spec) = specifier {
                        if let swc_ast::ModuleExportName::Ident(ident) = &spec.orig {
                            names.insert(ident.sym.to_string());
                        }
                    }
                }
            }
            swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportDefaultExpr(export)) => {
                if let swc_ast::Expr::Ident(ident) = export.expr.as_ref() {
                    names.insert(ident.sym.to_string());
                }
            }
            _ => {}
        }
    }
    names
}

/// Extract a documentation node from a module item
fn extract_node_from_item(
    parsed: &ParsedModule,
    item: &swc_ast::ModuleItem,
    local_exports: &HashSet<String>,
    declaration_file: bool,
) -> DocNode {
    // Comments in front of `export` belong to the whole item, so lookups use
    // the item span rather than the inner declaration span.
    let span = item.span();
    let (name, def, export) = match item {
        swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportDecl(export)) => {
            let (name, def) = extract_decl(parsed, &export.decl);
            (name, def, ExportState::explicit())
        }
        swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportDefaultDecl(export)) => {
            let (name, def) = extract_default_decl(parsed, &export.decl);
            (name, def, ExportState::explicit())
        }
        swc_ast::ModuleItem::ModuleDecl(decl) => (
            String::new(),
            DocNodeDef::Other {
                kind: module_decl_kind(decl).to_string(),
            },
            ExportState::local(),
        ),
        swc_ast::ModuleItem::Stmt(swc_ast::Stmt::Decl(decl)) => {
            let (name, def) = extract_decl(parsed, decl);
            let export = if declaration_file || local_exports.contains(&name) {
                ExportState::implicit()
            } else {
                ExportState::local()
            };
            (name, def, export)
        }
        swc_ast::ModuleItem::Stmt(_) => (
            String::new(),
            DocNodeDef::Other {
                kind: "Statement".to_string(),
            },
            ExportState::local(),
        ),
    };

    let mut node = DocNode::new(name, def)
        .with_export(export)
        .with_location(parsed.span_to_location(span));
    node.leading_comments = parsed.leading_comment_ranges(span);
    node
}

fn module_decl_kind(decl: &swc_ast::ModuleDecl) -> &'static str {
    match decl {
        swc_ast::ModuleDecl::Import(_) => "ImportDeclaration",
        swc_ast::ModuleDecl::ExportNamed(_) | swc_ast::ModuleDecl::ExportAll(_) => {
            "ExportDeclaration"
        }
        swc_ast::ModuleDecl::ExportDefaultExpr(_) => "ExportAssignment",
        swc_ast::ModuleDecl::TsImportEquals(_) => "ImportEqualsDeclaration",
        _ => "ModuleDeclaration",
    }
}

/// Extract the name and definition of a declaration
fn extract_decl(parsed: &ParsedModule, decl: &swc_ast::Decl) -> (String, DocNodeDef) {
    match decl {
        swc_ast::Decl::Class(class_decl) => (
            class_decl.ident.sym.to_string(),
            DocNodeDef::Class {
                class_def: extract_class_def(parsed, &class_decl.class),
            },
        ),
        swc_ast::Decl::TsInterface(iface) => (
            iface.id.sym.to_string(),
            DocNodeDef::Interface {
                interface_def: extract_interface_def(parsed, iface),
            },
        ),
        swc_ast::Decl::TsTypeAlias(alias) => (
            alias.id.sym.to_string(),
            DocNodeDef::TypeAlias {
                type_alias_def: extract_type_alias_def(parsed, alias),
            },
        ),
        swc_ast::Decl::Fn(fn_decl) => (
            fn_decl.ident.sym.to_string(),
            other("FunctionDeclaration"),
        ),
        swc_ast::Decl::Var(var_decl) => {
            let name = var_decl
                .decls
                .first()
                .and_then(|d| match &d.name {
                    swc_ast::Pat::Ident(i) => Some(i.id.sym.to_string()),
                    _ => None,
                })
                .unwrap_or_default();
            (name, other("VariableStatement"))
        }
        swc_ast::Decl::TsEnum(ts_enum) => (ts_enum.id.sym.to_string(), other("EnumDeclaration")),
        swc_ast::Decl::TsModule(module) => {
            let name = match &module.id {
                swc_ast::TsModuleName::Ident(i) => i.sym.to_string(),
                swc_ast::TsModuleName::Str(s) => parsed.text_for_span(s.span).to_string(),
            };
            (name, other("ModuleDeclaration"))
        }
        swc_ast::Decl::Using(_) => (String::new(), other("UsingDeclaration")),
    }
}

/// Extract the name and definition of an `export default` declaration
fn extract_default_decl(parsed: &ParsedModule, decl: &swc_ast::DefaultDecl) -> (String, DocNodeDef) {
    match decl {
        swc_ast::DefaultDecl::Class(class_expr) => (
            class_expr
                .ident
                .as_ref()
                .map(|i| i.sym.to_string())
                .unwrap_or_else(|| "default".to_string()),
            DocNodeDef::Class {
                class_def: extract_class_def(parsed, &class_expr.class),
            },
        ),
        swc_ast::DefaultDecl::TsInterfaceDecl(iface) => (
            iface.id.sym.to_string(),
            DocNodeDef::Interface {
                interface_def: extract_interface_def(parsed, iface),
            },
        ),
        swc_ast::DefaultDecl::Fn(fn_expr) => (
            fn_expr
                .ident
                .as_ref()
                .map(|i| i.sym.to_string())
                .unwrap_or_else(|| "default".to_string()),
            other("FunctionDeclaration"),
        ),
    }
}

fn other(kind: &str) -> DocNodeDef {
    DocNodeDef::Other {
        kind: kind.to_string(),
    }
}

/// Extract class definition from SWC Class
fn extract_class_def(parsed: &ParsedModule, class: &swc_ast::Class) -> ClassDef {
    ClassDef {
        heritage: class_heritage(parsed, class),
        members: class
            .body
            .iter()
            .map(|member| extract_class_member(parsed, member))
            .collect(),
    }
}

/// `extends` / `implements` clauses as written
///
/// The text runs from the first base to the opening brace of the body, so
/// bases the parser drops (`extends Map, Set`) are kept.
fn class_heritage(parsed: &ParsedModule, class: &swc_ast::Class) -> Option<String> {
    let (keyword, first) = match (&class.super_class, class.implements.first()) {
        (Some(super_class), _) => ("extends", super_class.span()),
        (None, Some(implemented)) => ("implements", implemented.span),
        (None, None) => return None,
    };

    let last_hi = class
        .super_type_params
        .iter()
        .map(|p| p.span.hi)
        .chain(class.implements.iter().map(|i| i.span.hi))
        .fold(first.hi, |hi, next| hi.max(next));

    let tail = parsed.text_for_span(Span::new(first.lo, class.span.hi));
    let scanned = (last_hi.0 - first.lo.0) as usize;
    let end = tail
        .get(scanned..)
        .and_then(|rest| rest.find('{'))
        .map(|brace| scanned + brace)
        .unwrap_or(scanned);
    let clauses = single_line(tail.get(..end).unwrap_or(tail));

    Some(format!("{} {}", keyword, clauses))
}

fn extract_class_member(parsed: &ParsedModule, member: &swc_ast::ClassMember) -> ClassMemberDef {
    let kind = match member {
        swc_ast::ClassMember::Constructor(ctor) => {
            ClassMemberKind::Constructor(ClassConstructorDef {
                modifiers: member_modifiers(parsed, ctor.span, &[], ctor.key.span()),
                params: ctor
                    .params
                    .iter()
                    .map(|p| extract_ctor_param(parsed, p))
                    .collect(),
                type_params: Vec::new(),
                return_type: None,
            })
        }
        swc_ast::ClassMember::Method(method)
            if matches!(method.kind, swc_ast::MethodKind::Method) =>
        {
            let key_span = method.key.span();
            let modifiers =
                member_modifiers(parsed, method.span, &method.function.decorators, key_span);
            let name = MemberName::new(parsed.text_for_span(key_span));
            ClassMemberKind::Method(extract_method(parsed, name, modifiers, &method.function))
        }
        swc_ast::ClassMember::PrivateMethod(method)
            if matches!(method.kind, swc_ast::MethodKind::Method) =>
        {
            let modifiers = member_modifiers(
                parsed,
                method.span,
                &method.function.decorators,
                method.key.span,
            );
            let name = MemberName::new(format!("#{}", method.key.name));
            ClassMemberKind::Method(extract_method(parsed, name, modifiers, &method.function))
        }
        swc_ast::ClassMember::Method(_) | swc_ast::ClassMember::PrivateMethod(_) => {
            ClassMemberKind::Other {
                kind: "Accessor".to_string(),
            }
        }
        swc_ast::ClassMember::ClassProp(prop) => {
            let key_span = prop.key.span();
            ClassMemberKind::Property(ClassPropertyDef {
                name: MemberName::new(parsed.text_for_span(key_span)),
                modifiers: member_modifiers(parsed, prop.span, &prop.decorators, key_span),
                ts_type: type_ann_text(parsed, prop.type_ann.as_deref()),
                initializer: prop
                    .value
                    .as_ref()
                    .map(|v| parsed.text_for_span(v.span()).to_string()),
            })
        }
        swc_ast::ClassMember::PrivateProp(prop) => ClassMemberKind::Property(ClassPropertyDef {
            name: MemberName::new(format!("#{}", prop.key.name)),
            modifiers: member_modifiers(parsed, prop.span, &prop.decorators, prop.key.span),
            ts_type: type_ann_text(parsed, prop.type_ann.as_deref()),
            initializer: prop
                .value
                .as_ref()
                .map(|v| parsed.text_for_span(v.span()).to_string()),
        }),
        swc_ast::ClassMember::TsIndexSignature(_) => ClassMemberKind::Other {
            kind: "IndexSignature".to_string(),
        },
        swc_ast::ClassMember::StaticBlock(_) => ClassMemberKind::Other {
            kind: "ClassStaticBlockDeclaration".to_string(),
        },
        _ => ClassMemberKind::Other {
            kind: "ClassElement".to_string(),
        },
    };

    ClassMemberDef {
        kind,
        leading_comments: parsed.leading_comment_ranges(member.span()),
    }
}

/// Modifiers as written between the member start (after decorators) and its name
fn member_modifiers(
    parsed: &ParsedModule,
    member_span: Span,
    decorators: &[swc_ast::Decorator],
    key_span: Span,
) -> Vec<String> {
    let start = decorators
        .iter()
        .map(|d| d.span.hi)
        .fold(member_span.lo, |lo, hi| lo.max(hi));
    if key_span.lo <= start {
        return Vec::new();
    }
    modifiers_from_source(parsed.text_for_span(Span::new(start, key_span.lo)))
}

fn extract_method(
    parsed: &ParsedModule,
    name: MemberName,
    modifiers: Vec<String>,
    function: &swc_ast::Function,
) -> ClassMethodDef {
    ClassMethodDef {
        name,
        modifiers,
        params: function
            .params
            .iter()
            .map(|p| extract_param(parsed, &p.pat))
            .collect(),
        type_params: extract_type_params(parsed, function.type_params.as_deref()),
        return_type: type_ann_text(parsed, function.return_type.as_deref()),
    }
}

/// Text of the type in a `: Type` annotation
fn type_ann_text(parsed: &ParsedModule, ann: Option<&swc_ast::TsTypeAnn>) -> Option<String> {
    ann.map(|a| parsed.text_for_span(a.type_ann.span()).to_string())
}

fn extract_ctor_param(parsed: &ParsedModule, param: &swc_ast::ParamOrTsParamProp) -> ParamDef {
    match param {
        swc_ast::ParamOrTsParamProp::Param(p) => extract_param(parsed, &p.pat),
        swc_ast::ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
            swc_ast::TsParamPropParam::Ident(ident) => ParamDef::new(
                ident.id.sym.to_string(),
                type_ann_text(parsed, ident.type_ann.as_deref()),
            ),
            swc_ast::TsParamPropParam::Assign(assign) => extract_param(parsed, &assign.left),
        },
    }
}

/// Extract a parameter from a pattern
///
/// Optional markers, rest dots and default values are not part of the name.
fn extract_param(parsed: &ParsedModule, pat: &swc_ast::Pat) -> ParamDef {
    match pat {
        swc_ast::Pat::Ident(ident) => ParamDef::new(
            ident.id.sym.to_string(),
            type_ann_text(parsed, ident.type_ann.as_deref()),
        ),
        swc_ast::Pat::Rest(rest) => {
            let inner = extract_param(parsed, &rest.arg);
            let ts_type = type_ann_text(parsed, rest.type_ann.as_deref()).or(inner.ts_type);
            ParamDef::new(inner.name, ts_type)
        }
        swc_ast::Pat::Assign(assign) => extract_param(parsed, &assign.left),
        swc_ast::Pat::Array(array) => pattern_param(parsed, array.span, array.type_ann.as_deref()),
        swc_ast::Pat::Object(object) => {
            pattern_param(parsed, object.span, object.type_ann.as_deref())
        }
        _ => ParamDef::named(parsed.text_for_span(pat.span()).trim()),
    }
}

/// Destructuring parameter: the pattern text without its annotation
fn pattern_param(
    parsed: &ParsedModule,
    span: Span,
    type_ann: Option<&swc_ast::TsTypeAnn>,
) -> ParamDef {
    let text = parsed.text_for_span(span);
    let ts_type = type_ann_text(parsed, type_ann);
    let name = ts_type
        .as_deref()
        .and_then(|ty| text.strip_suffix(ty))
        .map(|rest| rest.trim_end().trim_end_matches(':').trim_end_matches('?'))
        .unwrap_or(text);
    ParamDef::new(name.trim(), ts_type)
}

fn extract_type_params(
    parsed: &ParsedModule,
    decl: Option<&swc_ast::TsTypeParamDecl>,
) -> Vec<TsTypeParamDef> {
    decl.map(|decl| {
        decl.params
            .iter()
            .map(|p| {
                let param = TsTypeParamDef::new(p.name.sym.to_string());
                match &p.constraint {
                    Some(constraint) => {
                        param.with_constraint(parsed.text_for_span(constraint.span()))
                    }
                    None => param,
                }
            })
            .collect()
    })
    .unwrap_or_default()
}

/// Extract interface definition
fn extract_interface_def(parsed: &ParsedModule, iface: &swc_ast::TsInterfaceDecl) -> InterfaceDef {
    let heritage = if iface.extends.is_empty() {
        None
    } else {
        let extended: Vec<&str> = iface
            .extends
            .iter()
            .map(|e| parsed.text_for_span(e.span()))
            .collect();
        Some(format!("extends {}", extended.join(", ")))
    };

    InterfaceDef {
        heritage,
        members: extract_type_members(parsed, &iface.body.body),
    }
}

fn extract_type_members(
    parsed: &ParsedModule,
    elements: &[swc_ast::TsTypeElement],
) -> Vec<TsTypeMemberDef> {
    elements
        .iter()
        .map(|element| {
            TsTypeMemberDef::new(parsed.text_for_span(element.span()))
                .with_comments(parsed.leading_comment_ranges(element.span()))
        })
        .collect()
}

/// Extract type alias definition
fn extract_type_alias_def(
    parsed: &ParsedModule,
    alias: &swc_ast::TsTypeAliasDecl,
) -> TypeAliasDef {
    match alias.type_ann.as_ref() {
        swc_ast::TsType::TsTypeLit(literal) => {
            TypeAliasDef::object(extract_type_members(parsed, &literal.members))
        }
        body => TypeAliasDef::value(parsed.text_for_span(body.span())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_alias::TypeAliasBody;

    fn class_def(node: &DocNode) -> &ClassDef {
        match &node.def {
            DocNodeDef::Class { class_def } => class_def,
            other => panic!("expected class, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_class() {
        let source = r#"
/**
 * AClass markdown comment.
 */
export class AClass extends Map<string, number> implements Disposable {
    instancePropertyThing = 'thing';
    static staticPropertyNumberType: number;
    #secret = 1;

    /** Constructor markdown comment. */
    constructor(param: any, private readonly store?: Store) {
        super();
    }

    async instanceMethod<P extends string>(param: string, ...rest: number[]): Promise<string> {
        return 'hello world';
    }

    get size(): number { return 0; }
}
"#;

        let unit = parse_source_unit("mod.ts", source).unwrap();
        assert_eq!(unit.nodes.len(), 1);

        let node = &unit.nodes[0];
        assert_eq!(node.name, "AClass");
        assert!(node.export.has_export_modifier);
        assert_eq!(node.doc().as_deref(), Some("AClass markdown comment."));

        let class = class_def(node);
        assert_eq!(
            class.heritage.as_deref(),
            Some("extends Map<string, number> implements Disposable")
        );
        assert_eq!(class.members.len(), 6);

        match &class.members[0].kind {
            ClassMemberKind::Property(prop) => {
                assert_eq!(prop.name.text, "instancePropertyThing");
                assert_eq!(prop.ts_type, None);
                assert_eq!(prop.initializer.as_deref(), Some("'thing'"));
                assert!(prop.modifiers.is_empty());
            }
            other => panic!("unexpected member {:?}", other),
        }

        match &class.members[1].kind {
            ClassMemberKind::Property(prop) => {
                assert_eq!(prop.modifiers, vec!["static"]);
                assert_eq!(prop.ts_type.as_deref(), Some("number"));
            }
            other => panic!("unexpected member {:?}", other),
        }

        match &class.members[2].kind {
            ClassMemberKind::Property(prop) => {
                assert_eq!(prop.name.text, "#secret");
                assert!(prop.name.is_private_identifier);
            }
            other => panic!("unexpected member {:?}", other),
        }

        match &class.members[3].kind {
            ClassMemberKind::Constructor(ctor) => {
                assert_eq!(
                    ctor.params,
                    vec![
                        ParamDef::typed("param", "any"),
                        ParamDef::typed("store", "Store"),
                    ]
                );
            }
            other => panic!("unexpected member {:?}", other),
        }
        assert_eq!(
            class.members[3].doc().as_deref(),
            Some("Constructor markdown comment.")
        );

        match &class.members[4].kind {
            ClassMemberKind::Method(method) => {
                assert_eq!(method.name.text, "instanceMethod");
                assert_eq!(method.modifiers, vec!["async"]);
                assert_eq!(
                    method.type_params,
                    vec![TsTypeParamDef::new("P").with_constraint("string")]
                );
                assert_eq!(
                    method.params,
                    vec![
                        ParamDef::typed("param", "string"),
                        ParamDef::typed("rest", "number[]"),
                    ]
                );
                assert_eq!(method.return_type.as_deref(), Some("Promise<string>"));
            }
            other => panic!("unexpected member {:?}", other),
        }

        assert!(matches!(
            class.members[5].kind,
            ClassMemberKind::Other { .. }
        ));
    }

    #[test]
    fn test_parse_interface() {
        let source = r#"
export interface FileStat extends Base {
    /** File size in bytes */
    size: number;
    isDirectory?: boolean;
}
"#;

        let unit = parse_source_unit("mod.ts", source).unwrap();
        let node = &unit.nodes[0];
        assert_eq!(node.name, "FileStat");
        match &node.def {
            DocNodeDef::Interface { interface_def } => {
                assert_eq!(interface_def.heritage.as_deref(), Some("extends Base"));
                let texts: Vec<_> = interface_def.members.iter().map(|m| m.text.as_str()).collect();
                assert_eq!(texts, vec!["size: number", "isDirectory?: boolean"]);
                assert_eq!(
                    interface_def.members[0].doc().as_deref(),
                    Some("File size in bytes")
                );
                assert_eq!(interface_def.members[1].doc(), None);
            }
            other => panic!("expected interface, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_type_aliases() {
        let source = r#"
export type St = 'st';
export type ArrayOrObjectType = Array<string> | Object;
export type SimpleType = {
  a: string;
  b?: number;
};
"#;

        let unit = parse_source_unit("mod.ts", source).unwrap();
        let bodies: Vec<_> = unit
            .nodes
            .iter()
            .map(|n| match &n.def {
                DocNodeDef::TypeAlias { type_alias_def } => type_alias_def.body.clone(),
                other => panic!("expected type alias, got {:?}", other),
            })
            .collect();

        assert_eq!(
            bodies[0],
            TypeAliasBody::Value {
                text: "'st'".to_string()
            }
        );
        assert_eq!(
            bodies[1],
            TypeAliasBody::Value {
                text: "Array<string> | Object".to_string()
            }
        );
        match &bodies[2] {
            TypeAliasBody::Object { members } => {
                let texts: Vec<_> = members.iter().map(|m| m.text.as_str()).collect();
                assert_eq!(texts, vec!["a: string", "b?: number"]);
            }
            other => panic!("expected object body, got {:?}", other),
        }
    }

    #[test]
    fn test_export_states() {
        let source = r#"
class Listed {}
class Hidden {}
interface Local {}
export { Listed };
export default class {}
import { x } from "./x.ts";
function helper() {}
"#;

        let unit = parse_source_unit("mod.ts", source).unwrap();
        let states: Vec<_> = unit
            .nodes
            .iter()
            .map(|n| (n.name.as_str(), n.def.keyword(), n.is_exported()))
            .collect();

        assert_eq!(
            states,
            vec![
                ("Listed", "class", true),
                ("Hidden", "class", false),
                ("Local", "interface", false),
                ("", "ExportDeclaration", false),
                ("default", "class", true),
                ("", "ImportDeclaration", false),
                ("helper", "FunctionDeclaration", false),
            ]
        );
        assert!(unit.nodes[0].export.implicit);
        assert!(!unit.nodes[0].export.has_export_modifier);
    }

    #[test]
    fn test_export_default_name_is_implicit_export() {
        let source = "class Main {}\ninterface Options {}\nexport default Main;\n";
        let unit = parse_source_unit("mod.ts", source).unwrap();

        let main = &unit.nodes[0];
        assert_eq!(main.name, "Main");
        assert!(main.export.implicit);
        assert!(!main.export.has_export_modifier);
        assert!(!unit.nodes[1].is_exported());
        assert_eq!(unit.nodes[2].def.keyword(), "ExportAssignment");
        assert!(!unit.nodes[2].is_exported());
    }

    #[test]
    fn test_modifiers_keep_written_order() {
        let source = r#"
export class Model {
    declare readonly id: number;
    declare static registry: Map<string, Model>;
    declare public label;
    protected static override readonly kind = 'model';
    @observe() static async load(): Promise<void> {}
    constructor(private readonly store: Store) {}
}
"#;
        let unit = parse_source_unit("mod.ts", source).unwrap();
        let class = class_def(&unit.nodes[0]);
        let modifiers: Vec<Vec<String>> = class
            .members
            .iter()
            .map(|m| match &m.kind {
                ClassMemberKind::Property(prop) => prop.modifiers.clone(),
                ClassMemberKind::Method(method) => method.modifiers.clone(),
                ClassMemberKind::Constructor(ctor) => ctor.modifiers.clone(),
                ClassMemberKind::Other { kind } => panic!("unexpected member {}", kind),
            })
            .collect();

        assert_eq!(
            modifiers,
            vec![
                vec!["declare", "readonly"],
                vec!["declare", "static"],
                vec!["declare", "public"],
                vec!["protected", "static", "override", "readonly"],
                vec!["static", "async"],
                vec![],
            ]
        );
    }

    #[test]
    fn test_heritage_keeps_every_base() {
        let source = r#"
export class AClass extends Map, Set {}
export class Store<T> extends Base<{ id: T }> implements Disposable, Iterable<T> {
    size = 0;
}
export default class extends Mixin(Base) {}
"#;
        let unit = parse_source_unit("mod.ts", source).unwrap();
        let heritage: Vec<_> = unit
            .nodes
            .iter()
            .map(|n| class_def(n).heritage.clone())
            .collect();

        assert_eq!(
            heritage,
            vec![
                Some("extends Map, Set".to_string()),
                Some("extends Base<{ id: T }> implements Disposable, Iterable<T>".to_string()),
                Some("extends Mixin(Base)".to_string()),
            ]
        );
    }

    #[test]
    fn test_declaration_file_exports_everything() {
        let source = "declare class Api {}\ninterface Options {}\n";
        let unit = parse_source_unit("api.d.ts", source).unwrap();
        assert!(unit.nodes.iter().all(|n| n.is_exported()));
    }

    #[test]
    fn test_destructured_and_defaulted_params() {
        let source = r#"
export class Dialog {
    open({ title, modal }: DialogOptions, retries = 3, label?: string) {}
}
"#;
        let unit = parse_source_unit("mod.ts", source).unwrap();
        let class = class_def(&unit.nodes[0]);
        match &class.members[0].kind {
            ClassMemberKind::Method(method) => {
                assert_eq!(
                    method.params,
                    vec![
                        ParamDef::typed("{ title, modal }", "DialogOptions"),
                        ParamDef::named("retries"),
                        ParamDef::typed("label", "string"),
                    ]
                );
            }
            other => panic!("unexpected member {:?}", other),
        }
    }

    #[test]
    fn test_parse_failure_is_propagated() {
        let err = parse_source_unit("mod.ts", "export interface {").unwrap_err();
        assert!(err.is_parse_error());
    }
}
