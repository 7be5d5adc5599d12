//! Class definitions
//!
//! This module provides types for representing TypeScript classes and the
//! classification of their members into the rendered sections: constructor,
//! static properties, static methods, instance properties and instance
//! methods.

use crate::docgen::fragment::{Fragment, Section};
use crate::js_doc;
use crate::node::CommentRange;
use crate::params::{render_params, ParamDef};
use crate::ts_type_params::{render_type_params, TsTypeParamDef};
use lazy_static::lazy_static;
use regex::Regex;

/// Keywords that may precede a class member name
pub const MODIFIER_KEYWORDS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "abstract",
    "override",
    "readonly",
    "declare",
    "async",
    "accessor",
];

lazy_static! {
    static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").unwrap();
}

/// Modifier keywords in the text between a member's start and its name
///
/// Keywords are returned in the order they are written; anything else in
/// the text (`*` of generators, comments) is ignored.
pub fn modifiers_from_source(prefix: &str) -> Vec<String> {
    COMMENT_REGEX
        .replace_all(prefix, " ")
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|word| MODIFIER_KEYWORDS.contains(word))
        .map(String::from)
        .collect()
}

/// Render a modifier list separated by single spaces
pub fn render_modifiers(modifiers: &[String]) -> String {
    modifiers.join(" ")
}

/// Name of a property or method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberName {
    /// Name as written in source (`foo`, `'quoted'`, `[Symbol.iterator]`, `#secret`)
    pub text: String,
    /// ECMAScript private name (`#secret`)
    pub is_private_identifier: bool,
}

impl MemberName {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_private_identifier = text.starts_with('#');
        Self {
            text,
            is_private_identifier,
        }
    }
}

/// Class property definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPropertyDef {
    pub name: MemberName,
    pub modifiers: Vec<String>,
    /// Type annotation text
    pub ts_type: Option<String>,
    /// Initializer expression text
    pub initializer: Option<String>,
}

/// Class method definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMethodDef {
    pub name: MemberName,
    pub modifiers: Vec<String>,
    pub params: Vec<ParamDef>,
    pub type_params: Vec<TsTypeParamDef>,
    pub return_type: Option<String>,
}

/// Class constructor definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassConstructorDef {
    pub modifiers: Vec<String>,
    pub params: Vec<ParamDef>,
    pub type_params: Vec<TsTypeParamDef>,
    pub return_type: Option<String>,
}

/// Class member, tagged by syntactic kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMemberKind {
    Property(ClassPropertyDef),
    Method(ClassMethodDef),
    Constructor(ClassConstructorDef),
    /// Accessors, index signatures, static blocks; never rendered
    Other { kind: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMemberDef {
    pub kind: ClassMemberKind,
    pub leading_comments: Vec<CommentRange>,
}

impl ClassMemberDef {
    pub fn new(kind: ClassMemberKind) -> Self {
        Self {
            kind,
            leading_comments: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: CommentRange) -> Self {
        self.leading_comments.push(comment);
        self
    }

    pub fn doc(&self) -> Option<String> {
        js_doc::leading_doc(&self.leading_comments)
    }
}

/// Class definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDef {
    /// `extends` / `implements` clauses as written
    pub heritage: Option<String>,
    pub members: Vec<ClassMemberDef>,
}

/// Rendered class members, one section per bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSections {
    pub constructor: Section,
    pub static_properties: Section,
    pub static_methods: Section,
    pub instance_properties: Section,
    pub instance_methods: Section,
}

impl ClassSections {
    fn new() -> Self {
        Self {
            constructor: Section::new("Constructor"),
            static_properties: Section::new("Static Properties"),
            static_methods: Section::new("Static Methods"),
            instance_properties: Section::new("Instance Properties"),
            instance_methods: Section::new("Instance Methods"),
        }
    }

    /// Sections in their fixed output order, empty ones dropped
    pub fn into_fragments(self) -> Vec<Fragment> {
        [
            self.constructor,
            self.static_properties,
            self.static_methods,
            self.instance_properties,
            self.instance_methods,
        ]
        .into_iter()
        .flat_map(Section::into_fragments)
        .collect()
    }
}

impl ClassDef {
    /// Classify and render the members of the class named `class_name`
    pub fn sections(&self, class_name: &str) -> ClassSections {
        let mut sections = ClassSections::new();

        for member in &self.members {
            match &member.kind {
                ClassMemberKind::Constructor(ctor) => {
                    let heading = callable_heading(
                        class_name,
                        "constructor",
                        &ctor.modifiers,
                        &ctor.type_params,
                        &ctor.params,
                        ctor.return_type.as_deref(),
                    );
                    sections
                        .constructor
                        .push(Fragment::heading(3, heading).with_doc(member.doc()));
                }
                ClassMemberKind::Property(prop) => {
                    if is_private(&prop.name, &prop.modifiers) {
                        tracing::debug!(member = %prop.name.text, "skipping private property");
                        continue;
                    }
                    let fragment =
                        Fragment::heading(3, property_heading(class_name, prop)).with_doc(member.doc());
                    if is_static(&prop.modifiers) {
                        sections.static_properties.push(fragment);
                    } else {
                        sections.instance_properties.push(fragment);
                    }
                }
                ClassMemberKind::Method(method) => {
                    if is_private(&method.name, &method.modifiers) {
                        tracing::debug!(member = %method.name.text, "skipping private method");
                        continue;
                    }
                    let heading = callable_heading(
                        class_name,
                        &method.name.text,
                        &method.modifiers,
                        &method.type_params,
                        &method.params,
                        method.return_type.as_deref(),
                    );
                    let fragment = Fragment::heading(3, heading).with_doc(member.doc());
                    if is_static(&method.modifiers) {
                        sections.static_methods.push(fragment);
                    } else {
                        sections.instance_methods.push(fragment);
                    }
                }
                ClassMemberKind::Other { kind } => {
                    tracing::debug!(kind = %kind, class = %class_name, "skipping class member");
                }
            }
        }

        sections
    }
}

fn is_private(name: &MemberName, modifiers: &[String]) -> bool {
    name.is_private_identifier || modifiers.iter().any(|m| m == "private")
}

fn is_static(modifiers: &[String]) -> bool {
    modifiers.iter().any(|m| m == "static")
}

fn with_modifier_prefix(modifiers: &[String], rest: String) -> String {
    if modifiers.is_empty() {
        rest
    } else {
        format!("{} {}", render_modifiers(modifiers), rest)
    }
}

/// `[modifiers ]Class.name: Type`, or `= initializer` when untyped
fn property_heading(class_name: &str, prop: &ClassPropertyDef) -> String {
    let mut text = format!("{}.{}", class_name, prop.name.text);
    if let Some(ts_type) = &prop.ts_type {
        text.push_str(&format!(": {}", ts_type));
    } else if let Some(initializer) = &prop.initializer {
        text.push_str(&format!(" = {}", initializer));
    }
    with_modifier_prefix(&prop.modifiers, text)
}

/// `[modifiers ]Class.name[<TypeParams>](params)[: Return]`
fn callable_heading(
    class_name: &str,
    name: &str,
    modifiers: &[String],
    type_params: &[TsTypeParamDef],
    params: &[ParamDef],
    return_type: Option<&str>,
) -> String {
    let mut text = format!("{}.{}", class_name, name);
    if !type_params.is_empty() {
        text.push_str(&format!("<{}>", render_type_params(type_params)));
    }
    text.push_str(&format!("({})", render_params(params)));
    if let Some(return_type) = return_type {
        text.push_str(&format!(": {}", return_type));
    }
    with_modifier_prefix(modifiers, text)
}
