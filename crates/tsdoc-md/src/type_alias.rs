//! Type alias definitions
//!
//! This module provides types for representing TypeScript type aliases
//! in documentation.
//!
//! An alias whose body is an object type literal is documented like an
//! interface. Every other body (unions, literal types, type references,
//! function types, ...) is shown verbatim as the alias value.

use crate::docgen::fragment::{code_span, Fragment, Section};
use crate::interface::{members_section, single_line, TsTypeMemberDef};

/// Body of a type alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAliasBody {
    /// `type T = { a: string; b?: number }`
    Object { members: Vec<TsTypeMemberDef> },
    /// `type T = 'a' | 'b'`, `type T = Array<string>`, ...
    Value { text: String },
}

/// Type alias definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDef {
    pub body: TypeAliasBody,
}

impl TypeAliasDef {
    pub fn object(members: Vec<TsTypeMemberDef>) -> Self {
        Self {
            body: TypeAliasBody::Object { members },
        }
    }

    pub fn value(text: &str) -> Self {
        Self {
            body: TypeAliasBody::Value {
                text: single_line(text),
            },
        }
    }

    /// `## Properties` for object bodies, `## Value` otherwise
    pub fn section(&self, name: &str) -> Section {
        match &self.body {
            TypeAliasBody::Object { members } => members_section(name, members),
            TypeAliasBody::Value { text } => {
                let mut section = Section::new("Value");
                section.push(Fragment::heading(3, code_span(text)));
                section
            }
        }
    }
}
