//! Interface definitions
//!
//! Interface members (and the members of object-literal type aliases) are
//! not split into types and names: each is rendered from its raw source text.

use crate::docgen::fragment::{code_span, Fragment, Section};
use crate::js_doc;
use crate::node::CommentRange;
use lazy_static::lazy_static;
use regex::Regex;

/// A member of an interface body or type literal, kept as raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeMemberDef {
    /// Member text without its trailing `;` or `,`
    pub text: String,
    pub leading_comments: Vec<CommentRange>,
}

impl TsTypeMemberDef {
    pub fn new(text: &str) -> Self {
        Self {
            text: normalize_member_text(text),
            leading_comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<CommentRange>) -> Self {
        self.leading_comments = comments;
        self
    }

    pub fn doc(&self) -> Option<String> {
        js_doc::leading_doc(&self.leading_comments)
    }

    /// ``### `Owner.text` `` followed by the member's documentation
    pub fn to_fragment(&self, owner: &str) -> Fragment {
        let text = format!("{}.{}", owner, self.text);
        Fragment::heading(3, code_span(&text)).with_doc(self.doc())
    }
}

/// Interface definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceDef {
    /// `extends` clause as written
    pub heritage: Option<String>,
    pub members: Vec<TsTypeMemberDef>,
}

impl InterfaceDef {
    pub fn properties_section(&self, name: &str) -> Section {
        members_section(name, &self.members)
    }
}

/// `## Properties` section for a list of type members
pub(crate) fn members_section(owner: &str, members: &[TsTypeMemberDef]) -> Section {
    let mut section = Section::new("Properties");
    for member in members {
        section.push(member.to_fragment(owner));
    }
    section
}

lazy_static! {
    /// Space left after an opening bracket by a joined line break
    static ref OPEN_BRACKET_SPACE: Regex = Regex::new(r"([(\[]) +").unwrap();
    /// Space or trailing comma left before a closing bracket
    static ref CLOSE_BRACKET_SPACE: Regex = Regex::new(r",? *([)\]])").unwrap();
}

/// Collapse line breaks so the text fits a single heading line
///
/// Lines are joined with one space; when a signature was split over several
/// lines, the padding and trailing commas this leaves inside `(..)` and `[..]`
/// are removed.
pub(crate) fn single_line(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let joined = lines.join(" ");
    if lines.len() < 2 {
        return joined;
    }
    let opened = OPEN_BRACKET_SPACE.replace_all(&joined, "$1");
    CLOSE_BRACKET_SPACE.replace_all(&opened, "$1").into_owned()
}

fn normalize_member_text(text: &str) -> String {
    let text = single_line(text);
    text.trim_end_matches([';', ','])
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::doc_comment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_text_normalization() {
        assert_eq!(TsTypeMemberDef::new("a: string;").text, "a: string");
        assert_eq!(TsTypeMemberDef::new("b?: number,").text, "b?: number");
        assert_eq!(
            TsTypeMemberDef::new("read(\n    path: string,\n): Promise<string>;").text,
            "read(path: string): Promise<string>"
        );
    }

    #[test]
    fn test_single_line_cleans_split_signatures() {
        assert_eq!(
            single_line("open(\n    path: string,\n    options?: {\n        mode: number;\n    },\n): Promise<File>"),
            "open(path: string, options?: { mode: number; }): Promise<File>"
        );
        assert_eq!(
            single_line("[\n    string,\n    number,\n]"),
            "[string, number]"
        );
        assert_eq!(single_line("f( a )"), "f( a )");
        assert_eq!(single_line("\n  | 'read'\n  | 'write'"), "| 'read' | 'write'");
    }

    #[test]
    fn test_backticks_in_member_text() {
        let member = TsTypeMemberDef::new("id: `user-${string}`;");
        assert_eq!(
            member.to_fragment("Key").to_markdown(),
            "### `` Key.id: `user-${string}` ``"
        );
    }

    #[test]
    fn test_properties_section() {
        let iface = InterfaceDef {
            heritage: None,
            members: vec![
                TsTypeMemberDef::new("a: string;").with_comments(vec![doc_comment("doc")]),
                TsTypeMemberDef::new("b?: number;"),
            ],
        };

        let text: Vec<String> = iface
            .properties_section("I")
            .into_fragments()
            .iter()
            .map(Fragment::to_markdown)
            .collect();
        assert_eq!(
            text,
            vec!["## Properties", "### `I.a: string`\ndoc", "### `I.b?: number`"]
        );
    }

    #[test]
    fn test_empty_interface_has_no_section() {
        let iface = InterfaceDef::default();
        assert!(iface.properties_section("Empty").is_empty());
    }
}
