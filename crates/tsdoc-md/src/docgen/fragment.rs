//! Rendered Markdown building blocks
//!
//! A [`Fragment`] is a run of consecutive Markdown lines belonging to one
//! declaration or member. Fragments are only ever appended, never reordered;
//! the assembler separates them with a blank line.

/// Consecutive Markdown lines for one declaration or member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    lines: Vec<String>,
}

impl Fragment {
    /// ATX heading of the given level
    pub fn heading(level: usize, text: impl AsRef<str>) -> Self {
        Self {
            lines: vec![format!("{} {}", "#".repeat(level), text.as_ref())],
        }
    }

    /// Plain paragraph
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// Append documentation text on the following line, when present
    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        if let Some(doc) = doc.filter(|d| !d.is_empty()) {
            self.lines.push(doc);
        }
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_markdown(&self) -> String {
        self.lines.join("\n")
    }
}

/// Inline code span for raw source text
///
/// The fence is one backtick longer than the longest backtick run inside the
/// text, and the text is padded with spaces when it starts or ends with a
/// backtick, so template literal types keep their own backticks.
pub fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

/// A titled group of member fragments (e.g. "Static Methods")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub fragments: Vec<Fragment>,
}

impl Section {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            fragments: Vec::new(),
        }
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Heading followed by the members; nothing at all for an empty section
    pub fn into_fragments(self) -> Vec<Fragment> {
        if self.fragments.is_empty() {
            return Vec::new();
        }
        std::iter::once(Fragment::heading(2, self.title))
            .chain(self.fragments)
            .collect()
    }
}
