//! Outline snapshot types supplied by the host.
//!
//! An [`Outline`] is an immutable-per-call index of a document's structure.
//! The host owns it and rebuilds it on every edit; commands fetch a fresh one
//! per invocation and never hold on to it. Spans within each sequence are
//! non-overlapping and ordered by start line, and a heading's span start line
//! matches exactly one heading entry.

use serde::{Deserialize, Serialize};

/// A line/column position inside a document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pos {
    /// Zero-based line number
    pub line: u32,

    /// Zero-based column within the line
    pub col: u32,
}

impl Pos {
    /// Creates a new position from a line and column.
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// The extent of a structural unit, from its first to its last character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Position of the unit's first character
    pub start: Pos,

    /// Position just past the unit's last character
    pub end: Pos,
}

impl Span {
    /// Creates a new span from start and end positions.
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Returns true when the given line falls inside this span,
    /// boundaries included.
    pub fn contains_line(&self, line: u32) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}

/// A heading entry in the outline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
    /// Heading depth, 1 through 6
    pub level: u8,

    /// Raw display text, markup symbols already stripped by the host
    pub text: String,

    /// Extent of the heading line
    pub span: Span,
}

/// Classification of a top-level section in the outline.
///
/// The set mirrors what outline-producing hosts emit today; anything newer
/// deserializes as [`SectionKind::Unknown`] rather than failing the whole
/// outline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Paragraph,
    Heading,
    List,
    Blockquote,
    Code,
    Table,
    Comment,
    FootnoteDefinition,
    Html,
    Yaml,
    ThematicBreak,
    Math,
    Callout,
    #[serde(other)]
    Unknown,
}

impl SectionKind {
    /// Convert to the host-side string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Paragraph => "paragraph",
            SectionKind::Heading => "heading",
            SectionKind::List => "list",
            SectionKind::Blockquote => "blockquote",
            SectionKind::Code => "code",
            SectionKind::Table => "table",
            SectionKind::Comment => "comment",
            SectionKind::FootnoteDefinition => "footnoteDefinition",
            SectionKind::Html => "html",
            SectionKind::Yaml => "yaml",
            SectionKind::ThematicBreak => "thematicBreak",
            SectionKind::Math => "math",
            SectionKind::Callout => "callout",
            SectionKind::Unknown => "unknown",
        }
    }

    /// Whether an identifier marker spliced after a block of this kind must
    /// go on its own paragraph.
    ///
    /// For these kinds an inline ` ^id` would land inside the block's own
    /// syntax (a fenced code line, a table row, a quoted line) and corrupt
    /// it, so the marker is separated by a blank line instead. All other
    /// kinds take a single-space separator, which keeps the identifier
    /// attached to the same block.
    pub fn needs_trailing_blank_line(&self) -> bool {
        matches!(
            self,
            SectionKind::Blockquote
                | SectionKind::Code
                | SectionKind::Table
                | SectionKind::Comment
                | SectionKind::FootnoteDefinition
        )
    }
}

/// A top-level section entry in the outline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Structural classification of the section
    pub kind: SectionKind,

    /// Extent of the section
    pub span: Span,

    /// Pre-existing block identifier, when the section already carries a
    /// `^id` marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A list item entry in the outline.
///
/// List items are only reachable through a parent section of kind
/// [`SectionKind::List`]; the outline does not model nesting beyond that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListItem {
    /// Extent of the item, including any continuation lines
    pub span: Span,

    /// Pre-existing block identifier, when the item already carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Structural snapshot of a document, supplied fresh by the host per command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Heading entries, ordered by start line
    #[serde(default)]
    pub headings: Vec<Heading>,

    /// Section entries, ordered by start line, non-overlapping
    #[serde(default)]
    pub sections: Vec<Section>,

    /// List item entries, ordered by start line
    #[serde(default)]
    pub list_items: Vec<ListItem>,
}
