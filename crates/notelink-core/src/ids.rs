//! Identifier minting and splice planning.
//!
//! Block identifiers are timestamps formatted with the user's configured
//! pattern, so they sort naturally and stay collision-resistant down to the
//! pattern's granularity. A pattern with second-level granularity can yield a
//! different value on every call: mint once per splice and reuse the value
//! for every downstream formatting step.

use jiff::{fmt::strtime, Zoned};
use uuid::Uuid;

use crate::error::{NotelinkError, Result};
use crate::models::{BlockTarget, Pos, Settings};

/// Formats the current instant with a strftime pattern.
pub(crate) fn format_now(pattern: &str) -> Result<String> {
    strtime::format(pattern, &Zoned::now()).map_err(|source| NotelinkError::TimestampFormat {
        pattern: pattern.to_string(),
        source,
    })
}

/// Mints a new block identifier from [`Settings::block_id_format`].
///
/// Fails on an unformattable pattern instead of silently producing a broken
/// marker.
pub fn mint_block_id(settings: &Settings) -> Result<String> {
    format_now(&settings.block_id_format)
}

/// Generates a note-level unique id.
///
/// Random v4 UUID in the canonical hyphenated form, e.g.
/// `1f0e2aeb-9c3d-4b5a-8f21-0a6d43c7e901`.
pub fn generate_note_uid() -> String {
    Uuid::new_v4().to_string()
}

/// A planned text insertion, ready to hand to the document mutator.
///
/// Splices never touch text before the insertion point and never change the
/// semantic kind of the block they mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Insertion position, the target block's span end
    pub at: Pos,

    /// Text to insert, separator included
    pub text: String,
}

/// Plans the insertion of `id` as a `^id` marker after `target`.
///
/// Blocks whose syntax would swallow an inline marker (fenced code, tables,
/// quotes, comments, footnote definitions) get the marker on its own
/// paragraph after the block; everything else gets it inline, separated by a
/// single space so the identifier stays attached to the block.
///
/// # Examples
///
/// ```rust
/// use notelink_core::ids::splice_for;
/// use notelink_core::models::{BlockTarget, Pos, SectionKind};
///
/// let paragraph = BlockTarget {
///     kind: SectionKind::Paragraph,
///     id: None,
///     span_end: Pos::new(4, 18),
/// };
/// assert_eq!(splice_for(&paragraph, "20240101").text, " ^20240101");
///
/// let fenced = BlockTarget {
///     kind: SectionKind::Code,
///     id: None,
///     span_end: Pos::new(9, 3),
/// };
/// assert_eq!(splice_for(&fenced, "20240101").text, "\n\n^20240101");
/// ```
pub fn splice_for(target: &BlockTarget, id: &str) -> Splice {
    let spacer = if target.kind.needs_trailing_blank_line() {
        "\n\n"
    } else {
        " "
    };

    Splice {
        at: target.span_end,
        text: format!("{spacer}^{id}"),
    }
}
