//! Resolved locator results.

use super::outline::{Pos, SectionKind};

/// The smallest structural unit enclosing the cursor, classified.
///
/// Produced by [`crate::locate::locate`]. Heading targets are addressed by
/// their (sanitized-at-format-time) text; block targets are addressed by a
/// `^id` marker, minting one first when [`BlockTarget::id`] is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// The cursor sits on a heading line
    Heading(HeadingTarget),

    /// The cursor sits inside a non-heading block or a list item
    Block(BlockTarget),
}

impl ResolvedTarget {
    /// End position of the resolved unit's span.
    pub fn span_end(&self) -> Pos {
        match self {
            ResolvedTarget::Heading(heading) => heading.span_end,
            ResolvedTarget::Block(block) => block.span_end,
        }
    }
}

/// A heading resolved at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingTarget {
    /// Raw heading text; sanitization happens only at formatting time
    pub text: String,

    /// End of the heading's span
    pub span_end: Pos,
}

/// A block or list item resolved at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTarget {
    /// Kind of the enclosing section; list items carry
    /// [`SectionKind::List`]
    pub kind: SectionKind,

    /// Identifier already present on the block, if any
    pub id: Option<String>,

    /// End of the block's span, where a minted identifier is spliced
    pub span_end: Pos,
}
