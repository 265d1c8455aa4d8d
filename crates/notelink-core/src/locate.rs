//! Block and heading resolution at a cursor position.
//!
//! Given a host-supplied [`Outline`] and a cursor line, [`locate`] finds the
//! smallest structural unit containing that line and classifies it as either
//! a heading or an addressable block. The function is pure: the outline is an
//! explicit parameter, fetched fresh by the caller for every command, never
//! cached here.

use crate::models::{BlockTarget, HeadingTarget, Outline, ResolvedTarget, SectionKind};

/// Resolves the structural unit enclosing `cursor_line`.
///
/// Resolution walks the outline's ordered, non-overlapping sequences:
///
/// 1. The first section whose span covers the cursor line is the candidate;
///    no covering section means no target.
/// 2. A `list` section defers to the covering list item; the item, not the
///    list, is the addressable unit. A list section with no covering item
///    resolves to `None`.
/// 3. A `heading` section defers to the heading entry whose span starts on
///    the same line, carrying the raw heading text. A heading section with
///    no matching entry is a malformed outline; the locator returns `None`
///    rather than guessing.
/// 4. Any other section is the target itself.
///
/// # Examples
///
/// ```rust
/// use notelink_core::locate::locate;
/// use notelink_core::models::{Outline, Pos, ResolvedTarget, Section, SectionKind, Span};
///
/// let outline = Outline {
///     headings: Vec::new(),
///     sections: vec![Section {
///         kind: SectionKind::Paragraph,
///         span: Span::new(Pos::new(3, 0), Pos::new(7, 24)),
///         id: None,
///     }],
///     list_items: Vec::new(),
/// };
///
/// match locate(&outline, 5) {
///     Some(ResolvedTarget::Block(block)) => {
///         assert_eq!(block.kind, SectionKind::Paragraph);
///         assert_eq!(block.span_end, Pos::new(7, 24));
///     }
///     other => panic!("expected a block target, got {other:?}"),
/// }
///
/// assert!(locate(&outline, 9).is_none());
/// ```
pub fn locate(outline: &Outline, cursor_line: u32) -> Option<ResolvedTarget> {
    let section = outline
        .sections
        .iter()
        .find(|section| section.span.contains_line(cursor_line))?;

    match section.kind {
        SectionKind::List => {
            // The addressable unit is the item under the cursor, not the
            // list as a whole.
            let item = outline
                .list_items
                .iter()
                .find(|item| item.span.contains_line(cursor_line))?;

            Some(ResolvedTarget::Block(BlockTarget {
                kind: SectionKind::List,
                id: item.id.clone(),
                span_end: item.span.end,
            }))
        }
        SectionKind::Heading => {
            // Disambiguate through the heading sequence; only an exact
            // start-line match counts.
            let heading = outline
                .headings
                .iter()
                .find(|heading| heading.span.start.line == section.span.start.line)?;

            Some(ResolvedTarget::Heading(HeadingTarget {
                text: heading.text.clone(),
                span_end: heading.span.end,
            }))
        }
        _ => Some(ResolvedTarget::Block(BlockTarget {
            kind: section.kind,
            id: section.id.clone(),
            span_end: section.span.end,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Heading, ListItem, Pos, Section, Span};

    fn span(start_line: u32, end_line: u32, end_col: u32) -> Span {
        Span::new(Pos::new(start_line, 0), Pos::new(end_line, end_col))
    }

    fn outline() -> Outline {
        Outline {
            headings: vec![Heading {
                level: 2,
                text: "Release notes: v2.0".to_string(),
                span: span(0, 0, 21),
            }],
            sections: vec![
                Section {
                    kind: SectionKind::Heading,
                    span: span(0, 0, 21),
                    id: None,
                },
                Section {
                    kind: SectionKind::Paragraph,
                    span: span(2, 4, 18),
                    id: None,
                },
                Section {
                    kind: SectionKind::List,
                    span: span(6, 9, 10),
                    id: None,
                },
                Section {
                    kind: SectionKind::Code,
                    span: span(11, 14, 3),
                    id: Some("deadbeef".to_string()),
                },
            ],
            list_items: vec![
                ListItem {
                    span: span(6, 7, 30),
                    id: None,
                },
                ListItem {
                    span: span(8, 9, 10),
                    id: Some("item2".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_paragraph_block_at_cursor() {
        let target = locate(&outline(), 3).expect("line 3 is inside the paragraph");
        match target {
            ResolvedTarget::Block(block) => {
                assert_eq!(block.kind, SectionKind::Paragraph);
                assert_eq!(block.id, None);
                assert_eq!(block.span_end, Pos::new(4, 18));
            }
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_list_resolves_to_covering_item() {
        let target = locate(&outline(), 8).expect("line 8 is inside the second item");
        match target {
            ResolvedTarget::Block(block) => {
                assert_eq!(block.kind, SectionKind::List);
                assert_eq!(block.id.as_deref(), Some("item2"));
                assert_eq!(block.span_end, Pos::new(9, 10));
            }
            other => panic!("expected list item block, got {other:?}"),
        }
    }

    #[test]
    fn test_heading_returns_raw_text() {
        let target = locate(&outline(), 0).expect("line 0 is the heading");
        match target {
            ResolvedTarget::Heading(heading) => {
                // Raw, unsanitized text; sanitization is the formatter's job
                assert_eq!(heading.text, "Release notes: v2.0");
                assert_eq!(heading.span_end, Pos::new(0, 21));
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_identifier_carried_through() {
        let target = locate(&outline(), 12).expect("line 12 is inside the code block");
        match target {
            ResolvedTarget::Block(block) => {
                assert_eq!(block.kind, SectionKind::Code);
                assert_eq!(block.id.as_deref(), Some("deadbeef"));
            }
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_no_covering_section() {
        assert!(locate(&outline(), 5).is_none());
        assert!(locate(&outline(), 99).is_none());
    }

    #[test]
    fn test_list_section_without_covering_item_is_none() {
        let mut sparse = outline();
        sparse.list_items.clear();
        assert!(locate(&sparse, 7).is_none());
    }

    #[test]
    fn test_heading_section_without_heading_entry_is_none() {
        let mut malformed = outline();
        malformed.headings.clear();
        assert!(locate(&malformed, 0).is_none());
    }

    #[test]
    fn test_empty_outline() {
        assert!(locate(&Outline::default(), 0).is_none());
    }
}
