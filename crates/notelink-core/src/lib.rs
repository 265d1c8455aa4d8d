//! Core library for the notelink reference-copying engine.
//!
//! This crate turns a cursor position in a note into a stable, copyable
//! reference: an internal link or embed, or an external deep-link URI,
//! optionally with a timestamp appended. It owns the only real logic in the
//! system: resolving the enclosing block or heading, and minting an
//! identifier plus the splice that places it when the block has none,
//! without corrupting surrounding structure.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   locate     │    │     ids      │    │    format    │
//! │ (outline →   │───▶│ (mint +      │───▶│ (links, deep │
//! │  target)     │    │  splice)     │    │  links)      │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!   pure resolution     one mint per        host syntax via
//!   per invocation      splice              collaborators
//! ```
//!
//! Everything the host owns (the outline, the editor, the clipboard, link
//! syntax, settings persistence, the optional deep-link identity bridge)
//! is reached through the trait contracts in [`host`]. The document is never
//! read or parsed here: the host supplies a pre-built [`models::Outline`]
//! fresh for every command.
//!
//! # Quick Start
//!
//! ```rust
//! use notelink_core::locate::locate;
//! use notelink_core::ids::splice_for;
//! use notelink_core::models::{
//!     Outline, Pos, ResolvedTarget, Section, SectionKind, Span,
//! };
//!
//! let outline = Outline {
//!     headings: Vec::new(),
//!     sections: vec![Section {
//!         kind: SectionKind::Paragraph,
//!         span: Span::new(Pos::new(0, 0), Pos::new(1, 17)),
//!         id: None,
//!     }],
//!     list_items: Vec::new(),
//! };
//!
//! // Resolve the unit under the cursor, then plan the identifier splice.
//! let Some(ResolvedTarget::Block(block)) = locate(&outline, 1) else {
//!     panic!("cursor is inside the paragraph");
//! };
//! let splice = splice_for(&block, "20240101120000");
//! assert_eq!(splice.text, " ^20240101120000");
//! assert_eq!(splice.at, Pos::new(1, 17));
//! ```

pub mod error;
pub mod format;
pub mod host;
pub mod ids;
pub mod locate;
pub mod models;
pub mod sanitize;

// Re-export commonly used types
pub use error::{NotelinkError, Result};
pub use format::{deep_link_uri, format_internal, wrap_reference, Fragment, NoteKey, SubTarget};
pub use host::{
    ClipboardSink, EditorContext, IdentityBridge, LinkComposer, NoteRef, Notifier, SettingsStore,
    WorkspaceView,
};
pub use ids::{generate_note_uid, mint_block_id, splice_for, Splice};
pub use locate::locate;
pub use models::{
    BlockTarget, Heading, HeadingTarget, ListItem, Outline, Pos, ReferenceStyle, ResolvedTarget,
    Section, SectionKind, Settings, Span,
};
pub use sanitize::sanitize_heading;
