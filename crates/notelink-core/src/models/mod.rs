//! Data models for document outlines, resolved targets, and settings.
//!
//! This module contains the core domain types consumed and produced by the
//! locator and formatter:
//!
//! - [`outline`]: the host-supplied structural snapshot of a document
//!   (headings, sections, list items) together with the position types that
//!   describe their extents
//! - [`target`]: the tagged result of resolving a cursor position to the
//!   smallest enclosing structural unit
//! - [`settings`]: the persisted, default-merged configuration for identifier
//!   and timestamp formats
//!
//! The outline is owned by the host and invalidated on every document edit;
//! nothing in this crate caches one across calls. All types deserialize with
//! serde so hosts can deliver outlines and stored settings as plain JSON.

pub mod outline;
pub mod settings;
pub mod target;


// Re-export all public types at the models level
pub use outline::{Heading, ListItem, Outline, Pos, Section, SectionKind, Span};
pub use settings::{ReferenceStyle, Settings};
pub use target::{BlockTarget, HeadingTarget, ResolvedTarget};
