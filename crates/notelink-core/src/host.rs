//! Collaborator contracts the host application fulfills.
//!
//! The engine never talks to an editor, a clipboard, or a settings file
//! directly; everything outside the resolution/formatting core goes through
//! one of these traits. Most collaborators resolve immediately and are plain
//! synchronous traits. Persisting settings and acquiring a note-level unique
//! id may suspend on the host, so [`SettingsStore`] and [`IdentityBridge`]
//! are async.
//!
//! [`IdentityBridge`] is an optional capability: the deep-linking integration
//! it represents may simply not be installed. Call sites branch on its
//! presence and degrade to a reported failure, never a crash.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::{Outline, Pos, Settings};

/// A plain reference to a note file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    /// Vault-relative path, e.g. `projects/launch plan.md`
    pub path: String,

    /// File name without directories or extension, e.g. `launch plan`
    pub basename: String,
}

impl NoteRef {
    /// Creates a note reference from explicit path and basename.
    pub fn new(path: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            basename: basename.into(),
        }
    }

    /// Creates a note reference from a path, deriving the basename.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notelink_core::host::NoteRef;
    ///
    /// let note = NoteRef::from_path("projects/launch plan.md");
    /// assert_eq!(note.basename, "launch plan");
    /// ```
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let basename = std::path::Path::new(&path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, basename }
    }
}

/// Read access to the workspace the note lives in.
pub trait WorkspaceView: Send + Sync {
    /// Returns a fresh outline snapshot for the note, or `None` when the
    /// host has no structure for it (unindexed or empty file).
    fn outline(&self, note: &NoteRef) -> Option<Outline>;

    /// Display name of the containing vault, used in deep-link URIs.
    fn vault_name(&self) -> String;
}

/// The editing surface a command was invoked from.
pub trait EditorContext: Send {
    /// Line the cursor is on.
    fn cursor_line(&self) -> u32;

    /// Full cursor position.
    fn cursor(&self) -> Pos;

    /// Inserts text at a position without disturbing surrounding content.
    fn insert_at(&mut self, at: Pos, text: &str);

    /// Moves the cursor.
    fn set_cursor(&mut self, pos: Pos);
}

/// Destination for the finished reference string.
pub trait ClipboardSink: Send + Sync {
    /// Writes the text to the system clipboard.
    fn write_text(&self, text: &str);
}

/// Host-specific internal link syntax.
pub trait LinkComposer: Send + Sync {
    /// Builds an internal markdown link to `note`, targeting `fragment`
    /// (`#heading` or `#^id`, empty for the whole note), with optional
    /// display text.
    fn markdown_link(&self, note: &NoteRef, display: &str, fragment: &str) -> String;
}

/// User-visible, non-blocking failure reports.
pub trait Notifier: Send + Sync {
    /// Shows a transient message to the user.
    fn notify(&self, message: &str);
}

/// Persistence for [`Settings`].
///
/// `load` returns the raw stored payload so the caller can merge it over the
/// built-in defaults with [`Settings::merge_value`]; a store that has never
/// been written returns `Ok(None)`.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads the stored settings payload, if any.
    async fn load(&self) -> Result<Option<Value>>;

    /// Persists the settings, replacing any previous payload.
    async fn save(&self, settings: &Settings) -> Result<()>;
}

/// Access to the note-level unique id kept in frontmatter-like metadata.
///
/// Provided by the external deep-linking integration; absent when that
/// integration is not installed. Reading and writing may suspend while the
/// host touches the file's metadata block.
#[async_trait]
pub trait IdentityBridge: Send + Sync {
    /// Whether deep links should be keyed by unique id rather than path.
    fn uses_uid(&self) -> bool;

    /// Reads the unique id stored under `field`, or `None` when the note
    /// has no such metadata yet.
    async fn read_uid(&self, note: &NoteRef, field: &str) -> Result<Option<String>>;

    /// Writes `value` under `field` in the note's metadata block.
    async fn write_uid(&self, note: &NoteRef, field: &str, value: &str) -> Result<()>;
}
