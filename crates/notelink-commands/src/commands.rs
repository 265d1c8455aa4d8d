//! Command dispatch for the reference-copying engine.
//!
//! Each exposed action is one (reference kind × target × append) combination
//! from the fixed command table in [`Command::all`]. Invocation composes the
//! core pipeline (fresh outline, locate, mint-and-splice when the block has
//! no identifier, format) and ends by writing the result to the clipboard
//! collaborator. No result is retained afterward.
//!
//! Failures are local: they are reported through the [`Notifier`] and logged,
//! never retried. A cursor with no enclosing block simply disables the
//! block/heading commands via [`Dispatcher::is_enabled`].

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::Mutex;

use notelink_core::error::{NotelinkError, Result};
use notelink_core::format::{
    append_timestamp, deep_link_uri, format_internal, wrap_reference, Fragment, NoteKey, SubTarget,
};
use notelink_core::host::{
    ClipboardSink, EditorContext, IdentityBridge, LinkComposer, NoteRef, Notifier, WorkspaceView,
};
use notelink_core::ids::{generate_note_uid, mint_block_id, splice_for};
use notelink_core::locate::locate;
use notelink_core::models::{BlockTarget, ResolvedTarget, Settings};

/// One invocable copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Internal link or embed to the block/heading at the cursor
    BlockLink { embed: bool, append: bool },

    /// Internal link to the whole note
    NoteLink { append: bool },

    /// External deep link to the block/heading at the cursor
    BlockDeepLink { append: bool },

    /// External deep link to the whole note
    NoteDeepLink { append: bool },
}

/// A command together with its stable id and human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Stable identifier the host registers the action under
    pub id: &'static str,

    /// Display name shown in the host's command surface
    pub name: &'static str,

    /// The command to dispatch
    pub command: Command,
}

const COMMANDS: [CommandSpec; 10] = [
    CommandSpec {
        id: "copy-block-heading-link",
        name: "Copy block/heading link",
        command: Command::BlockLink { embed: false, append: false },
    },
    CommandSpec {
        id: "copy-block-heading-embed",
        name: "Copy block/heading embed",
        command: Command::BlockLink { embed: true, append: false },
    },
    CommandSpec {
        id: "copy-block-heading-link-append-text",
        name: "Copy block/heading link & append text",
        command: Command::BlockLink { embed: false, append: true },
    },
    CommandSpec {
        id: "copy-block-heading-embed-append-text",
        name: "Copy block/heading embed & append text",
        command: Command::BlockLink { embed: true, append: true },
    },
    CommandSpec {
        id: "copy-note-link",
        name: "Copy note link",
        command: Command::NoteLink { append: false },
    },
    CommandSpec {
        id: "copy-note-link-append-text",
        name: "Copy note link & append text",
        command: Command::NoteLink { append: true },
    },
    CommandSpec {
        id: "copy-block-heading-deep-link",
        name: "Copy deep link to block/heading",
        command: Command::BlockDeepLink { append: false },
    },
    CommandSpec {
        id: "copy-block-heading-deep-link-append-text",
        name: "Copy deep link to block/heading & append text",
        command: Command::BlockDeepLink { append: true },
    },
    CommandSpec {
        id: "copy-note-deep-link",
        name: "Copy deep link to note",
        command: Command::NoteDeepLink { append: false },
    },
    CommandSpec {
        id: "copy-note-deep-link-append-text",
        name: "Copy deep link to note & append text",
        command: Command::NoteDeepLink { append: true },
    },
];

impl Command {
    /// The full command table, in registration order.
    pub fn all() -> &'static [CommandSpec] {
        &COMMANDS
    }
}

/// The editing context a command runs against: the active editor surface and
/// the note open in it.
pub struct CommandContext<'a> {
    /// Editor the cursor and document mutations belong to
    pub editor: &'a mut dyn EditorContext,

    /// The note open in the editor
    pub note: &'a NoteRef,
}

/// Sub-document part of a deep link, owned while the URI is assembled.
enum Part {
    Block(String),
    Heading(String),
    Note,
}

/// Routes commands to the core pipeline and the host collaborators.
///
/// The dispatcher owns the loaded [`Settings`] and the collaborator handles;
/// the identity bridge is an optional capability attached with
/// [`Dispatcher::with_identity_bridge`] when the external deep-linking
/// integration is present.
pub struct Dispatcher {
    settings: Settings,
    workspace: Arc<dyn WorkspaceView>,
    links: Arc<dyn LinkComposer>,
    clipboard: Arc<dyn ClipboardSink>,
    notifier: Arc<dyn Notifier>,
    identity: Option<Arc<dyn IdentityBridge>>,
    // Serializes mint-and-splice against the document; a second invocation
    // must not begin until the first one's mutation is observed.
    splice_guard: Mutex<()>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given collaborators.
    pub fn new(
        settings: Settings,
        workspace: Arc<dyn WorkspaceView>,
        links: Arc<dyn LinkComposer>,
        clipboard: Arc<dyn ClipboardSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            workspace,
            links,
            clipboard,
            notifier,
            identity: None,
            splice_guard: Mutex::new(()),
        }
    }

    /// Attaches the optional deep-link identity bridge.
    pub fn with_identity_bridge(mut self, bridge: Arc<dyn IdentityBridge>) -> Self {
        self.identity = Some(bridge);
        self
    }

    /// Currently loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the loaded settings after the editing surface persisted a
    /// change.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Enablement check for a command at the current cursor.
    ///
    /// Block/heading commands are enabled only when the locator finds an
    /// enclosing unit; note-level commands are always enabled, including the
    /// deep-link ones; a missing integration is reported at invocation
    /// time, not hidden by disablement.
    pub fn is_enabled(&self, command: Command, ctx: &CommandContext<'_>) -> bool {
        match command {
            Command::BlockLink { .. } | Command::BlockDeepLink { .. } => {
                self.locate_at_cursor(ctx).is_some()
            }
            Command::NoteLink { .. } | Command::NoteDeepLink { .. } => true,
        }
    }

    /// Executes a command and reports any failure through the notifier.
    pub async fn invoke(&self, command: Command, ctx: &mut CommandContext<'_>) {
        debug!("invoke: {command:?}");

        if let Err(err) = self.execute(command, ctx).await {
            warn!("{command:?} failed: {err}");
            self.notifier.notify(&err.to_string());
        }
    }

    /// Executes a command, returning the failure instead of reporting it.
    ///
    /// Invocations are serialized: a second command arriving while one is
    /// still mid-flight fails with [`NotelinkError::Busy`] rather than
    /// racing the first one's document mutation.
    pub async fn execute(&self, command: Command, ctx: &mut CommandContext<'_>) -> Result<()> {
        let _guard = self
            .splice_guard
            .try_lock()
            .map_err(|_| NotelinkError::Busy)?;

        match command {
            Command::BlockLink { embed, append } => self.copy_block_link(ctx, embed, append),
            Command::NoteLink { append } => self.copy_note_link(ctx, append),
            Command::BlockDeepLink { append } => self.copy_block_deep_link(ctx, append).await,
            Command::NoteDeepLink { append } => self.copy_note_deep_link(ctx, append).await,
        }
    }

    fn locate_at_cursor(&self, ctx: &CommandContext<'_>) -> Option<ResolvedTarget> {
        // The outline is fetched fresh per call; the host invalidates it on
        // every edit.
        let outline = self.workspace.outline(ctx.note)?;
        locate(&outline, ctx.editor.cursor_line())
    }

    /// Returns the block's identifier, splicing a freshly minted one into
    /// the document when the block has none yet.
    fn claim_block_id(&self, ctx: &mut CommandContext<'_>, block: &BlockTarget) -> Result<String> {
        if let Some(id) = &block.id {
            return Ok(id.clone());
        }

        let id = mint_block_id(&self.settings)?;
        let splice = splice_for(block, &id);
        ctx.editor.insert_at(splice.at, &splice.text);
        Ok(id)
    }

    fn copy_block_link(&self, ctx: &mut CommandContext<'_>, embed: bool, append: bool) -> Result<()> {
        let Some(target) = self.locate_at_cursor(ctx) else {
            return Ok(());
        };

        let fragment = match target {
            ResolvedTarget::Heading(heading) => Fragment::Heading(heading.text),
            ResolvedTarget::Block(block) => Fragment::BlockId(self.claim_block_id(ctx, &block)?),
        };

        let mut reference = format_internal(self.links.as_ref(), ctx.note, &fragment, embed);
        if append {
            reference = append_timestamp(&reference, &self.settings)?;
        }

        self.clipboard.write_text(&reference);
        Ok(())
    }

    fn copy_note_link(&self, ctx: &mut CommandContext<'_>, append: bool) -> Result<()> {
        let mut reference = self
            .links
            .markdown_link(ctx.note, &ctx.note.basename, "");
        if append {
            reference = append_timestamp(&reference, &self.settings)?;
        }

        self.clipboard.write_text(&reference);
        Ok(())
    }

    async fn copy_block_deep_link(&self, ctx: &mut CommandContext<'_>, append: bool) -> Result<()> {
        // Capability check comes first so an absent integration never
        // mutates the document.
        let bridge = self
            .identity
            .as_deref()
            .ok_or(NotelinkError::FeatureUnavailable)?;

        let Some(target) = self.locate_at_cursor(ctx) else {
            return Ok(());
        };

        let (display, part) = match target {
            ResolvedTarget::Heading(heading) => {
                let display = format!("{}#{}", ctx.note.basename, heading.text);
                (display, Part::Heading(heading.text))
            }
            ResolvedTarget::Block(block) => {
                let id = self.claim_block_id(ctx, &block)?;
                let display = format!("{}#^{id}", ctx.note.basename);
                (display, Part::Block(id))
            }
        };

        let uri = self.deep_link(bridge, ctx, &part).await?;
        self.finish_deep_link(&uri, &display, append)
    }

    async fn copy_note_deep_link(&self, ctx: &mut CommandContext<'_>, append: bool) -> Result<()> {
        let bridge = self
            .identity
            .as_deref()
            .ok_or(NotelinkError::FeatureUnavailable)?;

        let display = ctx.note.basename.clone();
        let uri = self.deep_link(bridge, ctx, &Part::Note).await?;
        self.finish_deep_link(&uri, &display, append)
    }

    /// Builds the deep-link URI, keyed by unique id or file path per the
    /// bridge's configuration.
    async fn deep_link(
        &self,
        bridge: &dyn IdentityBridge,
        ctx: &mut CommandContext<'_>,
        part: &Part,
    ) -> Result<String> {
        let vault = self.workspace.vault_name();
        let sub = match part {
            Part::Block(id) => SubTarget::Block(id),
            Part::Heading(text) => SubTarget::Heading(text),
            Part::Note => SubTarget::Note,
        };

        if bridge.uses_uid() {
            let uid = self.ensure_note_uid(bridge, ctx).await?;
            Ok(deep_link_uri(&vault, NoteKey::Uid(&uid), sub))
        } else {
            Ok(deep_link_uri(&vault, NoteKey::Path(&ctx.note.path), sub))
        }
    }

    fn finish_deep_link(&self, uri: &str, display: &str, append: bool) -> Result<()> {
        let mut reference = wrap_reference(uri, display, self.settings.reference_style);
        if append {
            reference = append_timestamp(&reference, &self.settings)?;
        }

        self.clipboard.write_text(&reference);
        Ok(())
    }

    /// Returns the note's unique id, minting and persisting one through the
    /// bridge when the configured field is missing or blank. The cursor is
    /// restored afterward since the metadata write can move it.
    async fn ensure_note_uid(
        &self,
        bridge: &dyn IdentityBridge,
        ctx: &mut CommandContext<'_>,
    ) -> Result<String> {
        let field = &self.settings.uid_field;
        let cursor = ctx.editor.cursor();

        let existing = bridge
            .read_uid(ctx.note, field)
            .await
            .map_err(as_identity_failure)?;
        if let Some(uid) = existing {
            if !uid.trim().is_empty() {
                return Ok(uid);
            }
        }

        let uid = generate_note_uid();
        bridge
            .write_uid(ctx.note, field, &uid)
            .await
            .map_err(as_identity_failure)?;
        ctx.editor.set_cursor(cursor);

        Ok(uid)
    }
}

/// Folds any bridge-side failure into the identity-acquisition taxonomy.
fn as_identity_failure(err: NotelinkError) -> NotelinkError {
    match err {
        identity @ NotelinkError::Identity { .. } => identity,
        other => NotelinkError::identity(other),
    }
}
