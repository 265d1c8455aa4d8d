//! Shared mock host for command integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use notelink_commands::Dispatcher;
use notelink_core::error::{NotelinkError, Result};
use notelink_core::host::{
    ClipboardSink, EditorContext, IdentityBridge, LinkComposer, NoteRef, Notifier, WorkspaceView,
};
use notelink_core::models::{
    Heading, ListItem, Outline, Pos, Section, SectionKind, Settings, Span,
};

/// Editor with a scripted cursor that records every mutation.
pub struct MockEditor {
    pub cursor: Pos,
    pub inserts: Vec<(Pos, String)>,
    pub cursor_moves: Vec<Pos>,
}

impl MockEditor {
    pub fn at_line(line: u32) -> Self {
        Self {
            cursor: Pos::new(line, 0),
            inserts: Vec::new(),
            cursor_moves: Vec::new(),
        }
    }
}

impl EditorContext for MockEditor {
    fn cursor_line(&self) -> u32 {
        self.cursor.line
    }

    fn cursor(&self) -> Pos {
        self.cursor
    }

    fn insert_at(&mut self, at: Pos, text: &str) {
        self.inserts.push((at, text.to_string()));
    }

    fn set_cursor(&mut self, pos: Pos) {
        self.cursor = pos;
        self.cursor_moves.push(pos);
    }
}

/// Clipboard that records every written reference.
#[derive(Default)]
pub struct MockClipboard {
    texts: Mutex<Vec<String>>,
}

impl MockClipboard {
    pub fn last(&self) -> Option<String> {
        self.texts.lock().unwrap().last().cloned()
    }
}

impl ClipboardSink for MockClipboard {
    fn write_text(&self, text: &str) {
        self.texts.lock().unwrap().push(text.to_string());
    }
}

/// Notifier that records every reported message.
#[derive(Default)]
pub struct MockNotifier {
    messages: Mutex<Vec<String>>,
}

impl MockNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Workspace serving one fixed outline snapshot.
pub struct MockWorkspace {
    pub outline: Outline,
    pub vault: String,
}

impl WorkspaceView for MockWorkspace {
    fn outline(&self, _note: &NoteRef) -> Option<Outline> {
        Some(self.outline.clone())
    }

    fn vault_name(&self) -> String {
        self.vault.clone()
    }
}

/// Wiki-style internal link syntax.
pub struct WikiComposer;

impl LinkComposer for WikiComposer {
    fn markdown_link(&self, note: &NoteRef, display: &str, fragment: &str) -> String {
        if display.is_empty() || display == note.basename {
            format!("[[{}{}]]", note.basename, fragment)
        } else {
            format!("[[{}{}|{}]]", note.basename, fragment, display)
        }
    }
}

/// Identity bridge with scripted uid state and failure switches.
pub struct MockBridge {
    pub uid_keyed: bool,
    pub stored_uid: Mutex<Option<String>>,
    pub fail_writes: bool,
}

impl MockBridge {
    pub fn by_path() -> Self {
        Self {
            uid_keyed: false,
            stored_uid: Mutex::new(None),
            fail_writes: false,
        }
    }

    pub fn by_uid(stored: Option<&str>) -> Self {
        Self {
            uid_keyed: true,
            stored_uid: Mutex::new(stored.map(str::to_string)),
            fail_writes: false,
        }
    }
}

#[async_trait]
impl IdentityBridge for MockBridge {
    fn uses_uid(&self) -> bool {
        self.uid_keyed
    }

    async fn read_uid(&self, _note: &NoteRef, _field: &str) -> Result<Option<String>> {
        Ok(self.stored_uid.lock().unwrap().clone())
    }

    async fn write_uid(&self, _note: &NoteRef, _field: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(NotelinkError::identity("metadata write rejected"));
        }
        *self.stored_uid.lock().unwrap() = Some(value.to_string());
        Ok(())
    }
}

fn span(start_line: u32, end_line: u32, end_col: u32) -> Span {
    Span::new(Pos::new(start_line, 0), Pos::new(end_line, end_col))
}

/// A note with a heading, a paragraph, a two-item list, a code fence, and a
/// table that already carries an identifier.
pub fn sample_outline() -> Outline {
    Outline {
        headings: vec![Heading {
            level: 2,
            text: "Plan & scope".to_string(),
            span: span(0, 0, 14),
        }],
        sections: vec![
            Section {
                kind: SectionKind::Heading,
                span: span(0, 0, 14),
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
                id: None,
            },
            Section {
                kind: SectionKind::Table,
                span: span(16, 18, 25),
                id: Some("tbl1".to_string()),
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

pub fn sample_note() -> NoteRef {
    NoteRef::from_path("projects/launch plan.md")
}

/// Deterministic settings: literal patterns instead of timestamps.
pub fn literal_settings() -> Settings {
    Settings {
        block_id_format: "id123".to_string(),
        append_text_format: "stamp".to_string(),
        ..Settings::default()
    }
}

/// Everything a command test needs, with handles kept for inspection.
pub struct Harness {
    pub dispatcher: Dispatcher,
    pub clipboard: Arc<MockClipboard>,
    pub notifier: Arc<MockNotifier>,
    pub note: NoteRef,
}

pub fn harness(settings: Settings, bridge: Option<Arc<MockBridge>>) -> Harness {
    let _ = env_logger::builder().is_test(true).try_init();

    let clipboard = Arc::new(MockClipboard::default());
    let notifier = Arc::new(MockNotifier::default());
    let workspace = Arc::new(MockWorkspace {
        outline: sample_outline(),
        vault: "My Vault".to_string(),
    });

    let mut dispatcher = Dispatcher::new(
        settings,
        workspace,
        Arc::new(WikiComposer),
        clipboard.clone(),
        notifier.clone(),
    );
    if let Some(bridge) = bridge {
        dispatcher = dispatcher.with_identity_bridge(bridge);
    }

    Harness {
        dispatcher,
        clipboard,
        notifier,
        note: sample_note(),
    }
}
