//! The settings editing surface.
//!
//! Hosts render settings panels themselves; this module describes the fields
//! declaratively and applies edits, persisting through the [`SettingsStore`]
//! on every change. After a successful edit the host hands the updated
//! settings back to the dispatcher with
//! [`crate::Dispatcher::set_settings`].

use std::sync::Arc;

use notelink_core::error::{NotelinkError, Result};
use notelink_core::host::SettingsStore;
use notelink_core::models::Settings;

/// Input widget a settings field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text input
    Text,

    /// Two-state toggle between `plain` and `markdown`
    StyleToggle,
}

/// Declarative description of one settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsField {
    /// Stable field key, matching the persisted JSON key
    pub key: &'static str,

    /// Display name
    pub name: &'static str,

    /// Help text shown under the field
    pub description: &'static str,

    /// Placeholder shown in an empty input
    pub placeholder: &'static str,

    /// Widget to render
    pub kind: FieldKind,
}

const FIELDS: [SettingsField; 4] = [
    SettingsField {
        key: "blockIdFormat",
        name: "Block ID format",
        description: "strftime pattern for minted block identifiers, e.g. %Y%m%d%H%M%S",
        placeholder: "%Y-%m-%dT%H-%M-%S",
        kind: FieldKind::Text,
    },
    SettingsField {
        key: "appendTextFormat",
        name: "Append text format",
        description: "Text appended after a copied reference. strftime pattern; literal text passes through",
        placeholder: "📝 %Y-%m-%dT%H:%M",
        kind: FieldKind::Text,
    },
    SettingsField {
        key: "uidField",
        name: "UID field name",
        description: "Frontmatter field holding the note's unique identifier (for deep links)",
        placeholder: "uuid",
        kind: FieldKind::Text,
    },
    SettingsField {
        key: "referenceStyle",
        name: "Reference style",
        description: "Copy deep links as a bare URI or wrapped as a markdown link",
        placeholder: "plain",
        kind: FieldKind::StyleToggle,
    },
];

/// Applies settings edits and persists each change.
pub struct SettingsPanel {
    settings: Settings,
    store: Arc<dyn SettingsStore>,
}

impl SettingsPanel {
    /// Creates a panel over the loaded settings and their store.
    pub fn new(settings: Settings, store: Arc<dyn SettingsStore>) -> Self {
        Self { settings, store }
    }

    /// The field descriptors, in display order.
    pub fn fields() -> &'static [SettingsField] {
        &FIELDS
    }

    /// Current settings, including edits applied through this panel.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current value of a field, by key.
    pub fn value(&self, key: &str) -> Option<String> {
        match key {
            "blockIdFormat" => Some(self.settings.block_id_format.clone()),
            "appendTextFormat" => Some(self.settings.append_text_format.clone()),
            "uidField" => Some(self.settings.uid_field.clone()),
            "referenceStyle" => Some(self.settings.reference_style.as_str().to_string()),
            _ => None,
        }
    }

    /// Applies one edit and persists the result.
    ///
    /// The in-memory settings update only after the store accepted the
    /// change, so a failed save leaves the panel consistent with what is on
    /// disk.
    pub async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.settings.clone();

        match key {
            "blockIdFormat" => next.block_id_format = value.to_string(),
            "appendTextFormat" => next.append_text_format = value.to_string(),
            "uidField" => next.uid_field = value.to_string(),
            "referenceStyle" => {
                next.reference_style = value.parse().map_err(|reason| {
                    NotelinkError::InvalidInput {
                        field: key.to_string(),
                        reason,
                    }
                })?;
            }
            unknown => {
                return Err(NotelinkError::InvalidInput {
                    field: unknown.to_string(),
                    reason: "unknown settings field".to_string(),
                });
            }
        }

        self.store.save(&next).await?;
        self.settings = next;
        Ok(())
    }
}
