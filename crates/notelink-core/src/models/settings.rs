//! Persisted settings with default-merge-on-load semantics.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How an external deep-link reference is rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStyle {
    /// Bare URI
    #[default]
    Plain,

    /// Markdown link `[display](uri)`
    Markdown,
}

impl FromStr for ReferenceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(ReferenceStyle::Plain),
            "markdown" => Ok(ReferenceStyle::Markdown),
            _ => Err(format!("Invalid reference style: {s}")),
        }
    }
}

impl ReferenceStyle {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceStyle::Plain => "plain",
            ReferenceStyle::Markdown => "markdown",
        }
    }
}

/// Process-wide settings, loaded once at startup and mutated only through
/// the settings editing surface.
///
/// Every field has a built-in default and deserialization fills in whatever
/// a stored payload omits, so settings written by an older version keep
/// working after an upgrade.
///
/// Timestamp fields are strftime patterns as understood by
/// [`jiff::fmt::strtime`]; text outside `%` conversions passes through
/// literally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Pattern for minted block identifiers, e.g. `%Y-%m-%dT%H-%M-%S`
    pub block_id_format: String,

    /// Pattern for the timestamp appended after a copied reference
    pub append_text_format: String,

    /// Frontmatter field holding the note-level unique id
    pub uid_field: String,

    /// Rendering style for deep-link references
    pub reference_style: ReferenceStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_id_format: "%Y-%m-%dT%H-%M-%S".to_string(),
            append_text_format: "📝 %Y-%m-%dT%H:%M".to_string(),
            uid_field: "uuid".to_string(),
            reference_style: ReferenceStyle::Plain,
        }
    }
}

impl Settings {
    /// Merges a stored settings payload over the built-in defaults.
    ///
    /// `None` (nothing stored yet) and payloads that fail to deserialize
    /// both produce the defaults; a partial payload keeps defaults for the
    /// missing keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notelink_core::models::Settings;
    /// use serde_json::json;
    ///
    /// let settings = Settings::merge_value(Some(json!({
    ///     "blockIdFormat": "%s",
    /// })));
    /// assert_eq!(settings.block_id_format, "%s");
    /// assert_eq!(settings.uid_field, "uuid"); // default filled in
    /// ```
    pub fn merge_value(loaded: Option<Value>) -> Settings {
        match loaded {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                log::warn!("stored settings are malformed, using defaults: {err}");
                Settings::default()
            }),
            None => Settings::default(),
        }
    }
}
