//! Reference string assembly.
//!
//! Builds the three output shapes a copy command can produce: internal links
//! (optionally embeds), external deep-link URIs, and either of those with a
//! formatted timestamp appended. Internal link syntax belongs to the host and
//! goes through the [`LinkComposer`] collaborator; this module only decides
//! the fragment and the embed prefix.

use url::form_urlencoded;

use crate::error::Result;
use crate::host::{LinkComposer, NoteRef};
use crate::ids::format_now;
use crate::models::{ReferenceStyle, Settings};
use crate::sanitize::sanitize_heading;

/// Scheme and action of the external deep-link URI.
pub const DEEP_LINK_BASE: &str = "obsidian://adv-uri";

/// The sub-document address a reference points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A heading, addressed by its raw display text
    Heading(String),

    /// A block or list item, addressed by its `^id` marker
    BlockId(String),
}

impl Fragment {
    /// Renders the link fragment, `#<sanitized heading>` or `#^<id>`.
    ///
    /// Heading sanitization happens here and nowhere earlier, so locator
    /// results keep the raw text for display purposes.
    pub fn render(&self) -> String {
        match self {
            Fragment::Heading(text) => format!("#{}", sanitize_heading(text)),
            Fragment::BlockId(id) => format!("#^{id}"),
        }
    }
}

/// How a deep link identifies the note itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKey<'a> {
    /// Stable unique id from the note's metadata
    Uid(&'a str),

    /// Vault-relative file path
    Path(&'a str),
}

/// The part of the note a deep link navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubTarget<'a> {
    /// A block, by identifier
    Block(&'a str),

    /// A heading, by raw text
    Heading(&'a str),

    /// The note as a whole
    Note,
}

/// Builds an internal reference to `fragment` in `note`.
///
/// The host's [`LinkComposer`] supplies the link syntax; `embed` prefixes
/// the result with `!`.
pub fn format_internal(
    links: &dyn LinkComposer,
    note: &NoteRef,
    fragment: &Fragment,
    embed: bool,
) -> String {
    let link = links.markdown_link(note, "", &fragment.render());
    if embed {
        format!("!{link}")
    } else {
        link
    }
}

/// Builds an external deep-link URI.
///
/// Query parameters are percent-encoded; encoded spaces come out as `%20`,
/// never `+`, because consumers of the URI decode it as a path component
/// rather than form data. Whole-note links carry no `block`/`heading`
/// parameter at all.
///
/// # Examples
///
/// ```rust
/// use notelink_core::format::{deep_link_uri, NoteKey, SubTarget};
///
/// let uri = deep_link_uri("My Vault", NoteKey::Uid("abc"), SubTarget::Block("20240101"));
/// assert_eq!(uri, "obsidian://adv-uri?vault=My%20Vault&uid=abc&block=20240101");
/// ```
pub fn deep_link_uri(vault: &str, key: NoteKey<'_>, part: SubTarget<'_>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("vault", vault);

    match key {
        NoteKey::Uid(uid) => {
            query.append_pair("uid", uid);
        }
        NoteKey::Path(path) => {
            query.append_pair("filepath", path);
        }
    }

    match part {
        SubTarget::Block(id) => {
            query.append_pair("block", id);
        }
        SubTarget::Heading(text) => {
            query.append_pair("heading", text);
        }
        SubTarget::Note => {}
    }

    // form_urlencoded emits form-style `+` for spaces; literal `+` signs in
    // values were already escaped to %2B, so the remaining ones are all
    // spaces.
    let encoded = query.finish().replace('+', "%20");
    format!("{DEEP_LINK_BASE}?{encoded}")
}

/// Wraps a deep-link URI per the configured reference style.
pub fn wrap_reference(uri: &str, display: &str, style: ReferenceStyle) -> String {
    match style {
        ReferenceStyle::Markdown => format!("[{display}]({uri})"),
        ReferenceStyle::Plain => uri.to_string(),
    }
}

/// Appends the configured timestamp text after a single space.
pub fn append_timestamp(reference: &str, settings: &Settings) -> Result<String> {
    let stamp = format_now(&settings.append_text_format)?;
    Ok(format!("{reference} {stamp}"))
}
