//! Inline-context note payloads.
//!
//! The annotation feature stores its note directly on the format marker: the note
//! body, an optional category, an optional link, and (once persisted by the host)
//! an identifier. This module owns the distinguished marker identifier, the
//! marker-attribute codec, payload validation, and the copy-link helpers.

use thiserror::Error;

use crate::ranges::enclosing_range;
use crate::rich_text::{FormatMarker, RichTextValue};

/// Format identifier of inline-context annotation markers.
///
/// The range index in [`crate::ranges`] is generic over the marker kind; callers
/// working with inline-context notes pass this constant. It is shared configuration
/// between the host's format vocabulary and this engine, not something the
/// algorithms special-case.
pub const NOTE_FORMAT: &str = "inline-context/note";

/// Marker attribute holding the note body.
pub const NOTE_ATTR_CONTENT: &str = "data-note";
/// Marker attribute holding the optional category.
pub const NOTE_ATTR_CATEGORY: &str = "data-category";
/// Marker attribute holding the optional link.
pub const NOTE_ATTR_LINK: &str = "data-link";
/// Marker attribute holding the host-assigned note id.
pub const NOTE_ATTR_ID: &str = "data-note-id";

/// Errors from note validation and the marker codec.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The marker is not an inline-context note marker.
    #[error("marker kind '{0}' does not carry a note payload")]
    WrongKind(String),

    /// A note marker lacked a required attribute.
    #[error("note marker is missing the '{0}' attribute")]
    MissingAttribute(&'static str),

    /// The note body is empty or whitespace.
    #[error("note content is empty")]
    EmptyContent,

    /// The note link is not an http(s) URL.
    #[error("unsupported link scheme in '{0}'")]
    UnsupportedLinkScheme(String),
}

/// A reader-facing note attached to a run of annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineNote {
    /// Note body. Limited inline HTML; sanitized at render time, stored as-is.
    pub content: String,
    /// Optional category label.
    pub category: Option<String>,
    /// Optional supporting link (http/https).
    pub link: Option<String>,
    /// Host-assigned identifier, present once the note has been persisted.
    pub id: Option<String>,
}

impl InlineNote {
    /// Create a note with just a body.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the category (builder style).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the link (builder style).
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the host-assigned id (builder style).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check the note is fit to save: non-empty body, http(s) link if any.
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.content.trim().is_empty() {
            return Err(NoteError::EmptyContent);
        }
        if let Some(link) = &self.link
            && !is_supported_link(link)
        {
            return Err(NoteError::UnsupportedLinkScheme(link.clone()));
        }
        Ok(())
    }

    /// Decode a note from an inline-context marker's attributes.
    pub fn from_marker(marker: &FormatMarker) -> Result<Self, NoteError> {
        if marker.kind != NOTE_FORMAT {
            return Err(NoteError::WrongKind(marker.kind.clone()));
        }
        let content = marker
            .attribute(NOTE_ATTR_CONTENT)
            .ok_or(NoteError::MissingAttribute(NOTE_ATTR_CONTENT))?;

        Ok(Self {
            content: content.to_string(),
            category: marker.attribute(NOTE_ATTR_CATEGORY).map(str::to_string),
            link: marker.attribute(NOTE_ATTR_LINK).map(str::to_string),
            id: marker.attribute(NOTE_ATTR_ID).map(str::to_string),
        })
    }

    /// Encode the note as an inline-context marker, omitting absent fields.
    pub fn into_marker(self) -> FormatMarker {
        let mut marker =
            FormatMarker::new(NOTE_FORMAT).with_attribute(NOTE_ATTR_CONTENT, self.content);
        if let Some(category) = self.category {
            marker = marker.with_attribute(NOTE_ATTR_CATEGORY, category);
        }
        if let Some(link) = self.link {
            marker = marker.with_attribute(NOTE_ATTR_LINK, link);
        }
        if let Some(id) = self.id {
            marker = marker.with_attribute(NOTE_ATTR_ID, id);
        }
        marker
    }

    /// Fragment anchor for the copy-link action, once the note has an id.
    pub fn anchor(&self) -> Option<String> {
        self.id.as_deref().map(|id| format!("inline-context-{id}"))
    }

    /// Full permalink for the copy-link action: page URL plus fragment anchor.
    pub fn permalink(&self, page_url: &str) -> Option<String> {
        let anchor = self.anchor()?;
        Some(format!("{}#{anchor}", page_url.trim_end_matches('#')))
    }
}

/// Whether `link` uses a scheme the note feature supports (http/https).
pub fn is_supported_link(link: &str) -> bool {
    let Some((scheme, rest)) = link.split_once("://") else {
        return false;
    };
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        && !rest.is_empty()
}

/// The note carried by the run touching a caret at `position`, if any.
///
/// Follows the same boundary policy as [`enclosing_range`]: a caret on a run's edge
/// still resolves to that run. Markers of the right kind with no note payload yield
/// `None` rather than an error - the caller is probing, not decoding.
pub fn note_at(value: &RichTextValue, position: usize) -> Option<InlineNote> {
    let range = enclosing_range(value, position, NOTE_FORMAT)?;
    let marker = value.marker_at(range.start, NOTE_FORMAT)?;
    InlineNote::from_marker(marker).ok()
}
