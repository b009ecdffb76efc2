//! JSON codec for the note persistence payload.
//!
//! The host saves and fetches notes through its own transport; this module only
//! shapes the body: absent fields are omitted on encode and tolerated on decode.

use inline_context::InlineNote;
use serde::{Deserialize, Serialize};

use crate::HostPayloadError;

#[derive(Debug, Serialize, Deserialize)]
struct WireNote {
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl From<&InlineNote> for WireNote {
    fn from(note: &InlineNote) -> Self {
        Self {
            content: note.content.clone(),
            category: note.category.clone(),
            link: note.link.clone(),
            id: note.id.clone(),
        }
    }
}

impl From<WireNote> for InlineNote {
    fn from(wire: WireNote) -> Self {
        Self {
            content: wire.content,
            category: wire.category,
            link: wire.link,
            id: wire.id,
        }
    }
}

/// Encode a note as the JSON body of the host's persistence endpoint.
pub fn encode_note(note: &InlineNote) -> Result<String, HostPayloadError> {
    Ok(serde_json::to_string(&WireNote::from(note))?)
}

/// Decode a note from a host response body.
pub fn decode_note(json: &str) -> Result<InlineNote, HostPayloadError> {
    let wire: WireNote = serde_json::from_str(json)?;
    Ok(wire.into())
}
