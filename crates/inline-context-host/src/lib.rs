#![warn(missing_docs)]
//! `inline-context-host` - host-editor bridge for `inline-context`.
//!
//! The host block editor serializes its rich-text values and note payloads as JSON.
//! This crate decodes those payloads into `inline-context` types without importing
//! the host's SDK, tolerating the shapes hosts actually produce: sparse `formats`
//! arrays with `null` holes, marker sets that are either a bare object or an array,
//! and values with no selection bounds at all.

pub mod note_codec;
pub mod value_codec;

use thiserror::Error;

pub use note_codec::{decode_note, encode_note};
pub use value_codec::{decode_rich_text_value, rich_text_value_from_json};

/// Errors produced while decoding or encoding host payloads.
#[derive(Debug, Error)]
pub enum HostPayloadError {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
