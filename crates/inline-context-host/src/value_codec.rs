//! Decoding of the host editor's serialized rich-text value.
//!
//! Degradation rules, matching the engine's degrade-don't-fail policy:
//!
//! - a missing `formats` field decodes to a value with no formats;
//! - `null` entries in `formats` decode to empty marker sets;
//! - missing selection bounds decode to a collapsed caret at 0;
//! - bounds clamp to the text length, and inverted bounds are swapped.
//!
//! Only structurally invalid JSON is an error.

use std::collections::BTreeMap;

use inline_context::{FormatMarker, FormatSet, RichTextValue};
use serde::Deserialize;

use crate::HostPayloadError;

#[derive(Debug, Deserialize)]
struct WireValue {
    #[serde(default)]
    text: String,
    #[serde(default)]
    formats: Vec<Option<WireFormatSet>>,
    #[serde(default)]
    start: Option<usize>,
    #[serde(default)]
    end: Option<usize>,
}

/// Hosts serialize a position's marker set either as a bare marker object or as
/// an array of markers. Both decode to the same [`FormatSet`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireFormatSet {
    /// An array of co-occurring markers.
    Many(Vec<WireMarker>),
    /// A single bare marker object.
    One(WireMarker),
}

#[derive(Debug, Deserialize)]
struct WireMarker {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

impl From<WireMarker> for FormatMarker {
    fn from(wire: WireMarker) -> Self {
        Self {
            kind: wire.kind,
            attributes: wire.attributes,
        }
    }
}

impl From<WireFormatSet> for FormatSet {
    fn from(wire: WireFormatSet) -> Self {
        match wire {
            // The Vec-based constructor normalizes an empty array to Empty.
            WireFormatSet::Many(markers) => {
                FormatSet::from(markers.into_iter().map(FormatMarker::from).collect::<Vec<_>>())
            }
            WireFormatSet::One(marker) => FormatSet::Single(marker.into()),
        }
    }
}

fn value_from_wire(wire: WireValue) -> RichTextValue {
    let char_count = wire.text.chars().count();

    let formats = wire
        .formats
        .into_iter()
        .map(|set| set.map(FormatSet::from).unwrap_or_default())
        .collect();

    let mut start = wire.start.unwrap_or(0).min(char_count);
    let mut end = wire.end.unwrap_or(start).min(char_count);
    if end < start {
        std::mem::swap(&mut start, &mut end);
    }

    RichTextValue {
        text: wire.text,
        formats,
        start,
        end,
    }
}

/// Decode a serialized rich-text value from a JSON string.
pub fn decode_rich_text_value(json: &str) -> Result<RichTextValue, HostPayloadError> {
    let wire: WireValue = serde_json::from_str(json)?;
    Ok(value_from_wire(wire))
}

/// Decode a rich-text value already parsed into a [`serde_json::Value`]
/// (e.g. embedded in a larger host message).
pub fn rich_text_value_from_json(
    value: serde_json::Value,
) -> Result<RichTextValue, HostPayloadError> {
    let wire: WireValue = serde_json::from_value(value)?;
    Ok(value_from_wire(wire))
}
