#![warn(missing_docs)]
//! Inline Context - Headless Inline-Annotation Engine
//!
//! # Overview
//!
//! `inline-context` is the engine behind an inline annotation feature for rich-text
//! editors: users attach a note (content, optional category, optional link) to a run
//! of text, and readers toggle the note's visibility on the published page. The crate
//! is headless: it consumes a read-only rich-text value from the host editor and
//! returns plain data (ranges, booleans, strings) to whatever drives the UI.
//!
//! All public offsets are **character offsets** (Unicode scalar values), never bytes.
//!
//! # Core Features
//!
//! - **Format-Run Scanning**: single-pass computation of maximal annotated runs
//! - **Cursor Queries**: boundary-inclusive membership and local run expansion
//! - **Run Navigation**: next/previous annotation from a cursor position
//! - **Note Payloads**: content/category/link stored as format-marker attributes
//! - **Labels**: grapheme-safe, display-width-bounded previews of annotated text
//!
//! # Recomputation Contract
//!
//! Every operation is a pure function of its inputs. There is no cache, subscription,
//! or invalidation machinery: the host re-derives whatever it needs on each document
//! change, which is cheaper than invalidating for values of this size.
//!
//! # Quick Start
//!
//! ```rust
//! use inline_context::{
//!     FormatMarker, NOTE_FORMAT, RichTextValue, find_format_ranges,
//!     selected_or_enclosing_text,
//! };
//!
//! // "this" is annotated; the caret sits inside the run.
//! let value = RichTextValue::new("Click this link here")
//!     .with_format_run(FormatMarker::new(NOTE_FORMAT), 6, 10)
//!     .with_caret(8);
//!
//! let ranges = find_format_ranges(&value, NOTE_FORMAT);
//! assert_eq!((ranges[0].start, ranges[0].end), (6, 10));
//!
//! // A collapsed caret expands to the enclosing run's text.
//! assert_eq!(selected_or_enclosing_text(&value, NOTE_FORMAT), "this");
//! ```
//!
//! # Module Description
//!
//! - [`rich_text`] - the read-only value model (text, marker sets, selection bounds)
//! - [`ranges`] - the annotation range index (scanning, navigation, cursor queries)
//! - [`note`] - note payloads stored on the distinguished format marker
//! - [`excerpt`] - short display labels for annotated text

pub mod excerpt;
pub mod note;
pub mod ranges;
pub mod rich_text;
mod text;

pub use excerpt::{excerpt, range_label};
pub use note::{
    InlineNote, NOTE_ATTR_CATEGORY, NOTE_ATTR_CONTENT, NOTE_ATTR_ID, NOTE_ATTR_LINK, NOTE_FORMAT,
    NoteError, is_supported_link, note_at,
};
pub use ranges::{
    FormatRange, enclosing_range, find_format_ranges, next_range, position_in_format,
    previous_range, selected_or_enclosing_text,
};
pub use rich_text::{FormatMarker, FormatSet, RichTextValue};
