//! Annotation range index.
//!
//! Computes the maximal contiguous runs over which a given format marker is active,
//! and answers the cursor questions UI callers ask: "is the caret inside an
//! annotation?", "which run encloses it?", "where is the next/previous one?".
//!
//! All operations are pure functions over a [`RichTextValue`] snapshot. They are
//! generic over the marker kind - the distinguished annotation identifier is
//! configuration supplied by the caller (see [`crate::note::NOTE_FORMAT`]), not a
//! literal baked into the scan.

use crate::rich_text::RichTextValue;
use crate::text::slice_chars;

/// A maximal contiguous run of characters all carrying one format marker,
/// expressed as a half-open character range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRange {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl FormatRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the range covers a character position.
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }
}

/// Scan `value` and return every maximal run carrying `kind`, ascending by start.
///
/// Returned ranges are non-overlapping and maximal: the marker is absent just
/// before each range's start and just after its last position (or the range touches
/// the document edge). Every marked position belongs to exactly one range. Two
/// annotations applied back to back with no unmarked position between them are one
/// run - per-position presence is all the scan can observe.
///
/// An empty `formats` vector (the host's "no formats" case) yields no runs. When
/// `formats` is shorter than the text, only the prefix it covers is scanned.
pub fn find_format_ranges(value: &RichTextValue, kind: &str) -> Vec<FormatRange> {
    let mut ranges = Vec::new();
    let mut open: Option<FormatRange> = None;

    for (index, set) in value.formats.iter().enumerate() {
        if set.contains_kind(kind) {
            match open.as_mut() {
                Some(range) => range.end = index + 1,
                None => open = Some(FormatRange::new(index, index + 1)),
            }
        } else if let Some(range) = open.take() {
            ranges.push(range);
        }
    }

    if let Some(range) = open {
        ranges.push(range);
    }

    ranges
}

/// First range starting strictly after `position`.
///
/// `ranges` must be ascending by start, as produced by [`find_format_ranges`].
pub fn next_range(ranges: &[FormatRange], position: usize) -> Option<FormatRange> {
    ranges.iter().copied().find(|range| range.start > position)
}

/// Last range ending at or before `position`.
///
/// `ranges` must be ascending by start, as produced by [`find_format_ranges`].
pub fn previous_range(ranges: &[FormatRange], position: usize) -> Option<FormatRange> {
    ranges
        .iter()
        .rev()
        .copied()
        .find(|range| range.end <= position)
}

/// Whether a caret at `position` touches a run of `kind`.
///
/// The caret sits *between* characters, so both neighbors are probed: the character
/// just before the caret and the character just after it. A caret exactly on a
/// run's start or end boundary therefore counts as inside. Out-of-range positions
/// clamp to the formats the value actually has; a value with no `formats` is never
/// inside a run.
pub fn position_in_format(value: &RichTextValue, position: usize, kind: &str) -> bool {
    let Some(last) = value.formats.len().checked_sub(1) else {
        return false;
    };

    let left = position.saturating_sub(1).min(last);
    let right = position.min(last);

    value.formats[left].contains_kind(kind) || value.formats[right].contains_kind(kind)
}

/// The maximal run of `kind` around a caret at `position`, if the caret touches one.
///
/// Seeds from the caret's left neighbor when that neighbor is marked, else from the
/// right neighbor - so a caret between two separate runs resolves to the run it just
/// left. The run is grown locally in both directions rather than derived from a full
/// [`find_format_ranges`] pass.
pub fn enclosing_range(value: &RichTextValue, position: usize, kind: &str) -> Option<FormatRange> {
    let last = value.formats.len().checked_sub(1)?;

    let left = position.saturating_sub(1).min(last);
    let right = position.min(last);

    let seed = if value.formats[left].contains_kind(kind) {
        left
    } else if value.formats[right].contains_kind(kind) {
        right
    } else {
        return None;
    };

    let mut start = seed;
    while start > 0 && value.formats[start - 1].contains_kind(kind) {
        start -= 1;
    }

    let mut end = seed;
    while end < last && value.formats[end + 1].contains_kind(kind) {
        end += 1;
    }

    Some(FormatRange::new(start, end + 1))
}

/// The selected text when the value carries an explicit selection, else the text of
/// the run of `kind` enclosing the collapsed caret, else `""`.
///
/// An explicit selection (`start < end`) always wins, whether or not it overlaps a
/// run. For a collapsed caret the result matches [`enclosing_range`]'s boundary
/// policy: a caret on a run's edge still yields that run's text.
pub fn selected_or_enclosing_text(value: &RichTextValue, kind: &str) -> String {
    if value.start < value.end {
        return slice_chars(&value.text, value.start, value.end);
    }

    match enclosing_range(value, value.start, kind) {
        Some(range) => slice_chars(&value.text, range.start, range.end),
        None => String::new(),
    }
}
