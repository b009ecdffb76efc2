//! Short display labels for annotated text.
//!
//! UI surfaces label annotations by a preview of the text they cover (popover
//! titles, annotation lists, the copy-link toast). Labels are bounded by display
//! cells per UAX #11, so CJK text truncates by what it occupies on screen, and
//! truncation never splits a grapheme cluster.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ranges::FormatRange;
use crate::rich_text::RichTextValue;
use crate::text::slice_chars;

/// Appended when a label had to be truncated.
const ELLIPSIS: &str = "\u{2026}";

/// Build a display label at most `max_cells` cells wide.
///
/// Surrounding whitespace is trimmed. Text that fits is returned unchanged;
/// otherwise the label is cut on a grapheme-cluster boundary and ends with `…`.
pub fn excerpt(text: &str, max_cells: usize) -> String {
    let text = text.trim();
    if text.width() <= max_cells {
        return text.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }

    let budget = max_cells.saturating_sub(ELLIPSIS.width());
    let mut label = String::new();
    let mut used = 0;

    for grapheme in text.graphemes(true) {
        let cells = grapheme.width();
        if used + cells > budget {
            break;
        }
        label.push_str(grapheme);
        used += cells;
    }

    label.push_str(ELLIPSIS);
    label
}

/// Label for the text covered by `range` within `value`.
pub fn range_label(value: &RichTextValue, range: FormatRange, max_cells: usize) -> String {
    excerpt(&slice_chars(&value.text, range.start, range.end), max_cells)
}
