//! End-to-end note flow: a note stored on the marker, resolved from the caret,
//! labeled for the UI, and linked for the copy-link action.

use inline_context::{
    InlineNote, NOTE_FORMAT, RichTextValue, find_format_ranges, note_at, range_label,
};

#[test]
fn note_round_trips_through_value_and_caret() {
    let note = InlineNote::new("First described in the 1998 survey.")
        .with_category("history")
        .with_link("https://example.com/survey")
        .with_id("n-17");

    let value = RichTextValue::new("The algorithm generalizes earlier heuristics.")
        .with_format_run(note.clone().into_marker(), 4, 13)
        .with_caret(9);

    let resolved = note_at(&value, value.start).expect("caret sits inside the run");
    assert_eq!(resolved, note);
    assert_eq!(
        resolved.permalink("https://example.com/post").as_deref(),
        Some("https://example.com/post#inline-context-n-17")
    );
}

#[test]
fn labels_come_from_the_annotated_text() {
    let note = InlineNote::new("see appendix").with_id("n-1");
    let value = RichTextValue::new("The algorithm generalizes earlier heuristics.")
        .with_format_run(note.into_marker(), 4, 13);

    let ranges = find_format_ranges(&value, NOTE_FORMAT);
    assert_eq!(ranges.len(), 1);
    assert_eq!(range_label(&value, ranges[0], 40), "algorithm");
    assert_eq!(range_label(&value, ranges[0], 6), "algor\u{2026}");
}

#[test]
fn unsaved_note_validates_but_has_no_anchor() {
    let draft = InlineNote::new("draft body").with_category("todo");
    assert!(draft.validate().is_ok());
    assert!(draft.anchor().is_none());
}
