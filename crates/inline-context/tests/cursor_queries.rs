//! Cursor-facing behavior: boundary inclusion, selection precedence, and the
//! left-neighbor policy between adjacent runs.

use inline_context::{
    FormatMarker, FormatSet, NOTE_FORMAT, RichTextValue, enclosing_range, find_format_ranges,
    position_in_format, selected_or_enclosing_text,
};

fn annotated(text: &str, runs: &[(usize, usize)]) -> RichTextValue {
    let mut value = RichTextValue::new(text);
    for &(start, end) in runs {
        value = value.with_format_run(FormatMarker::new(NOTE_FORMAT), start, end);
    }
    value
}

#[test]
fn probe_is_true_on_both_run_boundaries() {
    let value = annotated("Click this link here", &[(6, 10)]);

    for position in 6..=10 {
        assert!(
            position_in_format(&value, position, NOTE_FORMAT),
            "position {position} should touch the run"
        );
    }
    assert!(!position_in_format(&value, 5, NOTE_FORMAT));
    assert!(!position_in_format(&value, 11, NOTE_FORMAT));
}

#[test]
fn probe_is_false_everywhere_without_formats() {
    let value = RichTextValue::without_formats("Click this link here");
    for position in 0..25 {
        assert!(!position_in_format(&value, position, NOTE_FORMAT));
    }
    assert!(find_format_ranges(&value, NOTE_FORMAT).is_empty());
}

#[test]
fn caret_inside_run_expands_to_run_text() {
    let value = annotated("Click this link here", &[(6, 10)]).with_caret(8);
    assert_eq!(selected_or_enclosing_text(&value, NOTE_FORMAT), "this");
}

#[test]
fn caret_on_run_start_is_inside() {
    let value = annotated("Click this link here", &[(6, 10)]).with_caret(6);
    assert_eq!(selected_or_enclosing_text(&value, NOTE_FORMAT), "this");
}

#[test]
fn caret_between_adjacent_runs_resolves_left() {
    // "link1 link2": two disjoint runs around the unmarked space at 5. The caret
    // at 5 just left the first run, so that run wins.
    let value = annotated("link1 link2", &[(0, 5), (6, 11)]).with_caret(5);
    assert_eq!(selected_or_enclosing_text(&value, NOTE_FORMAT), "link1");

    let ranges = find_format_ranges(&value, NOTE_FORMAT);
    assert_eq!(ranges.len(), 2);
}

#[test]
fn explicit_selection_wins_over_enclosing_run() {
    // Selection and annotation coexist; the selection text is returned verbatim.
    let value = annotated("Hello world, friends", &[(0, 5)]).with_selection(6, 11);
    assert_eq!(selected_or_enclosing_text(&value, NOTE_FORMAT), "world");
}

#[test]
fn explicit_selection_works_without_formats() {
    let value = RichTextValue::without_formats("Hello world, friends").with_selection(6, 11);
    assert_eq!(selected_or_enclosing_text(&value, NOTE_FORMAT), "world");
}

#[test]
fn bare_marker_objects_behave_like_collections() {
    // The host may hand a bare marker instead of a one-element collection at each
    // position. Every operation must treat the two shapes identically.
    let mut bare = RichTextValue::new("Click this link here").with_caret(8);
    let mut wrapped = bare.clone();
    for index in 6..10 {
        bare.formats[index] = FormatSet::Single(FormatMarker::new(NOTE_FORMAT));
        wrapped.formats[index] = FormatSet::Many(vec![FormatMarker::new(NOTE_FORMAT)]);
    }

    assert_eq!(
        find_format_ranges(&bare, NOTE_FORMAT),
        find_format_ranges(&wrapped, NOTE_FORMAT)
    );
    for position in 0..=20 {
        assert_eq!(
            position_in_format(&bare, position, NOTE_FORMAT),
            position_in_format(&wrapped, position, NOTE_FORMAT),
        );
        assert_eq!(
            enclosing_range(&bare, position, NOTE_FORMAT),
            enclosing_range(&wrapped, position, NOTE_FORMAT),
        );
    }
    assert_eq!(
        selected_or_enclosing_text(&bare, NOTE_FORMAT),
        selected_or_enclosing_text(&wrapped, NOTE_FORMAT)
    );
}

#[test]
fn multibyte_text_uses_character_offsets() {
    // "día uno" - the accented character must count as one position.
    let value = annotated("d\u{ed}a uno", &[(0, 3)]).with_caret(1);
    assert_eq!(selected_or_enclosing_text(&value, NOTE_FORMAT), "d\u{ed}a");

    let ranges = find_format_ranges(&value, NOTE_FORMAT);
    assert_eq!(ranges[0].len(), 3);
}
