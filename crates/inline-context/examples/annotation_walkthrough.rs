//! Walks through the annotation queries a UI integration performs: scan the runs,
//! navigate between them, resolve the note under the caret, and build labels.

use inline_context::{
    InlineNote, NOTE_FORMAT, RichTextValue, find_format_ranges, next_range, note_at,
    position_in_format, previous_range, range_label, selected_or_enclosing_text,
};

fn main() {
    let first = InlineNote::new("The protocol is described in <em>RFC 9110</em>.")
        .with_category("reference")
        .with_link("https://www.rfc-editor.org/rfc/rfc9110")
        .with_id("a1");
    let second = InlineNote::new("Benchmarks were run on the 2024 test fleet.")
        .with_category("methodology")
        .with_id("a2");

    let value = RichTextValue::new("Caching follows the HTTP semantics used by our fleet today.")
        .with_format_run(first.into_marker(), 20, 34)
        .with_format_run(second.into_marker(), 47, 52)
        .with_caret(25);

    let ranges = find_format_ranges(&value, NOTE_FORMAT);
    println!("{} annotated runs:", ranges.len());
    for range in &ranges {
        println!(
            "  [{:>2}, {:>2})  {}",
            range.start,
            range.end,
            range_label(&value, *range, 24)
        );
    }

    assert!(value.is_collapsed());
    println!(
        "caret at {} inside a run: {}",
        value.start,
        position_in_format(&value, value.start, NOTE_FORMAT)
    );
    if let Some(run) = ranges.iter().find(|range| range.contains(value.start)) {
        println!("caret run spans [{}, {})", run.start, run.end);
    }
    println!(
        "text under caret: {:?}",
        selected_or_enclosing_text(&value, NOTE_FORMAT)
    );

    if let Some(note) = note_at(&value, value.start) {
        println!(
            "note under caret: {:?} (category: {:?})",
            note.content, note.category
        );
        if let Some(permalink) = note.permalink("https://example.com/post") {
            println!("copy-link target: {permalink}");
        }
    }

    if let Some(next) = next_range(&ranges, value.start) {
        println!("next annotation starts at {}", next.start);
    }
    if previous_range(&ranges, value.start).is_none() {
        println!("no annotation ends before the caret");
    }
}
