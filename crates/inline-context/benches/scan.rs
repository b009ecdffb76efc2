use criterion::{Criterion, black_box, criterion_group, criterion_main};
use inline_context::{
    FormatMarker, NOTE_FORMAT, RichTextValue, find_format_ranges, position_in_format,
    selected_or_enclosing_text,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn annotated_value(char_count: usize, run_count: usize) -> RichTextValue {
    let sentence = "the quick brown fox jumps over the lazy dog ";
    let sentence_chars = sentence.chars().count();
    let mut text = String::with_capacity(char_count + sentence.len());
    let mut filled = 0;
    while filled < char_count {
        text.push_str(sentence);
        filled += sentence_chars;
    }
    let text: String = text.chars().take(char_count).collect();

    let mut rng = StdRng::seed_from_u64(42);
    let mut value = RichTextValue::new(text);
    for _ in 0..run_count {
        let start = rng.gen_range(0..char_count.saturating_sub(8));
        let len = rng.gen_range(1..8);
        value = value.with_format_run(FormatMarker::new(NOTE_FORMAT), start, start + len);
    }
    value
}

fn bench_full_scan(c: &mut Criterion) {
    let value = annotated_value(100_000, 500);
    c.bench_function("find_format_ranges/100k_chars_500_runs", |b| {
        b.iter(|| black_box(find_format_ranges(black_box(&value), NOTE_FORMAT)))
    });
}

fn bench_cursor_probe(c: &mut Criterion) {
    let value = annotated_value(100_000, 500);
    c.bench_function("position_in_format/100k_chars", |b| {
        b.iter(|| black_box(position_in_format(black_box(&value), 50_000, NOTE_FORMAT)))
    });
}

fn bench_enclosing_text(c: &mut Criterion) {
    let value = annotated_value(100_000, 500).with_caret(50_000);
    c.bench_function("selected_or_enclosing_text/100k_chars", |b| {
        b.iter(|| black_box(selected_or_enclosing_text(black_box(&value), NOTE_FORMAT)))
    });
}

criterion_group!(benches, bench_full_scan, bench_cursor_probe, bench_enclosing_text);
criterion_main!(benches);
