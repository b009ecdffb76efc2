pub(crate) fn slice_chars(text: &str, start: usize, end: usize) -> String {
    // Half-open character-offset slice, clamped to the text. Inverted ranges
    // yield "" rather than panicking, matching the degrade-don't-fail policy
    // of the public query operations.
    if end <= start {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}
