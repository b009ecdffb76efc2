//! `inline-context-render` - published-page markup for inline-context annotations.
//!
//! The reader-facing side of the feature: each annotated run becomes a toggle
//! control plus an initially-hidden note block, and stored note content passes
//! through a single-pass allowlist sanitizer before it reaches the page.
//!
//! The sanitizer is deliberately bounded: note bodies are short inline fragments,
//! not documents, so a tag-level scan is enough. It is *not* an HTML parser; a `>`
//! inside an attribute value terminates the tag early and the remainder is escaped,
//! which fails safe.

use html_escape::{encode_double_quoted_attribute, encode_text};
use inline_context::{
    InlineNote, NOTE_FORMAT, RichTextValue, find_format_ranges, is_supported_link, note_at,
};
use regex::Regex;

/// Inline tags allowed to survive sanitization. Attributes are stripped; `<a>`
/// keeps a validated http(s) `href`.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &["a", "br", "code", "em", "s", "strong"];

/// Single-pass allowlist sanitizer for stored note content.
///
/// Allowed tags are re-emitted in normalized lowercase form with attributes
/// stripped; `<a>` keeps a validated http(s) `href` and gains
/// `rel="noopener noreferrer"`. Disallowed tags are dropped while their text
/// content survives, entity-escaped.
#[derive(Debug, Clone)]
pub struct NoteSanitizer {
    tag: Regex,
    href: Regex,
    allowed: Vec<String>,
}

impl NoteSanitizer {
    /// Sanitizer with [`DEFAULT_ALLOWED_TAGS`].
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_allowed_tags(DEFAULT_ALLOWED_TAGS)
    }

    /// Sanitizer with a custom tag allowlist (tag names, case-insensitive).
    pub fn with_allowed_tags(tags: &[&str]) -> Result<Self, regex::Error> {
        Ok(Self {
            tag: Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)([^>]*)>")?,
            href: Regex::new(r#"(?i)href\s*=\s*("([^"]*)"|'([^']*)'|([^\s>'"]+))"#)?,
            allowed: tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
        })
    }

    /// Sanitize a stored note body for the published page.
    pub fn sanitize(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut cursor = 0;

        for caps in self.tag.captures_iter(html) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&encode_text(&html[cursor..whole.start()]));
            cursor = whole.end();

            let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
            let Some(name) = caps.get(2) else {
                continue;
            };
            let name = name.as_str().to_ascii_lowercase();
            if !self.allowed.iter().any(|tag| *tag == name) {
                continue;
            }

            if closing {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            } else if name == "br" {
                out.push_str("<br>");
            } else if name == "a" {
                let attrs = caps.get(3).map(|m| m.as_str()).unwrap_or("");
                match self.extract_href(attrs) {
                    Some(href) => {
                        out.push_str("<a href=\"");
                        out.push_str(&encode_double_quoted_attribute(&href));
                        out.push_str("\" rel=\"noopener noreferrer\">");
                    }
                    // A link without a usable target still opens an element so
                    // its closing tag stays balanced.
                    None => out.push_str("<a>"),
                }
            } else {
                out.push('<');
                out.push_str(&name);
                out.push('>');
            }
        }

        out.push_str(&encode_text(&html[cursor..]));
        out
    }

    fn extract_href(&self, attrs: &str) -> Option<String> {
        let caps = self.href.captures(attrs)?;
        let raw = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))?
            .as_str()
            .trim();
        if is_supported_link(raw) {
            Some(raw.to_string())
        } else {
            None
        }
    }
}

/// Render the hidden note block for one annotation.
///
/// The block gets an `id` derived from the note's anchor when the note has been
/// persisted, so the copy-link fragment can target it.
pub fn render_note(note: &InlineNote, sanitizer: &NoteSanitizer) -> String {
    let mut out = String::new();

    out.push_str("<aside");
    if let Some(anchor) = note.anchor() {
        out.push_str(" id=\"");
        out.push_str(&encode_double_quoted_attribute(&anchor));
        out.push_str("-note\"");
    }
    out.push_str(" class=\"inline-context__note\" hidden>");

    if let Some(category) = &note.category {
        out.push_str("<span class=\"inline-context__category\">");
        out.push_str(&encode_text(category));
        out.push_str("</span>");
    }

    out.push_str("<div class=\"inline-context__body\">");
    out.push_str(&sanitizer.sanitize(&note.content));
    out.push_str("</div>");

    if let Some(link) = note.link.as_deref().filter(|link| is_supported_link(link)) {
        out.push_str("<a class=\"inline-context__link\" href=\"");
        out.push_str(&encode_double_quoted_attribute(link));
        out.push_str("\" rel=\"noopener noreferrer\">Read more</a>");
    }

    out.push_str("</aside>");
    out
}

fn render_run(run_text: &str, note: &InlineNote, sanitizer: &NoteSanitizer) -> String {
    let anchor = note.anchor();
    let mut out = String::new();

    out.push_str("<span");
    if let Some(anchor) = &anchor {
        out.push_str(" id=\"");
        out.push_str(&encode_double_quoted_attribute(anchor));
        out.push('"');
    }
    out.push_str(" class=\"inline-context\">");
    out.push_str(&encode_text(run_text));

    out.push_str("<button type=\"button\" class=\"inline-context__toggle\" aria-expanded=\"false\"");
    if let Some(anchor) = &anchor {
        out.push_str(" aria-controls=\"");
        out.push_str(&encode_double_quoted_attribute(anchor));
        out.push_str("-note\"");
    }
    out.push_str(">+</button>");

    out.push_str(&render_note(note, sanitizer));
    out.push_str("</span>");
    out
}

/// Render a rich-text value for the published page.
///
/// Unannotated text is entity-escaped; each run carrying an inline-context note
/// becomes toggle markup via [`render_note`]. Runs whose marker carries no note
/// payload render as plain escaped text - never an error.
pub fn render_value(value: &RichTextValue, sanitizer: &NoteSanitizer) -> String {
    let ranges = find_format_ranges(value, NOTE_FORMAT);
    let mut out = String::new();
    let mut cursor = 0;

    for range in ranges {
        out.push_str(&encode_text(&value.slice(cursor, range.start)));
        let run_text = value.slice(range.start, range.end);
        match note_at(value, range.start) {
            Some(note) => out.push_str(&render_run(&run_text, &note, sanitizer)),
            None => out.push_str(&encode_text(&run_text)),
        }
        cursor = range.end;
    }

    out.push_str(&encode_text(&value.slice(cursor, value.char_count())));
    out
}
