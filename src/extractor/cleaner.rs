/// Footnote references render inline after a value: `Human[1]`.
pub const FOOTNOTE_MARKER: char = '[';

/// Cut `text` at the first footnote marker. Purely lexical: a legitimately
/// bracketed value is truncated too.
pub fn clean(text: &str) -> &str {
    match text.find(FOOTNOTE_MARKER) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Like [`clean`], but reports whether a marker was present.
pub fn split_footnote(text: &str) -> (&str, bool) {
    match text.find(FOOTNOTE_MARKER) {
        Some(idx) => (&text[..idx], true),
        None => (text, false),
    }
}
