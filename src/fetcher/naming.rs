//! Character name → wiki article identifier.
//!
//! Article titles on the wiki capitalize every word except prepositions and
//! conjunctions and use underscores for spaces: `"church of the fool"` lives
//! at `Church_of_The_Fool`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Words kept lowercase inside an article title.
const LOWERCASE_WORDS: &[&str] = &[
    "about", "against", "among", "and", "as", "at", "between", "but", "by", "during", "for",
    "from", "if", "in", "into", "nor", "of", "on", "onto", "or", "over", "so", "than",
    "through", "to", "under", "upon", "with", "within", "without", "yet",
];

/// Characters that cannot appear raw in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_lowercase_word(word: &str) -> bool {
    LOWERCASE_WORDS.contains(&word.to_lowercase().as_str())
}

/// Format a free-text character name as the wiki's article identifier.
///
/// The first word is always capitalized, even when it is a listed small word.
pub fn format_name(name: &str) -> String {
    let words: Vec<String> = name
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && is_lowercase_word(word) {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect();

    utf8_percent_encode(&words.join("_"), PATH_SEGMENT).to_string()
}

/// Article URL for `name` under `base_url`.
pub fn character_url(base_url: &str, name: &str) -> String {
    let separator = if base_url.ends_with('/') { "" } else { "/" };
    format!("{base_url}{separator}{}", format_name(name))
}
