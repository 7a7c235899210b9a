//! Fields whose markup the generic section rule cannot express.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::extractor::{
    cardinality::ItemSelector,
    cleaner::{clean, split_footnote},
    document::{Document, Node},
    model::FieldValue,
    section::locate,
};

pub const CHINESE_LABEL: &str = "Chinese";
pub const TITLES_LABEL: &str = "Titles";

/// Number of prose paragraphs kept for the introduction.
pub const INTRO_PARAGRAPHS: usize = 5;
/// Paragraph range used when the page has no infobox to anchor on.
const INTRO_FALLBACK_START: usize = 7;

const POEM_CLASS: &str = "poem";
const INFOBOX_CLASS: &str = "portable-infobox";
const SECTION_HEADING_TAG: &str = "h2";
const QUOTE: char = '"';

/// Script-labelled gloss the wiki template appends to honorific blocks,
/// e.g. `Simplified Chinese: 上帝、创造者…`.
static HONORIFIC_GLOSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:Simplified|Traditional) Chinese:\s*\S").unwrap());

/// `(Chinese, English)` name pairs from the "Chinese" section.
///
/// Italic spans are pronunciation glosses and are skipped. Remaining texts
/// pair up consecutively; an odd trailing entry is dropped.
pub fn chinese_name(doc: &Document) -> FieldValue {
    let Some(region) = locate(doc, CHINESE_LABEL) else {
        return FieldValue::PairList(Vec::new());
    };

    let spans = region.find_all(ItemSelector::Span.tag());
    let names: Vec<String> = if spans.is_empty() {
        vec![region.text()]
    } else {
        spans
            .iter()
            .filter(|span| !span.contains("i"))
            .map(Node::text)
            .collect()
    };

    FieldValue::PairList(pair_up(names))
}

/// `[a, b, c, d, e]` → `[(a, b), (c, d)]`.
pub fn pair_up(names: Vec<String>) -> Vec<(String, String)> {
    let mut names = names.into_iter();
    let mut pairs = Vec::new();
    while let (Some(first), Some(second)) = (names.next(), names.next()) {
        pairs.push((first, second));
    }
    pairs
}

/// Titles with their styled annotation spans appended in parentheses.
pub fn titles(doc: &Document) -> FieldValue {
    let Some(region) = locate(doc, TITLES_LABEL) else {
        return FieldValue::Absent;
    };

    let items = region.find_all("li");
    if items.is_empty() {
        return FieldValue::Scalar(clean(&region.text()).to_string());
    }

    FieldValue::List(items.iter().map(annotated_title).collect())
}

fn annotated_title(item: &Node<'_>) -> String {
    // Unstyled spans are decoration; styled ones carry the annotation.
    let annotation: String = item
        .find_all(ItemSelector::Span.tag())
        .iter()
        .filter(|span| span.has_attr("style"))
        .map(|span| clean(&span.text()).to_string())
        .collect();

    let text = item.text();
    match split_footnote(&text) {
        (primary, true) => format!("{primary} ({annotation})"),
        (whole, false) => format!("{whole}{annotation}"),
    }
}

/// Honorific name lines from the page's poem block.
///
/// Pages normally open with an epigraph poem and carry the honorific in the
/// second one; pages without the epigraph carry it in the first.
pub fn honorific_name(doc: &Document) -> FieldValue {
    let poems = doc.find_all_by_class("div", POEM_CLASS);
    let Some(poem) = poems.get(1).or_else(|| poems.first()) else {
        warn!("no poem block on page");
        return FieldValue::List(Vec::new());
    };
    if poems.len() < 2 {
        warn!("single poem block, reading honorific from it");
    }

    let text = poem.text();
    let mut fragments: Vec<String> = text.trim().split(QUOTE).map(str::to_string).collect();

    match fragments
        .iter()
        .position(|fragment| HONORIFIC_GLOSS.is_match(fragment))
    {
        Some(idx) => {
            fragments.remove(idx);
        }
        None => debug!("honorific block has no script gloss"),
    }

    FieldValue::List(fragments)
}

/// Opening prose paragraphs of the article.
pub fn intro(doc: &Document) -> FieldValue {
    let paragraphs = match doc.find_by_class("aside", INFOBOX_CLASS) {
        Some(infobox) => paragraphs_after(doc, &infobox),
        None => {
            warn!("no infobox found, using positional intro paragraphs");
            doc.find_all("p")
                .iter()
                .skip(INTRO_FALLBACK_START)
                .take(INTRO_PARAGRAPHS)
                .map(|p| p.text().trim().to_string())
                .collect()
        }
    };

    FieldValue::List(paragraphs)
}

/// Paragraphs between the infobox and the first article heading after it.
/// Poem blocks belong to the honorific and are skipped.
fn paragraphs_after(doc: &Document, infobox: &Node<'_>) -> Vec<String> {
    let Some(infobox_pos) = infobox.position_in(doc) else {
        return Vec::new();
    };
    let outside_infobox = |node: &Node<'_>| !infobox.is_ancestor_of(node);

    let end_pos = doc
        .find_all(SECTION_HEADING_TAG)
        .iter()
        .filter(|heading| outside_infobox(*heading))
        .filter_map(|heading| heading.position_in(doc))
        .find(|&pos| pos > infobox_pos)
        .unwrap_or(usize::MAX);
    let poems = doc.find_all_by_class("div", POEM_CLASS);

    doc.find_all("p")
        .iter()
        .filter(|p| outside_infobox(*p))
        .filter(|p| !poems.iter().any(|poem| poem.is_ancestor_of(p)))
        .filter(|p| {
            p.position_in(doc)
                .is_some_and(|pos| pos > infobox_pos && pos < end_pos)
        })
        .map(|p| p.text().trim().to_string())
        .filter(|text| !text.is_empty())
        .take(INTRO_PARAGRAPHS)
        .collect()
}
