//! Single value or list? Decided by the markup, never by the field.

use crate::extractor::{cleaner::clean, document::Node, model::FieldValue};

/// Element that marks one logical item inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSelector {
    ListItem,
    Anchor,
    Span,
}

impl ItemSelector {
    pub fn tag(self) -> &'static str {
        match self {
            Self::ListItem => "li",
            Self::Anchor => "a",
            Self::Span => "span",
        }
    }
}

fn item_text(node: &Node<'_>, cleaning: bool) -> String {
    let text = node.text();
    if cleaning {
        clean(&text).to_string()
    } else {
        text
    }
}

/// Zero item nodes: the whole region is one `Scalar`. Otherwise a `List` of
/// every item in document order.
pub fn normalize(region: &Node<'_>, selector: ItemSelector, cleaning: bool) -> FieldValue {
    let items = region.find_all(selector.tag());
    if items.is_empty() {
        return FieldValue::Scalar(item_text(region, cleaning));
    }
    FieldValue::List(items.iter().map(|item| item_text(item, cleaning)).collect())
}

/// Anchors that carry a `title` and visible text. Title-less anchors are
/// navigation (category links, edit buttons) rather than values.
pub fn qualifying_anchors(region: &Node<'_>, cleaning: bool) -> Vec<String> {
    region
        .find_all(ItemSelector::Anchor.tag())
        .iter()
        .filter(|anchor| anchor.has_attr("title") && !anchor.text().is_empty())
        .map(|anchor| item_text(anchor, cleaning))
        .collect()
}
