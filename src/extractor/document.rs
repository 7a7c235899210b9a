//! Read-only view over a parsed wiki page.
//!
//! [`Document`] owns the `scraper` tree for one extraction pass and hands out
//! borrowed [`Node`] handles. Every lookup is a fresh descendant walk; pages
//! are small enough that nothing is cached.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::extractor::errors::ExtractError;

pub struct Document {
    html: Html,
}

/// Handle to one element of a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl Document {
    /// Parse raw markup. The HTML5 tokenizer recovers from any malformed
    /// input, so the only unparseable document is one with no markup at all.
    pub fn parse(markup: &str) -> Result<Self, ExtractError> {
        if markup.trim().is_empty() {
            return Err(ExtractError::MalformedDocument(
                "document is empty".to_string(),
            ));
        }

        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            debug!(errors = html.errors.len(), "recovered from markup errors");
        }

        Ok(Self { html })
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }

    pub fn find(&self, tag: &str) -> Option<Node<'_>> {
        self.root().find_inclusive(tag)
    }

    pub fn find_all(&self, tag: &str) -> Vec<Node<'_>> {
        self.root().find_all_inclusive(tag)
    }

    /// First `tag` element whose full text equals `text` exactly.
    pub fn find_by_text(&self, tag: &str, text: &str) -> Option<Node<'_>> {
        self.find_all(tag).into_iter().find(|node| node.text() == text)
    }

    /// First `tag` element carrying every class in the whitespace-separated
    /// `class` list.
    pub fn find_by_class(&self, tag: &str, class: &str) -> Option<Node<'_>> {
        self.find_all_by_class(tag, class).into_iter().next()
    }

    pub fn find_all_by_class(&self, tag: &str, class: &str) -> Vec<Node<'_>> {
        let Some(selector) = class_selector(tag, class) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .map(|element| Node { element })
            .collect()
    }
}

fn tag_selector(tag: &str) -> Option<Selector> {
    Selector::parse(tag).ok()
}

fn class_selector(tag: &str, class: &str) -> Option<Selector> {
    let classes: String = class.split_whitespace().map(|c| format!(".{c}")).collect();
    Selector::parse(&format!("{tag}{classes}")).ok()
}

impl<'a> Node<'a> {
    pub fn tag(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.element
            .value()
            .has_class(class, scraper::CaseSensitivity::CaseSensitive)
    }

    /// Concatenated text of every descendant text node, untrimmed.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.element
            .parent()
            .and_then(ElementRef::wrap)
            .map(|element| Node { element })
    }

    /// First descendant `tag` element in document order (excluding self).
    pub fn find(&self, tag: &str) -> Option<Node<'a>> {
        let selector = tag_selector(tag)?;
        self.element
            .select(&selector)
            .next()
            .map(|element| Node { element })
    }

    /// Every descendant `tag` element in document order (excluding self).
    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        let Some(selector) = tag_selector(tag) else {
            return Vec::new();
        };
        self.element
            .select(&selector)
            .map(|element| Node { element })
            .collect()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// True when `other` lies strictly inside this node.
    pub fn is_ancestor_of(&self, other: &Node<'_>) -> bool {
        other
            .element
            .ancestors()
            .any(|ancestor| ancestor.id() == self.element.id())
    }

    /// Position of this node in a pre-order walk of `doc`.
    pub fn position_in(&self, doc: &Document) -> Option<usize> {
        doc.html
            .tree
            .root()
            .descendants()
            .position(|node| node.id() == self.element.id())
    }

    fn find_inclusive(&self, tag: &str) -> Option<Node<'a>> {
        if self.tag() == tag {
            return Some(*self);
        }
        self.find(tag)
    }

    fn find_all_inclusive(&self, tag: &str) -> Vec<Node<'a>> {
        let mut nodes = self.find_all(tag);
        if self.tag() == tag {
            nodes.insert(0, *self);
        }
        nodes
    }
}
