//! Infobox section lookup.
//!
//! The infobox renders each field as a heading and a value container that
//! share a parent:
//!
//! ```html
//! <div class="pi-item pi-data">
//!   <h3 class="pi-data-label">Gender</h3>
//!   <div class="pi-data-value">Male</div>
//! </div>
//! ```
//!
//! Lookup never leaves that parent, so a similarly named heading elsewhere on
//! the page cannot leak into the field.

use tracing::debug;

use crate::extractor::document::{Document, Node};

/// Tag of infobox field headings.
pub const HEADING_TAG: &str = "h3";
/// Tag of the value container beside each heading.
pub const CONTAINER_TAG: &str = "div";

/// Heading whose text is exactly `label`.
pub fn heading<'a>(doc: &'a Document, label: &str) -> Option<Node<'a>> {
    doc.find_by_text(HEADING_TAG, label)
}

/// Value container for the section titled `label`, or `None` when the page
/// has no such section or the heading has no container beside it.
pub fn locate<'a>(doc: &'a Document, label: &str) -> Option<Node<'a>> {
    let Some(head) = heading(doc, label) else {
        debug!(label, "section absent");
        return None;
    };

    let region = head.parent().and_then(|parent| parent.find(CONTAINER_TAG));
    if region.is_none() {
        debug!(label, "section heading has no value container");
    }
    region
}
