pub mod assembler;
pub mod cardinality;
pub mod cleaner;
pub mod document;
pub mod errors;
pub mod fields;
pub mod model;
pub mod section;
pub mod special;

#[cfg(test)]
mod tests;

pub use assembler::NO_IMAGE;
pub use document::Document;
pub use errors::ExtractError;
pub use model::{Character, FieldValue};

use crate::fetcher::types::PageResponse;

/// Build a character record from a fetched page.
pub fn extract(resp: &PageResponse) -> Result<Character, ExtractError> {
    extract_html(&resp.body_utf8, resp.url_final.as_str())
}

/// Build a character record from raw markup served at `url`.
pub fn extract_html(html: &str, url: &str) -> Result<Character, ExtractError> {
    // 1. Parse; the tree lives only for this call
    let doc = Document::parse(html)?;

    // 2. Name first, then every registered field
    assembler::assemble(&doc, url)
}
