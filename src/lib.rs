//! Character records scraped from the Lord of the Mysteries wiki.
//!
//! [`CharacterClient`] fetches an article by character name and runs the
//! [`extractor`] over its infobox, producing a [`Character`] whose fields are
//! [`FieldValue`]s shaped by the page's own markup.

pub mod character;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod harvest;

pub use character::{CharacterClient, CharacterError};
pub use config::Config;
pub use extractor::{Character, FieldValue};
pub use harvest::harvest;
