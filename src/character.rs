//! Name in, character record out.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    config::Config,
    extractor::{self, Character, ExtractError},
    fetcher::{FetchError, character_url, fetch_with_retry},
};

/// Failures surfaced to callers. Per-field problems never appear here; they
/// are absorbed into the record's field values.
#[derive(Error, Debug)]
pub enum CharacterError {
    #[error("character not found: {name} (http {status})")]
    NotFound { name: String, status: StatusCode },

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl From<ExtractError> for CharacterError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::MalformedDocument(reason) => Self::MalformedDocument(reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CharacterClient {
    config: Config,
}

impl CharacterClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Article URL the client would fetch for `name`.
    pub fn url_for(&self, name: &str) -> String {
        character_url(self.config.base_url(), name)
    }

    /// Fetch the article for `name` and extract its record.
    #[instrument(skip(self))]
    pub async fn character(&self, name: &str) -> Result<Character, CharacterError> {
        let url = self.url_for(name);

        let page = fetch_with_retry(&url, self.config.max_attempts(), self.config.retry_base())
            .await
            .map_err(|err| match err.status() {
                Some(status) => CharacterError::NotFound {
                    name: name.to_string(),
                    status,
                },
                None => CharacterError::Fetch(err),
            })?;

        let character = extractor::extract(&page)?;
        info!(url = %page.url_final, "extracted {}", character);
        Ok(character)
    }

    /// Run the extractor over markup fetched elsewhere.
    pub fn from_html(&self, html: &str, url: &str) -> Result<Character, CharacterError> {
        Ok(extractor::extract_html(html, url)?)
    }
}

impl Default for CharacterClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
