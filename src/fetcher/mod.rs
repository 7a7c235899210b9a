pub mod backoff;
pub mod client;
pub mod errors;
pub mod naming;
pub mod pipeline;
pub mod types;

pub use client::{fetch, fetch_with_retry};
pub use errors::FetchError;
pub use naming::{character_url, format_name};
pub use types::PageResponse;
