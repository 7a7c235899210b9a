use thiserror::Error;

/// Fatal extraction failures. A missing optional section is never one of
/// these; it becomes [`FieldValue::Absent`](super::FieldValue::Absent).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}
