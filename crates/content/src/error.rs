use thiserror::Error;

/// Errors raised while turning a declarative source document into a
/// [`ContentTree`](crate::model::ContentTree). Every variant carries enough
/// context to point at the offending entry in the source.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("content root must be a JSON object mapping titles to subtitle groups")]
    InvalidRoot,

    #[error("title at position {index} is empty")]
    EmptyTitle { index: usize },

    #[error("title '{title}' must map to an object of subtitle groups, got {found}")]
    InvalidTitleValue { title: String, found: &'static str },

    #[error("invalid slide_layout for title '{title}': {value} (expected a non-negative integer)")]
    InvalidLayoutHint { title: String, value: String },

    #[error("invalid item {index} under '{title}' / '{caption}': {message}")]
    InvalidItem {
        title: String,
        caption: String,
        index: usize,
        message: String,
    },
}
