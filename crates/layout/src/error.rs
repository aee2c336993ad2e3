use dais_backend_core::BackendError;
use dais_resource::{ImageDecodeError, ResourceError};
use thiserror::Error;

/// Errors raised during the layout traversal.
///
/// The engine wraps every failure in [`LayoutError::AtTitle`] (and
/// [`LayoutError::AtItem`] for item-level failures) before propagating, so
/// the caller's message always identifies the offending entry.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("unknown position '{name}' (known positions: {known})")]
    UnknownPosition { name: String, known: String },

    #[error("invalid intrinsic image dimensions {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },

    #[error("invalid anchor '{name}': {message}")]
    InvalidAnchor { name: String, message: String },

    #[error("failed to load image '{path}': {error}")]
    Resource { path: String, error: ResourceError },

    #[error("failed to read dimensions of '{path}': {error}")]
    Decode { path: String, error: ImageDecodeError },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("slide {index} ('{title}'): {source}")]
    AtTitle {
        index: usize,
        title: String,
        source: Box<LayoutError>,
    },

    #[error("item {index}: {source}")]
    AtItem {
        index: usize,
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    pub(crate) fn at_title(self, index: usize, title: &str) -> Self {
        LayoutError::AtTitle {
            index,
            title: title.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn at_item(self, index: usize) -> Self {
        LayoutError::AtItem {
            index,
            source: Box::new(self),
        }
    }

    /// Strip the entry-context wrappers and return the underlying failure.
    pub fn root(&self) -> &LayoutError {
        match self {
            LayoutError::AtTitle { source, .. } | LayoutError::AtItem { source, .. } => {
                source.root()
            }
            other => other,
        }
    }
}
