use thiserror::Error;

/// Error type for document backend operations.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("slide layout index {index} is out of range (backend has {count} layouts)")]
    LayoutOutOfRange { index: usize, count: usize },

    #[error("slide layout '{layout}' has no {placeholder} placeholder")]
    MissingPlaceholder {
        layout: &'static str,
        placeholder: &'static str,
    },

    #[error("unsupported image data for '{image_source}': {message}")]
    UnsupportedImage { image_source: String, message: String },

    #[error("failed to assemble document package: {0}")]
    Package(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
