//! The unified error type for whole-pipeline operations.

use dais_backend_core::BackendError;
use dais_content::ContentError;
use dais_layout::LayoutError;
use thiserror::Error;

/// The main error enum for high-level operations: loading content,
/// rendering it, and saving the result. Nothing is recovered locally;
/// every failure aborts the render and surfaces here with entry context
/// attached by the layer that produced it.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("content loading failed: {0}")]
    Content(#[from] ContentError),

    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("document backend failed: {0}")]
    Backend(#[from] BackendError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
