use crate::error::BackendError;
use crate::types::{Paragraph, SharedImageData};
use dais_types::{CanvasSize, Placement};
use std::path::Path;

/// A mutable slide under construction.
///
/// Handles are detached from their backend while being filled, then handed
/// back through [`DocumentBackend::commit_slide`]. A handle that is dropped
/// without being committed leaves no trace in the document.
pub trait SlideHandle {
    /// Bind the title placeholder's text, verbatim.
    fn set_title(&mut self, text: &str) -> Result<(), BackendError>;

    /// Append one paragraph to the body text frame.
    fn append_paragraph(&mut self, paragraph: Paragraph) -> Result<(), BackendError>;

    /// Place a picture at an absolute EMU rectangle.
    fn place_picture(
        &mut self,
        source: &str,
        data: SharedImageData,
        placement: Placement,
    ) -> Result<(), BackendError>;
}

/// An output document under construction.
pub trait DocumentBackend {
    type Slide: SlideHandle;

    /// The drawable surface, in EMU. Anchor fractions resolve against this.
    fn canvas(&self) -> CanvasSize;

    /// Number of slide layouts this backend offers.
    fn layout_count(&self) -> usize;

    /// Start a new slide from the given layout index.
    fn new_slide(&mut self, layout_index: usize) -> Result<Self::Slide, BackendError>;

    /// Append a completed slide to the document.
    fn commit_slide(&mut self, slide: Self::Slide) -> Result<(), BackendError>;

    /// Write the finished document. Called exactly once, only after every
    /// slide has been committed without error.
    fn save(&mut self, destination: &Path) -> Result<(), BackendError>;
}
