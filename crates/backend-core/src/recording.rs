//! An in-memory backend that records every slide operation.
//!
//! Used by the engine's unit and integration tests to assert on emitted
//! slides without touching a container format, and handy as a dry-run
//! target for callers that only want the computed placements.

use crate::error::BackendError;
use crate::traits::{DocumentBackend, SlideHandle};
use crate::types::{Paragraph, SharedImageData};
use dais_types::{CanvasSize, Placement};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPicture {
    pub source: String,
    pub placement: Placement,
}

/// One committed slide, as the engine emitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSlide {
    pub layout_index: usize,
    pub title: Option<String>,
    pub paragraphs: Vec<Paragraph>,
    pub pictures: Vec<RecordedPicture>,
}

#[derive(Debug)]
pub struct RecordingBackend {
    canvas: CanvasSize,
    layout_count: usize,
    pub slides: Vec<RecordedSlide>,
    pub saved_to: Option<PathBuf>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::with_canvas(CanvasSize::default())
    }

    pub fn with_canvas(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            layout_count: 16,
            slides: Vec::new(),
            saved_to: None,
        }
    }

    /// Restrict the number of layouts, to exercise out-of-range handling.
    pub fn with_layout_count(mut self, layout_count: usize) -> Self {
        self.layout_count = layout_count;
        self
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideHandle for RecordedSlide {
    fn set_title(&mut self, text: &str) -> Result<(), BackendError> {
        self.title = Some(text.to_string());
        Ok(())
    }

    fn append_paragraph(&mut self, paragraph: Paragraph) -> Result<(), BackendError> {
        self.paragraphs.push(paragraph);
        Ok(())
    }

    fn place_picture(
        &mut self,
        source: &str,
        _data: SharedImageData,
        placement: Placement,
    ) -> Result<(), BackendError> {
        self.pictures.push(RecordedPicture {
            source: source.to_string(),
            placement,
        });
        Ok(())
    }
}

impl DocumentBackend for RecordingBackend {
    type Slide = RecordedSlide;

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    fn layout_count(&self) -> usize {
        self.layout_count
    }

    fn new_slide(&mut self, layout_index: usize) -> Result<Self::Slide, BackendError> {
        if layout_index >= self.layout_count {
            return Err(BackendError::LayoutOutOfRange {
                index: layout_index,
                count: self.layout_count,
            });
        }
        Ok(RecordedSlide {
            layout_index,
            title: None,
            paragraphs: Vec::new(),
            pictures: Vec::new(),
        })
    }

    fn commit_slide(&mut self, slide: Self::Slide) -> Result<(), BackendError> {
        self.slides.push(slide);
        Ok(())
    }

    fn save(&mut self, destination: &Path) -> Result<(), BackendError> {
        self.saved_to = Some(destination.to_path_buf());
        Ok(())
    }
}
