//! The load -> render -> save pipeline and its builder.

use crate::error::PipelineError;
use dais_backend_core::DocumentBackend;
use dais_backend_pptx::PptxBackend;
use dais_content::{loader, ContentTree};
use dais_layout::{
    Anchor, CaptionPolicy, LayoutDefaults, LayoutEngine, PositionTable, RenderStats,
};
use dais_resource::{
    FilesystemResourceProvider, HeaderImageDecoder, ImageDecoder, ResourceProvider,
};
use dais_types::CanvasSize;
use std::path::{Path, PathBuf};

/// Configures and builds a [`Pipeline`].
///
/// Everything tunable lives here: the default layout index, caption
/// policy, bullet sizes, the position table, and the canvas size.
#[derive(Debug)]
pub struct PipelineBuilder {
    defaults: LayoutDefaults,
    positions: PositionTable,
    canvas: CanvasSize,
    base_dir: PathBuf,
    resources: Option<Box<dyn ResourceProvider>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            defaults: LayoutDefaults::default(),
            positions: PositionTable::standard(),
            canvas: CanvasSize::default(),
            base_dir: PathBuf::from("."),
            resources: None,
        }
    }

    pub fn with_defaults(mut self, defaults: LayoutDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Layout index for titles without a `slide_layout` hint.
    pub fn with_default_layout(mut self, index: usize) -> Self {
        self.defaults.default_layout = index;
        self
    }

    /// Render captions only, skipping bullet and image items.
    pub fn flat(mut self) -> Self {
        self.defaults.mode = dais_layout::RenderMode::Flat;
        self
    }

    pub fn with_caption_policy(mut self, policy: CaptionPolicy) -> Self {
        self.defaults.caption_policy = policy;
        self
    }

    /// Reject position tables whose anchors run off-canvas.
    pub fn validate_anchors(mut self) -> Self {
        self.defaults.validate_anchors = true;
        self
    }

    pub fn with_position_table(mut self, positions: PositionTable) -> Self {
        self.positions = positions;
        self
    }

    /// Add or replace a single named anchor.
    pub fn with_anchor(mut self, name: impl Into<String>, anchor: Anchor) -> Self {
        self.positions.insert(name, anchor);
        self
    }

    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    /// Directory image paths resolve against; typically the content
    /// document's directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Replace the filesystem provider, e.g. with an in-memory one.
    pub fn with_resource_provider(mut self, resources: Box<dyn ResourceProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn build(self) -> Result<Pipeline, PipelineError> {
        log::debug!(
            "building pipeline: {} anchors, default layout {}",
            self.positions.len(),
            self.defaults.default_layout
        );
        let engine = LayoutEngine::new(self.defaults, self.positions)?;
        let resources = self
            .resources
            .unwrap_or_else(|| Box::new(FilesystemResourceProvider::new(&self.base_dir)));
        Ok(Pipeline {
            engine,
            canvas: self.canvas,
            resources,
            decoder: Box::new(HeaderImageDecoder::new()),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured load -> render -> save pipeline.
#[derive(Debug)]
pub struct Pipeline {
    engine: LayoutEngine,
    canvas: CanvasSize,
    resources: Box<dyn ResourceProvider>,
    decoder: Box<dyn ImageDecoder>,
}

impl Pipeline {
    /// Render an already-parsed tree into any backend.
    pub fn render_into<B: DocumentBackend>(
        &self,
        tree: &ContentTree,
        backend: &mut B,
    ) -> Result<RenderStats, PipelineError> {
        Ok(self
            .engine
            .render(tree, backend, self.resources.as_ref(), self.decoder.as_ref())?)
    }

    /// Parse JSON content and render it to an in-memory `.pptx` package.
    pub fn generate(&self, content_json: &str) -> Result<(Vec<u8>, RenderStats), PipelineError> {
        let tree = loader::parse_str(content_json)?;
        let mut backend = PptxBackend::with_canvas(self.canvas);
        let stats = self.render_into(&tree, &mut backend)?;
        let bytes = backend.to_bytes()?;
        Ok((bytes, stats))
    }

    /// Parse JSON content, render it, and save the `.pptx` file.
    ///
    /// The file is written only after the whole render has succeeded; an
    /// error anywhere leaves no output behind.
    pub fn generate_to_file(
        &self,
        content_json: &str,
        output: &Path,
    ) -> Result<RenderStats, PipelineError> {
        let tree = loader::parse_str(content_json)?;
        let mut backend = PptxBackend::with_canvas(self.canvas);
        let stats = self.render_into(&tree, &mut backend)?;
        backend.save(output)?;
        Ok(stats)
    }
}
