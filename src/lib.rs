//! # dais
//!
//! Declarative slide deck generation: a nested JSON description of titles,
//! subtitle groups, bullets, and images goes in; a `.pptx` file comes out.
//!
//! The interesting part is the layout engine in [`dais_layout`]: it walks
//! the content tree in declaration order, picks a slide layout per title
//! (explicit `slide_layout` hint first, configured default otherwise),
//! emits caption and bullet paragraphs at their nesting levels, and places
//! each image by resolving a symbolic position name (`bottom`,
//! `top_right`, ...) to an EMU rectangle and deriving the height from the
//! image's intrinsic aspect ratio. Everything else (JSON parsing, file
//! reading, the OPC container) is a collaborator behind a trait.
//!
//! ```no_run
//! use dais::PipelineBuilder;
//!
//! # fn main() -> Result<(), dais::PipelineError> {
//! let content = r#"{
//!     "Common data types": {
//!         "The most common ones are": [
//!             "strings",
//!             { "text": "numbers", "level": 2 },
//!             { "image": "meme.jpg", "position": "bottom" }
//!         ]
//!     }
//! }"#;
//!
//! let pipeline = PipelineBuilder::new().with_base_dir("assets").build()?;
//! pipeline.generate_to_file(content, "deck.pptx".as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;

// Re-export member crates
pub use dais_backend_core as backend_core;
pub use dais_backend_pptx as backend_pptx;
pub use dais_content as content;
pub use dais_layout as layout;
pub use dais_resource as resource;
pub use dais_types as types;

pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineBuilder};

// Re-export the types most callers touch
pub use dais_backend_core::{DocumentBackend, Paragraph, RecordingBackend, SlideHandle};
pub use dais_content::{ContentItem, ContentTree, SubtitleGroup, TitleEntry};
pub use dais_layout::{
    Anchor, CaptionPolicy, LayoutDefaults, PositionTable, RenderMode, RenderStats,
};
pub use dais_types::{CanvasSize, Emu, Placement, Rect};
