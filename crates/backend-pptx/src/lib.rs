//! OOXML presentation backend.
//!
//! Implements [`dais_backend_core::DocumentBackend`] by assembling a
//! `.pptx` OPC package in memory: fixed parts (theme, slide master, slide
//! layouts) come from string templates, per-slide parts are generated from
//! the committed slides, and the whole archive is written in one shot at
//! save time, so a failed render never leaves a partial file on disk.
//!
//! Three slide layouts are offered, mirroring the familiar stock template
//! slots:
//!
//! | index | layout            | body placeholder |
//! |-------|-------------------|------------------|
//! | 0     | Title Slide       | subtitle         |
//! | 1     | Title and Content | body             |
//! | 2     | Title Only        | none             |

pub mod backend;
pub mod package;
pub mod xml;

pub use backend::{CommittedSlide, LayoutSpec, PptxBackend, PptxSlide, LAYOUTS};
pub use package::OpcPackage;
