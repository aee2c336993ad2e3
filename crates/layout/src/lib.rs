//! The content-tree-to-slide-layout engine.
//!
//! This crate turns a [`dais_content::ContentTree`] into slide-construction
//! calls against a [`dais_backend_core::DocumentBackend`]:
//!
//! - [`position`]: resolves symbolic position names (`bottom`,
//!   `top_right`, ...) to EMU rectangles through a configurable
//!   [`PositionTable`].
//! - [`placement`]: derives a picture's final rectangle from its anchor
//!   width and intrinsic aspect ratio, truncating toward zero.
//! - [`engine`]: the traversal itself. One slide per title entry, caption
//!   and bullet paragraphs in declaration order, fail-fast on the first
//!   error with the offending title and item identified.
//!
//! All tunables (default layout index, caption policy, per-level bullet
//! sizes, anchor validation) live in [`LayoutDefaults`] and are injected by
//! the caller; nothing is hardcoded in the traversal.

pub mod config;
pub mod engine;
pub mod error;
pub mod placement;
pub mod position;

pub use config::{CaptionPolicy, LayoutDefaults, RenderMode};
pub use engine::{LayoutEngine, RenderStats};
pub use error::LayoutError;
pub use placement::compute_placement;
pub use position::{Anchor, PositionTable};
