//! Content tree model and loader.
//!
//! This crate defines the in-memory representation of a deck's declarative
//! content after parsing but before layout, plus the JSON loader that builds
//! it. The tree is read-only once constructed: every control key in the
//! source (currently only `slide_layout`) is extracted into a first-class
//! field here, so the layout traversal never has to mutate or skip keys.

pub mod error;
pub mod loader;
pub mod model;

pub use error::ContentError;
pub use loader::{parse_str, parse_value, DEFAULT_POSITION, LAYOUT_HINT_KEY};
pub use model::{ContentItem, ContentTree, SubtitleGroup, TitleEntry};
