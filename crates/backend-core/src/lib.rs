//! Document backend abstractions.
//!
//! The layout engine talks to the output document exclusively through the
//! [`DocumentBackend`] and [`SlideHandle`] traits defined here. A backend
//! owns the container format; the engine only ever asks for a slide from a
//! layout index, fills it with a title, paragraphs, and placed pictures,
//! and commits it back. Saving is a separate, final step so that a failed
//! render can never leave a half-written document behind.

pub mod error;
pub mod recording;
pub mod traits;
pub mod types;

pub use error::BackendError;
pub use recording::{RecordedPicture, RecordedSlide, RecordingBackend};
pub use traits::{DocumentBackend, SlideHandle};
pub use types::{Paragraph, SharedImageData};
