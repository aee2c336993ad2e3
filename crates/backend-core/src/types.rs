use std::sync::Arc;

/// Reference-counted image bytes, shared between the engine's dimension
/// probe and the backend's media store without copying.
pub type SharedImageData = Arc<Vec<u8>>;

/// One body paragraph: text, nesting level, and an optional font-size
/// override in points.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub level: u8,
    pub size_pt: Option<f32>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
            size_pt: None,
        }
    }

    pub fn with_size(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }
}
