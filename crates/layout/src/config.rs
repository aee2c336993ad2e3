//! Injected layout configuration.
//!
//! Different decks want different choices here (default layout 0 vs 1,
//! blank captions emitted vs dropped, fixed 16pt nested bullets), so none
//! of these is a constant in the engine.

/// Which parts of a subtitle group are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Captions, bullets, and images.
    #[default]
    Nested,
    /// Captions only; bullet and image items are not rendered.
    Flat,
}

/// What to do with an empty-string subtitle caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionPolicy {
    /// Emit the empty paragraph, keeping paragraph indices stable.
    #[default]
    EmitBlank,
    /// Skip it (logged at debug level).
    SkipBlank,
}

#[derive(Debug, Clone)]
pub struct LayoutDefaults {
    /// Layout index used when a title entry carries no `slide_layout` hint.
    pub default_layout: usize,
    pub mode: RenderMode,
    pub caption_policy: CaptionPolicy,
    /// Font size for caption paragraphs; `None` leaves the backend default.
    pub caption_size_pt: Option<f32>,
    /// Bullet font-size overrides as `(minimum level, size in points)`
    /// pairs. A bullet takes the size of the largest minimum at or below
    /// its own level; levels below every minimum keep the backend default.
    pub bullet_sizes_pt: Vec<(u8, f32)>,
    /// Reject position tables whose anchors run past the canvas edge.
    /// Off by default: off-canvas placements are long-standing behavior.
    pub validate_anchors: bool,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            default_layout: 1,
            mode: RenderMode::Nested,
            caption_policy: CaptionPolicy::EmitBlank,
            caption_size_pt: None,
            bullet_sizes_pt: vec![(1, 16.0)],
            validate_anchors: false,
        }
    }
}

impl LayoutDefaults {
    /// The configured font size for a bullet at `level`, if any.
    pub fn bullet_size(&self, level: u8) -> Option<f32> {
        self.bullet_sizes_pt
            .iter()
            .filter(|(min_level, _)| *min_level <= level)
            .max_by_key(|(min_level, _)| *min_level)
            .map(|(_, size)| *size)
    }
}
