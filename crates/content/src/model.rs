//! The typed representation of nested deck content.

use serde::Serialize;

/// An ordered sequence of title entries. Slides are emitted 1:1 per entry,
/// in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContentTree {
    pub entries: Vec<TitleEntry>,
}

impl ContentTree {
    pub fn new(entries: Vec<TitleEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TitleEntry> {
        self.entries.iter()
    }
}

/// One slide's worth of content: a title, an optional layout override, and
/// the subtitle groups rendered into the body placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleEntry {
    pub title: String,
    /// Explicit slide layout index, extracted from the source's
    /// `slide_layout` control key. `None` defers to the engine's configured
    /// default.
    pub layout: Option<usize>,
    pub subtitle_groups: Vec<SubtitleGroup>,
}

impl TitleEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout: None,
            subtitle_groups: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: usize) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_group(mut self, group: SubtitleGroup) -> Self {
        self.subtitle_groups.push(group);
        self
    }
}

/// A subtitle caption followed by its entries. The caption may be empty;
/// whether an empty caption still emits a paragraph is a layout policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtitleGroup {
    pub caption: String,
    pub entries: Vec<ContentItem>,
}

impl SubtitleGroup {
    pub fn new(caption: impl Into<String>, entries: Vec<ContentItem>) -> Self {
        Self {
            caption: caption.into(),
            entries,
        }
    }
}

/// A single body entry under a subtitle group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ContentItem {
    /// A bullet paragraph at the given nesting level.
    Bullet { text: String, level: u8 },
    /// A picture placed at a named position and scaled to its aspect ratio.
    Image { source: String, position: String },
}

impl ContentItem {
    pub fn bullet(text: impl Into<String>, level: u8) -> Self {
        ContentItem::Bullet {
            text: text.into(),
            level,
        }
    }

    pub fn image(source: impl Into<String>, position: impl Into<String>) -> Self {
        ContentItem::Image {
            source: source.into(),
            position: position.into(),
        }
    }
}
