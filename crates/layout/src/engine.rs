//! The slide layout traversal.
//!
//! A synchronous fold over the content tree: one slide per title entry,
//! paragraphs and pictures emitted strictly in declaration order, nothing
//! retained across titles except the backend's own slide sequence. Any
//! failure aborts the whole render; errors carry the title (and item) that
//! triggered them.

use crate::config::{CaptionPolicy, LayoutDefaults, RenderMode};
use crate::error::LayoutError;
use crate::placement::compute_placement;
use crate::position::PositionTable;
use dais_backend_core::{DocumentBackend, Paragraph, SlideHandle};
use dais_content::{ContentItem, ContentTree, SubtitleGroup, TitleEntry};
use dais_resource::{ImageDecoder, ResourceProvider};
use dais_types::CanvasSize;
use std::collections::HashMap;

/// Counts of what a render emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub slides: usize,
    pub paragraphs: usize,
    pub pictures: usize,
}

#[derive(Debug)]
pub struct LayoutEngine {
    defaults: LayoutDefaults,
    positions: PositionTable,
}

impl LayoutEngine {
    /// Build an engine from injected configuration. With
    /// `validate_anchors` set, a table whose anchors run off-canvas is
    /// rejected here, before any slide exists.
    pub fn new(defaults: LayoutDefaults, positions: PositionTable) -> Result<Self, LayoutError> {
        if defaults.validate_anchors {
            positions.validate()?;
        }
        Ok(Self { defaults, positions })
    }

    pub fn defaults(&self) -> &LayoutDefaults {
        &self.defaults
    }

    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    /// Render the whole tree into `backend`. Does not save; that is the
    /// caller's final step once this returns `Ok`.
    pub fn render<B: DocumentBackend>(
        &self,
        tree: &ContentTree,
        backend: &mut B,
        resources: &dyn ResourceProvider,
        decoder: &dyn ImageDecoder,
    ) -> Result<RenderStats, LayoutError> {
        let canvas = backend.canvas();
        let mut stats = RenderStats::default();
        // Source paths repeat across items; probe each image once.
        let mut dimension_cache: HashMap<String, (u32, u32)> = HashMap::new();

        log::info!(
            "rendering {} title entries via {} / {}",
            tree.len(),
            resources.name(),
            decoder.name()
        );

        for (index, entry) in tree.iter().enumerate() {
            self.render_entry(
                entry,
                backend,
                canvas,
                resources,
                decoder,
                &mut dimension_cache,
                &mut stats,
            )
            .map_err(|e| e.at_title(index, &entry.title))?;
        }

        log::info!(
            "rendered {} slides, {} paragraphs, {} pictures",
            stats.slides,
            stats.paragraphs,
            stats.pictures
        );
        Ok(stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn render_entry<B: DocumentBackend>(
        &self,
        entry: &TitleEntry,
        backend: &mut B,
        canvas: CanvasSize,
        resources: &dyn ResourceProvider,
        decoder: &dyn ImageDecoder,
        dimension_cache: &mut HashMap<String, (u32, u32)>,
        stats: &mut RenderStats,
    ) -> Result<(), LayoutError> {
        let layout_index = entry.layout.unwrap_or(self.defaults.default_layout);
        log::debug!("slide '{}' from layout {}", entry.title, layout_index);

        let mut slide = backend.new_slide(layout_index)?;
        slide.set_title(&entry.title)?;

        for group in &entry.subtitle_groups {
            self.render_group(
                group,
                &mut slide,
                canvas,
                resources,
                decoder,
                dimension_cache,
                stats,
            )?;
        }

        backend.commit_slide(slide)?;
        stats.slides += 1;
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_group<S: SlideHandle>(
        &self,
        group: &SubtitleGroup,
        slide: &mut S,
        canvas: CanvasSize,
        resources: &dyn ResourceProvider,
        decoder: &dyn ImageDecoder,
        dimension_cache: &mut HashMap<String, (u32, u32)>,
        stats: &mut RenderStats,
    ) -> Result<(), LayoutError> {
        if group.caption.is_empty() && self.defaults.caption_policy == CaptionPolicy::SkipBlank {
            log::debug!("skipping blank caption");
        } else {
            let mut caption = Paragraph::new(group.caption.as_str(), 0);
            if let Some(size) = self.defaults.caption_size_pt {
                caption = caption.with_size(size);
            }
            slide.append_paragraph(caption)?;
            stats.paragraphs += 1;
        }

        if self.defaults.mode == RenderMode::Flat {
            return Ok(());
        }

        for (index, item) in group.entries.iter().enumerate() {
            self.render_item(item, slide, canvas, resources, decoder, dimension_cache, stats)
                .map_err(|e| e.at_item(index))?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_item<S: SlideHandle>(
        &self,
        item: &ContentItem,
        slide: &mut S,
        canvas: CanvasSize,
        resources: &dyn ResourceProvider,
        decoder: &dyn ImageDecoder,
        dimension_cache: &mut HashMap<String, (u32, u32)>,
        stats: &mut RenderStats,
    ) -> Result<(), LayoutError> {
        match item {
            ContentItem::Bullet { text, level } => {
                let mut paragraph = Paragraph::new(text.as_str(), *level);
                if let Some(size) = self.defaults.bullet_size(*level) {
                    paragraph = paragraph.with_size(size);
                }
                slide.append_paragraph(paragraph)?;
                stats.paragraphs += 1;
            }
            ContentItem::Image { source, position } => {
                let data = resources
                    .load(source)
                    .map_err(|error| LayoutError::Resource {
                        path: source.clone(),
                        error,
                    })?;

                let (width, height) = match dimension_cache.get(source) {
                    Some(&dimensions) => dimensions,
                    None => {
                        let dimensions = decoder.dimensions(source, &data).map_err(|error| {
                            LayoutError::Decode {
                                path: source.clone(),
                                error,
                            }
                        })?;
                        dimension_cache.insert(source.clone(), dimensions);
                        dimensions
                    }
                };

                let rect = self.positions.resolve(position, canvas)?;
                let placement = compute_placement(rect, width, height)?;
                log::debug!(
                    "placing '{source}' ({width}x{height}px) at {placement:?}"
                );
                slide.place_picture(source, data, placement)?;
                stats.pictures += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Anchor;
    use dais_backend_core::RecordingBackend;
    use dais_resource::{ImageDecodeError, InMemoryResourceProvider};

    /// Decoder that returns fixed dimensions without touching the bytes.
    #[derive(Debug)]
    struct FixedDecoder(u32, u32);

    impl ImageDecoder for FixedDecoder {
        fn dimensions(&self, _source: &str, _data: &[u8]) -> Result<(u32, u32), ImageDecodeError> {
            Ok((self.0, self.1))
        }

        fn name(&self) -> &'static str {
            "FixedDecoder"
        }
    }

    fn engine() -> LayoutEngine {
        LayoutEngine::new(LayoutDefaults::default(), PositionTable::standard()).unwrap()
    }

    fn resources_with(paths: &[&str]) -> InMemoryResourceProvider {
        let provider = InMemoryResourceProvider::new();
        for path in paths {
            provider.add(*path, vec![0u8; 4]).unwrap();
        }
        provider
    }

    fn entry_with_items(title: &str, items: Vec<ContentItem>) -> TitleEntry {
        TitleEntry::new(title).with_group(SubtitleGroup::new("caption", items))
    }

    #[test]
    fn test_one_slide_per_title_in_order() {
        let tree = ContentTree::new(vec![
            TitleEntry::new("first"),
            TitleEntry::new("second"),
            TitleEntry::new("third"),
        ]);
        let mut backend = RecordingBackend::new();

        let stats = engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&[]),
                &FixedDecoder(1, 1),
            )
            .unwrap();

        assert_eq!(stats.slides, 3);
        let titles: Vec<_> = backend
            .slides
            .iter()
            .map(|slide| slide.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_paragraph_order_and_levels() {
        let tree = ContentTree::new(vec![TitleEntry::new("T")
            .with_group(SubtitleGroup::new(
                "first group",
                vec![
                    ContentItem::bullet("a", 1),
                    ContentItem::bullet("b", 2),
                ],
            ))
            .with_group(SubtitleGroup::new(
                "second group",
                vec![ContentItem::bullet("c", 1)],
            ))]);
        let mut backend = RecordingBackend::new();

        engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&[]),
                &FixedDecoder(1, 1),
            )
            .unwrap();

        let paragraphs = &backend.slides[0].paragraphs;
        let texts: Vec<_> = paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["first group", "a", "b", "second group", "c"]);

        let levels: Vec<_> = paragraphs.iter().map(|p| p.level).collect();
        assert_eq!(levels, [0, 1, 2, 0, 1]);

        // Captions keep the backend default size; nested bullets get 16pt.
        assert_eq!(paragraphs[0].size_pt, None);
        assert_eq!(paragraphs[1].size_pt, Some(16.0));
    }

    #[test]
    fn test_layout_hint_overrides_default() {
        let tree = ContentTree::new(vec![
            TitleEntry::new("hinted").with_layout(4),
            TitleEntry::new("defaulted"),
        ]);
        let mut backend = RecordingBackend::new();

        engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&[]),
                &FixedDecoder(1, 1),
            )
            .unwrap();

        assert_eq!(backend.slides[0].layout_index, 4);
        assert_eq!(backend.slides[1].layout_index, 1);
    }

    #[test]
    fn test_blank_caption_policies() {
        let tree = ContentTree::new(vec![TitleEntry::new("T").with_group(SubtitleGroup::new(
            "",
            vec![ContentItem::bullet("x", 1)],
        ))]);

        let mut backend = RecordingBackend::new();
        engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&[]),
                &FixedDecoder(1, 1),
            )
            .unwrap();
        let texts: Vec<_> = backend.slides[0]
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(texts, ["", "x"], "blank caption is emitted by default");

        let skipping = LayoutEngine::new(
            LayoutDefaults {
                caption_policy: CaptionPolicy::SkipBlank,
                ..LayoutDefaults::default()
            },
            PositionTable::standard(),
        )
        .unwrap();
        let mut backend = RecordingBackend::new();
        skipping
            .render(
                &tree,
                &mut backend,
                &resources_with(&[]),
                &FixedDecoder(1, 1),
            )
            .unwrap();
        let texts: Vec<_> = backend.slides[0]
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(texts, ["x"]);
    }

    #[test]
    fn test_flat_mode_renders_captions_only() {
        let tree = ContentTree::new(vec![entry_with_items(
            "T",
            vec![
                ContentItem::bullet("hidden", 1),
                ContentItem::image("img.png", "bottom"),
            ],
        )]);

        let flat = LayoutEngine::new(
            LayoutDefaults {
                mode: RenderMode::Flat,
                ..LayoutDefaults::default()
            },
            PositionTable::standard(),
        )
        .unwrap();
        let mut backend = RecordingBackend::new();
        flat.render(
            &tree,
            &mut backend,
            &resources_with(&["img.png"]),
            &FixedDecoder(4, 2),
        )
        .unwrap();

        let slide = &backend.slides[0];
        assert_eq!(slide.paragraphs.len(), 1);
        assert_eq!(slide.paragraphs[0].text, "caption");
        assert!(slide.pictures.is_empty());
    }

    #[test]
    fn test_image_placement_end_to_end() {
        let tree = ContentTree::new(vec![entry_with_items(
            "A",
            vec![
                ContentItem::bullet("x", 1),
                ContentItem::image("img.jpg", "bottom"),
            ],
        )]);
        let mut backend = RecordingBackend::with_canvas(CanvasSize::new(9_144_000, 6_858_000));

        engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&["img.jpg"]),
                &FixedDecoder(400, 200),
            )
            .unwrap();

        let picture = &backend.slides[0].pictures[0];
        assert_eq!(picture.source, "img.jpg");
        assert!((picture.placement.left - 2_926_080).abs() <= 1);
        assert!((picture.placement.top - 3_909_060).abs() <= 1);
        assert!((picture.placement.width - 3_200_400).abs() <= 1);
        assert!((picture.placement.height - 1_600_200).abs() <= 1);
    }

    #[test]
    fn test_rendering_twice_yields_identical_placements() {
        let tree = ContentTree::new(vec![entry_with_items(
            "A",
            vec![
                ContentItem::image("one.png", "top_left"),
                ContentItem::image("two.png", "bottom_right"),
            ],
        )]);
        let resources = resources_with(&["one.png", "two.png"]);
        let decoder = FixedDecoder(1024, 768);

        let mut first = RecordingBackend::new();
        engine()
            .render(&tree, &mut first, &resources, &decoder)
            .unwrap();
        let mut second = RecordingBackend::new();
        engine()
            .render(&tree, &mut second, &resources, &decoder)
            .unwrap();

        assert_eq!(first.slides[0].pictures, second.slides[0].pictures);
    }

    #[test]
    fn test_unknown_position_aborts_with_context() {
        let tree = ContentTree::new(vec![
            TitleEntry::new("fine"),
            entry_with_items(
                "broken",
                vec![
                    ContentItem::bullet("ok", 1),
                    ContentItem::image("img.png", "diagonal"),
                ],
            ),
        ]);
        let mut backend = RecordingBackend::new();

        let err = engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&["img.png"]),
                &FixedDecoder(2, 1),
            )
            .unwrap_err();

        assert!(matches!(
            err.root(),
            LayoutError::UnknownPosition { name, .. } if name == "diagonal"
        ));
        let message = err.to_string();
        assert!(message.contains("slide 1 ('broken')"), "{message}");
        assert!(message.contains("item 1"), "{message}");

        // Fail-fast: the failing slide was never committed.
        assert_eq!(backend.slides.len(), 1);
        assert_eq!(backend.slides[0].title.as_deref(), Some("fine"));
    }

    #[test]
    fn test_missing_image_aborts_with_context() {
        let tree = ContentTree::new(vec![entry_with_items(
            "T",
            vec![ContentItem::image("gone.png", "bottom")],
        )]);
        let mut backend = RecordingBackend::new();

        let err = engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&[]),
                &FixedDecoder(2, 1),
            )
            .unwrap_err();
        assert!(matches!(err.root(), LayoutError::Resource { path, .. } if path == "gone.png"));
    }

    #[test]
    fn test_out_of_range_layout_reports_title() {
        let tree = ContentTree::new(vec![TitleEntry::new("T").with_layout(99)]);
        let mut backend = RecordingBackend::new().with_layout_count(3);

        let err = engine()
            .render(
                &tree,
                &mut backend,
                &resources_with(&[]),
                &FixedDecoder(1, 1),
            )
            .unwrap_err();
        assert!(err.to_string().contains("'T'"));
        assert!(matches!(err.root(), LayoutError::Backend(_)));
    }

    #[test]
    fn test_validate_anchors_rejects_bad_table_up_front() {
        let table = PositionTable::empty().with_anchor("wide", Anchor::new(0.9, 0.0, 0.5));
        let err = LayoutEngine::new(
            LayoutDefaults {
                validate_anchors: true,
                ..LayoutDefaults::default()
            },
            table,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidAnchor { .. }));
    }
}
