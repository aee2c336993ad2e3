//! The `DocumentBackend` implementation over an in-memory OPC package.

use crate::package::OpcPackage;
use crate::xml;
use dais_backend_core::{BackendError, DocumentBackend, Paragraph, SharedImageData, SlideHandle};
use dais_types::{CanvasSize, Placement};
use image::ImageFormat;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

/// A slide layout offered by this backend.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSpec {
    pub name: &'static str,
    /// OOXML layout type attribute.
    pub kind: &'static str,
    pub title_placeholder: &'static str,
    pub body_placeholder: Option<&'static str>,
}

/// The stock layout slots: 0 title slide, 1 title and content, 2 title
/// only.
pub const LAYOUTS: [LayoutSpec; 3] = [
    LayoutSpec {
        name: "Title Slide",
        kind: "title",
        title_placeholder: "ctrTitle",
        body_placeholder: Some("subTitle"),
    },
    LayoutSpec {
        name: "Title and Content",
        kind: "obj",
        title_placeholder: "title",
        body_placeholder: Some("body"),
    },
    LayoutSpec {
        name: "Title Only",
        kind: "titleOnly",
        title_placeholder: "title",
        body_placeholder: None,
    },
];

#[derive(Debug)]
struct PendingPicture {
    source: String,
    data: SharedImageData,
    placement: Placement,
}

/// A slide being filled by the layout engine.
#[derive(Debug)]
pub struct PptxSlide {
    layout_index: usize,
    spec: LayoutSpec,
    title: Option<String>,
    paragraphs: Vec<Paragraph>,
    pictures: Vec<PendingPicture>,
}

impl SlideHandle for PptxSlide {
    fn set_title(&mut self, text: &str) -> Result<(), BackendError> {
        self.title = Some(text.to_string());
        Ok(())
    }

    fn append_paragraph(&mut self, paragraph: Paragraph) -> Result<(), BackendError> {
        if self.spec.body_placeholder.is_none() {
            return Err(BackendError::MissingPlaceholder {
                layout: self.spec.name,
                placeholder: "body",
            });
        }
        self.paragraphs.push(paragraph);
        Ok(())
    }

    fn place_picture(
        &mut self,
        source: &str,
        data: SharedImageData,
        placement: Placement,
    ) -> Result<(), BackendError> {
        self.pictures.push(PendingPicture {
            source: source.to_string(),
            data,
            placement,
        });
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct PlacedPicture {
    pub(crate) source: String,
    pub(crate) media_index: usize,
    pub(crate) placement: Placement,
}

/// A committed slide, with its pictures interned into the media store.
#[derive(Debug)]
pub struct CommittedSlide {
    pub(crate) layout_index: usize,
    pub(crate) title: Option<String>,
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) pictures: Vec<PlacedPicture>,
}

#[derive(Debug)]
struct MediaPart {
    file_name: String,
    data: SharedImageData,
}

/// Builds a `.pptx` package in memory.
#[derive(Debug, Default)]
pub struct PptxBackend {
    canvas: CanvasSize,
    slides: Vec<CommittedSlide>,
    media: Vec<MediaPart>,
    media_by_source: HashMap<String, usize>,
}

impl PptxBackend {
    pub fn new() -> Self {
        Self::with_canvas(CanvasSize::default())
    }

    pub fn with_canvas(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            slides: Vec::new(),
            media: Vec::new(),
            media_by_source: HashMap::new(),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Identical source paths share one media part.
    fn intern_media(
        &mut self,
        source: &str,
        data: &SharedImageData,
    ) -> Result<usize, BackendError> {
        if let Some(&index) = self.media_by_source.get(source) {
            return Ok(index);
        }

        let format = image::guess_format(data).map_err(|e| BackendError::UnsupportedImage {
            image_source: source.to_string(),
            message: e.to_string(),
        })?;
        let extension = match format {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            other => {
                return Err(BackendError::UnsupportedImage {
                    image_source: source.to_string(),
                    message: format!("{other:?} images cannot be embedded"),
                });
            }
        };

        let index = self.media.len();
        self.media.push(MediaPart {
            file_name: format!("image{}.{extension}", index + 1),
            data: Arc::clone(data),
        });
        self.media_by_source.insert(source.to_string(), index);
        Ok(index)
    }

    /// Assemble the complete OPC package.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BackendError> {
        let media_extensions: BTreeSet<String> = self
            .media
            .iter()
            .filter_map(|media| media.file_name.rsplit_once('.'))
            .map(|(_, extension)| extension.to_string())
            .collect();

        let mut package = OpcPackage::new();
        package.add_part(
            "[Content_Types].xml",
            xml::content_types(&media_extensions, self.slides.len(), LAYOUTS.len()).into_bytes(),
        );
        package.add_part("_rels/.rels", xml::root_rels().into_bytes());
        package.add_part(
            "ppt/presentation.xml",
            xml::presentation(self.slides.len(), self.canvas).into_bytes(),
        );
        package.add_part(
            "ppt/_rels/presentation.xml.rels",
            xml::presentation_rels(self.slides.len()).into_bytes(),
        );
        package.add_part(
            "ppt/slideMasters/slideMaster1.xml",
            xml::slide_master(LAYOUTS.len()).into_bytes(),
        );
        package.add_part(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            xml::slide_master_rels(LAYOUTS.len()).into_bytes(),
        );
        for (index, spec) in LAYOUTS.iter().enumerate() {
            package.add_part(
                format!("ppt/slideLayouts/slideLayout{}.xml", index + 1),
                xml::slide_layout(spec).into_bytes(),
            );
            package.add_part(
                format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", index + 1),
                xml::slide_layout_rels().into_bytes(),
            );
        }
        package.add_part("ppt/theme/theme1.xml", xml::theme().into_bytes());

        for (index, slide) in self.slides.iter().enumerate() {
            let spec = &LAYOUTS[slide.layout_index];
            package.add_part(
                format!("ppt/slides/slide{}.xml", index + 1),
                xml::slide(slide, spec).into_bytes(),
            );
            let media_files: Vec<&str> = slide
                .pictures
                .iter()
                .map(|picture| self.media[picture.media_index].file_name.as_str())
                .collect();
            package.add_part(
                format!("ppt/slides/_rels/slide{}.xml.rels", index + 1),
                xml::slide_rels(slide.layout_index + 1, &media_files).into_bytes(),
            );
        }

        for media in &self.media {
            package.add_part(format!("ppt/media/{}", media.file_name), media.data.to_vec());
        }

        package.into_zip_bytes()
    }
}

impl DocumentBackend for PptxBackend {
    type Slide = PptxSlide;

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    fn layout_count(&self) -> usize {
        LAYOUTS.len()
    }

    fn new_slide(&mut self, layout_index: usize) -> Result<Self::Slide, BackendError> {
        let spec = LAYOUTS
            .get(layout_index)
            .ok_or(BackendError::LayoutOutOfRange {
                index: layout_index,
                count: LAYOUTS.len(),
            })?;
        Ok(PptxSlide {
            layout_index,
            spec: *spec,
            title: None,
            paragraphs: Vec::new(),
            pictures: Vec::new(),
        })
    }

    fn commit_slide(&mut self, slide: Self::Slide) -> Result<(), BackendError> {
        let mut pictures = Vec::with_capacity(slide.pictures.len());
        for picture in slide.pictures {
            let media_index = self.intern_media(&picture.source, &picture.data)?;
            pictures.push(PlacedPicture {
                source: picture.source,
                media_index,
                placement: picture.placement,
            });
        }
        self.slides.push(CommittedSlide {
            layout_index: slide.layout_index,
            title: slide.title,
            paragraphs: slide.paragraphs,
            pictures,
        });
        Ok(())
    }

    fn save(&mut self, destination: &Path) -> Result<(), BackendError> {
        let bytes = self.to_bytes()?;
        std::fs::write(destination, bytes)?;
        log::info!(
            "wrote {} slides and {} media parts to {}",
            self.slides.len(),
            self.media.len(),
            destination.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\nrest-of-image";

    fn png_data() -> SharedImageData {
        Arc::new(PNG_MAGIC.to_vec())
    }

    fn placement() -> Placement {
        Placement::new(0, 0, 100, 50)
    }

    #[test]
    fn test_layout_index_out_of_range() {
        let mut backend = PptxBackend::new();
        assert!(matches!(
            backend.new_slide(3),
            Err(BackendError::LayoutOutOfRange { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_title_only_layout_rejects_body_paragraphs() {
        let mut backend = PptxBackend::new();
        let mut slide = backend.new_slide(2).unwrap();
        slide.set_title("works").unwrap();
        let err = slide.append_paragraph(Paragraph::new("nope", 0)).unwrap_err();
        assert!(matches!(
            err,
            BackendError::MissingPlaceholder {
                layout: "Title Only",
                placeholder: "body"
            }
        ));
    }

    #[test]
    fn test_media_is_deduplicated_by_source() {
        let mut backend = PptxBackend::new();
        let mut slide = backend.new_slide(1).unwrap();
        slide.place_picture("meme.png", png_data(), placement()).unwrap();
        slide.place_picture("meme.png", png_data(), placement()).unwrap();
        slide.place_picture("other.png", png_data(), placement()).unwrap();
        backend.commit_slide(slide).unwrap();

        assert_eq!(backend.media.len(), 2);
        assert_eq!(backend.media[0].file_name, "image1.png");
        assert_eq!(backend.media[1].file_name, "image2.png");
    }

    #[test]
    fn test_unknown_media_format_is_rejected() {
        let mut backend = PptxBackend::new();
        let mut slide = backend.new_slide(1).unwrap();
        slide
            .place_picture("file.txt", Arc::new(b"hello world".to_vec()), placement())
            .unwrap();
        let err = backend.commit_slide(slide).unwrap_err();
        assert!(matches!(err, BackendError::UnsupportedImage { .. }));
    }

    #[test]
    fn test_package_contains_expected_parts() {
        let mut backend = PptxBackend::new();
        let mut slide = backend.new_slide(1).unwrap();
        slide.set_title("Hello & <World>").unwrap();
        slide
            .append_paragraph(Paragraph::new("bullet", 1).with_size(16.0))
            .unwrap();
        slide.place_picture("pic.png", png_data(), placement()).unwrap();
        backend.commit_slide(slide).unwrap();

        let bytes = backend.to_bytes().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout2.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/media/image1.png",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }

        let mut slide_xml = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide_xml)
            .unwrap();
        assert!(slide_xml.contains("Hello &amp; &lt;World&gt;"), "{slide_xml}");
        assert!(slide_xml.contains("lvl=\"1\""));
        assert!(slide_xml.contains("sz=\"1600\""));
        assert!(slide_xml.contains("<a:off x=\"0\" y=\"0\"/>"));
        assert!(slide_xml.contains("<a:ext cx=\"100\" cy=\"50\"/>"));
    }
}
