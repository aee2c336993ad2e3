//! OOXML part generation.
//!
//! Parts are plain XML strings: the fixed ones (theme, master, layouts) are
//! templates, the dynamic ones are assembled with `format!` around escaped
//! content. Relationship ids follow a fixed scheme: in the presentation
//! part `rId1` is the slide master and slides start at `rId2`; in a slide
//! part `rId1` is the layout and pictures start at `rId2`.

use crate::backend::{CommittedSlide, LayoutSpec};
use dais_backend_core::Paragraph;
use dais_types::CanvasSize;
use std::collections::BTreeSet;
use std::fmt::Write;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_IMAGE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Escape XML text and attribute content.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "png" => Some("image/png"),
        "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

pub fn content_types(
    media_extensions: &BTreeSet<String>,
    slide_count: usize,
    layout_count: usize,
) -> String {
    let mut xml = format!(
        "{XML_HEADER}\n<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>"
    );
    for extension in media_extensions {
        if let Some(content_type) = content_type_for_extension(extension) {
            let _ = write!(
                xml,
                "<Default Extension=\"{extension}\" ContentType=\"{content_type}\"/>"
            );
        }
    }
    xml.push_str(
        "<Override PartName=\"/ppt/presentation.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml\"/>\
         <Override PartName=\"/ppt/slideMasters/slideMaster1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml\"/>\
         <Override PartName=\"/ppt/theme/theme1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.theme+xml\"/>",
    );
    for index in 1..=layout_count {
        let _ = write!(
            xml,
            "<Override PartName=\"/ppt/slideLayouts/slideLayout{index}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml\"/>"
        );
    }
    for index in 1..=slide_count {
        let _ = write!(
            xml,
            "<Override PartName=\"/ppt/slides/slide{index}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>"
        );
    }
    xml.push_str("</Types>");
    xml
}

pub fn root_rels() -> String {
    format!(
        "{XML_HEADER}\n<Relationships xmlns=\"{NS_PACKAGE_RELS}\">\
         <Relationship Id=\"rId1\" Type=\"{REL_OFFICE_DOCUMENT}\" Target=\"ppt/presentation.xml\"/>\
         </Relationships>"
    )
}

pub fn presentation(slide_count: usize, canvas: CanvasSize) -> String {
    let mut slide_ids = String::new();
    for index in 0..slide_count {
        let _ = write!(
            slide_ids,
            "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
            256 + index,
            index + 2
        );
    }
    format!(
        "{XML_HEADER}\n<p:presentation xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELATIONSHIPS}\" xmlns:p=\"{NS_PRESENTATION}\">\
         <p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
         <p:sldIdLst>{slide_ids}</p:sldIdLst>\
         <p:sldSz cx=\"{cx}\" cy=\"{cy}\"/>\
         <p:notesSz cx=\"{cy}\" cy=\"{cx}\"/>\
         </p:presentation>",
        cx = canvas.width,
        cy = canvas.height,
    )
}

pub fn presentation_rels(slide_count: usize) -> String {
    let mut xml = format!(
        "{XML_HEADER}\n<Relationships xmlns=\"{NS_PACKAGE_RELS}\">\
         <Relationship Id=\"rId1\" Type=\"{REL_SLIDE_MASTER}\" Target=\"slideMasters/slideMaster1.xml\"/>"
    );
    for index in 0..slide_count {
        let _ = write!(
            xml,
            "<Relationship Id=\"rId{}\" Type=\"{REL_SLIDE}\" Target=\"slides/slide{}.xml\"/>",
            index + 2,
            index + 1
        );
    }
    xml.push_str("</Relationships>");
    xml
}

const EMPTY_SP_TREE: &str = "<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>";

pub fn slide_master(layout_count: usize) -> String {
    let mut layout_ids = String::new();
    for index in 0..layout_count {
        let _ = write!(
            layout_ids,
            "<p:sldLayoutId id=\"{}\" r:id=\"rId{}\"/>",
            2_147_483_649_u64 + index as u64,
            index + 1
        );
    }
    format!(
        "{XML_HEADER}\n<p:sldMaster xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELATIONSHIPS}\" xmlns:p=\"{NS_PRESENTATION}\">\
         <p:cSld><p:spTree>{EMPTY_SP_TREE}</p:spTree></p:cSld>\
         <p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
         <p:sldLayoutIdLst>{layout_ids}</p:sldLayoutIdLst>\
         </p:sldMaster>"
    )
}

pub fn slide_master_rels(layout_count: usize) -> String {
    let mut xml = format!("{XML_HEADER}\n<Relationships xmlns=\"{NS_PACKAGE_RELS}\">");
    for index in 0..layout_count {
        let _ = write!(
            xml,
            "<Relationship Id=\"rId{}\" Type=\"{REL_SLIDE_LAYOUT}\" Target=\"../slideLayouts/slideLayout{}.xml\"/>",
            index + 1,
            index + 1
        );
    }
    let _ = write!(
        xml,
        "<Relationship Id=\"rId{}\" Type=\"{REL_THEME}\" Target=\"../theme/theme1.xml\"/>",
        layout_count + 1
    );
    xml.push_str("</Relationships>");
    xml
}

pub fn slide_layout(spec: &LayoutSpec) -> String {
    let mut shapes = format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"2\" name=\"Title 1\"/>\
         <p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>\
         <p:nvPr><p:ph type=\"{}\"/></p:nvPr></p:nvSpPr>\
         <p:spPr/><p:txBody><a:bodyPr/><a:p/></p:txBody></p:sp>",
        spec.title_placeholder
    );
    if let Some(body) = spec.body_placeholder {
        let _ = write!(
            shapes,
            "<p:sp><p:nvSpPr><p:cNvPr id=\"3\" name=\"Body 2\"/>\
             <p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>\
             <p:nvPr><p:ph type=\"{body}\" idx=\"1\"/></p:nvPr></p:nvSpPr>\
             <p:spPr/><p:txBody><a:bodyPr/><a:p/></p:txBody></p:sp>"
        );
    }
    format!(
        "{XML_HEADER}\n<p:sldLayout xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELATIONSHIPS}\" xmlns:p=\"{NS_PRESENTATION}\" type=\"{kind}\" preserve=\"1\">\
         <p:cSld name=\"{name}\"><p:spTree>{EMPTY_SP_TREE}{shapes}</p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sldLayout>",
        kind = spec.kind,
        name = escape(spec.name),
    )
}

pub fn slide_layout_rels() -> String {
    format!(
        "{XML_HEADER}\n<Relationships xmlns=\"{NS_PACKAGE_RELS}\">\
         <Relationship Id=\"rId1\" Type=\"{REL_SLIDE_MASTER}\" Target=\"../slideMasters/slideMaster1.xml\"/>\
         </Relationships>"
    )
}

fn paragraph(paragraph: &Paragraph) -> String {
    let properties = if paragraph.level > 0 {
        format!("<a:pPr lvl=\"{}\"/>", paragraph.level)
    } else {
        "<a:pPr/>".to_string()
    };
    if paragraph.text.is_empty() {
        return format!("<a:p>{properties}</a:p>");
    }

    let run_properties = match paragraph.size_pt {
        // Run sizes are expressed in hundredths of a point.
        Some(size) => format!(
            "<a:rPr lang=\"en-US\" sz=\"{}\" dirty=\"0\"/>",
            (size * 100.0).round() as i64
        ),
        None => "<a:rPr lang=\"en-US\" dirty=\"0\"/>".to_string(),
    };
    format!(
        "<a:p>{properties}<a:r>{run_properties}<a:t>{}</a:t></a:r></a:p>",
        escape(&paragraph.text)
    )
}

pub fn slide(slide: &CommittedSlide, spec: &LayoutSpec) -> String {
    let mut shapes = String::new();

    if let Some(ref title) = slide.title {
        let _ = write!(
            shapes,
            "<p:sp><p:nvSpPr><p:cNvPr id=\"2\" name=\"Title 1\"/>\
             <p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>\
             <p:nvPr><p:ph type=\"{}\"/></p:nvPr></p:nvSpPr>\
             <p:spPr/><p:txBody><a:bodyPr/><a:p><a:r><a:rPr lang=\"en-US\" dirty=\"0\"/><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>",
            spec.title_placeholder,
            escape(title)
        );
    }

    if !slide.paragraphs.is_empty()
        && let Some(body) = spec.body_placeholder
    {
        let body_paragraphs: String = slide.paragraphs.iter().map(paragraph).collect();
        let _ = write!(
            shapes,
            "<p:sp><p:nvSpPr><p:cNvPr id=\"3\" name=\"Body 2\"/>\
             <p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>\
             <p:nvPr><p:ph type=\"{body}\" idx=\"1\"/></p:nvPr></p:nvSpPr>\
             <p:spPr/><p:txBody><a:bodyPr/>{body_paragraphs}</p:txBody></p:sp>"
        );
    }

    for (index, picture) in slide.pictures.iter().enumerate() {
        let placement = picture.placement;
        let _ = write!(
            shapes,
            "<p:pic><p:nvPicPr><p:cNvPr id=\"{id}\" name=\"Picture {number}\" descr=\"{descr}\"/>\
             <p:cNvPicPr><a:picLocks noChangeAspect=\"1\"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>\
             <p:blipFill><a:blip r:embed=\"rId{rid}\"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>\
             <p:spPr><a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
             <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></p:spPr></p:pic>",
            id = index + 4,
            number = index + 1,
            descr = escape(&picture.source),
            rid = index + 2,
            x = placement.left,
            y = placement.top,
            cx = placement.width,
            cy = placement.height,
        );
    }

    format!(
        "{XML_HEADER}\n<p:sld xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELATIONSHIPS}\" xmlns:p=\"{NS_PRESENTATION}\">\
         <p:cSld><p:spTree>{EMPTY_SP_TREE}{shapes}</p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sld>"
    )
}

pub fn slide_rels(layout_number: usize, media_files: &[&str]) -> String {
    let mut xml = format!(
        "{XML_HEADER}\n<Relationships xmlns=\"{NS_PACKAGE_RELS}\">\
         <Relationship Id=\"rId1\" Type=\"{REL_SLIDE_LAYOUT}\" Target=\"../slideLayouts/slideLayout{layout_number}.xml\"/>"
    );
    for (index, file) in media_files.iter().enumerate() {
        let _ = write!(
            xml,
            "<Relationship Id=\"rId{}\" Type=\"{REL_IMAGE}\" Target=\"../media/{file}\"/>",
            index + 2
        );
    }
    xml.push_str("</Relationships>");
    xml
}

pub fn theme() -> String {
    format!(
        "{XML_HEADER}\n<a:theme xmlns:a=\"{NS_DRAWING}\" name=\"Office Theme\"><a:themeElements>\
         <a:clrScheme name=\"Office\">\
         <a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>\
         <a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>\
         <a:dk2><a:srgbClr val=\"44546A\"/></a:dk2>\
         <a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2>\
         <a:accent1><a:srgbClr val=\"4472C4\"/></a:accent1>\
         <a:accent2><a:srgbClr val=\"ED7D31\"/></a:accent2>\
         <a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3>\
         <a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4>\
         <a:accent5><a:srgbClr val=\"5B9BD5\"/></a:accent5>\
         <a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6>\
         <a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink>\
         <a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink>\
         </a:clrScheme>\
         <a:fontScheme name=\"Office\">\
         <a:majorFont><a:latin typeface=\"Calibri Light\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>\
         <a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>\
         </a:fontScheme>\
         <a:fmtScheme name=\"Office\">\
         <a:fillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:fillStyleLst>\
         <a:lnStyleLst><a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln><a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln><a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln></a:lnStyleLst>\
         <a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>\
         <a:bgFillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:bgFillStyleLst>\
         </a:fmtScheme>\
         </a:themeElements></a:theme>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<Fish & "Chips">"#),
            "&lt;Fish &amp; &quot;Chips&quot;&gt;"
        );
    }

    #[test]
    fn test_paragraph_levels_and_sizes() {
        let plain = paragraph(&Paragraph::new("hello", 0));
        assert!(plain.contains("<a:pPr/>"), "{plain}");
        assert!(plain.contains("<a:t>hello</a:t>"), "{plain}");

        let nested = paragraph(&Paragraph::new("deep", 2).with_size(16.0));
        assert!(nested.contains("lvl=\"2\""), "{nested}");
        assert!(nested.contains("sz=\"1600\""), "{nested}");
    }

    #[test]
    fn test_empty_paragraph_emits_no_run() {
        let blank = paragraph(&Paragraph::new("", 0));
        assert_eq!(blank, "<a:p><a:pPr/></a:p>");
    }

    #[test]
    fn test_content_types_lists_used_media_extensions() {
        let extensions: BTreeSet<String> = ["png".to_string(), "jpeg".to_string()].into();
        let xml = content_types(&extensions, 2, 3);
        assert!(xml.contains("Extension=\"png\""));
        assert!(xml.contains("Extension=\"jpeg\""));
        assert!(!xml.contains("Extension=\"gif\""));
        assert!(xml.contains("/ppt/slides/slide2.xml"));
        assert!(!xml.contains("/ppt/slides/slide3.xml"));
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let xml = presentation(2, CanvasSize::default());
        assert!(xml.contains("<p:sldId id=\"256\" r:id=\"rId2\"/>"));
        assert!(xml.contains("<p:sldId id=\"257\" r:id=\"rId3\"/>"));
        assert!(xml.contains("cx=\"9144000\""));
        assert!(xml.contains("cy=\"6858000\""));
    }
}
