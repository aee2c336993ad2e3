use dais::resource::InMemoryResourceProvider;
use image::{ImageFormat, RgbaImage};
use serde_json::{json, Value};
use std::io::Cursor;

/// Encode a real PNG of the given pixel size, so the header prober runs
/// against genuine image bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbaImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// An in-memory provider pre-loaded with PNGs at the given paths/sizes.
pub fn providers_with_pngs(images: &[(&str, u32, u32)]) -> InMemoryResourceProvider {
    let provider = InMemoryResourceProvider::new();
    for &(path, width, height) in images {
        provider.add(path, png_bytes(width, height)).unwrap();
    }
    provider
}

/// The classic two-title content document, with nesting and an image.
pub fn sample_content() -> Value {
    json!({
        "Common data types": {
            "The most common ones are": [
                "strings",
                { "text": "numbers", "level": 2 },
                { "image": "meme.png", "position": "bottom" }
            ]
        },
        "Strings": {
            "slide_layout": 0,
            "Identified by the use of double quotes": {
                "item1": "foo",
                "item2": "bar"
            }
        }
    })
}
