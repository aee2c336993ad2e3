use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Wrapper around a generated `.pptx` package with assertion helpers.
pub struct GeneratedDeck {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl GeneratedDeck {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let archive = ZipArchive::new(Cursor::new(bytes)).expect("generated bytes are a zip");
        Self { archive }
    }

    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.archive.file_names().any(|file| file == name)
    }

    /// Read a part as UTF-8 text, panicking if it is missing.
    pub fn part(&mut self, name: &str) -> String {
        let mut content = String::new();
        self.archive
            .by_name(name)
            .unwrap_or_else(|_| panic!("missing part {name}"))
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    pub fn slide_count(&self) -> usize {
        self.archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .count()
    }
}

/// Extract the integer value of `attribute` (e.g. `x`) from the first
/// occurrence of `element` (e.g. `a:off`) in the XML.
pub fn emu_attribute(xml: &str, element: &str, attribute: &str) -> i64 {
    let element_start = xml
        .find(&format!("<{element} "))
        .unwrap_or_else(|| panic!("no <{element}> in {xml}"));
    let rest = &xml[element_start..];
    let needle = format!("{attribute}=\"");
    let value_start = rest
        .find(&needle)
        .unwrap_or_else(|| panic!("no {attribute} on <{element}>"))
        + needle.len();
    let value_end = rest[value_start..].find('"').unwrap() + value_start;
    rest[value_start..value_end].parse().unwrap()
}

/// Assert two EMU values agree within one unit of truncation slop.
pub fn assert_emu_close(actual: i64, expected: i64) {
    assert!(
        (actual - expected).abs() <= 1,
        "expected about {expected} EMU, got {actual}"
    );
}
