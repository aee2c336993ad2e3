//! In-memory OPC (ZIP) package assembly.

use dais_backend_core::BackendError;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

/// An ordered collection of package parts, zipped on demand.
#[derive(Debug, Default)]
pub struct OpcPackage {
    parts: Vec<Part>,
}

#[derive(Debug)]
struct Part {
    path: String,
    data: Vec<u8>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_part(&mut self, path: impl Into<String>, data: Vec<u8>) {
        self.parts.push(Part {
            path: path.into(),
            data,
        });
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize all parts into a ZIP archive.
    pub fn into_zip_bytes(self) -> Result<Vec<u8>, BackendError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for part in &self.parts {
            writer
                .start_file(part.path.as_str(), options)
                .map_err(|e| BackendError::Package(e.to_string()))?;
            writer.write_all(&part.data)?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| BackendError::Package(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}
