//! Source format detection.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Extensions handled by the document converter, in batch order.
pub const SUPPORTED_EXTENSIONS: [(&str, SourceKind); 6] = [
    ("docx", SourceKind::Docx),
    ("doc", SourceKind::Doc),
    ("html", SourceKind::Html),
    ("htm", SourceKind::Html),
    ("txt", SourceKind::Txt),
    ("rtf", SourceKind::Rtf),
];

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Kind of document the converter knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Office Open XML word-processing document
    Docx,
    /// Legacy Word binary document
    Doc,
    /// HTML page (`.html` or `.htm`)
    Html,
    /// Plain text
    Txt,
    /// Rich Text Format
    Rtf,
}

impl SourceKind {
    /// Resolve a kind from a bare extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        SUPPORTED_EXTENSIONS
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|&(_, kind)| kind)
    }

    /// Resolve a kind from a file path.
    ///
    /// PDFs are rejected with [`Error::WrongConverter`]; anything else
    /// unknown with [`Error::UnsupportedFormat`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = extension_of(path);

        if ext == "pdf" {
            return Err(Error::WrongConverter {
                path: path.to_path_buf(),
            });
        }

        Self::from_extension(&ext).ok_or_else(|| Error::UnsupportedFormat {
            extension: ext,
            supported: supported_list(),
        })
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Docx => "docx",
            SourceKind::Doc => "doc",
            SourceKind::Html => "html",
            SourceKind::Txt => "txt",
            SourceKind::Rtf => "rtf",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comma-separated list of supported extensions, e.g. `.docx, .doc, ...`.
pub fn supported_list() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|(ext, _)| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}

/// True when the path has a `.pdf` extension (any case).
pub fn is_pdf_path(path: &Path) -> bool {
    extension_of(path) == "pdf"
}

/// True when the data starts with the PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Files in `dir` (non-recursive) whose extension matches, sorted by name.
pub fn files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && extension_of(&path) == ext {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
