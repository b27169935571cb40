//! Error types for docdown library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The file extension is not one this converter handles.
    #[error("Unsupported format: .{extension} (supported: {supported})")]
    UnsupportedFormat {
        /// Lowercased extension without the dot
        extension: String,
        /// Human-readable list of supported extensions
        supported: String,
    },

    /// A PDF was handed to the document converter.
    #[error("PDF files use the dedicated converter: docdown pdf {}", .path.display())]
    WrongConverter {
        /// The PDF that was passed in
        path: PathBuf,
    },

    /// A format bridge is not available in this build or on this system.
    #[error("{capability} is not available: {hint}")]
    MissingCapability {
        /// Name of the missing bridge
        capability: &'static str,
        /// How to make it available
        hint: &'static str,
    },

    /// Both PDF extraction strategies failed.
    #[error("Failed to extract text from PDF: {0}")]
    ExtractionFailure(String),

    /// Batch input is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Malformed DOCX package or XML.
    #[error("DOCX parsing error: {0}")]
    Docx(String),

    /// An external converter ran but failed.
    #[error("Converter bridge error: {0}")]
    Bridge(String),

    /// Error during rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(feature = "docx")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Docx(err.to_string()),
        }
    }
}

#[cfg(feature = "docx")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Docx(err.to_string())
    }
}
