//! File-level conversion: source file in, Markdown file out.
//!
//! # Example
//!
//! ```no_run
//! use docdown::convert::{ConvertOptions, DocumentConverter};
//! use std::path::Path;
//!
//! fn main() -> docdown::Result<()> {
//!     let converter = DocumentConverter::new().with_options(ConvertOptions::new().with_header(false));
//!     let written = converter.convert(Path::new("notes.txt"), None)?;
//!     println!("wrote {}", written.display());
//!     Ok(())
//! }
//! ```

mod document;
mod pdf;

pub use document::{batch_inputs, BatchOutcome, DocumentConverter};
pub use pdf::PdfConverter;

use std::path::{Path, PathBuf};

use crate::classify::PdfLineMode;
use crate::parser::ExtractMethod;
use crate::render::RenderOptions;

/// Options for file conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// PDF strategy tried first
    pub pdf_method: ExtractMethod,

    /// Rule set for classifying extracted PDF lines
    pub pdf_line_mode: PdfLineMode,

    /// Whether to prepend the metadata header
    pub include_header: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PDF strategy tried first.
    pub fn with_pdf_method(mut self, method: ExtractMethod) -> Self {
        self.pdf_method = method;
        self
    }

    /// Set the PDF line rule set.
    pub fn with_pdf_line_mode(mut self, mode: PdfLineMode) -> Self {
        self.pdf_line_mode = mode;
        self
    }

    /// Enable or disable the metadata header.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Render options implied by these settings.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new().with_header(self.include_header)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pdf_method: ExtractMethod::Layout,
            pdf_line_mode: PdfLineMode::Pdf,
            include_header: true,
        }
    }
}

/// Default output path: the input with a `.md` extension.
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension("md")
}
