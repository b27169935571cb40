//! # docdown
//!
//! Document to Markdown conversion for Rust.
//!
//! This library reads word-processor documents, HTML, plain text and PDF,
//! infers their structure (headings, lists, tables, emphasis, page
//! boundaries) and writes it back out as Markdown.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docdown::Docdown;
//!
//! fn main() -> docdown::Result<()> {
//!     // Writes report.md next to the input
//!     let written = Docdown::new().convert("report.docx", None::<&str>)?;
//!     println!("{}", written.display());
//!
//!     // PDFs go through the two-strategy extractor
//!     let markdown = Docdown::new().to_markdown("paper.pdf")?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Styled documents**: heading and list styles, bold/italic runs, tables
//! - **Plain text**: all-caps headings, numbered and bulleted lists
//! - **PDF**: layout and stream extraction with automatic fallback,
//!   `<!-- Page N -->` markers, merged-token repair
//! - **Legacy formats**: `.doc` and `.rtf` through pandoc when installed

pub mod classify;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use classify::{classify_line, classify_paragraph, LineState, PdfLineMode};
pub use convert::{ConvertOptions, DocumentConverter, PdfConverter};
pub use detect::SourceKind;
pub use error::{Error, Result};
pub use model::{
    BlockKind, Document, MarkdownBlock, Metadata, Page, Provenance, SourceUnit, StyledParagraph,
    StyledRun, TableGrid,
};
pub use parser::{Capabilities, Capability, ExtractMethod, PageExtractor};
pub use render::{format_runs, normalize, render_table, JsonFormat, RenderOptions};

use std::path::{Path, PathBuf};

/// Convert a file to Markdown, writing `<stem>.md` next to it.
///
/// PDFs and other documents are both accepted.
///
/// # Example
///
/// ```no_run
/// let written = docdown::convert_file("notes.txt").unwrap();
/// assert_eq!(written.extension().unwrap(), "md");
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    Docdown::new().convert(path, None::<&Path>)
}

/// Convert a file to a Markdown string.
///
/// # Example
///
/// ```no_run
/// let markdown = docdown::to_markdown("notes.html").unwrap();
/// println!("{}", markdown);
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    Docdown::new().to_markdown(path)
}

/// Convert a file to the JSON form of its assembled document.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = Docdown::new().to_document(path)?;
    render::to_json(&doc, format)
}

/// Classify plain text line by line and return the Markdown body.
///
/// No header is added.
///
/// # Example
///
/// ```
/// let body = docdown::text_to_markdown("HELLO WORLD\n\nSome text here.\n");
/// assert_eq!(body, "## Hello World\n\nSome text here.\n");
/// ```
pub fn text_to_markdown(text: &str) -> String {
    let mut doc = Document::default();
    doc.extend(classify::classify_lines(classify::split_lines(text)));
    doc.body()
}

/// Builder for converting documents of any supported kind.
///
/// Capabilities are probed once when the builder is created.
///
/// # Example
///
/// ```no_run
/// use docdown::{Docdown, ExtractMethod};
///
/// let markdown = Docdown::new()
///     .with_pdf_method(ExtractMethod::Stream)
///     .with_plain_lines()
///     .without_header()
///     .to_markdown("scan.pdf")?;
/// # Ok::<(), docdown::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Docdown {
    capabilities: Capabilities,
    options: ConvertOptions,
}

impl Docdown {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::detect())
    }

    /// Create a builder over already-resolved capabilities.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            options: ConvertOptions::default(),
        }
    }

    /// Replace all conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Choose the PDF strategy tried first.
    pub fn with_pdf_method(mut self, method: ExtractMethod) -> Self {
        self.options.pdf_method = method;
        self
    }

    /// Classify PDF lines with the plain-text rules.
    pub fn with_plain_lines(mut self) -> Self {
        self.options.pdf_line_mode = PdfLineMode::Plain;
        self
    }

    /// Leave out the metadata header.
    pub fn without_header(mut self) -> Self {
        self.options.include_header = false;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Capabilities resolved at construction.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Converter for non-PDF documents with these settings.
    pub fn document_converter(&self) -> DocumentConverter {
        DocumentConverter::with_capabilities(self.capabilities.clone())
            .with_options(self.options.clone())
    }

    /// PDF converter with these settings.
    pub fn pdf_converter(&self) -> PdfConverter {
        PdfConverter::new().with_options(self.options.clone())
    }

    /// Convert a file and write the Markdown; returns the written path.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        path: P,
        output: Option<Q>,
    ) -> Result<PathBuf> {
        let path = path.as_ref();
        let output: Option<&Path> = output.as_ref().map(|o| o.as_ref());
        if detect::is_pdf_path(path) {
            self.pdf_converter()
                .convert(path, output, self.options.pdf_method)
        } else {
            self.document_converter().convert(path, output)
        }
    }

    /// Convert a file to a Markdown string.
    pub fn to_markdown<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let doc = self.to_document(path)?;
        render::to_markdown(&doc, &self.options.render_options())
    }

    /// Convert a file to an assembled document.
    pub fn to_document<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        if detect::is_pdf_path(path) {
            self.pdf_converter()
                .to_document(path, self.options.pdf_method)
        } else {
            self.document_converter().to_document(path)
        }
    }
}

impl Default for Docdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_markdown() {
        assert_eq!(
            text_to_markdown("HELLO WORLD\n\nSome text here.\n"),
            "## Hello World\n\nSome text here.\n"
        );
    }

    #[test]
    fn test_text_to_markdown_empty() {
        assert_eq!(text_to_markdown(""), "");
    }

    #[test]
    fn test_builder_options() {
        let builder = Docdown::with_capabilities(Capabilities::with_legacy(None))
            .with_pdf_method(ExtractMethod::Stream)
            .with_plain_lines()
            .without_header();

        assert_eq!(builder.options().pdf_method, ExtractMethod::Stream);
        assert_eq!(builder.options().pdf_line_mode, PdfLineMode::Plain);
        assert!(!builder.options().include_header);
    }

    #[test]
    fn test_builder_routes_pdf() {
        let builder = Docdown::with_capabilities(Capabilities::with_legacy(None));
        let err = builder.to_document("/no/such/paper.pdf").unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));

        let err = builder.to_document("/no/such/notes.txt").unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }
}
