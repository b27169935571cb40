//! PDF converter: extraction with fallback, normalization, line rules.

use std::fs;
use std::path::{Path, PathBuf};

use super::document::report_failure;
use super::{default_output, ConvertOptions};
use crate::classify::classify_text;
use crate::detect::is_pdf_bytes;
use crate::error::{Error, Result};
use crate::model::{Document, Metadata, Provenance};
use crate::parser::{ExtractMethod, ExtractedText, FallbackController, PageExtractor};
use crate::render::{normalize, to_markdown};

/// Converts PDF files to Markdown files.
#[derive(Debug, Clone, Default)]
pub struct PdfConverter {
    options: ConvertOptions,
}

impl PdfConverter {
    /// Create a new PDF converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert `input`, trying `method` first and the other method second.
    ///
    /// Writes `<input stem>.md` next to the input unless `output` is given.
    pub fn convert(
        &self,
        input: &Path,
        output: Option<&Path>,
        method: ExtractMethod,
    ) -> Result<PathBuf> {
        let markdown = self.to_markdown(input, method)?;

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output(input));
        fs::write(&output, markdown)?;

        log::info!("Successfully converted PDF to Markdown: {}", output.display());
        Ok(output)
    }

    /// Convert with the configured method and report the outcome as a boolean.
    pub fn convert_or_report(&self, input: &Path, output: Option<&Path>) -> bool {
        match self.convert(input, output, self.options.pdf_method) {
            Ok(_) => true,
            Err(e) => {
                report_failure(&e);
                false
            }
        }
    }

    /// Convert `input` to a Markdown string.
    pub fn to_markdown(&self, input: &Path, method: ExtractMethod) -> Result<String> {
        let doc = self.to_document(input, method)?;
        to_markdown(&doc, &self.options.render_options())
    }

    /// Convert `input` to an assembled document.
    #[cfg(feature = "pdf")]
    pub fn to_document(&self, input: &Path, method: ExtractMethod) -> Result<Document> {
        use crate::parser::extractor_for;

        let data = read_pdf(input)?;
        self.document_with(
            input,
            &data,
            extractor_for(method),
            extractor_for(method.other()),
        )
    }

    /// Convert `input` to an assembled document.
    #[cfg(not(feature = "pdf"))]
    pub fn to_document(&self, input: &Path, _method: ExtractMethod) -> Result<Document> {
        read_pdf(input)?;
        Err(crate::parser::Capability::Pdf.missing())
    }

    /// Build a document from PDF bytes with explicit strategies.
    ///
    /// `source` only names the document in its metadata.
    pub fn document_with(
        &self,
        source: &Path,
        data: &[u8],
        primary: &dyn PageExtractor,
        secondary: &dyn PageExtractor,
    ) -> Result<Document> {
        let extracted = FallbackController::new(primary, secondary).run(data)?;
        Ok(self.assemble(source, extracted))
    }

    fn assemble(&self, source: &Path, extracted: ExtractedText) -> Document {
        log::debug!(
            "{}: {} pages via {} extraction",
            source.display(),
            extracted.page_count,
            extracted.extractor
        );

        let mut metadata = Metadata::from_path(source, Provenance::Pdf);
        metadata.page_count = Some(extracted.page_count);
        metadata.extractor = Some(extracted.extractor.to_string());

        let cleaned = normalize(&extracted.text);
        let mut doc = Document::new(metadata);
        doc.extend(classify_text(&cleaned, self.options.pdf_line_mode));
        doc
    }
}

fn read_pdf(input: &Path) -> Result<Vec<u8>> {
    if !input.exists() {
        return Err(Error::SourceNotFound(input.to_path_buf()));
    }

    log::info!("Converting PDF: {}", input.display());
    let data = fs::read(input)?;
    if !is_pdf_bytes(&data) {
        log::warn!("{} does not start with a PDF header", input.display());
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PdfLineMode;
    use crate::model::Page;

    struct Pages(Option<Vec<&'static str>>);

    impl PageExtractor for Pages {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn extract_pages(&self, _data: &[u8]) -> Option<Vec<Page>> {
            self.0
                .as_ref()
                .map(|p| Page::from_texts(p.iter().map(|s| s.to_string())))
        }
    }

    #[test]
    fn test_pdf_body_rules() {
        let primary = Pages(Some(vec!["ANNUAL REPORT\n1. Introduction\nSummary:\nplain line"]));
        let secondary = Pages(None);
        let doc = PdfConverter::new()
            .document_with(Path::new("report.pdf"), b"", &primary, &secondary)
            .unwrap();

        let markdown = to_markdown(&doc, &ConvertOptions::default().render_options()).unwrap();
        assert!(markdown.starts_with("# report\n\n*Converted from PDF: report.pdf*\n\n---\n\n"));
        assert!(markdown.contains("<!-- Page 1 -->"));
        assert!(markdown.contains("## Annual Report"));
        assert!(markdown.contains("### 1. Introduction"));
        assert!(markdown.contains("**Summary:**"));
        assert!(markdown.contains("\nplain line\n"));
        assert_eq!(doc.metadata.page_count, Some(1));
    }

    #[test]
    fn test_plain_line_mode() {
        let primary = Pages(Some(vec!["- item\nmore"]));
        let converter = PdfConverter::new()
            .with_options(ConvertOptions::new().with_pdf_line_mode(PdfLineMode::Plain));
        let doc = converter
            .document_with(Path::new("x.pdf"), b"", &primary, &Pages(None))
            .unwrap();
        assert!(doc.body().contains("- item\n  more"));
    }

    #[test]
    fn test_both_strategies_fail() {
        let result = PdfConverter::new().document_with(
            Path::new("broken.pdf"),
            b"",
            &Pages(None),
            &Pages(None),
        );
        assert!(matches!(result, Err(Error::ExtractionFailure(_))));
    }

    #[test]
    fn test_missing_pdf() {
        let result = PdfConverter::new().convert(
            Path::new("/no/such/file.pdf"),
            None,
            ExtractMethod::Layout,
        );
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }
}
