//! Converter for word-processor, HTML, text and legacy documents.

use std::fs;
use std::path::{Path, PathBuf};

use super::{default_output, ConvertOptions};
use crate::classify::{classify_lines, split_lines};
#[cfg(feature = "docx")]
use crate::classify::classify_unit;
use crate::detect::{files_with_extension, SourceKind, SUPPORTED_EXTENSIONS};
use crate::error::{Error, Result};
use crate::model::{BlockKind, Document, MarkdownBlock, Metadata, Provenance};
#[cfg(feature = "docx")]
use crate::parser::DocxReader;
#[cfg(feature = "html")]
use crate::parser::HtmlBridge;
use crate::parser::{Capabilities, Capability};
use crate::render::to_markdown;

/// PDFs listed individually in the batch hint.
const PDF_HINT_LIMIT: usize = 5;

/// Result of one file in a batch run.
#[derive(Debug)]
pub enum BatchOutcome<'a> {
    /// Converted, with the written path
    Converted(&'a Path),
    /// Failed with an error; the batch continues
    Failed(&'a Error),
}

/// Converts non-PDF documents to Markdown files.
#[derive(Debug, Clone)]
pub struct DocumentConverter {
    capabilities: Capabilities,
    options: ConvertOptions,
}

impl DocumentConverter {
    /// Create a converter, probing capabilities once.
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::detect())
    }

    /// Create a converter over already-resolved capabilities.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            options: ConvertOptions::default(),
        }
    }

    /// Set conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Capabilities this converter was built with.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Convert `input` and write the Markdown next to it (or to `output`).
    ///
    /// Nothing is written unless the whole document converted.
    pub fn convert(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let markdown = self.to_markdown(input)?;

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output(input));
        fs::write(&output, markdown)?;

        log::info!("Successfully converted to: {}", output.display());
        Ok(output)
    }

    /// Convert and report the outcome as a boolean, logging any failure.
    pub fn convert_or_report(&self, input: &Path, output: Option<&Path>) -> bool {
        match self.convert(input, output) {
            Ok(_) => true,
            Err(e) => {
                report_failure(&e);
                false
            }
        }
    }

    /// Convert `input` to a Markdown string, header included if configured.
    pub fn to_markdown(&self, input: &Path) -> Result<String> {
        let doc = self.to_document(input)?;
        to_markdown(&doc, &self.options.render_options())
    }

    /// Convert `input` to an assembled document without rendering it.
    pub fn to_document(&self, input: &Path) -> Result<Document> {
        if !input.exists() {
            return Err(Error::SourceNotFound(input.to_path_buf()));
        }

        let kind = SourceKind::from_path(input)?;
        log::info!(
            "Converting {} to Markdown...",
            input.file_name().unwrap_or_default().to_string_lossy()
        );

        let mut doc = Document::new(Metadata::from_path(input, Provenance::Document));
        let blocks = match kind {
            SourceKind::Docx => self.docx_blocks(input)?,
            SourceKind::Html => self.html_blocks(input)?,
            SourceKind::Txt => {
                let content = fs::read_to_string(input)?;
                classify_lines(split_lines(&content))
            }
            SourceKind::Doc | SourceKind::Rtf => {
                let markdown = self.capabilities.legacy()?.convert(input)?;
                vec![MarkdownBlock::new(BlockKind::Raw, markdown)]
            }
        };
        doc.extend(blocks);

        Ok(doc)
    }

    #[cfg(feature = "docx")]
    fn docx_blocks(&self, input: &Path) -> Result<Vec<MarkdownBlock>> {
        self.capabilities.require(Capability::Docx)?;
        let units = DocxReader::new().read_path(input)?;
        log::debug!("{}: {} source units", input.display(), units.len());
        Ok(units.iter().flat_map(classify_unit).collect())
    }

    #[cfg(not(feature = "docx"))]
    fn docx_blocks(&self, _input: &Path) -> Result<Vec<MarkdownBlock>> {
        self.capabilities.require(Capability::Docx)?;
        Err(Capability::Docx.missing())
    }

    #[cfg(feature = "html")]
    fn html_blocks(&self, input: &Path) -> Result<Vec<MarkdownBlock>> {
        self.capabilities.require(Capability::Html)?;
        let html = fs::read_to_string(input)?;
        let text = HtmlBridge.to_text(&html);
        Ok(classify_lines(split_lines(&text)))
    }

    #[cfg(not(feature = "html"))]
    fn html_blocks(&self, _input: &Path) -> Result<Vec<MarkdownBlock>> {
        self.capabilities.require(Capability::Html)?;
        Err(Capability::Html.missing())
    }

    /// Convert every supported file directly inside `dir`.
    ///
    /// Outputs go to `out_dir` (created if needed) or next to the inputs.
    /// Returns the inputs that converted successfully.
    pub fn batch_convert(&self, dir: &Path, out_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
        self.batch_convert_with(dir, out_dir, |_, _| {})
    }

    /// Like [`batch_convert`](Self::batch_convert), calling `on_file` after
    /// each file.
    pub fn batch_convert_with<F>(
        &self,
        dir: &Path,
        out_dir: Option<&Path>,
        mut on_file: F,
    ) -> Result<Vec<PathBuf>>
    where
        F: FnMut(&Path, BatchOutcome<'_>),
    {
        let files = batch_inputs(dir)?;

        let out_dir = match out_dir {
            Some(out) => {
                fs::create_dir_all(out)?;
                out.to_path_buf()
            }
            None => dir.to_path_buf(),
        };

        let mut converted = Vec::new();
        for file in files {
            let name = file.with_extension("md");
            let target = out_dir.join(name.file_name().unwrap_or_default());

            match self.convert(&file, Some(&target)) {
                Ok(written) => {
                    on_file(&file, BatchOutcome::Converted(&written));
                    converted.push(file);
                }
                Err(e) => {
                    report_failure(&e);
                    on_file(&file, BatchOutcome::Failed(&e));
                }
            }
        }

        let pdfs = files_with_extension(dir, "pdf")?;
        if !pdfs.is_empty() {
            log::info!(
                "Found {} PDF file(s). Use the PDF converter for them:",
                pdfs.len()
            );
            for pdf in pdfs.iter().take(PDF_HINT_LIMIT) {
                log::info!("  docdown pdf {}", pdf.display());
            }
            if pdfs.len() > PDF_HINT_LIMIT {
                log::info!("  ... and {} more", pdfs.len() - PDF_HINT_LIMIT);
            }
        }

        log::info!("Converted {} file(s)", converted.len());
        Ok(converted)
    }
}

impl Default for DocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Files a batch run would convert, in processing order.
///
/// Extensions are visited in the fixed order docx, doc, html, htm, txt,
/// rtf; files are sorted by name within each extension.
pub fn batch_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for (ext, _) in SUPPORTED_EXTENSIONS {
        files.extend(files_with_extension(dir, ext)?);
    }
    Ok(files)
}

pub(crate) fn report_failure(err: &Error) {
    match err {
        Error::WrongConverter { path } => {
            log::warn!("For PDF conversion, use: docdown pdf {}", path.display());
        }
        Error::UnsupportedFormat { .. } => {
            log::error!("{}", err);
            log::info!("For PDF files, use: docdown pdf <FILE>");
        }
        _ => log::error!("Conversion failed: {}", err),
    }
}
