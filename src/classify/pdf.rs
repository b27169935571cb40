//! Line classification for normalized PDF text.

use regex::Regex;
use std::sync::OnceLock;

use super::{is_upper, title_case};
use crate::model::{BlockKind, MarkdownBlock};

/// All-caps lines must be longer than this to count as headings.
const MIN_HEADING_CHARS: usize = 5;

/// Stateless classifier for lines of extracted PDF text.
pub struct PdfLineClassifier {
    numbered_section: Regex,
    label: Regex,
}

impl PdfLineClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self {
            numbered_section: Regex::new(r"^\d+\.?\s+[A-Z]").unwrap(),
            label: Regex::new(r"^[A-Z][a-z]+.*:$").unwrap(),
        }
    }

    /// Classify one line. The line is stripped before any rule applies.
    pub fn classify(&self, line: &str) -> MarkdownBlock {
        let line = line.trim();

        if line.is_empty() {
            return MarkdownBlock::blank();
        }

        if is_upper(line) && line.chars().count() > MIN_HEADING_CHARS {
            return MarkdownBlock::heading(2, &title_case(line));
        }

        if self.numbered_section.is_match(line) {
            return MarkdownBlock::heading(3, line);
        }

        if self.label.is_match(line) {
            return MarkdownBlock::new(BlockKind::BoldLabel, format!("**{}**", line));
        }

        MarkdownBlock::paragraph(line)
    }
}

impl Default for PdfLineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one PDF line with a shared classifier.
pub fn classify_pdf_line(line: &str) -> MarkdownBlock {
    static CLASSIFIER: OnceLock<PdfLineClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(PdfLineClassifier::new).classify(line)
}
