//! Block classification: decide the Markdown role of each source unit.
//!
//! Three modes share the same output type:
//!
//! - [`classify_paragraph`] for styled paragraphs from structured documents,
//!   where the style name carries the structure;
//! - [`classify_line`] for plain text, where structure is guessed from
//!   capitalization and list markers and a [`LineState`] is threaded
//!   between calls;
//! - [`classify_pdf_line`] for normalized PDF text, which also recognizes
//!   numbered section headings and bold label lines.

mod line;
mod pdf;
mod styled;

pub use line::{classify_line, classify_lines, LineState};
pub use pdf::{classify_pdf_line, PdfLineClassifier};
pub use styled::{classify_paragraph, classify_unit, heading_level, paragraph_blocks};

use crate::model::MarkdownBlock;

/// Which rule set classifies extracted PDF lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PdfLineMode {
    /// PDF rules: headings, numbered sections, bold labels
    #[default]
    Pdf,
    /// Plain-text rules with list tracking
    Plain,
}

/// Split text into lines on `\n`, dropping a trailing `\r` from each.
///
/// A trailing newline yields a final empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Classify every line of a text body with the given PDF rule set.
pub fn classify_text(text: &str, mode: PdfLineMode) -> Vec<MarkdownBlock> {
    match mode {
        PdfLineMode::Plain => classify_lines(split_lines(text)),
        PdfLineMode::Pdf => {
            let classifier = PdfLineClassifier::new();
            split_lines(text).map(|l| classifier.classify(l)).collect()
        }
    }
}

/// True when the text has at least one cased letter and no lowercase ones.
pub(crate) fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Title-case text: a letter following another letter is lowercased,
/// every other letter is uppercased.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_uppercase() || c.is_lowercase();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    #[test]
    fn test_is_upper() {
        assert!(is_upper("HELLO WORLD"));
        assert!(is_upper("USA 2024"));
        assert!(!is_upper("Hello"));
        assert!(!is_upper("1234"));
        assert!(!is_upper(""));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("HELLO WORLD"), "Hello World");
        assert_eq!(title_case("SECTION-ONE"), "Section-One");
        assert_eq!(title_case("DON'T"), "Don'T");
    }

    #[test]
    fn test_split_lines_drops_carriage_returns() {
        let lines: Vec<&str> = split_lines("one\r\ntwo\r\n\r\nthree\n").collect();
        assert_eq!(lines, vec!["one", "two", "", "three", ""]);
    }

    #[test]
    fn test_classify_text_modes() {
        let text = "- item\nContinued";
        let plain = classify_text(text, PdfLineMode::Plain);
        assert_eq!(plain[1].text, "  Continued");

        let pdf = classify_text(text, PdfLineMode::Pdf);
        assert_eq!(pdf[1].kind, BlockKind::Paragraph);
        assert_eq!(pdf[1].text, "Continued");
    }
}
