//! Text normalization for raw extracted text.
//!
//! PDF text layers often drop the whitespace between visually separate
//! tokens and pad pages with runs of empty lines. The normalizer repairs
//! the common cases before lines are classified. It is lossy and never
//! attempts layout reconstruction.

use regex::Regex;
use std::sync::OnceLock;

/// Options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Collapse two or more blank lines into one
    pub collapse_blank_lines: bool,

    /// Insert a space at a lowercase→uppercase boundary ("wordWord")
    pub split_case_boundaries: bool,

    /// Insert a space between letters and digits in either direction
    pub split_digit_boundaries: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            collapse_blank_lines: true,
            split_case_boundaries: true,
            split_digit_boundaries: true,
        }
    }
}

/// Text normalization pipeline.
pub struct TextNormalizer {
    options: NormalizeOptions,
    blank_lines: Regex,
    case_boundary: Regex,
    word_digit: Regex,
    digit_word: Regex,
}

impl TextNormalizer {
    /// Create a new normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            blank_lines: Regex::new(r"\n\s*\n\s*\n").unwrap(),
            case_boundary: Regex::new(r"([a-z])([A-Z])").unwrap(),
            // Digit runs stay whole so "Page 12" is not split into "1 2".
            word_digit: Regex::new(r"([^\W\d])(\d)").unwrap(),
            digit_word: Regex::new(r"(\d)([^\W\d])").unwrap(),
        }
    }

    /// Process text through the normalizer.
    pub fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut result = text.to_string();

        if self.options.collapse_blank_lines {
            result = self.blank_lines.replace_all(&result, "\n\n").into_owned();
        }

        if self.options.split_case_boundaries {
            result = self.case_boundary.replace_all(&result, "$1 $2").into_owned();
        }

        if self.options.split_digit_boundaries {
            result = self.word_digit.replace_all(&result, "$1 $2").into_owned();
            result = self.digit_word.replace_all(&result, "$1 $2").into_owned();
        }

        result
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

/// Normalize raw extracted text with the default options.
pub fn normalize(raw: &str) -> String {
    static DEFAULT: OnceLock<TextNormalizer> = OnceLock::new();
    DEFAULT.get_or_init(TextNormalizer::default).process(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n  \n\t\n\nb"), "a\n\nb");
        // A single blank line is already fine
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_case_boundary() {
        assert_eq!(normalize("theEnd"), "the End");
        assert_eq!(normalize("oneTwoThree"), "one Two Three");
    }

    #[test]
    fn test_digit_boundaries() {
        assert_eq!(normalize("page12of30"), "page 12 of 30");
        assert_eq!(normalize("3items"), "3 items");
        assert_eq!(normalize("a1b2"), "a 1 b 2");
    }

    #[test]
    fn test_page_markers_survive() {
        let marker = "<!-- Page 12 -->";
        assert_eq!(normalize(marker), marker);
    }

    #[test]
    fn test_idempotent() {
        let raw = "SectionOne\n\n\n\nTable3shows 42values";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_already_clean_text_unchanged() {
        let clean = "A plain sentence with 2 numbers and 10 words.\n\nNext paragraph.";
        assert_eq!(normalize(clean), clean);
    }

    #[test]
    fn test_options_disable_steps() {
        let normalizer = TextNormalizer::new(NormalizeOptions {
            collapse_blank_lines: false,
            split_case_boundaries: false,
            split_digit_boundaries: true,
        });
        assert_eq!(normalizer.process("aB\n\n\n\nx1"), "aB\n\n\n\nx 1");
    }
}
