//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph from a structured document, tagged with its style name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledParagraph {
    /// Full paragraph text (concatenation of run text)
    pub text: String,

    /// Display name of the paragraph style (e.g., "Heading 2", "List Number")
    pub style_name: String,

    /// Styled runs, in rendering order
    pub runs: Vec<StyledRun>,
}

impl StyledParagraph {
    /// Create a paragraph with the given style and no runs.
    pub fn new(style_name: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            style_name: style_name.into(),
            runs: Vec::new(),
        }
    }

    /// Create a paragraph consisting of a single unstyled run.
    pub fn with_text(text: impl Into<String>, style_name: impl Into<String>) -> Self {
        let mut p = Self::new(style_name);
        p.add_run(StyledRun::new(text));
        p
    }

    /// Append a run, keeping `text` in sync with the run sequence.
    pub fn add_run(&mut self, run: StyledRun) {
        self.text.push_str(&run.text);
        self.runs.push(run);
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A contiguous span of text sharing one bold/italic styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl StyledRun {
    /// Create a new run with no styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    /// Create a run that is both bold and italic.
    pub fn bold_italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: true,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
