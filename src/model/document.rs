//! Document-level types: source units in, Markdown blocks out.

use super::{StyledParagraph, TableGrid};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One atomic piece of input to classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceUnit {
    /// A styled paragraph from a structured document
    StyledParagraph(StyledParagraph),

    /// A line of plain or normalized PDF text
    PlainLine {
        /// Line text, unstripped
        text: String,
    },

    /// A table grid
    TableGrid(TableGrid),
}

impl SourceUnit {
    /// Create a plain line unit.
    pub fn line(text: impl Into<String>) -> Self {
        SourceUnit::PlainLine { text: text.into() }
    }
}

/// The Markdown role of an emitted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    /// Blank separator line
    Blank,
    /// ATX heading
    Heading {
        /// Heading level (1-6)
        level: u8,
    },
    /// `1. ` style list item
    OrderedItem,
    /// `- ` style list item
    UnorderedItem,
    /// Indented continuation of the preceding list item
    Continuation,
    /// Pipe table
    Table,
    /// Body text
    Paragraph,
    /// Whole-line bold label ending in a colon
    BoldLabel,
    /// Pre-rendered Markdown from an external bridge
    Raw,
}

/// One emitted Markdown fragment.
///
/// Blocks are joined with a single newline, so a fragment that needs
/// vertical separation carries its own blank lines (tables do).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownBlock {
    /// Block role
    pub kind: BlockKind,

    /// Markdown text
    pub text: String,
}

impl MarkdownBlock {
    /// Create a block.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// A blank separator block.
    pub fn blank() -> Self {
        Self::new(BlockKind::Blank, String::new())
    }

    /// A heading block; the `#` prefix is added here.
    pub fn heading(level: u8, text: &str) -> Self {
        let level = level.clamp(1, 6);
        Self::new(
            BlockKind::Heading { level },
            format!("{} {}", "#".repeat(level as usize), text),
        )
    }

    /// A body text block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    /// Check if this is a blank separator.
    pub fn is_blank(&self) -> bool {
        self.kind == BlockKind::Blank
    }

    /// Borrow the Markdown text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Where a document came from, which decides the provenance line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Word processor, HTML, text or legacy sources
    #[default]
    Document,
    /// PDF sources
    Pdf,
}

/// Document metadata derived from the source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title (source file stem)
    pub title: String,

    /// Source file name
    pub source_name: String,

    /// Source family
    pub provenance: Provenance,

    /// Number of pages (PDF only)
    pub page_count: Option<u32>,

    /// PDF extraction strategy that produced the text
    pub extractor: Option<String>,

    /// Conversion time
    pub converted_at: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Derive metadata from a source path.
    pub fn from_path(path: &Path, provenance: Provenance) -> Self {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            title,
            source_name,
            provenance,
            converted_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Render the fixed metadata header that precedes the body.
    pub fn header(&self) -> String {
        let from = match self.provenance {
            Provenance::Document => "Converted from",
            Provenance::Pdf => "Converted from PDF",
        };
        format!(
            "# {}\n\n*{}: {}*\n\n---\n\n",
            self.title, from, self.source_name
        )
    }
}

/// An assembled document: metadata plus blocks in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Markdown blocks, never reordered or deduplicated
    pub blocks: Vec<MarkdownBlock>,
}

impl Document {
    /// Create an empty document.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            blocks: Vec::new(),
        }
    }

    /// Append a block.
    pub fn push(&mut self, block: MarkdownBlock) {
        self.blocks.push(block);
    }

    /// Append several blocks.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = MarkdownBlock>) {
        self.blocks.extend(blocks);
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Join the blocks into the Markdown body (without header).
    pub fn body(&self) -> String {
        self.blocks
            .iter()
            .map(MarkdownBlock::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
