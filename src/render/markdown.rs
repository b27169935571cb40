//! Markdown rendering: inline emphasis, pipe tables, and the final document.

use crate::error::Result;
use crate::model::{BlockKind, Document, StyledRun, TableGrid};

use super::{ExtractionStats, RenderOptions, RenderResult};

/// Render styled runs into inline Markdown emphasis.
///
/// Runs are concatenated without separators, in sequence order.
pub fn format_runs(runs: &[StyledRun]) -> String {
    let mut output = String::new();
    for run in runs {
        match (run.bold, run.italic) {
            (true, true) => {
                output.push_str("***");
                output.push_str(&run.text);
                output.push_str("***");
            }
            (true, false) => {
                output.push_str("**");
                output.push_str(&run.text);
                output.push_str("**");
            }
            (false, true) => {
                output.push('*');
                output.push_str(&run.text);
                output.push('*');
            }
            (false, false) => output.push_str(&run.text),
        }
    }
    output
}

/// Render a table grid as a pipe table surrounded by blank lines.
///
/// Row 0 is the header. The separator row has one `---` per header cell;
/// later rows are emitted with whatever cell count they have.
pub fn render_table(grid: &TableGrid) -> String {
    let mut lines = vec![String::new()];

    for (i, row) in grid.rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.trim().replace('\n', " "))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));

        // Add separator after header row
        if i == 0 {
            lines.push(format!("|{}|", vec!["---"; cells.len()].join("|")));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with extraction statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        self.stats.count_text(&doc.body());
        if let Some(pages) = doc.metadata.page_count {
            self.stats.page_count = pages;
        }

        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_header {
            output.push_str(&doc.metadata.header());
        }

        if self.options.collect_stats {
            for block in &doc.blocks {
                self.count_block(block.kind);
            }
        }

        output.push_str(&doc.body());
        Ok(output)
    }

    fn count_block(&mut self, kind: BlockKind) {
        match kind {
            BlockKind::Heading { .. } => self.stats.add_heading(),
            BlockKind::OrderedItem | BlockKind::UnorderedItem => self.stats.add_list_item(),
            BlockKind::Table => self.stats.add_table(),
            BlockKind::Paragraph | BlockKind::BoldLabel | BlockKind::Raw => {
                self.stats.add_paragraph()
            }
            BlockKind::Blank | BlockKind::Continuation => {}
        }
    }
}
