//! Styled-paragraph classification.

use crate::model::{BlockKind, MarkdownBlock, SourceUnit, StyledParagraph};
use crate::render::{format_runs, render_table};

/// Heading style keys, checked in order. The keys are mutually exclusive.
const HEADING_STYLES: [(&str, u8); 6] = [
    ("heading 1", 1),
    ("heading 2", 2),
    ("heading 3", 3),
    ("heading 4", 4),
    ("heading 5", 5),
    ("heading 6", 6),
];

/// Heading level implied by a style name (case-insensitive substring match).
pub fn heading_level(style_name: &str) -> Option<u8> {
    let style = style_name.to_lowercase();
    HEADING_STYLES
        .iter()
        .find(|(key, _)| style.contains(key))
        .map(|&(_, level)| level)
}

/// Classify one styled paragraph.
///
/// Whitespace-only paragraphs become a blank block. Otherwise the style
/// decides: heading styles map to `#`×N, list styles to `1. ` (only for
/// styles starting with "List Number") or `- `, anything else renders its
/// runs with inline emphasis.
pub fn classify_paragraph(p: &StyledParagraph) -> MarkdownBlock {
    let text = p.text.trim();
    if text.is_empty() {
        return MarkdownBlock::blank();
    }

    if let Some(level) = heading_level(&p.style_name) {
        return MarkdownBlock::heading(level, text);
    }

    if p.style_name.to_lowercase().contains("list") {
        return if p.style_name.starts_with("List Number") {
            MarkdownBlock::new(BlockKind::OrderedItem, format!("1. {}", text))
        } else {
            MarkdownBlock::new(BlockKind::UnorderedItem, format!("- {}", text))
        };
    }

    MarkdownBlock::paragraph(format_runs(&p.runs))
}

/// Classify a paragraph and add the blank separator that follows every
/// non-blank paragraph.
pub fn paragraph_blocks(p: &StyledParagraph) -> Vec<MarkdownBlock> {
    let block = classify_paragraph(p);
    if block.is_blank() {
        vec![block]
    } else {
        vec![block, MarkdownBlock::blank()]
    }
}

/// Classify a structured-document unit (paragraph or table).
///
/// Plain lines are handled by the stateful line classifier; here they are
/// passed through as body text.
pub fn classify_unit(unit: &SourceUnit) -> Vec<MarkdownBlock> {
    match unit {
        SourceUnit::StyledParagraph(p) => paragraph_blocks(p),
        SourceUnit::TableGrid(grid) => {
            vec![MarkdownBlock::new(BlockKind::Table, render_table(grid))]
        }
        SourceUnit::PlainLine { text } => vec![MarkdownBlock::paragraph(text.clone())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StyledRun, TableGrid};

    #[test]
    fn test_heading_styles() {
        for (style, expected) in [
            ("Heading 1", "# Title"),
            ("heading 2", "## Title"),
            ("HEADING 3", "### Title"),
            ("Custom Heading 3 Char", "### Title"),
            ("Heading 4", "#### Title"),
            ("Heading 5", "##### Title"),
            ("Heading 6", "###### Title"),
        ] {
            let p = StyledParagraph::with_text("  Title ", style);
            assert_eq!(classify_paragraph(&p).text, expected, "style {style}");
        }
    }

    #[test]
    fn test_blank_short_circuits() {
        let p = StyledParagraph::with_text("   ", "Heading 1");
        assert!(classify_paragraph(&p).is_blank());
        assert_eq!(paragraph_blocks(&p).len(), 1);
    }

    #[test]
    fn test_list_styles() {
        let numbered = StyledParagraph::with_text("First", "List Number 2");
        let block = classify_paragraph(&numbered);
        assert_eq!(block.text, "1. First");
        assert_eq!(block.kind, BlockKind::OrderedItem);

        let bullet = StyledParagraph::with_text("Point", "List Bullet");
        assert_eq!(classify_paragraph(&bullet).text, "- Point");

        // Case-insensitive "list" match, but the numbered prefix is exact
        let lower = StyledParagraph::with_text("Point", "list number");
        assert_eq!(classify_paragraph(&lower).text, "- Point");

        let para = StyledParagraph::with_text("Point", "List Paragraph");
        assert_eq!(classify_paragraph(&para).kind, BlockKind::UnorderedItem);
    }

    #[test]
    fn test_default_uses_runs() {
        let mut p = StyledParagraph::new("Normal");
        p.add_run(StyledRun::new("Say "));
        p.add_run(StyledRun::bold("hello"));
        p.add_run(StyledRun::italic(" now"));
        assert_eq!(classify_paragraph(&p).text, "Say **hello*** now*");
    }

    #[test]
    fn test_paragraph_followed_by_blank() {
        let p = StyledParagraph::with_text("Body", "Normal");
        let blocks = paragraph_blocks(&p);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].is_blank());
    }

    #[test]
    fn test_classify_unit_table() {
        let unit = SourceUnit::TableGrid(TableGrid::from_rows([["A", "B"], ["1", "2"]]));
        let blocks = classify_unit(&unit);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Table);
        assert!(blocks[0].text.contains("|---|---|"));
    }
}
