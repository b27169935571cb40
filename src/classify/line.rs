//! Plain-line classification with list-continuation tracking.

use super::{is_upper, title_case};
use crate::model::{BlockKind, MarkdownBlock};

/// Lines at or above this many characters are never headings.
const MAX_HEADING_CHARS: usize = 100;

/// Bullet markers recognized at the start of a stripped line.
const BULLET_MARKERS: [&str; 4] = ["- ", "* ", "+ ", "• "];

/// State carried from one plain line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// The previous non-blank line belonged to a list
    pub in_list: bool,
}

/// Classify one plain line given the state left by the previous line.
///
/// Rules, first match wins: blank, all-caps heading, numbered item,
/// bulleted item, then body text (indented by two spaces while inside a
/// list). List items are emitted unchanged except that `• ` becomes `- `.
pub fn classify_line(line: &str, state: LineState) -> (MarkdownBlock, LineState) {
    let stripped = line.trim();

    if stripped.is_empty() {
        return (MarkdownBlock::blank(), LineState { in_list: false });
    }

    if is_heading_line(stripped) {
        return (
            MarkdownBlock::heading(2, &title_case(stripped)),
            LineState { in_list: false },
        );
    }

    if has_number_marker(stripped) {
        return (
            MarkdownBlock::new(BlockKind::OrderedItem, line),
            LineState { in_list: true },
        );
    }

    if BULLET_MARKERS.iter().any(|m| stripped.starts_with(m)) {
        let text = match stripped.strip_prefix("• ") {
            Some(rest) => format!("- {}", rest),
            None => line.to_string(),
        };
        return (
            MarkdownBlock::new(BlockKind::UnorderedItem, text),
            LineState { in_list: true },
        );
    }

    if state.in_list {
        (
            MarkdownBlock::new(BlockKind::Continuation, format!("  {}", line)),
            state,
        )
    } else {
        (MarkdownBlock::paragraph(line), state)
    }
}

/// Classify a sequence of lines, threading the list state through.
pub fn classify_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<MarkdownBlock> {
    let mut state = LineState::default();
    lines
        .into_iter()
        .map(|line| {
            let (block, next) = classify_line(line, state);
            state = next;
            block
        })
        .collect()
}

fn is_heading_line(stripped: &str) -> bool {
    is_upper(stripped)
        && stripped.chars().count() < MAX_HEADING_CHARS
        && !stripped.chars().any(|c| c.is_ascii_digit())
}

/// Matches a literal `"<n>. "` prefix for n in 1..=99 (no leading zero).
fn has_number_marker(stripped: &str) -> bool {
    let digits = stripped.bytes().take_while(u8::is_ascii_digit).count();
    (1..=2).contains(&digits)
        && !stripped.starts_with('0')
        && stripped[digits..].starts_with(". ")
}
