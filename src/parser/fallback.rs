//! Two-strategy PDF text extraction with fallback.
//!
//! Strategies never signal failure through errors or panics: an extractor
//! that cannot handle a file returns `None` and the controller moves on.
//! Only the case where both strategies return `None` becomes an error.

use crate::error::{Error, Result};
use crate::model::Page;

/// A strategy that splits a PDF into per-page text.
pub trait PageExtractor {
    /// Short name used in logs and metadata.
    fn name(&self) -> &'static str;

    /// Extract text for every page, in page order.
    ///
    /// Returns `None` when the document cannot be read by this strategy.
    fn extract_pages(&self, data: &[u8]) -> Option<Vec<Page>>;
}

/// Text produced by a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Page texts joined with page markers
    pub text: String,
    /// Number of pages the strategy reported
    pub page_count: u32,
    /// Name of the strategy that produced the text
    pub extractor: &'static str,
}

/// Controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionState {
    NotStarted,
    TryPrimary,
    TrySecondary,
    Done(ExtractedText),
    Failed,
}

impl ExtractionState {
    /// True for `Done` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExtractionState::Done(_) | ExtractionState::Failed)
    }
}

/// Runs the primary strategy, then the secondary one if the first yields
/// nothing.
pub struct FallbackController<'a> {
    primary: &'a dyn PageExtractor,
    secondary: &'a dyn PageExtractor,
}

impl<'a> FallbackController<'a> {
    /// Create a controller over two strategies.
    pub fn new(primary: &'a dyn PageExtractor, secondary: &'a dyn PageExtractor) -> Self {
        Self { primary, secondary }
    }

    /// Advance the state machine by one transition.
    pub fn step(&self, state: ExtractionState, data: &[u8]) -> ExtractionState {
        match state {
            ExtractionState::NotStarted => ExtractionState::TryPrimary,
            ExtractionState::TryPrimary => match attempt(self.primary, data) {
                Some(text) => ExtractionState::Done(text),
                None => {
                    log::warn!(
                        "{} extraction yielded nothing, falling back to {}",
                        self.primary.name(),
                        self.secondary.name()
                    );
                    ExtractionState::TrySecondary
                }
            },
            ExtractionState::TrySecondary => match attempt(self.secondary, data) {
                Some(text) => ExtractionState::Done(text),
                None => ExtractionState::Failed,
            },
            terminal => terminal,
        }
    }

    /// Run until a terminal state is reached.
    pub fn run(&self, data: &[u8]) -> Result<ExtractedText> {
        let mut state = ExtractionState::NotStarted;
        while !state.is_terminal() {
            state = self.step(state, data);
        }

        match state {
            ExtractionState::Done(text) => Ok(text),
            _ => Err(Error::ExtractionFailure(format!(
                "neither {} nor {} extraction could read the document",
                self.primary.name(),
                self.secondary.name()
            ))),
        }
    }
}

fn attempt(extractor: &dyn PageExtractor, data: &[u8]) -> Option<ExtractedText> {
    let pages = extractor.extract_pages(data)?;
    log::debug!("{} extraction returned {} pages", extractor.name(), pages.len());
    Some(ExtractedText {
        text: render_pages(&pages),
        page_count: pages.len() as u32,
        extractor: extractor.name(),
    })
}

/// Join page texts, each preceded by its `<!-- Page N -->` marker.
///
/// Pages without text are skipped; numbering is not shifted.
pub fn render_pages(pages: &[Page]) -> String {
    let mut out = String::new();
    for page in pages {
        let Some(text) = page.text() else {
            log::debug!("Page {} has no text, skipping", page.index);
            continue;
        };
        log::debug!("Page {}: {} chars", page.index, text.len());
        out.push('\n');
        out.push_str(&page.marker());
        out.push('\n');
        out.push_str(text);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed {
        name: &'static str,
        pages: Option<Vec<&'static str>>,
        calls: Cell<u32>,
    }

    impl Fixed {
        fn new(name: &'static str, pages: Option<Vec<&'static str>>) -> Self {
            Self {
                name,
                pages,
                calls: Cell::new(0),
            }
        }
    }

    impl PageExtractor for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn extract_pages(&self, _data: &[u8]) -> Option<Vec<Page>> {
            self.calls.set(self.calls.get() + 1);
            self.pages
                .as_ref()
                .map(|p| Page::from_texts(p.iter().map(|s| s.to_string())))
        }
    }

    #[test]
    fn test_primary_success_skips_secondary() {
        let primary = Fixed::new("primary", Some(vec!["one"]));
        let secondary = Fixed::new("secondary", Some(vec!["other"]));
        let result = FallbackController::new(&primary, &secondary).run(b"").unwrap();

        assert_eq!(result.text, "\n<!-- Page 1 -->\none\n\n");
        assert_eq!(result.extractor, "primary");
        assert_eq!(secondary.calls.get(), 0);
    }

    #[test]
    fn test_fallback_to_secondary() {
        let primary = Fixed::new("primary", None);
        let secondary = Fixed::new("secondary", Some(vec!["p1 text", "p2 text"]));
        let result = FallbackController::new(&primary, &secondary).run(b"").unwrap();

        let first = result.text.find("<!-- Page 1 -->").unwrap();
        let second = result.text.find("<!-- Page 2 -->").unwrap();
        assert!(first < second);
        assert!(!result.text.contains("primary"));
        assert_eq!(result.page_count, 2);
        assert_eq!(primary.calls.get(), 1);
    }

    #[test]
    fn test_both_fail() {
        let primary = Fixed::new("primary", None);
        let secondary = Fixed::new("secondary", None);
        let err = FallbackController::new(&primary, &secondary)
            .run(b"")
            .unwrap_err();
        assert!(matches!(err, Error::ExtractionFailure(_)));
        assert_eq!(primary.calls.get(), 1);
        assert_eq!(secondary.calls.get(), 1);
    }

    #[test]
    fn test_empty_pages_are_not_failure() {
        let primary = Fixed::new("primary", Some(vec!["", ""]));
        let secondary = Fixed::new("secondary", Some(vec!["unused"]));
        let result = FallbackController::new(&primary, &secondary).run(b"").unwrap();
        assert_eq!(result.text, "");
        assert_eq!(secondary.calls.get(), 0);
    }

    #[test]
    fn test_state_transitions() {
        let primary = Fixed::new("primary", None);
        let secondary = Fixed::new("secondary", None);
        let controller = FallbackController::new(&primary, &secondary);

        let state = controller.step(ExtractionState::NotStarted, b"");
        assert_eq!(state, ExtractionState::TryPrimary);
        let state = controller.step(state, b"");
        assert_eq!(state, ExtractionState::TrySecondary);
        let state = controller.step(state, b"");
        assert_eq!(state, ExtractionState::Failed);
        assert_eq!(controller.step(state, b""), ExtractionState::Failed);
    }

    #[test]
    fn test_render_pages_keeps_true_index() {
        let pages = vec![Page::new(1, "a"), Page::empty(2), Page::new(3, "c")];
        let text = render_pages(&pages);
        assert_eq!(text, "\n<!-- Page 1 -->\na\n\n\n<!-- Page 3 -->\nc\n\n");
        assert!(!text.contains("Page 2"));
    }
}
