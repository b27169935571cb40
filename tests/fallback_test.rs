//! PDF pipeline tests with scripted page extractors.

use std::cell::RefCell;
use std::path::Path;

use docdown::model::Page;
use docdown::parser::{ExtractionState, FallbackController};
use docdown::{ConvertOptions, Error, PageExtractor, PdfConverter, RenderOptions};

/// Extractor returning canned pages and recording each call.
struct Scripted {
    name: &'static str,
    pages: Option<Vec<&'static str>>,
    log: RefCell<Vec<&'static str>>,
}

impl Scripted {
    fn new(name: &'static str, pages: Option<Vec<&'static str>>) -> Self {
        Self {
            name,
            pages,
            log: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.log.borrow().len()
    }
}

impl PageExtractor for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract_pages(&self, _data: &[u8]) -> Option<Vec<Page>> {
        self.log.borrow_mut().push(self.name);
        self.pages
            .as_ref()
            .map(|pages| Page::from_texts(pages.iter().map(|p| p.to_string())))
    }
}

#[test]
fn test_secondary_rescues_two_pages() {
    let primary = Scripted::new("layout", None);
    let secondary = Scripted::new("stream", Some(vec!["first page", "second page"]));

    let doc = PdfConverter::new()
        .document_with(Path::new("two.pdf"), b"%PDF-1.4", &primary, &secondary)
        .unwrap();
    let markdown = docdown::render::to_markdown(&doc, &RenderOptions::default()).unwrap();

    let first = markdown.find("<!-- Page 1 -->").unwrap();
    let second = markdown.find("<!-- Page 2 -->").unwrap();
    assert!(first < second);
    assert!(markdown.contains("first page"));
    assert!(markdown.contains("second page"));
    assert!(!markdown.contains("layout"));

    assert_eq!(doc.metadata.extractor.as_deref(), Some("stream"));
    assert_eq!(doc.metadata.page_count, Some(2));
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 1);
}

#[test]
fn test_both_fail_is_extraction_failure() {
    let primary = Scripted::new("layout", None);
    let secondary = Scripted::new("stream", None);

    let err = PdfConverter::new()
        .document_with(Path::new("broken.pdf"), b"", &primary, &secondary)
        .unwrap_err();
    assert!(matches!(err, Error::ExtractionFailure(_)));
    assert!(err.to_string().starts_with("Failed to extract text from PDF"));
}

#[test]
fn test_gap_pages_keep_numbers() {
    let primary = Scripted::new("layout", Some(vec!["intro", "", "closing"]));
    let secondary = Scripted::new("stream", None);

    let doc = PdfConverter::new()
        .with_options(ConvertOptions::new().with_header(false))
        .document_with(Path::new("gap.pdf"), b"", &primary, &secondary)
        .unwrap();
    let body = doc.body();

    assert!(body.contains("<!-- Page 1 -->"));
    assert!(!body.contains("<!-- Page 2 -->"));
    assert!(body.contains("<!-- Page 3 -->"));
    assert_eq!(secondary.calls(), 0);
}

#[test]
fn test_merged_tokens_are_split_before_classification() {
    let primary = Scripted::new("layout", Some(vec!["helloWorld\nSection12\n\n\n\nTail"]));
    let secondary = Scripted::new("stream", None);

    let doc = PdfConverter::new()
        .document_with(Path::new("merged.pdf"), b"", &primary, &secondary)
        .unwrap();
    let body = doc.body();

    assert!(body.contains("hello World"));
    assert!(body.contains("Section 12"));
    assert!(!body.contains("\n\n\n"));
}

#[test]
fn test_controller_walks_states() {
    let primary = Scripted::new("layout", None);
    let secondary = Scripted::new("stream", Some(vec!["ok"]));
    let controller = FallbackController::new(&primary, &secondary);

    let mut states = vec![ExtractionState::NotStarted];
    while !states.last().unwrap().is_terminal() {
        let next = controller.step(states.last().unwrap().clone(), b"");
        states.push(next);
    }

    assert_eq!(states[1], ExtractionState::TryPrimary);
    assert_eq!(states[2], ExtractionState::TrySecondary);
    assert!(matches!(states[3], ExtractionState::Done(_)));
    assert_eq!(*primary.log.borrow(), vec!["layout"]);
}
