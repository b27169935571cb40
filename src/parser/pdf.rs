//! PDF page extractors backed by `pdf-extract` and `lopdf`.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document as LopdfDocument;

use super::fallback::PageExtractor;
use super::options::ExtractMethod;
use crate::model::Page;

/// Positional text extraction through `pdf-extract`.
///
/// `pdf-extract` panics on some malformed files; panics are caught and
/// reported as "no result".
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutExtractor;

impl PageExtractor for LayoutExtractor {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn extract_pages(&self, data: &[u8]) -> Option<Vec<Page>> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        match result {
            Ok(Ok(pages)) => Some(Page::from_texts(pages)),
            Ok(Err(e)) => {
                log::warn!("Layout extraction failed: {}", e);
                None
            }
            Err(_) => {
                log::warn!("Layout extraction panicked (malformed document)");
                None
            }
        }
    }
}

/// Content-stream text extraction through `lopdf`, one page at a time.
///
/// A page that decodes to no text is kept as an empty page so later pages
/// keep their numbers. A page that fails to decode fails the whole method.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamExtractor;

impl PageExtractor for StreamExtractor {
    fn name(&self) -> &'static str {
        "stream"
    }

    fn extract_pages(&self, data: &[u8]) -> Option<Vec<Page>> {
        let doc = match LopdfDocument::load_mem(data) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Stream extraction could not load document: {}", e);
                return None;
            }
        };

        let pages: Result<Vec<Page>, _> = doc
            .get_pages()
            .keys()
            .map(|&number| {
                doc.extract_text(&[number])
                    .map(|text| {
                        log::debug!("Page {}: {} bytes of stream text", number, text.len());
                        if text.is_empty() {
                            Page::empty(number)
                        } else {
                            Page::new(number, text)
                        }
                    })
                    .map_err(|e| (number, e))
            })
            .collect();

        match pages {
            Ok(pages) => Some(pages),
            Err((number, e)) => {
                log::warn!("Stream extraction failed on page {}: {}", number, e);
                None
            }
        }
    }
}

/// The extractor implementing a method.
pub fn extractor_for(method: ExtractMethod) -> &'static dyn PageExtractor {
    match method {
        ExtractMethod::Layout => &LayoutExtractor,
        ExtractMethod::Stream => &StreamExtractor,
    }
}
