//! Page-level types.

use serde::{Deserialize, Serialize};

/// Text extracted from one PDF page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub index: u32,

    /// Extracted text, `None` when the page yielded nothing
    pub text: Option<String>,
}

impl Page {
    /// Create a page with extracted text.
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: Some(text.into()),
        }
    }

    /// Create a page that produced no text.
    pub fn empty(index: u32) -> Self {
        Self { index, text: None }
    }

    /// Build pages from per-page strings in document order.
    ///
    /// Empty strings become text-less pages; numbering starts at 1.
    pub fn from_texts(texts: impl IntoIterator<Item = String>) -> Vec<Self> {
        texts
            .into_iter()
            .zip(1u32..)
            .map(|(text, index)| {
                if text.is_empty() {
                    Self::empty(index)
                } else {
                    Self::new(index, text)
                }
            })
            .collect()
    }

    /// Borrow the page text when there is any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Page marker comment placed before the page's text.
    pub fn marker(&self) -> String {
        format!("<!-- Page {} -->", self.index)
    }
}
