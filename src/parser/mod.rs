//! Format bridges and PDF extraction.

mod capability;
#[cfg(feature = "docx")]
mod docx;
mod fallback;
#[cfg(feature = "html")]
mod html;
mod legacy;
mod options;
#[cfg(feature = "pdf")]
mod pdf;

pub use capability::{Capabilities, Capability};
#[cfg(feature = "docx")]
pub use docx::DocxReader;
pub use fallback::{render_pages, ExtractedText, ExtractionState, FallbackController, PageExtractor};
#[cfg(feature = "html")]
pub use html::HtmlBridge;
pub use legacy::{LegacyBridge, PANDOC_ENV};
pub use options::ExtractMethod;
#[cfg(feature = "pdf")]
pub use pdf::{extractor_for, LayoutExtractor, StreamExtractor};
