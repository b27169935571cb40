//! HTML bridge.

/// Converts HTML to Markdown-flavoured text with `html2md`.
///
/// The result still goes through plain-line classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBridge;

impl HtmlBridge {
    /// Convert an HTML document to text lines.
    pub fn to_text(&self, html: &str) -> String {
        html2md::parse_html(html)
    }
}
