//! Rendering module: normalization, inline emphasis, tables, and output.

mod json;
mod markdown;
mod normalize;
mod options;
mod result;

pub use json::{to_json, JsonFormat};
pub use markdown::{
    format_runs, render_table, to_markdown, to_markdown_with_stats, MarkdownRenderer,
};
pub use normalize::{normalize, NormalizeOptions, TextNormalizer};
pub use options::RenderOptions;
pub use result::{ExtractionStats, RenderResult};
