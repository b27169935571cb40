//! Document model types.
//!
//! Source units flow in from the format bridges, Markdown blocks flow out
//! of the classifier, and a [`Document`] collects them in input order.

mod document;
mod page;
mod paragraph;
mod table;

pub use document::{BlockKind, Document, MarkdownBlock, Metadata, Provenance, SourceUnit};
pub use page::Page;
pub use paragraph::{StyledParagraph, StyledRun};
pub use table::TableGrid;
