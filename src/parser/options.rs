//! Extraction options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which PDF extraction strategy runs first.
///
/// The other strategy is the fallback; the same strategy is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMethod {
    /// Layout-aware positional text extraction
    #[default]
    Layout,
    /// Per-page content stream text
    Stream,
}

impl ExtractMethod {
    /// All methods, in preference order.
    pub const ALL: [ExtractMethod; 2] = [ExtractMethod::Layout, ExtractMethod::Stream];

    /// The strategy used when this one yields nothing.
    pub fn other(self) -> Self {
        match self {
            ExtractMethod::Layout => ExtractMethod::Stream,
            ExtractMethod::Stream => ExtractMethod::Layout,
        }
    }

    /// Lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ExtractMethod::Layout => "layout",
            ExtractMethod::Stream => "stream",
        }
    }
}

impl fmt::Display for ExtractMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtractMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "layout" => Ok(ExtractMethod::Layout),
            "stream" => Ok(ExtractMethod::Stream),
            other => Err(format!(
                "unknown extraction method '{}' (expected layout or stream)",
                other
            )),
        }
    }
}
